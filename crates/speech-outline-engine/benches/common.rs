// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_speech(sections: usize, depth: usize) -> String {
    let mut content = String::from("# Benchmark Speech\n\n");

    for section in 0..sections {
        content.push_str(&format!("## Point {section}\n\n"));
        content.push_str("Opening paragraph with **bold** and `code` spans.\n\n");
        content.push_str(&generate_nested_content(depth, 3));
    }

    content
}

#[allow(dead_code)]
fn generate_nested_content(remaining_depth: usize, current_level: usize) -> String {
    if remaining_depth == 0 || current_level > 6 {
        return String::new();
    }

    let mut content = String::new();
    content.push_str(&format!(
        "{} Sub point level {current_level}\n\n",
        "#".repeat(current_level)
    ));
    for i in 0..3 {
        content.push_str(&format!("- Item {i} at level {current_level}\n"));
    }
    content.push_str("\n> A quotation worth repeating.\n\n");
    content.push_str(&generate_nested_content(
        remaining_depth - 1,
        current_level + 1,
    ));

    content
}
