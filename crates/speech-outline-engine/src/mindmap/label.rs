//! Node label text: entity escaping, inline markdown stripping and greedy
//! word wrapping.

use std::sync::OnceLock;

use regex::Regex;

/// Line-break marker understood by the flowchart renderer.
pub const LINE_BREAK: &str = "<br/>";

/// Escapes characters that would break the graph grammar or the HTML label.
///
/// Single left-to-right pass over the original characters, so an entity
/// produced for one character is never re-escaped by a later rule.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            ';' => out.push_str("&semi;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Removes bold, italic and inline-code wrappers, keeping their text.
pub fn strip_inline_markdown(text: &str) -> String {
    static BOLD: OnceLock<Regex> = OnceLock::new();
    static ITALIC: OnceLock<Regex> = OnceLock::new();
    static CODE: OnceLock<Regex> = OnceLock::new();

    let bold = BOLD.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").expect("Invalid bold regex"));
    // Word boundaries keep snake_case identifiers intact
    let italic = ITALIC.get_or_init(|| Regex::new(r"\b_(.+?)_\b").expect("Invalid italic regex"));
    let code = CODE.get_or_init(|| Regex::new(r"`(.+?)`").expect("Invalid code regex"));

    let text = bold.replace_all(text, "$1");
    let text = italic.replace_all(&text, "$1");
    code.replace_all(&text, "$1").into_owned()
}

/// Escapes then strips inline markdown: the full label pipeline minus wrapping.
pub fn sanitize(text: &str) -> String {
    strip_inline_markdown(&escape(text))
}

/// Number of characters `text` shows once rendered.
///
/// Expects escaped text: every `&` opens an entity that runs to the next `;`
/// and renders as a single character.
pub fn display_width(text: &str) -> usize {
    let mut width = 0;
    let mut in_entity = false;
    for c in text.chars() {
        match c {
            '&' => {
                in_entity = true;
                width += 1;
            }
            ';' if in_entity => in_entity = false,
            _ if in_entity => {}
            _ => width += 1,
        }
    }
    width
}

/// Greedily packs words into lines of at most `width` displayed characters.
///
/// Words are never split; a word longer than `width` sits alone on its own
/// line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = display_width(word);
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Sanitizes and wraps `text` into a ready-to-quote node label.
pub fn label(text: &str, width: usize) -> String {
    wrap(&sanitize(text), width).join(LINE_BREAK)
}
