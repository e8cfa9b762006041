//! Byte-span helpers over `xi_rope::Rope`, used for lossless slicing of the
//! source text.

pub mod lines;
pub mod span;

pub use lines::{LineRef, lines_with_spans};
pub use span::Span;

use xi_rope::Rope;

/// Extracts the text for a span as an owned `String`.
pub fn slice_to_string(rope: &Rope, sp: Span) -> String {
    rope.slice_to_cow(sp.range()).into_owned()
}
