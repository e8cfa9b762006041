//! Display text for content items.
//!
//! Strips the block-level syntax a content item still carries (blockquote
//! prefixes, list markers). Inline markdown is left alone here; renderers
//! decide what to do with it.

use std::sync::OnceLock;

use regex::Regex;

use crate::outline::{ContentItem, ContentKind};

/// Display text extracted from one content item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    /// Paragraphs and blockquotes: one piece of text.
    Single(String),
    /// Lists: one string per bullet item.
    Items(Vec<String>),
}

impl Normalized {
    /// Flattens into display lines, dropping empty ones.
    pub fn into_lines(self) -> Vec<String> {
        match self {
            Normalized::Single(text) if text.is_empty() => Vec::new(),
            Normalized::Single(text) => vec![text],
            Normalized::Items(items) => items.into_iter().filter(|i| !i.is_empty()).collect(),
        }
    }
}

pub fn normalize(item: &ContentItem) -> Normalized {
    match item.kind {
        ContentKind::Paragraph => Normalized::Single(item.raw_text.trim().to_string()),
        ContentKind::BlockQuote => Normalized::Single(strip_quote_markers(&item.raw_text)),
        ContentKind::List => Normalized::Items(list_items(&item.raw_text)),
    }
}

/// Non-empty display lines for `item`, in order.
pub fn display_lines(item: &ContentItem) -> Vec<String> {
    normalize(item).into_lines()
}

/// Removes one `>` (with optional leading whitespace and one following
/// space) from every line, then trims the result.
pub fn strip_quote_markers(raw: &str) -> String {
    raw.lines()
        .map(|line| {
            let rest = line.trim_start_matches([' ', '\t']);
            match rest.strip_prefix('>') {
                Some(after) => after.strip_prefix(' ').unwrap_or(after),
                None => line,
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Text of every bulleted line (`*`, `-` or `+` followed by whitespace).
///
/// Nested items are flattened in document order; any other line is dropped.
pub fn list_items(raw: &str) -> Vec<String> {
    static BULLET: OnceLock<Regex> = OnceLock::new();
    let bullet =
        BULLET.get_or_init(|| Regex::new(r"^\s*[*+-]\s+(.*)$").expect("Invalid bullet regex"));

    raw.lines()
        .filter_map(|line| bullet.captures(line))
        .map(|caps| caps[1].trim().to_string())
        .collect()
}
