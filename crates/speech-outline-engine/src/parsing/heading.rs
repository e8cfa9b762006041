//! ATX heading and code fence syntax shared by the tokenizer adapter, the
//! tree builder and the section slicer.
//!
//! Section indices only line up with `Speech::main_points` indices while all
//! three agree on what a depth-2 heading looks like, so the knowledge lives
//! here and nowhere else.

use std::sync::OnceLock;

use regex::Regex;

/// Heading depth that produces a main point (and starts a section).
pub const SECTION_DEPTH: u8 = 2;

/// Deepest heading recognised by Markdown.
pub const MAX_DEPTH: u8 = 6;

/// Returns the depth of the ATX heading opened by `line`, if it opens one.
///
/// Only unindented headings count. An indented `## ` line may belong to a
/// list item, which the tokenizer never looks inside.
///
/// Trailing `\n` / `\r\n` is ignored so lines straight out of a rope can be
/// passed in.
pub fn atx_depth(line: &str) -> Option<u8> {
    // One to six `#` at column 0, then whitespace or end of line
    static ATX_OPENER: OnceLock<Regex> = OnceLock::new();
    let opener = ATX_OPENER
        .get_or_init(|| Regex::new(r"^(#{1,6})(?:[ \t]|$)").expect("Invalid heading regex"));

    let line = line.trim_end_matches(['\r', '\n']);
    opener.captures(line).map(|caps| caps[1].len() as u8)
}

/// True when `line` starts a new section, i.e. it is a depth-2 heading.
pub fn is_section_boundary(line: &str) -> bool {
    atx_depth(line) == Some(SECTION_DEPTH)
}

/// Opening line of a fenced code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fence {
    marker: char,
    len: usize,
}

impl Fence {
    /// Returns the fence opened by `line`, if it opens one.
    pub fn open(line: &str) -> Option<Self> {
        let (marker, len, info) = fence_parts(line)?;
        // A backtick fence's info string may not contain backticks
        if marker == '`' && info.contains('`') {
            return None;
        }
        Some(Self { marker, len })
    }

    /// True when `line` closes this fence: same marker, at least as long,
    /// nothing but whitespace after it.
    pub fn is_closed_by(&self, line: &str) -> bool {
        fence_parts(line).is_some_and(|(marker, len, rest)| {
            marker == self.marker && len >= self.len && rest.trim().is_empty()
        })
    }
}

fn fence_parts(line: &str) -> Option<(char, usize, &str)> {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    let fence =
        FENCE.get_or_init(|| Regex::new(r"^ {0,3}(`{3,}|~{3,})(.*)$").expect("Invalid fence regex"));

    let line = line.trim_end_matches(['\r', '\n']);
    let caps = fence.captures(line)?;
    let run = caps.get(1)?.as_str();
    let marker = run.chars().next()?;
    Some((marker, run.len(), caps.get(2)?.as_str()))
}

/// Maps a heading depth to its slot in the parent stack (`depth - 2`).
///
/// Returns `None` for the title depth and anything out of range.
pub fn stack_slot(depth: u8) -> Option<usize> {
    (SECTION_DEPTH..=MAX_DEPTH)
        .contains(&depth)
        .then(|| usize::from(depth - SECTION_DEPTH))
}
