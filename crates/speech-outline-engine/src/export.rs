//! Outline exports derived from a parsed speech.
//!
//! These are the plain-data views that presentation front ends render:
//! Markdown and plain-text outlines, one slide per main point, and one cue
//! card per point.

use serde::Serialize;

use crate::{
    normalize::display_lines,
    outline::{ContentKind, Point, Speech},
};

/// One slide per main point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slide {
    pub title: String,
    /// Display lines of the main point's own content.
    pub lines: Vec<String>,
    /// Titles of the direct sub-points.
    pub bullets: Vec<String>,
}

/// One card per point at any depth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CueCard {
    /// Titles from the main point down to this point.
    pub path: Vec<String>,
    pub level: u8,
    pub lines: Vec<String>,
}

/// Re-serialises the speech as heading-structured Markdown.
///
/// Content items are written back verbatim, so parsing the result yields
/// the same tree (minus any orphaned headings the original contained).
pub fn outline_markdown(speech: &Speech) -> String {
    let mut blocks = Vec::new();
    if let Some(title) = &speech.title {
        blocks.push(format!("# {title}"));
    }
    for point in speech.points() {
        blocks.push(format!("{} {}", "#".repeat(usize::from(point.level)), point.title));
        blocks.extend(point.content.iter().map(|item| item.raw_text.clone()));
    }

    let mut out = blocks.join("\n\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

/// Indented plain-text outline, two spaces per level below the main points.
pub fn outline_text(speech: &Speech) -> String {
    let mut lines = Vec::new();
    if let Some(title) = &speech.title {
        lines.push(title.clone());
    }
    for point in speech.points() {
        let depth = usize::from(point.level.saturating_sub(2));
        let indent = "  ".repeat(depth);
        lines.push(format!("{indent}- {}", point.title));

        for item in &point.content {
            let marker = match item.kind {
                ContentKind::List => "* ",
                ContentKind::BlockQuote => "> ",
                ContentKind::Paragraph => "",
            };
            for line in display_lines(item) {
                for text in line.lines() {
                    lines.push(format!("{indent}    {marker}{text}"));
                }
            }
        }
    }
    lines.join("\n")
}

pub fn slides(speech: &Speech) -> Vec<Slide> {
    speech
        .main_points
        .iter()
        .map(|point| Slide {
            title: point.title.clone(),
            lines: point.content.iter().flat_map(display_lines).collect(),
            bullets: point.sub_points.iter().map(|p| p.title.clone()).collect(),
        })
        .collect()
}

pub fn cue_cards(speech: &Speech) -> Vec<CueCard> {
    let mut cards = Vec::new();
    for point in &speech.main_points {
        collect_cards(point, &mut Vec::new(), &mut cards);
    }
    cards
}

fn collect_cards(point: &Point, path: &mut Vec<String>, cards: &mut Vec<CueCard>) {
    path.push(point.title.clone());
    cards.push(CueCard {
        path: path.clone(),
        level: point.level,
        lines: point.content.iter().flat_map(display_lines).collect(),
    });
    for sub in &point.sub_points {
        collect_cards(sub, path, cards);
    }
    path.pop();
}
