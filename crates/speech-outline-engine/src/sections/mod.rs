//! # Section slicing
//!
//! Splits raw source text at depth-2 heading lines so one main point can be
//! edited in isolation and spliced back in.
//!
//! Segment 0 is everything before the first depth-2 heading (title and
//! preamble, possibly empty). Segment `i + 1` runs from the `i`-th depth-2
//! heading up to, not including, the next one, and lines up with
//! `Speech::main_points[i]` because both sides share
//! [`is_section_boundary`](crate::parsing::heading::is_section_boundary).
//!
//! Splitting works on raw lines rather than tokens. Lines inside a fenced
//! code block are skipped, since the tokenizer never sees a heading there.

use xi_rope::{Rope, delta::Builder};

use crate::{
    parsing::heading::{Fence, is_section_boundary},
    rope::{Span, lines_with_spans, slice_to_string},
};

/// Splits the rope into its preamble segment followed by one segment per
/// section. The returned spans tile the whole rope.
pub fn split_sections(rope: &Rope) -> Vec<Span> {
    let mut segments = Vec::new();
    let mut start = 0usize;
    let mut fence: Option<Fence> = None;

    for line in lines_with_spans(rope) {
        if let Some(open) = fence {
            if open.is_closed_by(&line.text) {
                fence = None;
            }
            continue;
        }
        fence = Fence::open(&line.text);

        if is_section_boundary(&line.text) {
            segments.push(Span::new(start, line.span.start));
            start = line.span.start;
        }
    }
    segments.push(Span::new(start, rope.len()));
    segments
}

/// Number of sections, i.e. depth-2 heading lines.
pub fn section_count(source: &str) -> usize {
    split_sections(&Rope::from(source)).len() - 1
}

/// Returns the source text of section `index`, or an empty string when
/// there is no such section.
pub fn get_section(source: &str, index: usize) -> String {
    let rope = Rope::from(source);
    match section_span(&rope, index) {
        Some(span) => slice_to_string(&rope, span),
        None => String::new(),
    }
}

/// Replaces section `index` with `replacement` and returns the full text.
///
/// Every other byte, including the preamble, is left untouched. An
/// out-of-range index returns the source unchanged.
pub fn replace_section(source: &str, index: usize, replacement: &str) -> String {
    let rope = Rope::from(source);
    let Some(span) = section_span(&rope, index) else {
        log::debug!("section {index} out of range, leaving source unchanged");
        return source.to_string();
    };

    let mut builder = Builder::new(rope.len());
    builder.replace(span.range(), Rope::from(replacement));
    let delta = builder.build();

    delta.apply(&rope).to_string()
}

fn section_span(rope: &Rope, index: usize) -> Option<Span> {
    let segments = split_sections(rope);
    index.checked_add(1).and_then(|i| segments.get(i)).copied()
}
