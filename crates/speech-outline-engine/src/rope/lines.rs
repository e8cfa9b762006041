use xi_rope::Rope;

use super::span::Span;

/// A single line of the rope with its byte span.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line (includes the newline if present).
    pub span: Span,
    pub text: String,
}

/// Iterates over lines with their byte spans.
///
/// Uses `lines_raw` so newline characters stay inside each line and spans
/// tile the whole rope without gaps.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        offset += line.len();
        LineRef {
            span: Span::new(start, offset),
            text: line.into_owned(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_tile_the_rope() {
        let rope = Rope::from("a\nbb\r\nccc");
        let spans: Vec<Span> = lines_with_spans(&rope).map(|l| l.span).collect();
        assert_eq!(
            spans,
            vec![Span::new(0, 2), Span::new(2, 6), Span::new(6, 9)]
        );
    }
}
