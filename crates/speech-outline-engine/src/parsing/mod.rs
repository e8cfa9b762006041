//! # Tokenizer adapter
//!
//! Turns raw Markdown into the flat [`Token`] sequence the tree builder
//! consumes. Block recognition is delegated to `pulldown-cmark`; this module
//! only keeps the top-level headings, paragraphs, lists and blockquotes and
//! slices their raw source back out using the parser's byte offsets.
//!
//! Everything else (code blocks, rules, tables, HTML) is skipped, which is
//! what the tree builder would do with it anyway.
//!
//! A heading only becomes a [`Token::Heading`] when its first line passes
//! [`atx_depth`], the same check the section slicer splits on. Setext and
//! indented headings fall back to paragraphs so the two never disagree about
//! where a main point starts.

pub mod heading;
pub mod token;

use std::ops::Range;

use pulldown_cmark::{Event, Parser, Tag};

pub use heading::{Fence, MAX_DEPTH, SECTION_DEPTH, atx_depth, is_section_boundary};
pub use token::Token;

/// Tokenizes `source` into top-level block tokens.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut collector = TokenCollector::new(source);

    for (event, range) in Parser::new(source).into_offset_iter() {
        collector.process_event(event, range);
    }

    let tokens = collector.finish();
    log::trace!("tokenized {} bytes into {} tokens", source.len(), tokens.len());
    tokens
}

/// Heading whose `End` event has not been seen yet.
struct OpenHeading {
    depth: u8,
    /// Byte range covering all inline events seen so far.
    inner: Option<Range<usize>>,
}

/// Folds the pulldown-cmark event stream into tokens.
///
/// With `into_offset_iter`, a `Start` event's range spans the whole element,
/// so top-level blocks can be emitted as soon as they open. Headings need
/// their inline content, so they are held open until their `End`.
struct TokenCollector<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    /// Number of currently open tags.
    nesting: usize,
    heading: Option<OpenHeading>,
}

impl<'a> TokenCollector<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            nesting: 0,
            heading: None,
        }
    }

    fn process_event(&mut self, event: Event<'_>, range: Range<usize>) {
        match event {
            Event::Start(tag) => {
                if self.nesting == 0 {
                    self.open_top_level(tag, range);
                } else {
                    self.extend_heading(range);
                }
                self.nesting += 1;
            }
            Event::End(_) => {
                self.nesting = self.nesting.saturating_sub(1);
                if self.nesting == 0 {
                    self.close_heading();
                }
            }
            _ => {
                if self.nesting > 0 {
                    self.extend_heading(range);
                }
            }
        }
    }

    fn finish(mut self) -> Vec<Token> {
        // Unclosed heading at EOF
        self.close_heading();
        self.tokens
    }

    fn open_top_level(&mut self, tag: Tag<'_>, range: Range<usize>) {
        match tag {
            Tag::Heading { level, .. } => {
                let depth = level as u8;
                if atx_depth(self.first_line(&range)) == Some(depth) {
                    self.heading = Some(OpenHeading { depth, inner: None });
                } else {
                    log::trace!("heading at {} is not ATX, keeping it as a paragraph", range.start);
                    self.tokens.push(Token::Paragraph(self.raw(range)));
                }
            }
            Tag::Paragraph => self.tokens.push(Token::Paragraph(self.raw(range))),
            Tag::List(_) => self.tokens.push(Token::List(self.raw(range))),
            Tag::BlockQuote(_) => self.tokens.push(Token::BlockQuote(self.raw(range))),
            _ => {}
        }
    }

    fn extend_heading(&mut self, range: Range<usize>) {
        if let Some(heading) = self.heading.as_mut() {
            heading.inner = Some(match heading.inner.take() {
                Some(inner) => inner.start.min(range.start)..inner.end.max(range.end),
                None => range,
            });
        }
    }

    fn close_heading(&mut self) {
        if let Some(heading) = self.heading.take() {
            let text = heading
                .inner
                .and_then(|inner| self.source.get(inner))
                .map(|s| s.trim().to_string())
                .unwrap_or_default();
            self.tokens.push(Token::Heading {
                depth: heading.depth,
                text,
            });
        }
    }

    /// Full source line containing the start of `range`.
    fn first_line(&self, range: &Range<usize>) -> &'a str {
        let source = self.source;
        let start = source
            .get(..range.start)
            .and_then(|before| before.rfind('\n'))
            .map_or(0, |newline| newline + 1);
        let rest = source.get(start..).unwrap_or_default();
        rest.split_once('\n').map_or(rest, |(line, _)| line)
    }

    /// Source text of a block with its trailing line ending removed.
    fn raw(&self, range: Range<usize>) -> String {
        self.source
            .get(range)
            .unwrap_or_default()
            .trim_end_matches(['\r', '\n'])
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn heading(depth: u8, text: &str) -> Token {
        Token::Heading {
            depth,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_headings_and_paragraphs() {
        let tokens = tokenize("# Title\n## A\ntext1\n### B\ntext2\n## C\ntext3");

        assert_eq!(
            tokens,
            vec![
                heading(1, "Title"),
                heading(2, "A"),
                Token::Paragraph("text1".to_string()),
                heading(3, "B"),
                Token::Paragraph("text2".to_string()),
                heading(2, "C"),
                Token::Paragraph("text3".to_string()),
            ]
        );
    }

    #[test]
    fn test_heading_text_keeps_inline_markdown() {
        let tokens = tokenize("## A **bold** `code` point\n");
        assert_eq!(tokens, vec![heading(2, "A **bold** `code` point")]);
    }

    #[test]
    fn test_closing_hashes_are_not_part_of_heading_text() {
        let tokens = tokenize("## Closed ##\n");
        assert_eq!(tokens, vec![heading(2, "Closed")]);
    }

    #[test]
    fn test_empty_heading_has_empty_text() {
        let tokens = tokenize("##\n");
        assert_eq!(tokens, vec![heading(2, "")]);
    }

    #[test]
    fn test_list_keeps_markers_and_nested_items() {
        let tokens = tokenize("- one\n- two\n  - nested\n");
        assert_eq!(
            tokens,
            vec![Token::List("- one\n- two\n  - nested".to_string())]
        );
    }

    #[test]
    fn test_blockquote_keeps_prefixes() {
        let tokens = tokenize("> quoted\n> more\n");
        assert_eq!(
            tokens,
            vec![Token::BlockQuote("> quoted\n> more".to_string())]
        );
    }

    #[test]
    fn test_paragraph_inside_blockquote_is_not_a_separate_token() {
        let tokens = tokenize("> inner paragraph\n\nouter\n");
        assert_eq!(tokens.len(), 2);
        assert!(matches!(tokens[0], Token::BlockQuote(_)));
        assert_eq!(tokens[1], Token::Paragraph("outer".to_string()));
    }

    #[test]
    fn test_code_blocks_and_rules_are_skipped() {
        let tokens = tokenize("## A\n\n```\n## not a heading\n```\n\n---\n\ntext\n");
        assert_eq!(
            tokens,
            vec![heading(2, "A"), Token::Paragraph("text".to_string())]
        );
    }

    #[test]
    fn test_setext_heading_is_kept_as_paragraph() {
        let tokens = tokenize("## A\nsome text\nNext idea\n---\n## B\n");

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0], heading(2, "A"));
        assert!(
            matches!(&tokens[1], Token::Paragraph(text) if text.starts_with("some text\nNext idea"))
        );
        assert_eq!(tokens[2], heading(2, "B"));
    }

    #[test]
    fn test_indented_heading_is_kept_as_paragraph() {
        let tokens = tokenize("## A\n\n   ## Indented\n");

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], heading(2, "A"));
        assert!(
            matches!(&tokens[1], Token::Paragraph(text) if text.trim_start() == "## Indented")
        );
    }
}
