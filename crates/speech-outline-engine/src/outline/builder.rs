use crate::parsing::{Token, heading::stack_slot};

use super::{
    model::{ContentItem, ContentKind, Point, Speech},
    stack::{OpenPoint, ParentStack},
};

/// Builds a [`Speech`] from a token stream, one token at a time.
///
/// Headings open points on a [`ParentStack`] indexed by `depth - 2`; a new
/// heading closes every open point at its depth or deeper. A point attaches
/// to the point one slot above it, or to the speech when it is a main point.
/// When that slot is empty the heading is orphaned: it still collects content
/// and children while open, but it is never attached to the tree.
pub struct TreeBuilder {
    speech: Speech,
    stack: ParentStack,
    orphans: Vec<Point>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            speech: Speech::default(),
            stack: ParentStack::new(),
            orphans: Vec::new(),
        }
    }

    pub fn push(&mut self, token: &Token) {
        match token {
            Token::Heading { depth: 1, text } => self.push_title(text),
            Token::Heading { depth, text } => self.push_heading(*depth, text),
            Token::Paragraph(raw) => self.push_content(ContentKind::Paragraph, raw),
            Token::List(raw) => self.push_content(ContentKind::List, raw),
            Token::BlockQuote(raw) => self.push_content(ContentKind::BlockQuote, raw),
        }
    }

    pub fn finish(self) -> Speech {
        self.finish_with_orphans().0
    }

    /// Like [`finish`](Self::finish), but also hands back the orphaned
    /// subtrees that never made it into the speech.
    pub fn finish_with_orphans(mut self) -> (Speech, Vec<Point>) {
        // EOF closes every open section
        self.close_from(0);
        (self.speech, self.orphans)
    }

    fn push_title(&mut self, text: &str) {
        self.close_from(0);
        self.speech.title = Some(text.to_string());
    }

    fn push_heading(&mut self, depth: u8, text: &str) {
        let Some(slot) = stack_slot(depth) else {
            log::debug!("ignoring heading with unsupported depth {depth}: {text:?}");
            return;
        };

        self.close_from(slot);

        let attached = self.stack.has_parent(slot);
        if !attached {
            log::debug!("heading {text:?} at depth {depth} has no open parent, orphaning it");
        }

        self.stack.open(
            slot,
            OpenPoint {
                point: Point::new(text, depth),
                attached,
            },
        );
    }

    fn push_content(&mut self, kind: ContentKind, raw: &str) {
        match self.stack.current_mut() {
            Some(point) => point.content.push(ContentItem::new(kind, raw)),
            None => log::trace!("dropping {kind:?} block outside of any point"),
        }
    }

    /// Closes every open point at `slot` or deeper, deepest first.
    fn close_from(&mut self, slot: usize) {
        while self.stack.depth() > slot {
            let Some((closed_slot, open)) = self.stack.pop() else {
                break;
            };
            let Some(OpenPoint { point, attached }) = open else {
                continue;
            };

            if !attached {
                self.orphans.push(point);
                continue;
            }

            match closed_slot.checked_sub(1) {
                None => self.speech.main_points.push(point),
                Some(parent_slot) => match self.stack.point_mut(parent_slot) {
                    Some(parent) => parent.sub_points.push(point),
                    None => self.orphans.push(point),
                },
            }
        }
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a speech from a complete token sequence.
pub fn build(tokens: &[Token]) -> Speech {
    let mut builder = TreeBuilder::new();
    for token in tokens {
        builder.push(token);
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::tokenize;
    use pretty_assertions::assert_eq;

    fn point(title: &str, level: u8, content: &[&str], sub_points: Vec<Point>) -> Point {
        Point {
            content: content.iter().map(|c| ContentItem::paragraph(*c)).collect(),
            sub_points,
            ..Point::new(title, level)
        }
    }

    fn build_str(source: &str) -> Speech {
        build(&tokenize(source))
    }

    #[test]
    fn test_empty_input_builds_empty_speech() {
        assert_eq!(build(&[]), Speech::default());
        assert_eq!(build_str(""), Speech::default());
    }

    #[test]
    fn test_headingless_text_builds_empty_speech() {
        let speech = build_str("just text\n\n- a list\n\n> a quote\n");
        assert_eq!(speech, Speech::default());
    }

    #[test]
    fn test_nested_outline() {
        let speech = build_str("# Title\n## A\ntext1\n### B\ntext2\n## C\ntext3");

        assert_eq!(
            speech,
            Speech {
                title: Some("Title".to_string()),
                main_points: vec![
                    point("A", 2, &["text1"], vec![point("B", 3, &["text2"], vec![])]),
                    point("C", 2, &["text3"], vec![]),
                ],
            }
        );
    }

    #[test]
    fn test_content_keeps_document_order_and_kind() {
        let speech = build_str("## A\n\nintro\n\n- one\n- two\n\n> quoted\n\noutro\n");

        assert_eq!(
            speech.main_points[0].content,
            vec![
                ContentItem::paragraph("intro"),
                ContentItem::list("- one\n- two"),
                ContentItem::block_quote("> quoted"),
                ContentItem::paragraph("outro"),
            ]
        );
    }

    #[test]
    fn test_content_before_first_heading_is_dropped() {
        let speech = build_str("preamble\n\n# Title\n\nafter title\n\n## A\n\nkept\n");

        assert_eq!(speech.title.as_deref(), Some("Title"));
        assert_eq!(speech.main_points.len(), 1);
        assert_eq!(
            speech.main_points[0].content,
            vec![ContentItem::paragraph("kept")]
        );
    }

    #[test]
    fn test_deep_heading_without_parent_is_orphaned() {
        let mut builder = TreeBuilder::new();
        for token in tokenize("## A\n#### D\ncontent") {
            builder.push(&token);
        }
        let (speech, orphans) = builder.finish_with_orphans();

        assert_eq!(speech.main_points, vec![point("A", 2, &[], vec![])]);
        assert_eq!(orphans, vec![point("D", 4, &["content"], vec![])]);
    }

    #[test]
    fn test_orphan_keeps_its_own_children() {
        let mut builder = TreeBuilder::new();
        for token in tokenize("## A\n#### D\n##### E\ne text\n### B\nb text") {
            builder.push(&token);
        }
        let (speech, orphans) = builder.finish_with_orphans();

        assert_eq!(
            speech.main_points,
            vec![point("A", 2, &[], vec![point("B", 3, &["b text"], vec![])])]
        );
        assert_eq!(
            orphans,
            vec![point("D", 4, &[], vec![point("E", 5, &["e text"], vec![])])]
        );
    }

    #[test]
    fn test_sub_heading_before_any_main_point_is_orphaned() {
        let speech = build_str("# Title\n### Early\ntext\n## A\n");
        assert_eq!(speech.main_points, vec![point("A", 2, &[], vec![])]);
    }

    #[test]
    fn test_shallower_heading_closes_deeper_sections() {
        let speech = build_str("## A\n### B\n#### C\n### D\nd text\n");

        assert_eq!(
            speech.main_points,
            vec![point(
                "A",
                2,
                &[],
                vec![
                    point("B", 3, &[], vec![point("C", 4, &[], vec![])]),
                    point("D", 3, &["d text"], vec![]),
                ]
            )]
        );
    }

    #[test]
    fn test_later_title_resets_open_sections() {
        let speech = build_str("# One\n## A\n# Two\ndropped\n## B\nkept\n");

        assert_eq!(speech.title.as_deref(), Some("Two"));
        assert_eq!(
            speech.main_points,
            vec![point("A", 2, &[], vec![]), point("B", 2, &["kept"], vec![])]
        );
    }

    #[test]
    fn test_levels_match_heading_depths() {
        let speech = build_str("## 2\n### 3\n#### 4\n##### 5\n###### 6\n");

        let levels: Vec<u8> = speech.points().map(|p| p.level).collect();
        assert_eq!(levels, vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_build_is_idempotent() {
        let tokens = tokenize("# T\n## A\n- x\n### B\n> q\n## C\n");
        assert_eq!(build(&tokens), build(&tokens));
    }
}
