use serde::Serialize;

/// Kind of a non-heading block attached to a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContentKind {
    Paragraph,
    List,
    BlockQuote,
}

/// One paragraph, list or blockquote, kept as its raw Markdown source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentItem {
    pub kind: ContentKind,
    pub raw_text: String,
}

impl ContentItem {
    pub fn new(kind: ContentKind, raw_text: impl Into<String>) -> Self {
        Self {
            kind,
            raw_text: raw_text.into(),
        }
    }

    pub fn paragraph(raw_text: impl Into<String>) -> Self {
        Self::new(ContentKind::Paragraph, raw_text)
    }

    pub fn list(raw_text: impl Into<String>) -> Self {
        Self::new(ContentKind::List, raw_text)
    }

    pub fn block_quote(raw_text: impl Into<String>) -> Self {
        Self::new(ContentKind::BlockQuote, raw_text)
    }
}

/// A heading section: its directly authored content plus nested sub-sections.
///
/// `level` is the heading depth that produced the point (2..=6). Sub-points
/// are always exactly one level deeper than their parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Point {
    pub title: String,
    pub level: u8,
    pub content: Vec<ContentItem>,
    pub sub_points: Vec<Point>,
    /// Milliseconds into the session when this point was reached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
    /// The timestamp recorded for this point in the previous session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_timestamp: Option<u64>,
}

impl Point {
    pub fn new(title: impl Into<String>, level: u8) -> Self {
        Self {
            title: title.into(),
            level,
            content: Vec::new(),
            sub_points: Vec::new(),
            timestamp: None,
            previous_timestamp: None,
        }
    }

    /// True when the point has neither content nor sub-points.
    pub fn is_leaf(&self) -> bool {
        self.content.is_empty() && self.sub_points.is_empty()
    }

    /// Depth-first, pre-order walk over this point and all of its descendants.
    pub fn walk(&self) -> impl Iterator<Item = &Point> + '_ {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let point = stack.pop()?;
            stack.extend(point.sub_points.iter().rev());
            Some(point)
        })
    }
}

/// The fully parsed document: optional title plus its depth-2 main points.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Speech {
    pub title: Option<String>,
    pub main_points: Vec<Point>,
}

impl Speech {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.main_points.is_empty()
    }

    pub fn main_point(&self, index: usize) -> Option<&Point> {
        self.main_points.get(index)
    }

    /// All reachable points in document order.
    pub fn points(&self) -> impl Iterator<Item = &Point> + '_ {
        self.main_points.iter().flat_map(Point::walk)
    }
}
