use crate::outline::ContentKind;

/// Node outline shape in the flowchart grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeShape {
    /// Pill shape, used for the root.
    Stadium,
    Rounded,
    Rectangle,
}

impl NodeShape {
    /// Wraps an already quoted label in the shape's brackets.
    pub fn declare(self, id: &str, label: &str) -> String {
        match self {
            NodeShape::Stadium => format!("{id}([\"{label}\"])"),
            NodeShape::Rounded => format!("{id}(\"{label}\")"),
            NodeShape::Rectangle => format!("{id}[\"{label}\"]"),
        }
    }
}

/// How a node is drawn: outline shape plus inline CSS for its `style` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeStyle {
    pub shape: NodeShape,
    pub css: &'static str,
}

pub const ROOT: NodeStyle = NodeStyle {
    shape: NodeShape::Stadium,
    css: "font-weight:bold,font-size:18px",
};

pub const SUB_POINT: NodeStyle = NodeStyle {
    shape: NodeShape::Rounded,
    css: "font-weight:bold,font-size:15px",
};

pub const DETAIL_POINT: NodeStyle = NodeStyle {
    shape: NodeShape::Rectangle,
    css: "font-size:13px,color:#555555",
};

pub const CONTENT: NodeStyle = NodeStyle {
    shape: NodeShape::Rectangle,
    css: "font-size:12px",
};

pub const QUOTE: NodeStyle = NodeStyle {
    shape: NodeShape::Rectangle,
    css: "font-size:12px,font-style:italic",
};

pub const EMPTY_NOTE: NodeStyle = NodeStyle {
    shape: NodeShape::Rectangle,
    css: "font-size:12px,font-style:italic,color:#888888",
};

/// Style for a sub-point node by heading level.
///
/// Level 3 is emphasised; 4 to 6, and anything unexpected, fall back to the
/// muted detail style.
pub fn for_level(level: u8) -> NodeStyle {
    match level {
        3 => SUB_POINT,
        _ => DETAIL_POINT,
    }
}

pub fn for_content(kind: ContentKind) -> NodeStyle {
    match kind {
        ContentKind::BlockQuote => QUOTE,
        ContentKind::Paragraph | ContentKind::List => CONTENT,
    }
}
