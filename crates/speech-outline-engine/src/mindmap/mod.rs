//! # Mind map generation
//!
//! Renders one point and everything under it as flowchart markup (`graph`
//! header, node declarations, `-->` edges, then per-node `style` lines).
//!
//! Node ids encode the tree path so they are unique and stable within one
//! call: the root is [`ROOT_ID`], sub-point `k` of node `p` is `p_k`, content
//! item `i` of node `p` is `p_ci`, and list item `j` of that content item is
//! `p_ci_j`. Identical input always yields byte-identical output.

pub mod label;
pub mod style;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    normalize::{Normalized, normalize},
    outline::Point,
};

use style::{NodeShape, NodeStyle};

/// Id of the root node.
pub const ROOT_ID: &str = "root";

/// Levels of sub-points followed below the root before giving up.
pub const MAX_RECURSION: usize = 6;

/// Layout direction of the graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Left to right.
    #[default]
    #[serde(rename = "LR")]
    LeftRight,
    /// Top down.
    #[serde(rename = "TD")]
    TopDown,
}

impl Direction {
    pub fn code(self) -> &'static str {
        match self {
            Direction::LeftRight => "LR",
            Direction::TopDown => "TD",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown graph direction {0:?}, expected LR or TD")]
pub struct ParseDirectionError(String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LR" => Ok(Direction::LeftRight),
            "TD" | "TB" => Ok(Direction::TopDown),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// Character budgets for label wrapping, per node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapWidths {
    pub root: usize,
    /// Level-3 sub-points.
    pub sub_point: usize,
    /// Level 4 to 6 sub-points.
    pub detail: usize,
    pub content: usize,
}

impl Default for WrapWidths {
    fn default() -> Self {
        Self {
            root: 40,
            sub_point: 30,
            detail: 35,
            content: 35,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MindMapOptions {
    pub direction: Direction,
    pub wrap: WrapWidths,
}

/// Generates mind-map markup for `root` with default wrap budgets.
///
/// `None` yields a fixed placeholder graph.
pub fn generate(root: Option<&Point>, direction: Direction) -> String {
    generate_with(
        root,
        &MindMapOptions {
            direction,
            ..MindMapOptions::default()
        },
    )
}

pub fn generate_with(root: Option<&Point>, options: &MindMapOptions) -> String {
    let mut graph = GraphWriter::new(options);
    match root {
        Some(point) => graph.root(point),
        None => graph.placeholder(),
    }
    graph.finish()
}

/// Accumulates node and edge statements; style statements go at the end.
struct GraphWriter<'a> {
    options: &'a MindMapOptions,
    statements: Vec<String>,
    styles: Vec<String>,
}

impl<'a> GraphWriter<'a> {
    fn new(options: &'a MindMapOptions) -> Self {
        Self {
            options,
            statements: Vec::new(),
            styles: Vec::new(),
        }
    }

    fn placeholder(&mut self) {
        self.declare("empty", NodeShape::Rectangle, "No content");
        self.declare(
            "hint",
            NodeShape::Rectangle,
            "Select a section to view the structure",
        );
        self.edge("empty", "hint");
    }

    fn root(&mut self, point: &Point) {
        let wrap = self.options.wrap;
        self.node(ROOT_ID, style::ROOT, &label::label(&point.title, wrap.root));

        if point.is_leaf() {
            let id = format!("{ROOT_ID}_empty");
            self.node(
                &id,
                style::EMPTY_NOTE,
                &label::label("(No sub-points or content)", wrap.content),
            );
            self.edge(ROOT_ID, &id);
            return;
        }

        self.children(ROOT_ID, point, 1);
    }

    fn children(&mut self, id: &str, point: &Point, depth: usize) {
        if depth > MAX_RECURSION {
            log::debug!("mind map recursion limit reached below node {id}");
            return;
        }

        for (i, item) in point.content.iter().enumerate() {
            let node_style = style::for_content(item.kind);
            match normalize(item) {
                Normalized::Single(text) => {
                    self.content_node(id, &format!("{id}_c{i}"), node_style, &text);
                }
                Normalized::Items(items) => {
                    for (j, text) in items.iter().enumerate() {
                        self.content_node(id, &format!("{id}_c{i}_{j}"), node_style, text);
                    }
                }
            }
        }

        for (k, sub) in point.sub_points.iter().enumerate() {
            let sub_id = format!("{id}_{k}");
            let node_style = style::for_level(sub.level);
            let width = match node_style.shape {
                NodeShape::Rounded => self.options.wrap.sub_point,
                _ => self.options.wrap.detail,
            };

            self.node(&sub_id, node_style, &label::label(&sub.title, width));
            self.edge(id, &sub_id);
            self.children(&sub_id, sub, depth + 1);
        }
    }

    fn content_node(&mut self, parent: &str, id: &str, node_style: NodeStyle, text: &str) {
        let text = label::label(text, self.options.wrap.content);
        if text.is_empty() {
            return;
        }
        self.node(id, node_style, &text);
        self.edge(parent, id);
    }

    fn node(&mut self, id: &str, node_style: NodeStyle, text: &str) {
        self.declare(id, node_style.shape, text);
        self.styles.push(format!("    style {id} {}", node_style.css));
    }

    fn declare(&mut self, id: &str, shape: NodeShape, text: &str) {
        self.statements.push(format!("    {}", shape.declare(id, text)));
    }

    fn edge(&mut self, from: &str, to: &str) {
        self.statements.push(format!("    {from} --> {to}"));
    }

    fn finish(self) -> String {
        let mut lines = Vec::with_capacity(1 + self.statements.len() + self.styles.len());
        lines.push(format!("graph {}", self.options.direction));
        lines.extend(self.statements);
        lines.extend(self.styles);
        lines.join("\n")
    }
}
