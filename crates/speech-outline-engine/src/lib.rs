//! Core of speech-outline: turns a Markdown outline into a [`Speech`] tree
//! and derives views from it.
//!
//! ```text
//! source ─ parsing::tokenize ─> tokens ─ outline::build ─> Speech
//!                                                           ├─ mindmap::generate
//!                                                           ├─ export::{slides, cue_cards, ...}
//!                                                           └─ normalize::display_lines
//! source ─ sections::{get_section, replace_section}
//! ```
//!
//! Everything except [`io`] is pure and synchronous.

pub mod export;
pub mod io;
pub mod mindmap;
pub mod normalize;
pub mod outline;
pub mod parsing;
pub mod rope;
pub mod sections;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use mindmap::{Direction, MindMapOptions, WrapWidths, generate as generate_mind_map};
pub use outline::{
    ContentItem, ContentKind, Point, PointTiming, Speech, TreeBuilder, build, parse_speech,
    parse_speech_bytes,
};
pub use parsing::{Token, tokenize};
pub use sections::{get_section, replace_section, section_count};
