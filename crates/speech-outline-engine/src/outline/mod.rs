//! # Outline tree
//!
//! The speech data model and the tree builder that produces it.
//!
//! - **`model`**: `Speech`, `Point`, `ContentItem`
//! - **`stack`**: `ParentStack`, the open points indexed by heading depth
//! - **`builder`**: `TreeBuilder`, the token-to-tree state machine
//! - **`timing`**: positional overlay of session timestamps
//!
//! A speech is rebuilt from scratch on every source change. Only timing
//! fields are carried across, by main point index.

pub mod builder;
pub mod model;
pub mod stack;
pub mod timing;

pub use builder::{TreeBuilder, build};
pub use model::{ContentItem, ContentKind, Point, Speech};
pub use timing::PointTiming;

use crate::parsing::tokenize;

/// Tokenizes and builds a speech in one go.
pub fn parse_speech(source: &str) -> Speech {
    build(&tokenize(source))
}

/// Parses a speech from raw bytes, which must be valid UTF-8.
pub fn parse_speech_bytes(bytes: &[u8]) -> anyhow::Result<Speech> {
    let text = std::str::from_utf8(bytes)?;
    Ok(parse_speech(text))
}
