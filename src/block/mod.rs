//! Block-level converter.
//!
//! The converter is line-oriented and handles:
//! - Headings (`#` through any depth)
//! - Single-level lists (`*` or `-`)
//! - Paragraphs

mod converter;
mod event;

pub use converter::BlockConverter;
pub use event::{Line, ListKind};
