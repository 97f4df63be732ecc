//! Field path module - Represents and matches paths to fields in object graphs.
//!
//! Paths record how the engine reached a node; dotted patterns supplied by
//! callers are parsed once and matched against paths with transparent and
//! display-only segments skipped.

mod path;
mod pattern;
mod serialize;

pub use path::*;
pub use pattern::*;
pub use serialize::*;
