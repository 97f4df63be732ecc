//! Diff module - order-insensitive, duplicate-aware collection difference.

mod multiset;

pub use multiset::*;
