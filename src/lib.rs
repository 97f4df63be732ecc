//! # Deep Compare
//!
//! Recursive structural comparison of object graphs.
//!
//! This library walks two in-memory object graphs field by field and reports
//! every difference with a navigable path, instead of a single boolean. The
//! traversal handles nested objects, ordered and unordered containers, maps,
//! single-value wrappers, and cyclic references, and can be tuned per call
//! with field selection patterns and comparator overrides.
//!
//! ## Modules
//!
//! - [`value`] - In-memory representation of object graphs under comparison
//! - [`fieldpath`] - Field path representation and dotted selection patterns
//! - [`strategy`] - Pluggable equality and ordering strategies
//! - [`diff`] - Order-insensitive multiset difference between collections
//! - [`engine`] - The recursive comparison engine and its configuration

pub mod diff;
pub mod engine;
pub mod fieldpath;
pub mod strategy;
pub mod value;

pub use diff::MultisetDiff;
pub use engine::{
    ComparisonError, Difference, DifferenceKind, RecursiveComparisonConfiguration,
    RecursiveComparisonConfigurationBuilder, RecursiveComparisonEngine,
};
pub use fieldpath::{FieldPath, FieldPattern, PatternParseError, Segment};
pub use strategy::{
    Comparator, ComparatorBasedComparisonStrategy, ComparisonStrategy, StandardComparisonStrategy,
    StrategyError,
};
pub use value::{Object, Opaque, OpaqueEq, Value};
