//! Field-level difference records.

use crate::fieldpath::FieldPath;
use crate::value::Value;
use serde::Serialize;
use std::fmt;

/// DifferenceKind classifies why a node pair was reported unequal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DifferenceKind {
    /// Exactly one side was null.
    NullMismatch,
    /// Positional containers of different lengths.
    SizeMismatch,
    /// Residual element of an unordered collection comparison.
    SetMismatch,
    /// Map key present on only one side.
    KeyMismatch,
    /// Object field present on only one side.
    FieldMismatch,
    /// Leaf values unequal under the resolved comparator or strategy.
    ValueMismatch,
}

impl fmt::Display for DifferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DifferenceKind::NullMismatch => "null mismatch",
            DifferenceKind::SizeMismatch => "size mismatch",
            DifferenceKind::SetMismatch => "set mismatch",
            DifferenceKind::KeyMismatch => "key mismatch",
            DifferenceKind::FieldMismatch => "field mismatch",
            DifferenceKind::ValueMismatch => "value mismatch",
        };
        write!(f, "{}", label)
    }
}

/// Difference is one field-level inequality found during traversal. Produced
/// by the engine in discovery order and consumed read-only by the formatting
/// layer; a missing side is represented as `Value::Null`. Serializes with
/// both values rendered in their display form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Difference {
    pub path: FieldPath,
    #[serde(serialize_with = "value_as_display")]
    pub actual: Value,
    #[serde(serialize_with = "value_as_display")]
    pub expected: Value,
    pub kind: DifferenceKind,
}

fn value_as_display<S: serde::Serializer>(value: &Value, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

impl Difference {
    /// Creates a new difference record.
    pub fn new(path: FieldPath, actual: Value, expected: Value, kind: DifferenceKind) -> Self {
        Difference {
            path,
            actual,
            expected,
            kind,
        }
    }
}

/// Renders a path for messages, naming the root explicitly.
pub(crate) fn display_path(path: &FieldPath) -> String {
    if path.is_root() {
        "<root>".to_string()
    } else {
        path.to_display_string()
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: actual={}, expected={} ({})",
            display_path(&self.path),
            self.actual,
            self.expected,
            self.kind
        )
    }
}
