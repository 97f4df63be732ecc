//! The unit of traversal work.

use crate::fieldpath::FieldPath;
use crate::value::Value;

/// DualValue pairs the actual and expected nodes reached at one path. It is
/// pushed onto the work queue and not retained after processing except for
/// cycle bookkeeping.
#[derive(Debug, Clone)]
pub struct DualValue {
    pub path: FieldPath,
    pub actual: Value,
    pub expected: Value,
}

impl DualValue {
    /// Creates a dual value at the given path.
    pub fn new(path: FieldPath, actual: Value, expected: Value) -> Self {
        DualValue {
            path,
            actual,
            expected,
        }
    }

    /// Creates the root dual value seeding a comparison.
    pub fn root(actual: Value, expected: Value) -> Self {
        DualValue::new(FieldPath::root(), actual, expected)
    }

    /// Returns the pointer identities of both sides when both are shareable
    /// nodes, i.e. when this pair can participate in a cycle.
    pub fn identity_pair(&self) -> Option<(usize, usize)> {
        Some((self.actual.identity()?, self.expected.identity()?))
    }
}
