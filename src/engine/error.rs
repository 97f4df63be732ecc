//! Engine error types.

use super::difference::display_path;
use crate::fieldpath::FieldPath;
use crate::strategy::StrategyError;
use thiserror::Error;

/// ComparisonError is the failure surface of a `compare` call. Structural
/// mismatches are never errors (they come back as differences); these cover
/// misconfiguration and failures inside user-supplied comparison code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComparisonError {
    /// A configured include or field-comparator pattern matched no field in
    /// either graph. Raised before any differences are reported so the
    /// misconfiguration cannot be mistaken for a passing comparison.
    #[error("field pattern {0:?} does not match any field in either compared graph")]
    UnreachableField(String),

    /// An ordering operation was requested on values without a total order.
    #[error("{path}: values are not comparable: {message}")]
    NotComparable { path: String, message: String },

    /// A user-supplied equality implementation or comparator failed. The
    /// comparison terminates without a partial result.
    #[error("{path}: user-supplied comparison failed: {message}")]
    ContractViolation { path: String, message: String },
}

impl ComparisonError {
    /// Attaches the current traversal path to a strategy-layer failure.
    pub(crate) fn at(err: StrategyError, path: &FieldPath) -> Self {
        let path = display_path(path);
        match err {
            StrategyError::NotComparable { message } => {
                ComparisonError::NotComparable { path, message }
            }
            StrategyError::ContractViolation { message } => {
                ComparisonError::ContractViolation { path, message }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fieldpath::Segment;

    #[test]
    fn test_unreachable_field_display() {
        let err = ComparisonError::UnreachableField("players.salary".to_string());
        assert_eq!(
            err.to_string(),
            "field pattern \"players.salary\" does not match any field in either compared graph"
        );
    }

    #[test]
    fn test_path_attachment() {
        let path = FieldPath::from_segments(vec![Segment::name("age")]);
        let err = ComparisonError::at(
            StrategyError::NotComparable {
                message: "no total order between list and int".to_string(),
            },
            &path,
        );
        assert_eq!(
            err,
            ComparisonError::NotComparable {
                path: "age".to_string(),
                message: "no total order between list and int".to_string(),
            }
        );
    }
}
