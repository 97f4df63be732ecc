//! Comparison strategies - pluggable equality, ordering, and containment
//! semantics.
//!
//! The engine performs every leaf comparison through a [`ComparisonStrategy`]:
//! either the standard one delegating to the values' own equality, or one
//! driven by a single external comparator.

mod comparator;
mod standard;

pub use comparator::*;
pub use standard::*;

use crate::value::{EqualityError, Value};
use thiserror::Error;

/// StrategyError represents a failure inside a strategy operation.
///
/// Structural inequality is never an error; these cover values that lack a
/// requested total order and user-supplied code that failed outright.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    #[error("values are not comparable: {message}")]
    NotComparable { message: String },

    #[error("user-supplied comparison failed: {message}")]
    ContractViolation { message: String },
}

impl StrategyError {
    /// Creates a not-comparable error describing the two offending values.
    pub fn not_comparable(left: &Value, right: &Value) -> Self {
        StrategyError::NotComparable {
            message: format!(
                "no total order between {} and {}",
                left.type_name(),
                right.type_name()
            ),
        }
    }
}

impl From<EqualityError> for StrategyError {
    fn from(err: EqualityError) -> Self {
        StrategyError::ContractViolation {
            message: err.message,
        }
    }
}

/// ComparisonStrategy is the pluggable equality/ordering/containment contract
/// used for every leaf comparison.
///
/// Containment, duplicate detection, and string operations have default
/// implementations in terms of [`are_equal`](ComparisonStrategy::are_equal);
/// implementations only override them to change semantics.
pub trait ComparisonStrategy {
    /// Returns whether the two values are equal under this strategy.
    fn are_equal(&self, left: &Value, right: &Value) -> Result<bool, StrategyError>;

    /// Returns whether `left` is strictly greater than `right`. Fails with
    /// [`StrategyError::NotComparable`] when the values expose no total order.
    fn is_greater_than(&self, left: &Value, right: &Value) -> Result<bool, StrategyError>;

    /// Returns whether `left` is less than or equal to `right`. Fails with
    /// [`StrategyError::NotComparable`] when the values expose no total order.
    fn is_less_than_or_equal_to(&self, left: &Value, right: &Value) -> Result<bool, StrategyError>;

    /// Returns whether the array contains the value under this strategy.
    fn array_contains(&self, array: &[Value], value: &Value) -> Result<bool, StrategyError> {
        self.iterable_contains(array, value)
    }

    /// Returns whether the iterable contains the value under this strategy.
    fn iterable_contains(&self, iterable: &[Value], value: &Value) -> Result<bool, StrategyError> {
        for element in iterable {
            if self.are_equal(element, value)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Returns the values that reoccur after their first appearance, in
    /// encounter order, each collapsed to a single entry however many extra
    /// occurrences it has. `Null` counts like any other value.
    fn duplicates_from(&self, iterable: &[Value]) -> Result<Vec<Value>, StrategyError> {
        let mut duplicates: Vec<Value> = Vec::new();
        for (i, candidate) in iterable.iter().enumerate() {
            if self.iterable_contains(&iterable[..i], candidate)?
                && !self.iterable_contains(&duplicates, candidate)?
            {
                duplicates.push(candidate.clone());
            }
        }
        Ok(duplicates)
    }

    /// Returns whether the string starts with the prefix.
    fn string_starts_with(&self, string: &str, prefix: &str) -> bool {
        string.starts_with(prefix)
    }

    /// Returns whether the string ends with the suffix.
    fn string_ends_with(&self, string: &str, suffix: &str) -> bool {
        string.ends_with(suffix)
    }

    /// Returns whether the string contains the sequence.
    fn string_contains(&self, string: &str, sequence: &str) -> bool {
        string.contains(sequence)
    }
}
