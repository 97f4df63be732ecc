//! Comparator trait and the comparator-based strategy.

use super::{ComparisonStrategy, StrategyError};
use crate::value::Value;
use std::cmp::Ordering;

/// Comparator is a user-supplied ordering over values. It is treated as
/// opaque and possibly failing; it need not be symmetric or obey any contract.
pub trait Comparator {
    /// Compares `left` against `right`, in that argument order.
    fn compare(&self, left: &Value, right: &Value) -> Result<Ordering, StrategyError>;
}

impl<F> Comparator for F
where
    F: Fn(&Value, &Value) -> Ordering,
{
    fn compare(&self, left: &Value, right: &Value) -> Result<Ordering, StrategyError> {
        Ok(self(left, right))
    }
}

/// ComparatorBasedComparisonStrategy wraps a single external comparator:
/// equality is `compare == Equal`, ordering delegates to `compare` directly.
///
/// The comparator is always invoked as `compare(left, right)` and never with
/// the arguments flipped, so an asymmetric comparator is honored: both
/// `is_greater_than(a, b)` and `is_greater_than(b, a)` may legitimately hold
/// (or fail to hold) at once.
#[derive(Debug, Clone)]
pub struct ComparatorBasedComparisonStrategy<C: Comparator> {
    comparator: C,
}

impl<C: Comparator> ComparatorBasedComparisonStrategy<C> {
    /// Creates a new strategy around the given comparator.
    pub fn new(comparator: C) -> Self {
        ComparatorBasedComparisonStrategy { comparator }
    }
}

impl<C: Comparator> ComparisonStrategy for ComparatorBasedComparisonStrategy<C> {
    fn are_equal(&self, left: &Value, right: &Value) -> Result<bool, StrategyError> {
        Ok(self.comparator.compare(left, right)? == Ordering::Equal)
    }

    fn is_greater_than(&self, left: &Value, right: &Value) -> Result<bool, StrategyError> {
        Ok(self.comparator.compare(left, right)? == Ordering::Greater)
    }

    fn is_less_than_or_equal_to(&self, left: &Value, right: &Value) -> Result<bool, StrategyError> {
        Ok(self.comparator.compare(left, right)? != Ordering::Greater)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case_insensitive(left: &Value, right: &Value) -> Ordering {
        match (left, right) {
            (Value::String(l), Value::String(r)) => {
                l.to_lowercase().cmp(&r.to_lowercase())
            }
            _ => Ordering::Less,
        }
    }

    #[test]
    fn test_equality_via_comparator() {
        let strategy = ComparatorBasedComparisonStrategy::new(case_insensitive);
        assert_eq!(
            strategy.are_equal(&Value::from("Son"), &Value::from("SON")),
            Ok(true)
        );
        assert_eq!(
            strategy.are_equal(&Value::from("Son"), &Value::from("Kane")),
            Ok(false)
        );
    }

    #[test]
    fn test_ordering_via_comparator() {
        let strategy = ComparatorBasedComparisonStrategy::new(case_insensitive);
        assert_eq!(
            strategy.is_greater_than(&Value::from("b"), &Value::from("A")),
            Ok(true)
        );
        assert_eq!(
            strategy.is_less_than_or_equal_to(&Value::from("A"), &Value::from("a")),
            Ok(true)
        );
    }

    #[test]
    fn test_asymmetric_comparator_is_honored() {
        // Pathological comparator: everything is less than everything.
        let strategy = ComparatorBasedComparisonStrategy::new(|_: &Value, _: &Value| Ordering::Less);
        let a = Value::Int(1);
        let b = Value::Int(2);
        // Both directions report "not greater" without the strategy assuming
        // symmetry anywhere.
        assert_eq!(strategy.is_greater_than(&a, &b), Ok(false));
        assert_eq!(strategy.is_greater_than(&b, &a), Ok(false));
        assert_eq!(strategy.are_equal(&a, &a), Ok(false));
    }

    #[test]
    fn test_duplicates_use_comparator_equality() {
        let strategy = ComparatorBasedComparisonStrategy::new(case_insensitive);
        let items = vec![Value::from("x"), Value::from("X"), Value::from("y")];
        let duplicates = strategy.duplicates_from(&items).unwrap();
        assert_eq!(duplicates, vec![Value::from("X")]);
    }

    struct FailingComparator;

    impl Comparator for FailingComparator {
        fn compare(&self, _: &Value, _: &Value) -> Result<Ordering, StrategyError> {
            Err(StrategyError::ContractViolation {
                message: "comparator blew up".to_string(),
            })
        }
    }

    #[test]
    fn test_comparator_failure_propagates() {
        let strategy = ComparatorBasedComparisonStrategy::new(FailingComparator);
        let err = strategy.are_equal(&Value::Int(1), &Value::Int(1)).unwrap_err();
        assert!(matches!(err, StrategyError::ContractViolation { .. }));
    }
}
