//! Duplicate-aware set difference between two sequences.

use crate::strategy::{ComparisonStrategy, StrategyError};
use crate::value::Value;
use std::fmt;

/// MultisetDiff holds the residual elements after matching two sequences as
/// multisets under a comparison strategy: reordering elements, duplicates
/// included, never produces a difference, and mismatched multiplicities
/// surface exactly the residual count.
///
/// `missing` preserves the expected sequence's order, `unexpected` the actual
/// sequence's order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultisetDiff {
    /// Expected elements with no one-to-one match in actual.
    pub missing: Vec<Value>,
    /// Actual elements never consumed by an expected element.
    pub unexpected: Vec<Value>,
}

impl MultisetDiff {
    /// Computes the multiset difference between `actual` and `expected` under
    /// the given strategy's equality. Each expected element consumes at most
    /// one not-yet-consumed matching actual element.
    pub fn diff<S: ComparisonStrategy>(
        actual: &[Value],
        expected: &[Value],
        strategy: &S,
    ) -> Result<MultisetDiff, StrategyError> {
        let mut consumed = vec![false; actual.len()];
        let mut missing = Vec::new();

        'expected: for wanted in expected {
            for (i, candidate) in actual.iter().enumerate() {
                if !consumed[i] && strategy.are_equal(candidate, wanted)? {
                    consumed[i] = true;
                    continue 'expected;
                }
            }
            missing.push(wanted.clone());
        }

        let unexpected = actual
            .iter()
            .zip(consumed)
            .filter(|(_, used)| !used)
            .map(|(value, _)| value.clone())
            .collect();

        Ok(MultisetDiff {
            missing,
            unexpected,
        })
    }

    /// Returns true if any element was left unmatched on either side.
    pub fn differences_found(&self) -> bool {
        !self.missing.is_empty() || !self.unexpected.is_empty()
    }
}

impl fmt::Display for MultisetDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.missing.is_empty() {
            write!(f, "missing:")?;
            for value in &self.missing {
                write!(f, " {}", value)?;
            }
        }
        if !self.unexpected.is_empty() {
            if !self.missing.is_empty() {
                writeln!(f)?;
            }
            write!(f, "unexpected:")?;
            for value in &self.unexpected {
                write!(f, " {}", value)?;
            }
        }
        Ok(())
    }
}
