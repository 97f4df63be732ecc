//! Cycle bookkeeping.

use std::collections::HashSet;

/// VisitedSet records the `(identity(actual), identity(expected))` pairs
/// already entered during one comparison. Identity is pointer identity, never
/// value equality; this is the only place identity is load-bearing. A fresh
/// set is created per top-level `compare` call.
#[derive(Debug, Clone, Default)]
pub struct VisitedSet {
    pairs: HashSet<(usize, usize)>,
}

impl VisitedSet {
    /// Creates an empty visited set.
    pub fn new() -> Self {
        VisitedSet::default()
    }

    /// Records the pair; returns false if it was already present, meaning the
    /// traversal has come back around to a pair it already entered.
    pub fn insert(&mut self, pair: (usize, usize)) -> bool {
        self.pairs.insert(pair)
    }

    /// Returns whether the pair has been entered.
    pub fn contains(&self, pair: (usize, usize)) -> bool {
        self.pairs.contains(&pair)
    }

    /// Returns the number of recorded pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_reports_revisits() {
        let mut visited = VisitedSet::new();
        assert!(visited.insert((1, 2)));
        assert!(!visited.insert((1, 2)));
        // The reversed pair is a different pair.
        assert!(visited.insert((2, 1)));
        assert!(visited.contains((1, 2)));
        assert_eq!(visited.len(), 2);
    }
}
