//! Dotted field patterns.

use super::FieldPath;
use std::fmt;
use thiserror::Error;

/// PatternParseError reports a malformed dotted field pattern at
/// configuration-build time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternParseError {
    #[error("field pattern must not be empty")]
    Empty,

    #[error("field pattern {pattern:?} contains an empty segment")]
    EmptySegment { pattern: String },
}

/// FieldPattern is a dotted field reference such as `"players.salary"`,
/// parsed once when the configuration is built rather than re-split on every
/// comparison. Patterns address fields by name only; container levels
/// (indexes, map keys, single-value wrappers) are crossed transparently.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldPattern {
    names: Vec<String>,
}

impl FieldPattern {
    /// Parses a dotted pattern string.
    pub fn parse(dotted: &str) -> Result<Self, PatternParseError> {
        if dotted.is_empty() {
            return Err(PatternParseError::Empty);
        }
        let names: Vec<String> = dotted.split('.').map(str::to_string).collect();
        if names.iter().any(String::is_empty) {
            return Err(PatternParseError::EmptySegment {
                pattern: dotted.to_string(),
            });
        }
        Ok(FieldPattern { names })
    }

    /// Returns the name segments of the pattern.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Returns the number of name segments.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Patterns always hold at least one name.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns true if the path's name sequence equals this pattern.
    pub fn matches(&self, path: &FieldPath) -> bool {
        let names = path.names();
        names.len() == self.names.len() && self.equals_prefix(&names)
    }

    /// Returns true if the path's name sequence is a proper or improper
    /// prefix of this pattern, i.e. the path is an ancestor of (or equal to)
    /// the field the pattern addresses. Used to keep traversing toward an
    /// included field.
    pub fn is_ancestor_path(&self, path: &FieldPath) -> bool {
        let names = path.names();
        names.len() <= self.names.len() && self.equals_prefix(&names)
    }

    /// Returns true if this pattern is a prefix of the path's name sequence,
    /// i.e. the path lies at or below the field the pattern addresses.
    pub fn is_descendant_path(&self, path: &FieldPath) -> bool {
        let names = path.names();
        self.names.len() <= names.len()
            && self
                .names
                .iter()
                .zip(names.iter())
                .all(|(pattern, name)| pattern == name)
    }

    fn equals_prefix(&self, names: &[&str]) -> bool {
        names
            .iter()
            .zip(self.names.iter())
            .all(|(name, pattern)| name == pattern)
    }
}

impl fmt::Display for FieldPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fieldpath::Segment;

    fn path(segments: Vec<Segment>) -> FieldPath {
        FieldPath::from_segments(segments)
    }

    #[test]
    fn test_parse() {
        let pattern = FieldPattern::parse("players.salary").unwrap();
        assert_eq!(pattern.len(), 2);
        assert_eq!(pattern.to_string(), "players.salary");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(FieldPattern::parse(""), Err(PatternParseError::Empty));
        assert_eq!(
            FieldPattern::parse("players..salary"),
            Err(PatternParseError::EmptySegment {
                pattern: "players..salary".to_string()
            })
        );
    }

    #[test]
    fn test_matches_skips_display_segments() {
        let pattern = FieldPattern::parse("players.salary").unwrap();
        assert!(pattern.matches(&path(vec![
            Segment::name("players"),
            Segment::index(2),
            Segment::Transparent,
            Segment::name("salary"),
        ])));
        assert!(!pattern.matches(&path(vec![Segment::name("players")])));
        assert!(!pattern.matches(&path(vec![
            Segment::name("players"),
            Segment::name("salary"),
            Segment::name("amount"),
        ])));
    }

    #[test]
    fn test_ancestor_and_descendant() {
        let pattern = FieldPattern::parse("team.players.salary").unwrap();

        let ancestor = path(vec![Segment::name("team"), Segment::name("players")]);
        assert!(pattern.is_ancestor_path(&ancestor));
        assert!(!pattern.is_descendant_path(&ancestor));

        let descendant = path(vec![
            Segment::name("team"),
            Segment::name("players"),
            Segment::index(0),
            Segment::name("salary"),
            Segment::name("amount"),
        ]);
        assert!(pattern.is_descendant_path(&descendant));
        assert!(!pattern.is_ancestor_path(&descendant));

        let exact = path(vec![
            Segment::name("team"),
            Segment::name("players"),
            Segment::name("salary"),
        ]);
        assert!(pattern.is_ancestor_path(&exact));
        assert!(pattern.is_descendant_path(&exact));

        let unrelated = path(vec![Segment::name("coach")]);
        assert!(!pattern.is_ancestor_path(&unrelated));
        assert!(!pattern.is_descendant_path(&unrelated));
    }

    #[test]
    fn test_root_is_ancestor_of_everything() {
        let pattern = FieldPattern::parse("a.b").unwrap();
        assert!(pattern.is_ancestor_path(&FieldPath::root()));
    }
}
