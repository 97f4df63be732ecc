//! Comparison configuration.

use crate::fieldpath::{FieldPath, FieldPattern, PatternParseError};
use crate::strategy::Comparator;
use std::collections::BTreeMap;
use std::rc::Rc;

/// RecursiveComparisonConfiguration holds the field selection patterns and
/// comparator overrides one comparison runs under. Dotted patterns are parsed
/// once when the configuration is built; the configuration is immutable once
/// a comparison starts.
#[derive(Clone, Default)]
pub struct RecursiveComparisonConfiguration {
    /// When set, only these fields (with their ancestors and descendants)
    /// are compared.
    included: Option<Vec<FieldPattern>>,
    excluded: Vec<FieldPattern>,
    field_comparators: Vec<(FieldPattern, Rc<dyn Comparator>)>,
    type_comparators: BTreeMap<String, Rc<dyn Comparator>>,
}

impl RecursiveComparisonConfiguration {
    /// Creates a new builder.
    pub fn builder() -> RecursiveComparisonConfigurationBuilder {
        RecursiveComparisonConfigurationBuilder::default()
    }

    /// Returns true if the path is excluded from comparison.
    pub fn is_excluded(&self, path: &FieldPath) -> bool {
        self.excluded.iter().any(|pattern| pattern.matches(path))
    }

    /// Returns true if the path survives include filtering: with no include
    /// patterns everything is included, otherwise the path must lie on the
    /// way to an included field or at/below one.
    pub fn is_included(&self, path: &FieldPath) -> bool {
        match &self.included {
            None => true,
            Some(patterns) => patterns
                .iter()
                .any(|pattern| pattern.is_ancestor_path(path) || pattern.is_descendant_path(path)),
        }
    }

    /// Returns the comparator registered for this exact field path, if any.
    pub fn comparator_for_field(&self, path: &FieldPath) -> Option<Rc<dyn Comparator>> {
        self.field_comparators
            .iter()
            .find(|(pattern, _)| pattern.matches(path))
            .map(|(_, comparator)| Rc::clone(comparator))
    }

    /// Returns the comparator registered for the given runtime type name,
    /// if any.
    pub fn comparator_for_type(&self, type_name: &str) -> Option<Rc<dyn Comparator>> {
        self.type_comparators.get(type_name).map(Rc::clone)
    }

    /// Returns the patterns that must match at least one concrete field for
    /// the configuration to be valid: every include pattern, then every
    /// field-comparator key, in registration order.
    pub fn validated_patterns(&self) -> impl Iterator<Item = &FieldPattern> {
        self.included
            .iter()
            .flatten()
            .chain(self.field_comparators.iter().map(|(pattern, _)| pattern))
    }
}

/// Builder for [`RecursiveComparisonConfiguration`]. Pattern strings are kept
/// raw until `build`, which parses them all and fails on the first malformed
/// one.
#[derive(Default)]
pub struct RecursiveComparisonConfigurationBuilder {
    included: Option<Vec<String>>,
    excluded: Vec<String>,
    field_comparators: Vec<(String, Rc<dyn Comparator>)>,
    type_comparators: Vec<(String, Rc<dyn Comparator>)>,
}

impl RecursiveComparisonConfigurationBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        RecursiveComparisonConfigurationBuilder::default()
    }

    /// Restricts the comparison to the given dotted field pattern (plus its
    /// ancestors and descendants). May be called repeatedly.
    pub fn include_field(mut self, pattern: impl Into<String>) -> Self {
        self.included.get_or_insert_with(Vec::new).push(pattern.into());
        self
    }

    /// Excludes the given dotted field pattern from comparison.
    pub fn exclude_field(mut self, pattern: impl Into<String>) -> Self {
        self.excluded.push(pattern.into());
        self
    }

    /// Registers a comparator for one exact field. Field comparators take
    /// precedence over type comparators and the ambient strategy.
    pub fn compare_field_with(
        mut self,
        pattern: impl Into<String>,
        comparator: Rc<dyn Comparator>,
    ) -> Self {
        self.field_comparators.push((pattern.into(), comparator));
        self
    }

    /// Registers a comparator for every value of the given runtime type name.
    pub fn compare_type_with(
        mut self,
        type_name: impl Into<String>,
        comparator: Rc<dyn Comparator>,
    ) -> Self {
        self.type_comparators.push((type_name.into(), comparator));
        self
    }

    /// Parses all patterns and builds the configuration.
    pub fn build(self) -> Result<RecursiveComparisonConfiguration, PatternParseError> {
        let included = match self.included {
            None => None,
            Some(raw) => Some(
                raw.iter()
                    .map(|pattern| FieldPattern::parse(pattern))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
        };
        let excluded = self
            .excluded
            .iter()
            .map(|pattern| FieldPattern::parse(pattern))
            .collect::<Result<Vec<_>, _>>()?;
        let field_comparators = self
            .field_comparators
            .into_iter()
            .map(|(pattern, comparator)| Ok((FieldPattern::parse(&pattern)?, comparator)))
            .collect::<Result<Vec<_>, PatternParseError>>()?;
        let type_comparators = self
            .type_comparators
            .into_iter()
            .collect::<BTreeMap<_, _>>();

        Ok(RecursiveComparisonConfiguration {
            included,
            excluded,
            field_comparators,
            type_comparators,
        })
    }
}
