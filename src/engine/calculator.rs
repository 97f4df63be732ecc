//! The recursive comparison engine.

use super::{
    ComparisonError, Difference, DifferenceKind, DualValue, RecursiveComparisonConfiguration,
    VisitedSet,
};
use crate::diff::MultisetDiff;
use crate::fieldpath::{FieldPath, FieldPattern, Segment};
use crate::strategy::{ComparisonStrategy, StandardComparisonStrategy};
use crate::value::{Object, Value};
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet, VecDeque};

/// RecursiveComparisonEngine walks two object graphs and collects every
/// field-level difference between them.
///
/// The traversal runs over an explicit heap-allocated work queue, so deeply
/// nested or cyclic graphs cannot overflow the call stack. All mutable state
/// is local to one `compare` call; the engine itself only carries the ambient
/// strategy and can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct RecursiveComparisonEngine<S: ComparisonStrategy = StandardComparisonStrategy> {
    strategy: S,
}

// Per-call traversal state: the work queue, cycle bookkeeping, and the
// differences found so far, in discovery order.
struct ComparisonState<'a> {
    config: &'a RecursiveComparisonConfiguration,
    queue: VecDeque<DualValue>,
    visited: VisitedSet,
    differences: Vec<Difference>,
}

impl<'a> ComparisonState<'a> {
    fn new(config: &'a RecursiveComparisonConfiguration) -> Self {
        ComparisonState {
            config,
            queue: VecDeque::new(),
            visited: VisitedSet::new(),
            differences: Vec::new(),
        }
    }

    fn enqueue(&mut self, dual: DualValue) {
        self.queue.push_back(dual);
    }

    fn dequeue(&mut self) -> Option<DualValue> {
        self.queue.pop_front()
    }

    fn add(&mut self, difference: Difference) {
        self.differences.push(difference);
    }
}

impl RecursiveComparisonEngine<StandardComparisonStrategy> {
    /// Creates an engine using the standard comparison strategy.
    pub fn standard() -> Self {
        RecursiveComparisonEngine::default()
    }
}

impl<S: ComparisonStrategy> RecursiveComparisonEngine<S> {
    /// Creates an engine using the given ambient strategy.
    pub fn new(strategy: S) -> Self {
        RecursiveComparisonEngine { strategy }
    }

    /// Compares two object graphs under the given configuration.
    ///
    /// Returns the differences found in discovery order; an empty list means
    /// the graphs are deeply equal on every field surviving filtering.
    /// Configured include and field-comparator patterns that match no field
    /// in either graph fail the call with
    /// [`ComparisonError::UnreachableField`] before any differences are
    /// reported.
    pub fn compare(
        &self,
        actual: &Value,
        expected: &Value,
        config: &RecursiveComparisonConfiguration,
    ) -> Result<Vec<Difference>, ComparisonError> {
        for pattern in config.validated_patterns() {
            let reachable = (!actual.is_null() && pattern_reachable(actual, pattern))
                || (!expected.is_null() && pattern_reachable(expected, pattern));
            if !reachable {
                return Err(ComparisonError::UnreachableField(pattern.to_string()));
            }
        }

        let mut state = ComparisonState::new(config);
        state.enqueue(DualValue::root(actual.clone(), expected.clone()));
        while let Some(dual) = state.dequeue() {
            self.compare_dual(dual, &mut state)?;
        }
        Ok(state.differences)
    }

    fn compare_dual(
        &self,
        dual: DualValue,
        state: &mut ComparisonState<'_>,
    ) -> Result<(), ComparisonError> {
        let config = state.config;
        let identity_pair = dual.identity_pair();
        let DualValue {
            path,
            actual,
            expected,
        } = dual;

        if actual.is_null() && expected.is_null() {
            return Ok(());
        }
        if actual.is_null() || expected.is_null() {
            state.add(Difference::new(
                path,
                actual,
                expected,
                DifferenceKind::NullMismatch,
            ));
            return Ok(());
        }

        // Cycle guard: a pair already entered on this traversal is treated as
        // equal and not descended into again.
        if let Some(pair) = identity_pair {
            if !state.visited.insert(pair) {
                return Ok(());
            }
        }

        if config.is_excluded(&path) {
            return Ok(());
        }

        // Comparator overrides: exact field registration beats type
        // registration beats the ambient strategy, and both are terminal leaf
        // comparisons.
        let comparator = config
            .comparator_for_field(&path)
            .or_else(|| config.comparator_for_type(actual.type_name()))
            .or_else(|| config.comparator_for_type(expected.type_name()));
        if let Some(comparator) = comparator {
            let ordering = comparator
                .compare(&actual, &expected)
                .map_err(|err| ComparisonError::at(err, &path))?;
            if ordering != Ordering::Equal {
                state.add(Difference::new(
                    path,
                    actual,
                    expected,
                    DifferenceKind::ValueMismatch,
                ));
            }
            return Ok(());
        }

        match (&actual, &expected) {
            (Value::Array(a), Value::Array(e)) | (Value::List(a), Value::List(e)) => {
                if a.len() != e.len() {
                    state.add(Difference::new(
                        path,
                        actual.clone(),
                        expected.clone(),
                        DifferenceKind::SizeMismatch,
                    ));
                    return Ok(());
                }
                for (i, (a_element, e_element)) in a.iter().zip(e.iter()).enumerate() {
                    state.enqueue(DualValue::new(
                        path.with(Segment::index(i)),
                        a_element.clone(),
                        e_element.clone(),
                    ));
                }
            }
            (Value::Set(a), Value::Set(e)) => {
                // Unordered containers have no positional correspondence, so
                // residuals are reported at the set's own path instead of
                // recursing per element.
                let diff = MultisetDiff::diff(a, e, &self.strategy)
                    .map_err(|err| ComparisonError::at(err, &path))?;
                for missing in diff.missing {
                    state.add(Difference::new(
                        path.clone(),
                        Value::Null,
                        missing,
                        DifferenceKind::SetMismatch,
                    ));
                }
                for unexpected in diff.unexpected {
                    state.add(Difference::new(
                        path.clone(),
                        unexpected,
                        Value::Null,
                        DifferenceKind::SetMismatch,
                    ));
                }
            }
            (Value::Map(a), Value::Map(e)) => {
                let keys: BTreeSet<&String> = a.keys().chain(e.keys()).collect();
                for key in keys {
                    let child_path = path.with(Segment::key(key.clone()));
                    match (a.get(key), e.get(key)) {
                        (Some(a_value), Some(e_value)) => state.enqueue(DualValue::new(
                            child_path,
                            a_value.clone(),
                            e_value.clone(),
                        )),
                        (Some(a_value), None) => state.add(Difference::new(
                            child_path,
                            a_value.clone(),
                            Value::Null,
                            DifferenceKind::KeyMismatch,
                        )),
                        (None, Some(e_value)) => state.add(Difference::new(
                            child_path,
                            Value::Null,
                            e_value.clone(),
                            DifferenceKind::KeyMismatch,
                        )),
                        (None, None) => unreachable!("key came from one of the maps"),
                    }
                }
            }
            (Value::Wrapper(a), Value::Wrapper(e)) => {
                // Unwrap both sides; the transparent segment keeps the level
                // visible to cycle tracking but not to dotted patterns.
                let a_inner = a.as_deref().cloned().unwrap_or(Value::Null);
                let e_inner = e.as_deref().cloned().unwrap_or(Value::Null);
                state.enqueue(DualValue::new(
                    path.with(Segment::Transparent),
                    a_inner,
                    e_inner,
                ));
            }
            (Value::Object(a), Value::Object(e)) => {
                self.compare_objects(&path, a, e, state);
            }
            _ => {
                // Leaf, or container shapes that do not line up: the ambient
                // strategy decides.
                let equal = self
                    .strategy
                    .are_equal(&actual, &expected)
                    .map_err(|err| ComparisonError::at(err, &path))?;
                if !equal {
                    state.add(Difference::new(
                        path,
                        actual,
                        expected,
                        DifferenceKind::ValueMismatch,
                    ));
                }
            }
        }
        Ok(())
    }

    fn compare_objects(
        &self,
        path: &FieldPath,
        actual: &Object,
        expected: &Object,
        state: &mut ComparisonState<'_>,
    ) {
        let config = state.config;
        let survives = |name: &str| {
            let child_path = path.with(Segment::name(name));
            config.is_included(&child_path) && !config.is_excluded(&child_path)
        };
        let actual_fields: Vec<(String, Value)> = actual
            .fields()
            .into_iter()
            .filter(|(name, _)| survives(name))
            .collect();
        let expected_fields: Vec<(String, Value)> = expected
            .fields()
            .into_iter()
            .filter(|(name, _)| survives(name))
            .collect();

        for (name, value) in &actual_fields {
            if !expected_fields.iter().any(|(n, _)| n == name) {
                state.add(Difference::new(
                    path.with(Segment::name(name)),
                    value.clone(),
                    Value::Null,
                    DifferenceKind::FieldMismatch,
                ));
            }
        }
        for (name, value) in &expected_fields {
            if !actual_fields.iter().any(|(n, _)| n == name) {
                state.add(Difference::new(
                    path.with(Segment::name(name)),
                    Value::Null,
                    value.clone(),
                    DifferenceKind::FieldMismatch,
                ));
            }
        }
        for (name, a_value) in &actual_fields {
            if let Some((_, e_value)) = expected_fields.iter().find(|(n, _)| n == name) {
                state.enqueue(DualValue::new(
                    path.with(Segment::name(name)),
                    a_value.clone(),
                    e_value.clone(),
                ));
            }
        }
    }
}

/// Returns whether the pattern's name sequence can be consumed starting from
/// `root`, crossing arrays, lists, sets, maps, and single-value wrappers
/// transparently and consuming one name per object field. Runs over an
/// explicit stack with an identity guard so cyclic graphs terminate.
fn pattern_reachable(root: &Value, pattern: &FieldPattern) -> bool {
    let names: Vec<&str> = pattern.names().collect();
    let mut stack: Vec<(Value, usize)> = vec![(root.clone(), 0)];
    let mut seen: HashSet<(usize, usize)> = HashSet::new();

    while let Some((value, consumed)) = stack.pop() {
        if consumed == names.len() {
            return true;
        }
        match value {
            Value::Array(items) | Value::List(items) | Value::Set(items) => {
                for item in items {
                    stack.push((item, consumed));
                }
            }
            Value::Map(fields) => {
                for item in fields.into_values() {
                    stack.push((item, consumed));
                }
            }
            Value::Wrapper(Some(inner)) => stack.push((*inner, consumed)),
            Value::Object(object) => {
                if seen.insert((object.identity(), consumed)) {
                    if let Some(field) = object.field(names[consumed]) {
                        stack.push((field, consumed + 1));
                    }
                }
            }
            _ => {}
        }
    }
    false
}
