//! Standard comparison strategy.

use super::{ComparisonStrategy, StrategyError};
use crate::value::Value;
use std::cmp::Ordering;
use std::collections::HashSet;

/// StandardComparisonStrategy delegates to the values' own equality and
/// natural ordering.
///
/// It deliberately does not enforce the equality contract: opaque values are
/// compared by calling their embedder-supplied equality without any reference
/// shortcut, so non-reflexive or stateful implementations are mirrored as-is
/// and their failures propagate unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardComparisonStrategy;

impl StandardComparisonStrategy {
    /// Creates a new standard strategy.
    pub fn new() -> Self {
        StandardComparisonStrategy
    }
}

impl ComparisonStrategy for StandardComparisonStrategy {
    fn are_equal(&self, left: &Value, right: &Value) -> Result<bool, StrategyError> {
        let mut visited = HashSet::new();
        deep_equal(left, right, &mut visited)
    }

    fn is_greater_than(&self, left: &Value, right: &Value) -> Result<bool, StrategyError> {
        Ok(natural_order(left, right)? == Ordering::Greater)
    }

    fn is_less_than_or_equal_to(&self, left: &Value, right: &Value) -> Result<bool, StrategyError> {
        Ok(natural_order(left, right)? != Ordering::Greater)
    }
}

// Structural deep equality. `visited` holds object identity pairs already
// entered on this comparison so cyclic graphs terminate; a revisited pair
// counts as equal, consistent with the engine's cycle rule.
fn deep_equal(
    left: &Value,
    right: &Value,
    visited: &mut HashSet<(usize, usize)>,
) -> Result<bool, StrategyError> {
    match (left, right) {
        (Value::Opaque(l), _) => Ok(l.equals(right)?),
        (_, Value::Opaque(r)) => Ok(r.equals(left)?),
        (Value::Null, Value::Null) => Ok(true),
        (Value::Bool(l), Value::Bool(r)) => Ok(l == r),
        (Value::Int(l), Value::Int(r)) => Ok(l == r),
        // Bit-pattern fallback makes NaN equal to itself, matching the
        // boxed-double equality the standard strategy models.
        (Value::Float(l), Value::Float(r)) => Ok(l == r || l.to_bits() == r.to_bits()),
        (Value::String(l), Value::String(r)) => Ok(l == r),
        (Value::Array(l), Value::Array(r)) | (Value::List(l), Value::List(r)) => {
            if l.len() != r.len() {
                return Ok(false);
            }
            for (a, b) in l.iter().zip(r.iter()) {
                if !deep_equal(a, b, visited)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        (Value::Set(l), Value::Set(r)) => multiset_equal(l, r, visited),
        (Value::Map(l), Value::Map(r)) => {
            if l.len() != r.len() {
                return Ok(false);
            }
            for (key, a) in l {
                match r.get(key) {
                    Some(b) => {
                        if !deep_equal(a, b, visited)? {
                            return Ok(false);
                        }
                    }
                    None => return Ok(false),
                }
            }
            Ok(true)
        }
        (Value::Wrapper(l), Value::Wrapper(r)) => match (l, r) {
            (None, None) => Ok(true),
            (Some(a), Some(b)) => deep_equal(a, b, visited),
            _ => Ok(false),
        },
        (Value::Object(l), Value::Object(r)) => {
            if !visited.insert((l.identity(), r.identity())) {
                return Ok(true);
            }
            if l.type_name() != r.type_name() {
                return Ok(false);
            }
            let left_fields = l.fields();
            if left_fields.len() != r.len() {
                return Ok(false);
            }
            for (name, a) in &left_fields {
                match r.field(name) {
                    Some(b) => {
                        if !deep_equal(a, &b, visited)? {
                            return Ok(false);
                        }
                    }
                    None => return Ok(false),
                }
            }
            Ok(true)
        }
        _ => Ok(false),
    }
}

// Duplicate-aware order-insensitive equality for sets: every right element
// must consume a distinct matching left element.
fn multiset_equal(
    left: &[Value],
    right: &[Value],
    visited: &mut HashSet<(usize, usize)>,
) -> Result<bool, StrategyError> {
    if left.len() != right.len() {
        return Ok(false);
    }
    let mut consumed = vec![false; left.len()];
    'outer: for wanted in right {
        for (i, candidate) in left.iter().enumerate() {
            if !consumed[i] && deep_equal(candidate, wanted, visited)? {
                consumed[i] = true;
                continue 'outer;
            }
        }
        return Ok(false);
    }
    Ok(true)
}

// Natural ordering over scalars; everything else has no total order.
fn natural_order(left: &Value, right: &Value) -> Result<Ordering, StrategyError> {
    let ordering = match (left, right) {
        (Value::Int(l), Value::Int(r)) => Some(l.cmp(r)),
        (Value::Float(l), Value::Float(r)) => l.partial_cmp(r),
        (Value::Int(l), Value::Float(r)) => (*l as f64).partial_cmp(r),
        (Value::Float(l), Value::Int(r)) => l.partial_cmp(&(*r as f64)),
        (Value::String(l), Value::String(r)) => Some(l.cmp(r)),
        (Value::Bool(l), Value::Bool(r)) => Some(l.cmp(r)),
        (Value::Opaque(l), _) => l.try_cmp(right),
        (_, Value::Opaque(r)) => r.try_cmp(left).map(Ordering::reverse),
        _ => None,
    };
    ordering.ok_or_else(|| StrategyError::not_comparable(left, right))
}
