//! Opaque values carrying embedder-supplied equality.

use super::Value;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

/// EqualityError represents a failure raised by an embedder-supplied equality
/// implementation. The engine propagates it unmodified instead of treating the
/// values as unequal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EqualityError {
    pub message: String,
}

impl EqualityError {
    /// Creates a new equality error.
    pub fn new(message: impl Into<String>) -> Self {
        EqualityError {
            message: message.into(),
        }
    }
}

/// OpaqueEq is the hook for values whose equality the engine cannot derive
/// structurally. Implementations are trusted as-is: they may be non-reflexive,
/// asymmetric, or stateful, and the standard strategy mirrors whatever they
/// return rather than correcting it.
pub trait OpaqueEq: fmt::Debug {
    /// Returns whether this value equals `other`.
    fn equals(&self, other: &Value) -> Result<bool, EqualityError>;

    /// A short label naming the underlying type, used for display and for
    /// type-comparator lookup.
    fn label(&self) -> &str;

    /// Optional total order against `other`. The default reports no order,
    /// which surfaces as a not-comparable failure when ordering is requested.
    fn try_cmp(&self, other: &Value) -> Option<Ordering> {
        let _ = other;
        None
    }
}

/// Opaque is a value wrapping embedder-supplied equality semantics.
#[derive(Debug, Clone)]
pub struct Opaque {
    inner: Rc<dyn OpaqueEq>,
}

impl Opaque {
    /// Creates a new opaque value.
    pub fn new(inner: Rc<dyn OpaqueEq>) -> Self {
        Opaque { inner }
    }

    /// Delegates to the embedder's equality.
    pub fn equals(&self, other: &Value) -> Result<bool, EqualityError> {
        self.inner.equals(other)
    }

    /// Returns the embedder's type label.
    pub fn label(&self) -> &str {
        self.inner.label()
    }

    /// Delegates to the embedder's ordering hook.
    pub fn try_cmp(&self, other: &Value) -> Option<Ordering> {
        self.inner.try_cmp(other)
    }

    /// Returns the pointer identity of the wrapped implementation.
    pub fn identity(&self) -> usize {
        Rc::as_ptr(&self.inner) as *const () as usize
    }
}
