//! Plain object nodes with named fields and pointer identity.

use super::Value;
use std::cell::RefCell;
use std::rc::Rc;

/// Object is a plain-object node: a type name plus an ordered list of named
/// fields. Objects are reference-counted and interior-mutable so that callers
/// can build self-referential or mutually-referential graphs.
#[derive(Debug, Clone)]
pub struct Object {
    inner: Rc<ObjectInner>,
}

#[derive(Debug)]
struct ObjectInner {
    type_name: String,
    fields: RefCell<Vec<(String, Value)>>,
}

impl Object {
    /// Creates a new object with no fields.
    pub fn new(type_name: impl Into<String>) -> Self {
        Object {
            inner: Rc::new(ObjectInner {
                type_name: type_name.into(),
                fields: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Creates a new object with the given fields.
    pub fn with_fields(type_name: impl Into<String>, fields: Vec<(String, Value)>) -> Self {
        Object {
            inner: Rc::new(ObjectInner {
                type_name: type_name.into(),
                fields: RefCell::new(fields),
            }),
        }
    }

    /// Returns the declared type name of this object.
    pub fn type_name(&self) -> &str {
        &self.inner.type_name
    }

    /// Sets a field, replacing any existing field with the same name.
    /// Because objects are shared, this can be used to close a cycle after
    /// construction.
    pub fn set_field(&self, name: impl Into<String>, value: Value) {
        let name = name.into();
        let mut fields = self.inner.fields.borrow_mut();
        match fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => fields.push((name, value)),
        }
    }

    /// Returns a clone of the named field's value, if present.
    pub fn field(&self, name: &str) -> Option<Value> {
        self.inner
            .fields
            .borrow()
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    /// Returns the field names in declaration order.
    pub fn field_names(&self) -> Vec<String> {
        self.inner
            .fields
            .borrow()
            .iter()
            .map(|(n, _)| n.clone())
            .collect()
    }

    /// Returns a snapshot of all fields in declaration order.
    pub fn fields(&self) -> Vec<(String, Value)> {
        self.inner.fields.borrow().clone()
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.inner.fields.borrow().len()
    }

    /// Returns true if the object has no fields.
    pub fn is_empty(&self) -> bool {
        self.inner.fields.borrow().is_empty()
    }

    /// Returns the pointer identity of this object. Two clones of the same
    /// object share an identity; structurally equal but distinct objects do
    /// not. Cycle detection is keyed on this, never on value equality.
    pub fn identity(&self) -> usize {
        Rc::as_ptr(&self.inner) as usize
    }
}
