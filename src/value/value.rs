//! Core value type.

use super::{Object, Opaque};
use std::collections::BTreeMap;
use std::fmt;

/// Value represents one node of an object graph under comparison.
///
/// Container classification is a closed union so the engine can match it
/// exhaustively: adding a new container kind is a one-place change.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Fixed-size array, compared positionally.
    Array(Vec<Value>),
    /// Ordered collection, compared positionally.
    List(Vec<Value>),
    /// Unordered, duplicate-tolerant collection, compared as a multiset.
    Set(Vec<Value>),
    /// String-keyed map.
    Map(BTreeMap<String, Value>),
    /// Single-value wrapper (Optional / AtomicReference and friends); `None`
    /// models the empty wrapper. Invisible to dotted field patterns.
    Wrapper(Option<Box<Value>>),
    /// Plain object with named fields.
    Object(Object),
    /// Value with embedder-supplied equality.
    Opaque(Opaque),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Wraps a value in a non-empty single-value wrapper.
    pub fn wrapped(value: Value) -> Value {
        Value::Wrapper(Some(Box::new(value)))
    }

    /// An empty single-value wrapper.
    pub fn empty_wrapper() -> Value {
        Value::Wrapper(None)
    }

    pub fn as_slice(&self) -> Option<&[Value]> {
        match self {
            Value::Array(v) | Value::List(v) | Value::Set(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Returns a stable name for the runtime type of this value. Object and
    /// opaque values report their declared type name; everything else reports
    /// the variant name. This is the key space for type comparators.
    pub fn type_name(&self) -> &str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::List(_) => "list",
            Value::Set(_) => "set",
            Value::Map(_) => "map",
            Value::Wrapper(_) => "wrapper",
            Value::Object(o) => o.type_name(),
            Value::Opaque(o) => o.label(),
        }
    }

    /// Returns the pointer identity of this value if it is a shareable node
    /// (only objects can appear more than once in a graph and thus cycle).
    pub fn identity(&self) -> Option<usize> {
        match self {
            Value::Object(o) => Some(o.identity()),
            _ => None,
        }
    }

    /// Builds a plain value (null/bool/int/float/string/list/map) from JSON.
    /// Arrays become ordered lists; objects become maps.
    pub fn from_json(json: &str) -> Result<Value, serde_json::Error> {
        let parsed: serde_json::Value = serde_json::from_str(json)?;
        Ok(Value::from(parsed))
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(fields) => Value::Map(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(o)
    }
}

/// Convenience equality for assertions and bookkeeping. Objects and opaques
/// compare by pointer identity here; semantic, possibly user-defined equality
/// lives in the comparison strategies.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Wrapper(a), Value::Wrapper(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a.identity() == b.identity(),
            (Value::Opaque(a), Value::Opaque(b)) => a.identity() == b.identity(),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut on_branch = Vec::new();
        display_value(self, f, &mut on_branch)
    }
}

// Renders a one-line human-readable representation. `on_branch` holds the
// object identities above the current node so cycles render as "<cycle>".
fn display_value(
    value: &Value,
    f: &mut fmt::Formatter<'_>,
    on_branch: &mut Vec<usize>,
) -> fmt::Result {
    match value {
        Value::Null => write!(f, "null"),
        Value::Bool(b) => write!(f, "{}", b),
        Value::Int(i) => write!(f, "{}", i),
        Value::Float(x) => write!(f, "{}", x),
        Value::String(s) => write!(f, "{:?}", s),
        Value::Array(items) => display_seq(f, "array[", items, "]", on_branch),
        Value::List(items) => display_seq(f, "[", items, "]", on_branch),
        Value::Set(items) => display_seq(f, "{", items, "}", on_branch),
        Value::Map(fields) => {
            write!(f, "{{")?;
            for (i, (k, v)) in fields.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:?}=", k)?;
                display_value(v, f, on_branch)?;
            }
            write!(f, "}}")
        }
        Value::Wrapper(None) => write!(f, "<empty>"),
        Value::Wrapper(Some(inner)) => display_value(inner, f, on_branch),
        Value::Object(obj) => {
            if on_branch.contains(&obj.identity()) {
                return write!(f, "<cycle>");
            }
            on_branch.push(obj.identity());
            write!(f, "{}(", obj.type_name())?;
            for (i, (name, field)) in obj.fields().iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}=", name)?;
                display_value(field, f, on_branch)?;
            }
            on_branch.pop();
            write!(f, ")")
        }
        Value::Opaque(o) => write!(f, "<{}>", o.label()),
    }
}

fn display_seq(
    f: &mut fmt::Formatter<'_>,
    open: &str,
    items: &[Value],
    close: &str,
    on_branch: &mut Vec<usize>,
) -> fmt::Result {
    write!(f, "{}", open)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        display_value(item, f, on_branch)?;
    }
    write!(f, "{}", close)
}
