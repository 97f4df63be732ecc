//! Value module - In-memory representation of the object graphs being compared.
//!
//! The engine never introspects host-language types directly; callers build
//! their data into this closed value model instead. `Object` nodes are
//! reference-counted so cyclic graphs can be expressed.

mod object;
mod opaque;
#[allow(clippy::module_inception)]
mod value;

pub use object::*;
pub use opaque::*;
pub use value::*;
