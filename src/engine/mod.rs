//! Engine module - recursive graph traversal and difference collection.
//!
//! The engine walks two object graphs breadth-first over an explicit work
//! queue, consulting the configuration for field selection and comparator
//! overrides and the ambient strategy for leaf equality.

mod calculator;
mod config;
mod difference;
mod dual_value;
mod error;
mod visited;


#[cfg(test)]
mod containers_test;


pub use calculator::*;
pub use config::*;
pub use difference::*;
pub use dual_value::*;
pub use error::*;
pub use visited::*;
