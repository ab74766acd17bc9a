//! Deep structural equality for dynamically typed runtime values.
//!
//! Values are modelled by [`values::value_container::ValueContainer`]:
//! primitives held by value and heap objects held by shared reference.
//! [`is_equal`] compares two such values, looking through boxed
//! primitives, recursing into arrays and plain objects, and comparing
//! functions by their source text.

pub mod equality;
pub mod logger;
pub mod traits;
pub mod values;

pub use equality::is_equal;
