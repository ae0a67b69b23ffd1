//! json-order-equal - Shape families and equality checks for JSON values.
//!
//! [`deep_equal`] compares values under the JSON data model, where object key
//! order carries no meaning. [`ordered_equal`] additionally requires object
//! entries to appear in the same order, which is what a line-based diff of
//! the printed values observes.
//!
//! Key order is only observable when `serde_json` is built with its
//! `preserve_order` feature. Without it `ordered_equal` and `deep_equal`
//! agree.

mod deep_equal;
mod shape;

pub use deep_equal::{deep_equal, ordered_equal};
pub use shape::Shape;
