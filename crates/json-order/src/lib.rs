//! json-order - Reorder JSON values for stable textual diffs.
//!
//! Given a `before` document and a structurally similar `after` document,
//! [`reconcile`] returns the content of `after` with object keys (and, by
//! default, array elements) laid out in the order `before` uses. Printing
//! both documents the same way and running a line diff then shows only the
//! real changes.
//!
//! ```
//! use serde_json::json;
//!
//! let before = json!({"id": 1, "name": "Alice", "tags": ["a", "b"]});
//! let after = json!({"tags": ["b", "a"], "name": "Alicia", "id": 1});
//!
//! let ordered = json_order::reconcile(&before, &after);
//! assert_eq!(
//!     serde_json::to_string(&ordered).unwrap(),
//!     r#"{"id":1,"name":"Alicia","tags":["a","b"]}"#,
//! );
//! ```
//!
//! Reconciliation never fails. Values whose shapes differ between the two
//! documents keep the order they have in `after`.

mod error;
mod matching;
mod options;
mod reconcile;
mod similarity;

pub use error::{ReconcileError, Side};
pub use json_order_equal::Shape;
pub use matching::pair_elements;
pub use options::{ArrayOrder, ReconcileOptions, DEFAULT_MAX_DEPTH};
pub use reconcile::{reconcile, reconcile_str, Reconciler, Report};
pub use similarity::{score, Similarity};
