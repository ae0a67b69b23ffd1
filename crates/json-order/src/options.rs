use serde::{Deserialize, Serialize};

use crate::error::ReconcileError;

/// Default nesting limit for reordering, equal to serde_json's parser
/// recursion limit.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Layout of a reconciled array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArrayOrder {
    /// Paired elements follow the order of the `before` elements they were
    /// paired with; unpaired `after` elements come last, in `after` order.
    #[default]
    Before,
    /// Elements keep their `after` order; only their contents are reordered.
    After,
}

/// Reconciler configuration.
///
/// Deserializes from camelCase JSON with every field optional:
///
/// ```
/// use json_order::{ArrayOrder, ReconcileOptions};
///
/// let options = ReconcileOptions::from_json_str(r#"{"arrayOrder": "after"}"#).unwrap();
/// assert_eq!(options.array_order, ArrayOrder::After);
/// assert_eq!(options.max_depth, Some(json_order::DEFAULT_MAX_DEPTH));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ReconcileOptions {
    pub array_order: ArrayOrder,
    /// Containers nested this deep or deeper (the root is depth 0) keep their
    /// `after` order. `None` removes the limit.
    pub max_depth: Option<usize>,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            array_order: ArrayOrder::default(),
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl ReconcileOptions {
    /// Parse options from a JSON document, rejecting unknown fields.
    pub fn from_json_str(s: &str) -> Result<Self, ReconcileError> {
        serde_json::from_str(s).map_err(ReconcileError::Options)
    }

    pub(crate) fn exceeds_depth(&self, depth: usize) -> bool {
        matches!(self.max_depth, Some(max) if depth >= max)
    }
}
