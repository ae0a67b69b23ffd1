use serde_json::{Map, Value};
use tracing::{debug, trace, warn};

use json_order_equal::Shape;

use crate::error::{ReconcileError, Side};
use crate::matching::pair_elements;
use crate::options::{ArrayOrder, ReconcileOptions};

/// Reorder `after` to mirror `before` using the default options.
///
/// The result holds exactly the entries of `after`. Object keys present in
/// `before` come first, in `before`'s order, followed by the keys only
/// `after` has. Array elements are paired with their closest `before`
/// counterpart and laid out in `before`'s order.
///
/// # Examples
///
/// ```
/// use serde_json::json;
///
/// let before = json!({"first": "foo", "second": "bar"});
/// let after = json!({"second": "bar", "first": "foo", "third": 3});
///
/// let ordered = json_order::reconcile(&before, &after);
/// let keys: Vec<&str> = ordered.as_object().unwrap().keys().map(String::as_str).collect();
/// assert_eq!(keys, ["first", "second", "third"]);
/// ```
pub fn reconcile(before: &Value, after: &Value) -> Value {
    Reconciler::default().reconcile(before, after)
}

/// Parse two JSON documents and [`reconcile`] them.
pub fn reconcile_str(before: &str, after: &str) -> Result<Value, ReconcileError> {
    let before: Value = serde_json::from_str(before)
        .map_err(ReconcileError::parse(Side::Before))?;
    let after: Value = serde_json::from_str(after)
        .map_err(ReconcileError::parse(Side::After))?;
    Ok(reconcile(&before, &after))
}

/// Counters describing one reconciliation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Report {
    /// Objects reordered against a `before` object.
    pub objects: usize,
    /// Arrays reordered against a `before` array.
    pub arrays: usize,
    /// Array elements paired with a `before` element.
    pub paired_elements: usize,
    /// Array elements left without a counterpart.
    pub unpaired_elements: usize,
    /// Containers whose `before` counterpart had a different shape.
    pub shape_mismatches: usize,
    /// Containers left in their natural order because of `max_depth`.
    pub truncated: usize,
}

/// Configured reconciler. Cheap to clone and safe to share between threads.
#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    options: ReconcileOptions,
}

impl Reconciler {
    /// Build a reconciler that applies `options` to every call.
    pub fn new(options: ReconcileOptions) -> Self {
        Self { options }
    }

    /// Options this reconciler was built with.
    pub fn options(&self) -> &ReconcileOptions {
        &self.options
    }

    /// Reorder `after` to mirror `before`, see [`reconcile`].
    pub fn reconcile(&self, before: &Value, after: &Value) -> Value {
        self.reconcile_with_report(before, after).0
    }

    /// Like [`Reconciler::reconcile`], also returning counters for the pass.
    #[tracing::instrument(level = "debug", skip_all, fields(order = ?self.options.array_order))]
    pub fn reconcile_with_report(&self, before: &Value, after: &Value) -> (Value, Report) {
        let mut pass = Pass {
            options: &self.options,
            report: Report::default(),
        };
        let value = pass.value(before, after, 0);
        let report = pass.report;
        if report.truncated > 0 {
            warn!(
                truncated = report.truncated,
                max_depth = ?self.options.max_depth,
                "nesting limit reached, deeper containers keep their natural order"
            );
        }
        debug!(
            objects = report.objects,
            arrays = report.arrays,
            paired = report.paired_elements,
            unpaired = report.unpaired_elements,
            mismatches = report.shape_mismatches,
            "reconciled"
        );
        (value, report)
    }
}

/// State of a single reconciliation.
struct Pass<'a> {
    options: &'a ReconcileOptions,
    report: Report,
}

impl Pass<'_> {
    fn value(&mut self, before: &Value, after: &Value, depth: usize) -> Value {
        match after {
            _ if Shape::of(after).is_container() && self.options.exceeds_depth(depth) => {
                debug!(depth, "container below nesting limit left as is");
                self.report.truncated += 1;
                after.clone()
            }
            Value::Object(after_map) => match before {
                Value::Object(before_map) => {
                    Value::Object(self.object(before_map, after_map, depth))
                }
                _ => self.mismatch(before, after),
            },
            Value::Array(after_items) => match before {
                Value::Array(before_items) => {
                    Value::Array(self.array(before_items, after_items, depth))
                }
                _ => self.mismatch(before, after),
            },
            _ => after.clone(),
        }
    }

    fn mismatch(&mut self, before: &Value, after: &Value) -> Value {
        trace!(before = %Shape::of(before), after = %Shape::of(after), "shape mismatch");
        self.report.shape_mismatches += 1;
        after.clone()
    }

    fn object(
        &mut self,
        before: &Map<String, Value>,
        after: &Map<String, Value>,
        depth: usize,
    ) -> Map<String, Value> {
        self.report.objects += 1;
        let mut out = Map::with_capacity(after.len());
        for (key, previous) in before {
            if let Some(value) = after.get(key) {
                out.insert(key.clone(), self.value(previous, value, depth + 1));
            }
        }
        for (key, value) in after {
            if !before.contains_key(key) {
                out.insert(key.clone(), value.clone());
            }
        }
        out
    }

    fn array(&mut self, before: &[Value], after: &[Value], depth: usize) -> Vec<Value> {
        self.report.arrays += 1;
        let pairs = pair_elements(before, after);
        let mut paired = Vec::with_capacity(after.len());
        let mut unpaired = Vec::new();
        for (position, (element, pair)) in after.iter().zip(pairs).enumerate() {
            match pair {
                Some(index) => {
                    self.report.paired_elements += 1;
                    let value = self.value(&before[index], element, depth + 1);
                    paired.push((index, position, value));
                }
                None => {
                    trace!(position, "array element has no counterpart");
                    self.report.unpaired_elements += 1;
                    unpaired.push((position, element.clone()));
                }
            }
        }
        match self.options.array_order {
            ArrayOrder::Before => {
                paired.sort_unstable_by_key(|(index, _, _)| *index);
                paired
                    .into_iter()
                    .map(|(_, _, value)| value)
                    .chain(unpaired.into_iter().map(|(_, value)| value))
                    .collect()
            }
            ArrayOrder::After => {
                let mut slots: Vec<(usize, Value)> = paired
                    .into_iter()
                    .map(|(_, position, value)| (position, value))
                    .chain(unpaired)
                    .collect();
                slots.sort_unstable_by_key(|(position, _)| *position);
                slots.into_iter().map(|(_, value)| value).collect()
            }
        }
    }
}
