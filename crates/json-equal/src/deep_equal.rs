use serde_json::Value;

/// Deep equality under the JSON data model.
///
/// Primitives compare by value, arrays element by element, and objects key by
/// key regardless of the order their entries were inserted in.
///
/// Integers and floats are distinct `serde_json::Number` representations, so
/// `0` and `0.0` are not equal.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use json_order_equal::deep_equal;
///
/// assert!(deep_equal(&json!({"a": 1, "b": 2}), &json!({"b": 2, "a": 1})));
/// assert!(!deep_equal(&json!([1, 2]), &json!([2, 1])));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| deep_equal(a, b))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, a)| b.get(key).is_some_and(|b| deep_equal(a, b)))
        }
        _ => false,
    }
}

/// Deep equality that also requires object entries in the same order.
///
/// Two values are `ordered_equal` exactly when they pretty-print to the same
/// text. Floats therefore compare by bit pattern: `-0.0` and `0.0` are
/// `deep_equal` but not `ordered_equal`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use json_order_equal::ordered_equal;
///
/// assert!(ordered_equal(&json!({"a": 1, "b": 2}), &json!({"a": 1, "b": 2})));
/// ```
pub fn ordered_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) if a.is_f64() && b.is_f64() => {
            a.as_f64().map(f64::to_bits) == b.as_f64().map(f64::to_bits)
        }
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| ordered_equal(a, b))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .zip(b)
                    .all(|((ka, va), (kb, vb))| ka == kb && ordered_equal(va, vb))
        }
        _ => deep_equal(a, b),
    }
}
