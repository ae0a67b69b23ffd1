use std::fmt;

use serde_json::Value;

/// Coarse type family of a JSON value.
///
/// Two values are comparable for ordering purposes only when they share a
/// shape. Every primitive type is its own family: a number never pairs with a
/// string, and `null` only pairs with `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl Shape {
    /// Classify `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use json_order_equal::Shape;
    ///
    /// assert_eq!(Shape::of(&json!({"a": 1})), Shape::Object);
    /// assert_eq!(Shape::of(&json!(null)), Shape::Null);
    /// ```
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Shape::Null,
            Value::Bool(_) => Shape::Bool,
            Value::Number(_) => Shape::Number,
            Value::String(_) => Shape::String,
            Value::Array(_) => Shape::Array,
            Value::Object(_) => Shape::Object,
        }
    }

    /// Whether both values belong to the same family.
    pub fn same(a: &Value, b: &Value) -> bool {
        Shape::of(a) == Shape::of(b)
    }

    /// Arrays and objects.
    pub fn is_container(self) -> bool {
        matches!(self, Shape::Array | Shape::Object)
    }

    /// JSON type name, as printed by `Display`.
    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Null => "null",
            Shape::Bool => "boolean",
            Shape::Number => "number",
            Shape::String => "string",
            Shape::Array => "array",
            Shape::Object => "object",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
