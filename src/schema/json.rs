//! Typed accessors over JSON content objects.
//!
//! Every field a parser reads goes through one of these helpers, so the
//! default policy is stated once per field at the call site:
//!
//! | Policy    | Helper                          | On absent / wrong JSON type        |
//! |-----------|---------------------------------|------------------------------------|
//! | required  | [`ContentExt::required_str`], [`ContentExt::required_array`] | `MissingField` error |
//! | defaulted | [`ContentExt::f64_or`], [`ContentExt::bool_or`] | the stated default      |
//! | optional  | [`ContentExt::str_field`], [`ContentExt::object_field`] | `None`          |
//!
//! Enumerated fields are read through [`crate::schema::ParseContext::enum_field`],
//! which also reports unrecognized values.

use crate::domain::{ComponentError, ComponentType, Result};
use serde_json::{Map, Value};

/// A JSON object.
pub type Content = Map<String, Value>;

/// Accessors for content objects.
pub trait ContentExt {
    /// String value of `key`, if it is a string.
    fn str_field(&self, key: &str) -> Option<&str>;

    /// First string value among `keys`, in order.
    fn first_str_field(&self, keys: &[&str]) -> Option<&str>;

    /// Numeric value of `key`; integers and floats are both accepted.
    fn f64_field(&self, key: &str) -> Option<f64>;

    /// Numeric value of `key`, or `default`.
    fn f64_or(&self, key: &str, default: f64) -> f64;

    /// Boolean value of `key`, or `default`.
    fn bool_or(&self, key: &str, default: bool) -> bool;

    /// First boolean value among `keys`, in order; non-booleans are skipped.
    fn first_bool_field(&self, keys: &[&str]) -> Option<bool>;

    /// Object value of `key`, if it is an object.
    fn object_field(&self, key: &str) -> Option<&Content>;

    /// Array value of `key`, if it is an array.
    fn array_field(&self, key: &str) -> Option<&Vec<Value>>;

    /// String value of `key`, or a `MissingField` error for `component`.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::MissingField`] carrying the raw content.
    fn required_str(&self, key: &'static str, component: ComponentType) -> Result<&str>;

    /// Array value of `key`, or a `MissingField` error for `component`.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::MissingField`] carrying the raw content.
    fn required_array(&self, key: &'static str, component: ComponentType) -> Result<&Vec<Value>>;

    /// Compact JSON rendering of the whole object, for diagnostics.
    fn raw(&self) -> String;
}

impl ContentExt for Content {
    fn str_field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    fn first_str_field(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|key| self.str_field(key))
    }

    fn f64_field(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64).filter(|v| v.is_finite())
    }

    fn f64_or(&self, key: &str, default: f64) -> f64 {
        self.f64_field(key).unwrap_or(default)
    }

    fn bool_or(&self, key: &str, default: bool) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(default)
    }

    fn first_bool_field(&self, keys: &[&str]) -> Option<bool> {
        keys.iter().find_map(|key| self.get(*key).and_then(Value::as_bool))
    }

    fn object_field(&self, key: &str) -> Option<&Content> {
        self.get(key).and_then(Value::as_object)
    }

    fn array_field(&self, key: &str) -> Option<&Vec<Value>> {
        self.get(key).and_then(Value::as_array)
    }

    fn required_str(&self, key: &'static str, component: ComponentType) -> Result<&str> {
        self.str_field(key).ok_or_else(|| missing(self, key, component))
    }

    fn required_array(&self, key: &'static str, component: ComponentType) -> Result<&Vec<Value>> {
        self.array_field(key).ok_or_else(|| missing(self, key, component))
    }

    fn raw(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "<unprintable>".to_string())
    }
}

fn missing(content: &Content, field: &'static str, component: ComponentType) -> ComponentError {
    ComponentError::MissingField {
        component,
        field,
        content: content.raw(),
    }
}

/// Compact JSON rendering of any value, for diagnostics.
pub(crate) fn raw_value(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "<unprintable>".to_string())
}
