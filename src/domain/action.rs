//! Opaque interaction payloads.
//!
//! Buttons and list items carry an action describing what happens when the
//! user taps them (deep link, API call, navigation). Executing actions is the
//! interaction layer's job; this crate stores the payload and forwards it
//! untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An unopened action payload.
///
/// Equality is structural on the raw JSON, so re-parsing the same payload
/// yields an equal action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Action(Value);

impl Action {
    /// Wraps a raw JSON payload. `null` is not an action.
    ///
    /// # Examples
    ///
    /// ```
    /// use component_kit::domain::Action;
    /// use serde_json::json;
    ///
    /// let action = Action::from_json(&json!({"type": "LINK", "content": {}})).unwrap();
    /// assert_eq!(action.action_type(), Some("LINK"));
    /// assert!(Action::from_json(&serde_json::Value::Null).is_none());
    /// ```
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        if value.is_null() {
            None
        } else {
            Some(Self(value.clone()))
        }
    }

    /// The raw payload, exactly as received.
    #[must_use]
    pub const fn raw(&self) -> &Value {
        &self.0
    }

    /// The payload's `type` string, if present. Used for diagnostics only.
    #[must_use]
    pub fn action_type(&self) -> Option<&str> {
        self.0.get("type").and_then(Value::as_str)
    }

    /// Consumes the action, returning the payload for the interaction layer.
    #[must_use]
    pub fn into_raw(self) -> Value {
        self.0
    }
}
