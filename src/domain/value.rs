use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw value held by a field: text for text-like controls, a number for
/// numeric ones, `Null` when nothing has been entered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Null,
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// `Null` and the empty string count as empty.
    ///
    /// `Number(0.0)` is an entered value: it satisfies `required` and wins over
    /// the placeholder when a form is seeded, unlike a falsy-value check.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::Number(_) => false,
        }
    }

    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Text(text) => text.clone(),
            FieldValue::Number(num) => format_number(*num),
        }
    }

    /// Length used by the min/max rules: characters of the string form.
    pub fn char_len(&self) -> usize {
        match self {
            FieldValue::Text(text) => text.chars().count(),
            other => other.as_text().chars().count(),
        }
    }

    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => FieldValue::Null,
            Value::String(text) => FieldValue::Text(text.clone()),
            Value::Number(num) => num
                .as_f64()
                .map(FieldValue::Number)
                .unwrap_or_else(|| FieldValue::Text(num.to_string())),
            Value::Bool(flag) => FieldValue::Text(flag.to_string()),
            other => FieldValue::Text(other.to_string()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

pub(crate) fn format_number(num: f64) -> String {
    if num.fract() == 0.0 && num.abs() < 1e15 {
        format!("{}", num as i64)
    } else {
        num.to_string()
    }
}
