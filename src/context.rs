//! Template context loading.
//!
//! The template engine serializes the values chosen for one generation run
//! as a flat JSON object. Values are normalized to strings so validators see
//! exactly one representation:
//! - strings are kept verbatim
//! - numbers and booleans use their JSON text (`24`, `true`)
//! - `null` becomes the empty string
//! - arrays and objects are kept as compact JSON
//!
//! A document shaped `{"cookiecutter": {...}}` is unwrapped to its inner
//! object.

use crate::HookError;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// Field name → field value for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Context {
    values: BTreeMap<String, String>,
}

impl Context {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a context from a JSON file
    pub fn load(path: &Path) -> Result<Self, HookError> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                HookError::ContextNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                HookError::ContextRead {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        Self::from_json_str(&content)
    }

    /// Parse a context from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, HookError> {
        let value: Value =
            serde_json::from_str(json).map_err(|source| HookError::ContextParse { source })?;
        Self::from_json_value(value)
    }

    /// Build a context from an already-parsed JSON value
    pub fn from_json_value(value: Value) -> Result<Self, HookError> {
        let object = match value {
            Value::Object(mut object) => {
                let wrapped = object.len() == 1
                    && matches!(object.get("cookiecutter"), Some(Value::Object(_)));
                match object.remove("cookiecutter") {
                    Some(Value::Object(inner)) if wrapped => inner,
                    Some(other) => {
                        object.insert("cookiecutter".to_string(), other);
                        object
                    }
                    None => object,
                }
            }
            other => {
                return Err(HookError::ContextShape {
                    found: json_kind(&other).to_string(),
                })
            }
        };

        let values = object
            .into_iter()
            .map(|(key, value)| (key, render_value(value)))
            .collect();

        Ok(Context { values })
    }

    /// Get a field value
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Get a field value, or `default` when absent
    pub fn get_or<'a>(&'a self, field: &str, default: &'a str) -> &'a str {
        self.get(field).unwrap_or(default)
    }

    /// Check whether a field is present (even if empty)
    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate fields in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Context
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Context {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn render_value(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
