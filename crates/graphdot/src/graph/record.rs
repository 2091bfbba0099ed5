//! Data records carried by nodes and edges.
//!
//! Provides type-safe key-value storage with a builder pattern and a
//! deterministic textual form that exporters turn into labels.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Strongly-typed value for record entries.
///
/// Serializes untagged, so records look like plain JSON objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Text value (names, paths, signatures)
    Text(String),
    /// Integer value (line numbers, counts)
    Int(i64),
    /// Floating point value (metrics, scores)
    Float(f64),
    /// Boolean flag (is_public, is_async, is_test)
    Bool(bool),
    /// List of text values (symbols, tags)
    TextList(Vec<String>),
    /// List of integers (line ranges, counts)
    IntList(Vec<i64>),
    /// Explicit null/absence of value
    Null,
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(value: Vec<String>) -> Self {
        Value::TextList(value)
    }
}

impl From<Vec<i64>> for Value {
    fn from(value: Vec<i64>) -> Self {
        Value::IntList(value)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{s}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::TextList(list) => write!(f, "{}", list.join(",")),
            Value::IntList(list) => {
                let rendered: Vec<_> = list.iter().map(|i| i.to_string()).collect();
                write!(f, "{}", rendered.join(","))
            }
            Value::Null => write!(f, "null"),
        }
    }
}

/// Flexible key-value data record for nodes and edges.
///
/// Provides builder pattern and type-safe getters. The [`Display`] form
/// renders one `key: value` line per entry with keys sorted, so the same
/// record always produces the same label.
///
/// [`Display`]: std::fmt::Display
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    entries: HashMap<String, Value>,
}

impl Record {
    /// Create a new empty record.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Builder pattern: add an entry and return self.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Insert an entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Get an entry by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Remove an entry by key.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Check if an entry exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the record is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Type-safe getter for text entries.
    pub fn get_text(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(Value::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// Type-safe getter for integer entries.
    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.entries.get(key) {
            Some(Value::Int(i)) => Some(*i),
            _ => None,
        }
    }

    /// Type-safe getter for float entries.
    pub fn get_float(&self, key: &str) -> Option<f64> {
        match self.entries.get(key) {
            Some(Value::Float(x)) => Some(*x),
            _ => None,
        }
    }

    /// Type-safe getter for boolean entries.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.entries.get(key) {
            Some(Value::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    /// Type-safe getter for text list entries.
    pub fn get_text_list(&self, key: &str) -> Option<&[String]> {
        match self.entries.get(key) {
            Some(Value::TextList(list)) => Some(list),
            _ => None,
        }
    }

    /// Type-safe getter for integer list entries.
    pub fn get_int_list(&self, key: &str) -> Option<&[i64]> {
        match self.entries.get(key) {
            Some(Value::IntList(list)) => Some(list),
            _ => None,
        }
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        for (i, (key, value)) in entries.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{key}: {value}")?;
        }
        Ok(())
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            entries: HashMap::from_iter(iter),
        }
    }
}
