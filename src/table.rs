//! Read-only view over a compiled long/short form table.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};
use serde_json::{
    Map,
    Value,
};

/// Which of the two tables a locale carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TableStyle {
    Long,
    Short,
}

impl TableStyle {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Long => "long",
            Self::Short => "short",
        }
    }

    /// Artifact file name (e.g. `long.json`).
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.json", self.as_str())
    }

    /// Human readable resource name used in error reports.
    #[must_use]
    pub fn resource_name(self) -> String {
        format!("{} table", self.as_str())
    }
}

impl fmt::Display for TableStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Table contents are whatever the table compiler produced; only the
/// top level is required to be a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Table(Map<String, Value>);

impl Table {
    #[must_use]
    pub const fn new(entries: Map<String, Value>) -> Self {
        Self(entries)
    }

    /// Parse a table from JSON text.
    ///
    /// # Errors
    /// Invalid JSON, or a top-level value that is not an object.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Nested lookup by a separated key path.
    ///
    /// # Examples
    /// ```
    /// use haw_locale::Table;
    ///
    /// let table = Table::from_json_str(r#"{"day": {"past": "-{0} d"}}"#).unwrap();
    /// assert_eq!(table.lookup("day.past", ".").and_then(|v| v.as_str()), Some("-{0} d"));
    /// assert!(table.lookup("day.future", ".").is_none());
    /// ```
    #[must_use]
    pub fn lookup(&self, path: &str, separator: &str) -> Option<&Value> {
        let mut segments = path.split(separator);
        let mut current = self.0.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Every leaf of the table keyed by its joined path.
    #[must_use]
    pub fn flatten(&self, separator: &str) -> HashMap<String, String> {
        let mut result = HashMap::new();
        for (key, value) in &self.0 {
            flatten_value(value, separator, key, &mut result);
        }
        result
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl FromStr for Table {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json_str(s)
    }
}

impl From<Map<String, Value>> for Table {
    fn from(entries: Map<String, Value>) -> Self {
        Self(entries)
    }
}

fn flatten_value(
    value: &Value,
    separator: &str,
    prefix: &str,
    result: &mut HashMap<String, String>,
) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten_value(child, separator, &format!("{prefix}{separator}{key}"), result);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten_value(child, separator, &format!("{prefix}[{index}]"), result);
            }
        }
        Value::String(s) => {
            result.insert(prefix.to_string(), s.clone());
        }
        _ => {
            result.insert(prefix.to_string(), value.to_string());
        }
    }
}
