//! Content-addressed cache keys for server-state queries.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

/// Identifies one cached query result.
///
/// Two keys are equal when they name the same operation and their
/// parameters serialize to the same canonical JSON (object keys sorted), so
/// logically identical parameter sets always share an entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey {
    operation: String,
    params: Option<String>,
}

impl QueryKey {
    /// Key for an operation without parameters
    pub fn new(operation: impl Into<String>) -> Self {
        Self { operation: operation.into(), params: None }
    }

    /// Attach parameters; they are stored as canonical JSON
    pub fn with_params<P>(mut self, params: &P) -> Self
    where
        P: Serialize + ?Sized,
    {
        let value = match serde_json::to_value(params) {
            Ok(value) => canonicalize(value),
            Err(err) => {
                tracing::warn!(
                    operation = %self.operation,
                    error = %err,
                    "unserializable query params"
                );
                Value::Null
            }
        };
        self.params = Some(value.to_string());
        self
    }

    /// Operation name, e.g. `sector_get_all`
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Canonical JSON of the parameters, if any
    pub fn params(&self) -> Option<&str> {
        self.params.as_deref()
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.params {
            Some(params) => write!(f, "{}:{params}", self.operation),
            None => f.write_str(&self.operation),
        }
    }
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let mut sorted = Map::new();
            for (key, value) in entries {
                sorted.insert(key, canonicalize(value));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn keys_with_same_params_in_any_order_are_equal() {
        let mut a = HashMap::new();
        a.insert("PageNumber", 1);
        a.insert("PageSize", 10);
        let mut b = HashMap::new();
        b.insert("PageSize", 10);
        b.insert("PageNumber", 1);

        assert_eq!(
            QueryKey::new("donor_get_all").with_params(&a),
            QueryKey::new("donor_get_all").with_params(&b)
        );
    }

    #[test]
    fn different_params_produce_different_keys() {
        let first = QueryKey::new("donor_get_all").with_params(&[1]);
        let second = QueryKey::new("donor_get_all").with_params(&[2]);
        assert_ne!(first, second);
        assert_eq!(first.operation(), second.operation());
    }

    #[test]
    fn display_includes_params() {
        let key = QueryKey::new("project_get_by_id").with_params("abc");
        assert_eq!(key.to_string(), "project_get_by_id:\"abc\"");
        assert_eq!(QueryKey::new("me").to_string(), "me");
    }
}
