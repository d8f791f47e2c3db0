//! Options map model
//!
//! An insertion-ordered mapping from option keys to values, plus the
//! positional arguments carried under the `_` key.

pub mod value;

pub use value::OptionValue;

use crate::error::FlaglineError;
use anyhow::{Context as _, Result};
use serde_json::{Map, Value};

/// Key that carries positional arguments
pub const POSITIONALS_KEY: &str = "_";

/// Ordered options for one invocation
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OptionsMap {
    positionals: Vec<String>,
    entries: Vec<(String, OptionValue)>,
}

impl OptionsMap {
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self {
            positionals: Vec::new(),
            entries: Vec::new(),
        }
    }

    /// Insert a key/value pair
    ///
    /// The `_` key sets the positional arguments instead: a list yields one
    /// positional per element, null yields none, any other value a single
    /// positional. An
    /// existing key keeps its position and takes the new value.
    #[inline]
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<OptionValue>,
    {
        let key = key.into();
        let value = value.into();

        if key == POSITIONALS_KEY {
            self.positionals = match value {
                OptionValue::List(items) => items.iter().map(ToString::to_string).collect(),
                OptionValue::Null => Vec::new(),
                other => vec![other.to_string()],
            };
            return;
        }

        if let Some(slot) = self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Insert a key/value pair (builder pattern)
    #[must_use]
    #[inline]
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<OptionValue>,
    {
        self.insert(key, value);
        self
    }

    /// Replace the positional arguments (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_positionals<I, S>(mut self, positionals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.positionals = positionals.into_iter().map(Into::into).collect();
        self
    }

    /// Positional arguments, in order
    #[must_use]
    #[inline]
    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }

    /// Key/value pairs in insertion order, without the `_` key
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    #[must_use]
    #[inline]
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build from a JSON object, keeping the object's key order
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a JSON object
    #[inline]
    pub fn from_json_value(value: Value) -> Result<Self, FlaglineError> {
        match value {
            Value::Object(object) => Ok(Self::from(object)),
            other => Err(FlaglineError::options(format!(
                "Options must be a JSON object, got: {other}"
            ))),
        }
    }

    /// Parse a JSON object such as `{"_": ["src"], "dryRun": true}`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The text is not valid JSON
    /// - The JSON value is not an object
    #[inline]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| FlaglineError::options(format!("Invalid options JSON: {e}")))?;
        Self::from_json_value(value).context("Failed to read options")
    }
}

impl From<Map<String, Value>> for OptionsMap {
    fn from(object: Map<String, Value>) -> Self {
        object
            .into_iter()
            .fold(Self::new(), |map, (key, value)| map.with(key, value))
    }
}

impl<K, V> FromIterator<(K, V)> for OptionsMap
where
    K: Into<String>,
    V: Into<OptionValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "These are unit tests")]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn insert_keeps_first_position() {
        let map = OptionsMap::new()
            .with("mode", "development")
            .with("watch", true)
            .with("mode", "production");

        let keys: Vec<&str> = map.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["mode", "watch"]);
        assert_eq!(map.get("mode"), Some(&OptionValue::from("production")));
    }

    #[test]
    fn underscore_key_sets_positionals() {
        let map = OptionsMap::new()
            .with("_", vec!["project1", "project2"])
            .with("env", "staging");

        assert_eq!(map.positionals(), ["project1", "project2"]);
        assert_eq!(map.len(), 1);
        assert!(map.get("_").is_none());
    }

    #[test]
    fn scalar_underscore_is_single_positional() {
        let map = OptionsMap::new().with("_", "src/index.js");
        assert_eq!(map.positionals(), ["src/index.js"]);
    }

    #[test]
    fn null_underscore_means_no_positionals() {
        let map = OptionsMap::new()
            .with("_", vec!["stale"])
            .with("_", OptionValue::Null);
        assert!(map.positionals().is_empty());

        let map = OptionsMap::from_json_str(r#"{"_": null, "includeAuthor": true}"#).unwrap();
        assert!(map.positionals().is_empty());
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn json_object_order_is_preserved() {
        let map = OptionsMap::from_json_str(
            r#"{"zeta": "1", "_": ["entry"], "alpha": true, "middle": 3}"#,
        )
        .unwrap();

        let keys: Vec<&str> = map.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["zeta", "alpha", "middle"]);
        assert_eq!(map.positionals(), ["entry"]);
    }

    #[test]
    fn json_non_object_is_rejected() {
        let err = OptionsMap::from_json_value(json!(["a", "b"])).unwrap_err();
        assert_eq!(err.exit_code(), 2);

        let err = OptionsMap::from_json_str("{not json").unwrap_err();
        assert!(err.to_string().contains("Invalid options JSON"));
    }

    #[test]
    fn collects_from_pairs() {
        let map: OptionsMap = [("dryRun", true), ("force", false)].into_iter().collect();
        assert_eq!(map.len(), 2);
        assert!(!map.is_empty());
    }
}
