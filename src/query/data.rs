use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Value stored under a query key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    /// The key appeared once
    Single(String),
    /// The key repeated; values keep their input order
    Multiple(Vec<String>),
}

impl QueryValue {
    /// The value when the key appeared exactly once
    pub fn as_single(&self) -> Option<&str> {
        match self {
            QueryValue::Single(value) => Some(value),
            QueryValue::Multiple(_) => None,
        }
    }

    /// All values, whether the key repeated or not
    pub fn as_slice(&self) -> &[String] {
        match self {
            QueryValue::Single(value) => std::slice::from_ref(value),
            QueryValue::Multiple(values) => values,
        }
    }

    fn push(&mut self, value: String) {
        match self {
            QueryValue::Single(first) => {
                let first = std::mem::take(first);
                *self = QueryValue::Multiple(vec![first, value]);
            }
            QueryValue::Multiple(values) => values.push(value),
        }
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Single(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Single(value.to_string())
    }
}

impl<S: Into<String>> From<Vec<S>> for QueryValue {
    fn from(values: Vec<S>) -> Self {
        QueryValue::Multiple(values.into_iter().map(Into::into).collect())
    }
}

/// Query keys mapped to their values
///
/// Keys are unique. Iteration follows insertion order so that
/// [`stringify`](super::stringify) output is stable.
///
/// Lookups scan the entries linearly, so filling it is quadratic in the
/// number of distinct keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryData {
    entries: Vec<(String, QueryValue)>,
}

impl QueryData {
    /// Creates an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no key is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value stored under `key`, if any
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// True when `key` is stored
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Sets `key` to `value`, returning the value it replaced
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Option<QueryValue> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Adds one more value under `key`, turning a single value into a list
    /// on the second occurrence
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => existing.push(value),
            None => self.entries.push((key, QueryValue::Single(value))),
        }
    }

    /// Removes `key`, returning its value
    pub fn remove(&mut self, key: &str) -> Option<QueryValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Key/value pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for QueryData
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = QueryData::new();
        for (key, value) in iter {
            data.insert(key, value);
        }
        data
    }
}

impl<'a> IntoIterator for &'a QueryData {
    type Item = (&'a str, &'a QueryValue);
    type IntoIter = Box<dyn Iterator<Item = Self::Item> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl Serialize for QueryData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct QueryDataVisitor;

impl<'de> Visitor<'de> for QueryDataVisitor {
    type Value = QueryData;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of strings or string arrays")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<QueryData, A::Error> {
        let mut data = QueryData::new();
        while let Some((key, value)) = access.next_entry::<String, QueryValue>()? {
            data.insert(key, value);
        }
        Ok(data)
    }
}

impl<'de> Deserialize<'de> for QueryData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(QueryDataVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_promotes_to_list() {
        let mut data = QueryData::new();
        data.append("k", "1");
        assert_eq!(data.get("k"), Some(&QueryValue::from("1")));
        data.append("k", "2");
        data.append("k", "3");
        assert_eq!(data.get("k"), Some(&QueryValue::from(vec!["1", "2", "3"])));
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn test_insert_replaces() {
        let mut data = QueryData::new();
        assert!(data.insert("k", "1").is_none());
        assert_eq!(data.insert("k", "2"), Some(QueryValue::from("1")));
        assert_eq!(data.remove("k"), Some(QueryValue::from("2")));
        assert!(!data.contains_key("k"));
    }

    #[test]
    fn test_json_keeps_order_and_shape() {
        let json = r#"{"z":"1","a":["x","y"]}"#;
        let data: QueryData = serde_json::from_str(json).unwrap();
        assert_eq!(data.keys().collect::<Vec<_>>(), vec!["z", "a"]);
        assert_eq!(serde_json::to_string(&data).unwrap(), json);
    }
}
