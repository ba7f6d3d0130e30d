//! Loosely-typed JSON records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One JSON object, keys not yet resolved to any schema.
///
/// The typed accessors return `None` both for a missing key and for a value of
/// the wrong JSON type; use [`RawRecord::contains_key`] to tell them apart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(Map<String, Value>);

impl RawRecord {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Key is present, whatever its value.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// String value for a key.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Integral value for a key.
    ///
    /// Accepts JSON integers in the `i64` range and floats without a
    /// fractional part (`7.0`). Rejects `7.5`, numeric strings, booleans and
    /// `null`.
    #[must_use]
    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            Value::Number(number) => integral(number),
            _ => None,
        }
    }

    /// Inserts a value, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Record has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Consume into the underlying JSON map.
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for RawRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

// i64::MAX is not representable as f64, hence the exclusive upper bound on 2^63
#[allow(
    clippy::float_cmp,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
fn integral(number: &serde_json::Number) -> Option<i64> {
    if let Some(int) = number.as_i64() {
        return Some(int);
    }
    if !number.is_f64() {
        return None;
    }
    let float = number.as_f64()?;
    let in_range = float >= i64::MIN as f64 && float < i64::MAX as f64;
    (in_range && float.trunc() == float).then_some(float as i64)
}

#[cfg(test)]
mod tests {
    use assert2::check;
    use serde_json::json;

    use super::*;

    fn record(value: Value) -> RawRecord {
        serde_json::from_value(value).expect("object")
    }

    #[test]
    fn get_str() {
        let rec = record(json!({"name": "Ana", "id": 1, "nothing": null}));
        check!(rec.get_str("name") == Some("Ana"));
        check!(rec.get_str("id").is_none());
        check!(rec.get_str("nothing").is_none());
        check!(rec.get_str("missing").is_none());
    }

    #[test]
    fn get_int_accepts_integral_numbers() {
        let rec = record(json!({"a": 7, "b": -3, "c": 7.0, "d": 0, "e": -0.0}));
        check!(rec.get_int("a") == Some(7));
        check!(rec.get_int("b") == Some(-3));
        check!(rec.get_int("c") == Some(7));
        check!(rec.get_int("d") == Some(0));
        check!(rec.get_int("e") == Some(0));
    }

    #[test]
    fn get_int_rejects_everything_else() {
        let rec = record(json!({
            "fraction": 7.5,
            "text": "7",
            "flag": true,
            "nothing": null,
            "list": [7],
            "object": {"value": 7},
            "huge": u64::MAX,
            "huge_float": 1.0e19,
        }));
        let keys = [
            "fraction",
            "text",
            "flag",
            "nothing",
            "list",
            "object",
            "huge",
            "huge_float",
            "missing",
        ];
        for key in keys {
            check!(rec.get_int(key).is_none(), "key {key}");
        }
    }

    #[test]
    fn get_int_bounds() {
        let rec = record(json!({"min": i64::MIN, "max": i64::MAX}));
        check!(rec.get_int("min") == Some(i64::MIN));
        check!(rec.get_int("max") == Some(i64::MAX));
    }

    #[test]
    fn contains_key_tells_missing_from_mismatch() {
        let rec = record(json!({"id": "one"}));
        check!(rec.contains_key("id"));
        check!(rec.get_int("id").is_none());
        check!(!rec.contains_key("other"));
    }

    #[test]
    fn build_and_inspect() {
        let mut rec = RawRecord::new();
        check!(rec.is_empty());
        check!(rec.insert("id", 3).is_none());
        check!(rec.insert("id", 4) == Some(json!(3)));
        rec.insert("tags", json!(["a", {"nested": [1, 2]}]));
        check!(rec.len() == 2);
        check!(rec.keys().collect::<Vec<_>>() == vec!["id", "tags"]);

        let from_iter: RawRecord = [("id", json!(4))].into_iter().collect();
        check!(from_iter.get_int("id") == Some(4));
        check!(from_iter.into_inner().len() == 1);
    }
}
