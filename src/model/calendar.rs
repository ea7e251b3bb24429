use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single day from the orthocal API.
///
/// The upstream schema is loose: any key may be missing, null, or of an
/// unexpected type. The record keeps the raw object and exposes named
/// accessors that tolerate all of that instead of a rigid struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarRecord {
    fields: Map<String, Value>,
}

impl CalendarRecord {
    /// Parse a record from a raw JSON response body (no network).
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// True when the API returned an object with no keys at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn year(&self) -> Option<&Value> {
        self.fields.get("year")
    }

    pub fn month(&self) -> Option<&Value> {
        self.fields.get("month")
    }

    pub fn day(&self) -> Option<&Value> {
        self.fields.get("day")
    }

    /// First entry of `titles`, whatever its type. None when the list is absent or empty.
    pub fn first_title(&self) -> Option<&Value> {
        self.fields
            .get("titles")
            .and_then(Value::as_array)
            .and_then(|titles| titles.first())
    }

    /// Fast level code; absent, null, or non-numeric values read as 0.
    pub fn fast_level(&self) -> i64 {
        match self.fields.get("fast_level") {
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .unwrap_or(0),
            Some(Value::String(s)) => s.trim().parse::<i64>().unwrap_or(0),
            _ => 0,
        }
    }

    pub fn fast_level_desc(&self) -> Option<&str> {
        self.non_empty_str("fast_level_desc")
    }

    pub fn fast_exception_desc(&self) -> Option<&str> {
        self.non_empty_str("fast_exception_desc")
    }

    pub fn feasts(&self) -> Vec<&str> {
        self.string_list("feasts")
    }

    pub fn saints(&self) -> Vec<&str> {
        self.string_list("saints")
    }

    /// Raw reading objects; each is expected to carry a `display` string.
    pub fn readings(&self) -> &[Value] {
        self.fields
            .get("readings")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn non_empty_str(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    // Non-string entries are skipped.
    fn string_list(&self, key: &str) -> Vec<&str> {
        self.fields
            .get(key)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

