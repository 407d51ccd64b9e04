//! Render payloads
//!
//! A payload maps keys to either scalars (substituted into `{{ key }}`
//! markers) or ordered lists of flat records (bound to `{{ key.field }}`
//! markers). Key order is the order of the source document and drives the
//! order in which tables are expanded.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sheet_stencil_core::CellValue;

use crate::error::{RenderError, RenderResult};

/// A single record of a table: field name to scalar
pub type Record = Map<String, Value>;

/// Data rendered into a template
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(Map<String, Value>);

/// A payload entry, classified
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PayloadValue<'a> {
    /// Anything that is not a list
    Scalar(&'a Value),
    /// A list, bound to the table of the same name
    Records(&'a [Value]),
}

impl Payload {
    /// Create an empty payload
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a payload from JSON text
    ///
    /// The root must be a JSON object.
    ///
    /// ```
    /// use sheet_stencil_template::Payload;
    ///
    /// let payload = Payload::from_json_str(r#"{"title": "Q3", "items": []}"#).unwrap();
    /// assert_eq!(payload.len(), 2);
    /// assert!(Payload::from_json_str("[1, 2]").is_err());
    /// ```
    pub fn from_json_str(json: &str) -> RenderResult<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| RenderError::validation(format!("payload is not valid JSON: {}", e)))?;
        Self::from_value(value)
    }

    /// Build a payload from a JSON value whose root is an object
    pub fn from_value(value: Value) -> RenderResult<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Err(RenderError::validation("payload is missing")),
            other => Err(RenderError::validation(format!(
                "payload must be a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Build a payload from any serializable value (typically a struct or map)
    pub fn from_serializable<T: Serialize + ?Sized>(data: &T) -> RenderResult<Self> {
        let value = serde_json::to_value(data).map_err(|e| {
            RenderError::validation(format!("payload could not be serialized: {}", e))
        })?;
        Self::from_value(value)
    }

    /// Insert or replace an entry
    pub fn insert<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the payload has no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reject payloads that cannot be rendered
    pub fn validate(&self) -> RenderResult<()> {
        if self.is_empty() {
            return Err(RenderError::validation("payload is empty"));
        }
        Ok(())
    }

    /// Look up an entry
    pub fn get(&self, key: &str) -> Option<PayloadValue<'_>> {
        self.0.get(key).map(PayloadValue::classify)
    }

    /// Iterate over entries in payload order
    pub fn iter(&self) -> impl Iterator<Item = (&str, PayloadValue<'_>)> {
        self.0
            .iter()
            .map(|(key, value)| (key.as_str(), PayloadValue::classify(value)))
    }

    /// Iterate over the non-empty lists in payload order
    pub fn tables(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.iter().filter_map(|(key, value)| match value {
            PayloadValue::Records(records) if !records.is_empty() => Some((key, records)),
            _ => None,
        })
    }

    /// The text a `{{ key }}` marker is replaced with
    ///
    /// `None` when the key is absent or holds a list.
    pub fn scalar_text(&self, key: &str) -> Option<Cow<'_, str>> {
        match self.get(key)? {
            PayloadValue::Scalar(value) => Some(scalar_to_text(value)),
            PayloadValue::Records(_) => None,
        }
    }

    /// Borrow the underlying map
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Payload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'a> PayloadValue<'a> {
    fn classify(value: &'a Value) -> Self {
        match value {
            Value::Array(items) => PayloadValue::Records(items),
            other => PayloadValue::Scalar(other),
        }
    }
}

/// String form of a scalar payload value
///
/// Strings are used verbatim, `null` becomes the empty string and everything
/// else uses its compact JSON form (`1`, `2.5`, `true`).
pub fn scalar_to_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        Value::Null => Cow::Borrowed(""),
        other => Cow::Owned(other.to_string()),
    }
}

/// Cell value written for a record field
pub fn cell_value_from_json(value: &Value) -> CellValue {
    match value {
        Value::Null => CellValue::Empty,
        Value::Bool(b) => CellValue::Boolean(*b),
        Value::Number(n) => match n.as_f64() {
            Some(f) => CellValue::Number(f),
            None => CellValue::Text(n.to_string()),
        },
        Value::String(s) => CellValue::Text(s.clone()),
        nested @ (Value::Array(_) | Value::Object(_)) => CellValue::Text(nested.to_string()),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_str_rejects_non_objects() {
        assert!(matches!(
            Payload::from_json_str("null"),
            Err(RenderError::Validation(_))
        ));
        assert!(matches!(
            Payload::from_json_str("\"text\""),
            Err(RenderError::Validation(_))
        ));
        assert!(matches!(
            Payload::from_json_str("{not json"),
            Err(RenderError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty() {
        let payload = Payload::from_json_str("{}").unwrap();
        assert!(matches!(payload.validate(), Err(RenderError::Validation(_))));

        let payload = Payload::from_json_str(r#"{"a": 1}"#).unwrap();
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_key_order_is_preserved() {
        let payload = Payload::from_json_str(r#"{"zeta": [{}], "alpha": [{}], "mid": 1}"#).unwrap();
        let keys: Vec<_> = payload.tables().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_tables_skip_empty_lists_and_scalars() {
        let payload = Payload::from_value(json!({
            "title": "x",
            "empty": [],
            "rows": [{"a": 1}],
        }))
        .unwrap();

        let tables: Vec<_> = payload.tables().map(|(k, r)| (k, r.len())).collect();
        assert_eq!(tables, vec![("rows", 1)]);
    }

    #[test]
    fn test_scalar_text() {
        let payload = Payload::from_value(json!({
            "name": "Ada",
            "count": 3,
            "ratio": 2.5,
            "flag": true,
            "nothing": null,
            "list": [1, 2],
        }))
        .unwrap();

        assert_eq!(payload.scalar_text("name").as_deref(), Some("Ada"));
        assert_eq!(payload.scalar_text("count").as_deref(), Some("3"));
        assert_eq!(payload.scalar_text("ratio").as_deref(), Some("2.5"));
        assert_eq!(payload.scalar_text("flag").as_deref(), Some("true"));
        assert_eq!(payload.scalar_text("nothing").as_deref(), Some(""));
        assert_eq!(payload.scalar_text("list"), None);
        assert_eq!(payload.scalar_text("missing"), None);
    }

    #[test]
    fn test_from_serializable_struct() {
        #[derive(Serialize)]
        struct Statement {
            holder: String,
            balance: f64,
        }

        let payload = Payload::from_serializable(&Statement {
            holder: "Jane".into(),
            balance: 10.5,
        })
        .unwrap();

        assert_eq!(payload.scalar_text("holder").as_deref(), Some("Jane"));
        assert_eq!(
            payload.get("balance"),
            Some(PayloadValue::Scalar(&json!(10.5)))
        );
        assert!(Payload::from_serializable(&vec![1, 2]).is_err());
    }

    #[test]
    fn test_cell_value_from_json() {
        assert_eq!(cell_value_from_json(&json!("A")), CellValue::text("A"));
        assert_eq!(cell_value_from_json(&json!(2)), CellValue::Number(2.0));
        assert_eq!(cell_value_from_json(&json!(false)), CellValue::Boolean(false));
        assert_eq!(cell_value_from_json(&json!(null)), CellValue::Empty);
        assert_eq!(
            cell_value_from_json(&json!({"k": 1})),
            CellValue::text(r#"{"k":1}"#)
        );
    }
}
