//! Wire form of an action
//!
//! Actions arrive as `{ "type": ..., "data": ..., ...fields }`. Payload
//! accessors never fail: a missing or null value decodes to the type's
//! default, and a malformed one is logged and also decodes to the default.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAction {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub data: Value,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl RawAction {
    pub fn new(kind: impl Into<String>, data: Value) -> Self {
        Self {
            kind: kind.into(),
            data,
            fields: Map::new(),
        }
    }

    /// Builder-style helper to attach a sibling field such as `postId`
    pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    /// Decode the whole `data` payload
    pub fn data<T: DeserializeOwned + Default>(&self) -> T {
        decode_or_default(&self.kind, "data", &self.data)
    }

    /// Decode one member of an object `data` payload
    pub fn data_field<T: DeserializeOwned + Default>(&self, name: &str) -> T {
        match self.data.get(name) {
            Some(value) => decode_or_default(&self.kind, name, value),
            None => T::default(),
        }
    }

    /// Decode a sibling field of `type` and `data`
    pub fn field<T: DeserializeOwned + Default>(&self, name: &str) -> T {
        match self.fields.get(name) {
            Some(value) => decode_or_default(&self.kind, name, value),
            None => T::default(),
        }
    }
}

fn decode_or_default<T: DeserializeOwned + Default>(kind: &str, what: &str, value: &Value) -> T {
    if value.is_null() {
        return T::default();
    }

    match T::deserialize(value) {
        Ok(decoded) => decoded,
        Err(e) => {
            log::warn!("{}: ignoring malformed {}: {}", kind, what, e);
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_sibling_fields() {
        let raw: RawAction = serde_json::from_value(json!({
            "type": "RECEIVED_FILES_FOR_POST",
            "data": [],
            "postId": "p1"
        }))
        .unwrap();

        assert_eq!(raw.kind, "RECEIVED_FILES_FOR_POST");
        assert_eq!(raw.field::<String>("postId"), "p1");
    }

    #[test]
    fn test_missing_data_decodes_to_default() {
        let raw: RawAction = serde_json::from_value(json!({"type": "RECEIVED_THEMES"})).unwrap();
        assert!(raw.data.is_null());
        assert!(raw.data::<Vec<String>>().is_empty());
        assert_eq!(raw.data_field::<String>("id"), "");
    }

    #[test]
    fn test_malformed_data_decodes_to_default() {
        let raw = RawAction::new("RECEIVED_THEMES", json!("not a list"));
        assert!(raw.data::<Vec<String>>().is_empty());

        let raw = RawAction::new("RECEIVED_THEMES", json!(null)).with_field("postId", 12);
        assert_eq!(raw.field::<String>("postId"), "");
    }
}
