use crate::SchemaError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Open key/value payload (`recommended_supplies`, agent `action`, `evidence`).
///
/// Decoding only guarantees a JSON object. Callers that expect flat
/// quantities use [`OpenMap::require_scalars`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpenMap(BTreeMap<String, Value>);

impl OpenMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn require_scalars(&self, field: &'static str) -> Result<(), SchemaError> {
        for (key, value) in &self.0 {
            if !matches!(value, Value::Number(_) | Value::String(_)) {
                return Err(SchemaError::NotScalar {
                    field,
                    key: key.clone(),
                });
            }
        }
        Ok(())
    }
}

impl FromIterator<(String, Value)> for OpenMap {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Render a payload value for display; strings lose their JSON quotes.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_supplies_pass_scalar_check() {
        let map: OpenMap =
            serde_json::from_str(r#"{"beds": 12, "oxygen_liters": 600, "notes": "rotate"}"#)
                .expect("decode");
        assert!(map.require_scalars("recommended_supplies").is_ok());
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn nested_value_is_rejected() {
        let map: OpenMap = serde_json::from_str(r#"{"beds": {"count": 3}}"#).expect("decode");
        assert_eq!(
            map.require_scalars("recommended_supplies"),
            Err(SchemaError::NotScalar {
                field: "recommended_supplies",
                key: "beds".into()
            })
        );
    }

    #[test]
    fn non_object_payload_does_not_decode() {
        assert!(serde_json::from_str::<OpenMap>("[1, 2]").is_err());
    }

    #[test]
    fn display_value_drops_string_quotes() {
        assert_eq!(display_value(&Value::from("masks")), "masks");
        assert_eq!(display_value(&Value::from(40)), "40");
    }
}
