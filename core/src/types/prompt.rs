use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A stored prompt record.
///
/// Only `id` is guaranteed to be present; the metadata fields are whatever
/// the client submitted. Unknown keys are kept in `extra` and written back
/// to the database document unchanged, so the record shape stays open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technique_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_technique: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Prompt {
    /// Builds a record from client-submitted fields and a server-assigned id.
    /// An `id` key in `fields` is discarded: identifiers are never client
    /// controlled.
    pub fn from_fields(
        id: String,
        mut fields: Map<String, Value>,
    ) -> Result<Self, serde_json::Error> {
        fields.insert("id".to_string(), Value::String(id));
        serde_json::from_value(Value::Object(fields))
    }

    /// Returns this record with every key in `patch` overwriting the current
    /// value and all other keys unchanged. `id` is immutable and ignored in
    /// the patch.
    pub fn merged_with(&self, patch: &Map<String, Value>) -> Result<Self, serde_json::Error> {
        let mut fields = match serde_json::to_value(self)? {
            Value::Object(fields) => fields,
            _ => Map::new(),
        };

        for (key, value) in patch {
            if key == "id" {
                continue;
            }
            fields.insert(key.clone(), value.clone());
        }

        serde_json::from_value(Value::Object(fields))
    }
}
