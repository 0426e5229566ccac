//! Generated media model
//!
//! Artifacts (images, JSON payloads) produced by the service while
//! performing a check. Only the reference is carried here; the media content
//! itself is fetched separately by ID.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::fields;

/// A piece of media generated by a check
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct GeneratedMedia {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    media_type: Option<String>,
}

impl GeneratedMedia {
    /// Map a raw media object; never fails
    #[must_use]
    pub fn new(data: Option<&Value>) -> Self {
        let obj = fields::as_object(data);
        Self {
            id: fields::string(obj, "id"),
            media_type: fields::string(obj, "type"),
        }
    }

    /// ID of the media, used to retrieve its content
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Type of the media, e.g. `"IMAGE"` or `"JSON"`
    #[must_use]
    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }
}

impl From<Value> for GeneratedMedia {
    fn from(value: Value) -> Self {
        Self::new(Some(&value))
    }
}

impl From<&Value> for GeneratedMedia {
    fn from(value: &Value) -> Self {
        Self::new(Some(value))
    }
}
