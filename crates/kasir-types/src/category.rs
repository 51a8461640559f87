//! Category types

use crate::de::null_as_default;
use crate::RecordId;
use serde::{Deserialize, Serialize};

/// A product category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: RecordId,
    pub name: String,
    pub description: String,
}

impl Category {
    pub fn new(id: RecordId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn from_payload(id: RecordId, payload: CategoryPayload) -> Self {
        Self {
            id,
            name: payload.name,
            description: payload.description,
        }
    }
}

/// Create/replace request body (missing or `null` fields default to empty strings)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

impl CategoryPayload {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}
