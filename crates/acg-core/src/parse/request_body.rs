use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::schema::Schema;

/// A media type entry under a request body's `content` map.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MediaType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

/// A request body definition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub content: IndexMap<String, MediaType>,

    #[serde(default)]
    pub required: bool,
}

impl RequestBody {
    /// The schema of the JSON content entry, if declared.
    pub fn json_schema(&self) -> Option<&Schema> {
        self.content
            .get("application/json")
            .and_then(|mt| mt.schema.as_ref())
    }
}
