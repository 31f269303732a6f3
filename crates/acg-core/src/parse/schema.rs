use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A JSON Schema type keyword value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
    Null,
}

impl SchemaType {
    /// The raw keyword, as it appears in generated documentation lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaType::String => "string",
            SchemaType::Number => "number",
            SchemaType::Integer => "integer",
            SchemaType::Boolean => "boolean",
            SchemaType::Array => "array",
            SchemaType::Object => "object",
            SchemaType::Null => "null",
        }
    }
}

/// A JSON Schema object, reduced to what parameter documentation and the
/// body-type check consume: the `type` keyword, a description, and one level
/// of named properties for object schemas.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Schema>,
}

impl Schema {
    pub fn is_object(&self) -> bool {
        self.schema_type == Some(SchemaType::Object)
    }

    /// The type keyword for documentation purposes; untyped schemas document
    /// as `object`, matching the generated client's convention.
    pub fn type_keyword(&self) -> &'static str {
        self.schema_type.map(|t| t.as_str()).unwrap_or("object")
    }
}
