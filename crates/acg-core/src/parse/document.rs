use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::operation::PathItem;

/// Info object describing the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Top-level OpenAPI document, reduced to the parts synthesis consumes.
///
/// Anything else in the document (components, tags, servers, responses) is
/// ignored on purpose: the generator only walks `paths`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenApiDoc {
    /// Version marker; some Swagger-era documents omit it entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openapi: Option<String>,

    pub info: Info,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub paths: IndexMap<String, PathItem>,
}
