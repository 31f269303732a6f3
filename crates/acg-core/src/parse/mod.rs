pub mod document;
pub mod operation;
pub mod parameter;
pub mod request_body;
pub mod schema;

use crate::error::ParseError;
use document::OpenApiDoc;

/// Parse an OpenAPI document from YAML.
pub fn from_yaml(input: &str) -> Result<OpenApiDoc, ParseError> {
    let doc: OpenApiDoc = serde_yaml_ng::from_str(input)?;
    Ok(doc)
}

/// Parse an OpenAPI document from JSON.
pub fn from_json(input: &str) -> Result<OpenApiDoc, ParseError> {
    let doc: OpenApiDoc = serde_json::from_str(input)?;
    Ok(doc)
}
