use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ResolveError {
    /// A `post`/`put` operation declares a required request body whose JSON
    /// schema is not of object type. The generated method would have nothing
    /// sensible to accept, so the whole run aborts.
    #[error("unsupported body schema for {verb} {path}: expected object, found {found}")]
    UnsupportedBodySchema {
        path: String,
        verb: String,
        found: String,
    },

    /// The operation has no identifier to name the generated method after.
    #[error("missing operationId for {verb} {path}")]
    MissingOperationId { path: String, verb: String },
}
