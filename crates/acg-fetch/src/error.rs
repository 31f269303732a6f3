use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid url {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to parse schema from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: acg_core::error::ParseError,
    },

    #[error("no schema link found on {page}")]
    NoSchemaLink { page: String },

    #[error("failed to persist schema {path}: {source}")]
    Persist {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
