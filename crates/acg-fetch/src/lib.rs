pub mod error;
pub mod fetch;
pub mod persist;
pub mod scrape;

pub use error::FetchError;
pub use fetch::{FetchedSchema, fetch_documents, parse_urls};
pub use persist::save_raw_documents;
pub use scrape::discover_schema_urls;

/// Build the HTTP client used for every schema and page fetch.
///
/// No timeout and no retry: a hanging or failing source is a fatal condition
/// for the whole run, not something to recover from.
pub fn http_client() -> Result<reqwest::Client, FetchError> {
    reqwest::Client::builder()
        .user_agent(concat!("acg/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(FetchError::Http)
}
