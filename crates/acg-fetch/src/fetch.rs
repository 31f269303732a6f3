use futures::future::try_join_all;
use reqwest::Client;
use url::Url;

use acg_core::error::ParseError;
use acg_core::parse;
use acg_core::parse::document::OpenApiDoc;

use crate::error::FetchError;

/// One acquired schema: where it came from, the raw serialized body, and the
/// parsed document.
#[derive(Debug, Clone)]
pub struct FetchedSchema {
    pub url: Url,
    /// Last path segment of the source URL; the raw copy persists under this
    /// name in the scrape variant.
    pub file_name: String,
    pub raw: String,
    pub doc: OpenApiDoc,
}

/// Parse raw URL strings, failing the run on the first invalid one.
pub fn parse_urls(raw: &[String]) -> Result<Vec<Url>, FetchError> {
    raw.iter()
        .map(|candidate| {
            Url::parse(candidate).map_err(|source| FetchError::InvalidUrl {
                url: candidate.clone(),
                source,
            })
        })
        .collect()
}

/// Fetch and parse every schema document.
///
/// All requests are issued before any is awaited, so multiple sources load
/// concurrently; the join is all-or-nothing and the first failure aborts the
/// whole run. Results come back in input order, which downstream merging
/// relies on.
pub async fn fetch_documents(
    client: &Client,
    urls: &[Url],
) -> Result<Vec<FetchedSchema>, FetchError> {
    let pending: Vec<_> = urls.iter().map(|url| fetch_one(client, url)).collect();
    try_join_all(pending).await
}

async fn fetch_one(client: &Client, url: &Url) -> Result<FetchedSchema, FetchError> {
    log::info!("fetching schema {url}");

    let response = client.get(url.clone()).send().await?.error_for_status()?;
    let raw = response.text().await?;

    let doc = parse_document(url, &raw).map_err(|source| FetchError::Parse {
        url: url.to_string(),
        source,
    })?;

    log::debug!("parsed {} with {} paths", url, doc.paths.len());

    Ok(FetchedSchema {
        file_name: file_name_of(url),
        url: url.clone(),
        raw,
        doc,
    })
}

fn parse_document(url: &Url, raw: &str) -> Result<OpenApiDoc, ParseError> {
    if url.path().ends_with(".json") {
        parse::from_json(raw)
    } else {
        parse::from_yaml(raw)
    }
}

/// The source's file name, used when persisting raw copies.
pub fn file_name_of(url: &Url) -> String {
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|name| !name.is_empty())
        .unwrap_or("schema.yml")
        .to_string()
}
