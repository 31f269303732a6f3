use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use crate::error::FetchError;

/// Shape of the schema links embedded in the documentation pages: a
/// `/static/` prefix, a hex content token, then the schema file name.
static SCHEMA_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/static/[0-9a-f]{16,64}/[A-Za-z0-9][A-Za-z0-9._-]*\.(?:ya?ml|json)")
        .expect("pattern is valid")
});

/// Locate schema documents linked from documentation pages.
///
/// Pages are scanned in input order and each page's links keep their
/// discovery order, so the caller's merge order is deterministic. A page
/// without a single matching link is fatal.
pub async fn discover_schema_urls(
    client: &Client,
    pages: &[Url],
) -> Result<Vec<Url>, FetchError> {
    let mut discovered: Vec<Url> = Vec::new();

    for page in pages {
        let links = scan_page(client, page).await?;
        if links.is_empty() {
            return Err(FetchError::NoSchemaLink {
                page: page.to_string(),
            });
        }
        for link in links {
            if !discovered.contains(&link) {
                discovered.push(link);
            }
        }
    }

    Ok(discovered)
}

async fn scan_page(client: &Client, page: &Url) -> Result<Vec<Url>, FetchError> {
    log::info!("scanning {page} for schema links");

    let body = client
        .get(page.clone())
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    let mut urls: Vec<Url> = Vec::new();
    for fragment in link_fragments(&body) {
        let url = page
            .join(&fragment)
            .map_err(|source| FetchError::InvalidUrl {
                url: fragment.clone(),
                source,
            })?;
        if !urls.contains(&url) {
            urls.push(url);
        }
    }

    log::debug!("found {} schema link(s) on {page}", urls.len());
    Ok(urls)
}

/// Candidate link fragments: anchor/link `href` attributes first, then a raw
/// scan of the whole body. Documentation sites embed the schema URLs inside
/// script bundles, not only inside markup.
fn link_fragments(body: &str) -> Vec<String> {
    let mut fragments: Vec<String> = Vec::new();

    let document = Html::parse_document(body);
    let selector = Selector::parse("a[href], link[href]").expect("selector is valid");
    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href")
            && let Some(found) = SCHEMA_LINK.find(href)
        {
            push_unique(&mut fragments, found.as_str());
        }
    }

    for found in SCHEMA_LINK.find_iter(body) {
        push_unique(&mut fragments, found.as_str());
    }

    fragments
}

fn push_unique(fragments: &mut Vec<String>, candidate: &str) {
    if !fragments.iter().any(|f| f == candidate) {
        fragments.push(candidate.to_string());
    }
}
