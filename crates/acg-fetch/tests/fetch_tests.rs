use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use acg_fetch::{
    FetchError, discover_schema_urls, fetch_documents, http_client, parse_urls,
    save_raw_documents,
};

const SERVERS_YAML: &str = r#"
openapi: 3.0.0
info: { title: Baremetal API, version: v1 }
paths:
  "/servers":
    get: { operationId: ListServers }
"#;

const OFFERS_YAML: &str = r#"
openapi: 3.0.0
info: { title: Offers API, version: v1 }
paths:
  "/offers":
    get: { operationId: ListOffers }
"#;

async fn mock_schema(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn fetches_multiple_schemas_in_input_order() {
    let server = MockServer::start().await;
    mock_schema(&server, "/a.yml", SERVERS_YAML).await;
    mock_schema(&server, "/b.yml", OFFERS_YAML).await;

    let client = http_client().unwrap();
    let urls = parse_urls(&[
        format!("{}/a.yml", server.uri()),
        format!("{}/b.yml", server.uri()),
    ])
    .unwrap();

    let fetched = fetch_documents(&client, &urls).await.unwrap();
    assert_eq!(fetched.len(), 2);
    assert_eq!(fetched[0].doc.info.title, "Baremetal API");
    assert_eq!(fetched[1].doc.info.title, "Offers API");
    assert_eq!(fetched[0].file_name, "a.yml");
    assert_eq!(fetched[1].raw, OFFERS_YAML);
}

#[tokio::test]
async fn fetches_json_schema_by_extension() {
    let server = MockServer::start().await;
    mock_schema(
        &server,
        "/schema.json",
        r#"{ "info": { "title": "JSON API" }, "paths": {} }"#,
    )
    .await;

    let client = http_client().unwrap();
    let urls = parse_urls(&[format!("{}/schema.json", server.uri())]).unwrap();

    let fetched = fetch_documents(&client, &urls).await.unwrap();
    assert_eq!(fetched[0].doc.info.title, "JSON API");
}

#[tokio::test]
async fn one_failing_source_aborts_the_whole_fetch() {
    let server = MockServer::start().await;
    mock_schema(&server, "/a.yml", SERVERS_YAML).await;
    // /missing.yml is not mounted: wiremock answers 404

    let client = http_client().unwrap();
    let urls = parse_urls(&[
        format!("{}/a.yml", server.uri()),
        format!("{}/missing.yml", server.uri()),
    ])
    .unwrap();

    let err = fetch_documents(&client, &urls).await.unwrap_err();
    assert!(matches!(err, FetchError::Http(_)));
}

#[tokio::test]
async fn unparseable_schema_aborts_the_whole_fetch() {
    let server = MockServer::start().await;
    mock_schema(&server, "/broken.yml", "paths: [not: a mapping").await;

    let client = http_client().unwrap();
    let urls = parse_urls(&[format!("{}/broken.yml", server.uri())]).unwrap();

    let err = fetch_documents(&client, &urls).await.unwrap_err();
    assert!(matches!(err, FetchError::Parse { .. }));
}

#[tokio::test]
async fn discovers_schema_links_from_documentation_page() {
    let server = MockServer::start().await;
    let page = r#"<html><body>
          <a href="/static/c336c02927a3f02afc1b604751f91330/example.baremetal.v1.Api.yml">baremetal</a>
          <script>var x = ["/static/9f8e7d6c5b4a39281706f5e4d3c2b1a0/example.instance.v1.Api.yml"];</script>
        </body></html>"#;
    Mock::given(method("GET"))
        .and(path("/baremetal"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page))
        .mount(&server)
        .await;

    let client = http_client().unwrap();
    let pages = parse_urls(&[format!("{}/baremetal", server.uri())]).unwrap();

    let discovered = discover_schema_urls(&client, &pages).await.unwrap();
    assert_eq!(discovered.len(), 2);
    assert_eq!(
        discovered[0],
        Url::parse(&format!(
            "{}/static/c336c02927a3f02afc1b604751f91330/example.baremetal.v1.Api.yml",
            server.uri()
        ))
        .unwrap()
    );
    assert!(discovered[1].path().ends_with("example.instance.v1.Api.yml"));
}

#[tokio::test]
async fn page_without_schema_link_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/empty"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>nothing here</body></html>"))
        .mount(&server)
        .await;

    let client = http_client().unwrap();
    let pages = parse_urls(&[format!("{}/empty", server.uri())]).unwrap();

    let err = discover_schema_urls(&client, &pages).await.unwrap_err();
    assert!(matches!(err, FetchError::NoSchemaLink { .. }));
}

#[tokio::test]
async fn raw_documents_persist_under_their_file_names() {
    let server = MockServer::start().await;
    mock_schema(&server, "/example.baremetal.v1.Api.yml", SERVERS_YAML).await;

    let client = http_client().unwrap();
    let urls = parse_urls(&[format!("{}/example.baremetal.v1.Api.yml", server.uri())]).unwrap();
    let fetched = fetch_documents(&client, &urls).await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("documentation");
    save_raw_documents(&target, &fetched).unwrap();

    let saved = std::fs::read_to_string(target.join("example.baremetal.v1.Api.yml")).unwrap();
    assert_eq!(saved, SERVERS_YAML);
}
