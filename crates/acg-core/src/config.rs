use std::fs;
use std::path::Path;

use heck::ToKebabCase;
use serde::Deserialize;

/// Top-level project configuration loaded from `.acg.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AcgConfig {
    /// Direct schema URLs for `acg generate`.
    pub schemas: Vec<String>,
    /// Documentation pages to scan for schema links, for `acg scrape`.
    pub docs_pages: Vec<String>,
    /// Output directory for the generated artifacts.
    pub output: String,
    /// Directory (under `output`) where the scrape variant persists raw
    /// schema documents.
    pub schema_dir: String,
    pub package: PackageMeta,
    pub client: ClientOptions,
    pub readme: ReadmeOptions,
}

impl Default for AcgConfig {
    fn default() -> Self {
        Self {
            schemas: Vec::new(),
            docs_pages: Vec::new(),
            output: ".".to_string(),
            schema_dir: "documentation".to_string(),
            package: PackageMeta::default(),
            client: ClientOptions::default(),
            readme: ReadmeOptions::default(),
        }
    }
}

/// Package metadata interpolated into the generated artifacts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PackageMeta {
    /// npm package name; defaults to the slugified schema title.
    pub name: Option<String>,
    pub version: String,
    pub description: String,
    pub homepage: Option<String>,
    pub keywords: Vec<String>,
}

impl Default for PackageMeta {
    fn default() -> Self {
        Self {
            name: None,
            version: "0.0.1".to_string(),
            description: String::new(),
            homepage: None,
            keywords: Vec::new(),
        }
    }
}

impl PackageMeta {
    /// The package name, falling back to a slug of the schema title.
    pub fn resolved_name(&self, schema_title: &str) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| schema_title.to_kebab_case())
    }
}

/// Options baked into the generated client source.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
    pub base_url: String,
    /// Header carrying the authentication token set at client construction.
    pub auth_header: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: "https://api.scaleway.com".to_string(),
            auth_header: "X-Auth-Token".to_string(),
        }
    }
}

/// README generation options.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReadmeOptions {
    /// Emit a sorted index of operation names.
    pub operation_index: bool,
    /// External documentation base URL the index links to; without it, index
    /// entries link to the persisted schema directory.
    pub docs_url: Option<String>,
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".acg.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<AcgConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: AcgConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# acg configuration
schemas: []             # direct schema URLs for `acg generate`
  # - https://developers.example.com/static/c336c02927a3f02afc1b604751f91330/example.baremetal.v1.Api.yml
docs_pages: []          # documentation pages for `acg scrape`
  # - https://developers.example.com/baremetal

output: .               # where lib.js / README.md / jsdoc.json land
schema_dir: documentation   # raw schema copies (scrape variant)

package:
  # name: my-api-client     # defaults to slugified schema title
  version: 0.0.1
  description: ""
  # homepage: https://github.com/you/your-repo
  keywords: []

client:
  base_url: https://api.scaleway.com
  auth_header: X-Auth-Token

readme:
  operation_index: false
  # docs_url: https://developers.example.com/apis
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AcgConfig::default();
        assert!(config.schemas.is_empty());
        assert!(config.docs_pages.is_empty());
        assert_eq!(config.output, ".");
        assert_eq!(config.schema_dir, "documentation");
        assert_eq!(config.package.version, "0.0.1");
        assert_eq!(config.client.base_url, "https://api.scaleway.com");
        assert_eq!(config.client.auth_header, "X-Auth-Token");
        assert!(!config.readme.operation_index);
    }

    #[test]
    fn test_parse_config_yaml() {
        let yaml = r#"
schemas:
  - https://example.com/a.yml
  - https://example.com/b.yml
output: out
package:
  name: cloud-api-client
  version: 1.2.3
  description: Generated API client
  keywords: [api, client]
client:
  base_url: https://api.example.com
  auth_header: X-Token
readme:
  operation_index: true
  docs_url: https://developers.example.com/apis
"#;
        let config: AcgConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.schemas.len(), 2);
        assert_eq!(config.output, "out");
        assert_eq!(config.package.name.as_deref(), Some("cloud-api-client"));
        assert_eq!(config.package.version, "1.2.3");
        assert_eq!(config.package.keywords, ["api", "client"]);
        assert_eq!(config.client.base_url, "https://api.example.com");
        assert_eq!(config.client.auth_header, "X-Token");
        assert!(config.readme.operation_index);
        assert_eq!(
            config.readme.docs_url.as_deref(),
            Some("https://developers.example.com/apis")
        );
    }

    #[test]
    fn test_parse_minimal_config() {
        let yaml = "schemas:\n  - https://example.com/a.yml\n";
        let config: AcgConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.schemas.len(), 1);
        // Defaults applied
        assert_eq!(config.output, ".");
        assert_eq!(config.package.version, "0.0.1");
    }

    #[test]
    fn test_resolved_package_name_falls_back_to_title_slug() {
        let meta = PackageMeta::default();
        assert_eq!(meta.resolved_name("Baremetal API"), "baremetal-api");

        let named = PackageMeta {
            name: Some("custom".to_string()),
            ..PackageMeta::default()
        };
        assert_eq!(named.resolved_name("Baremetal API"), "custom");
    }
}
