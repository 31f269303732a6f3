use acg_core::config::AcgConfig;

/// Everything the emitters interpolate into the generated artifacts.
///
/// Built once per run from the project config plus runtime facts (schema
/// title, acquired source URLs) and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ClientContext {
    /// Schema title, used in the README heading and constructor docs.
    pub title: String,
    pub package_name: String,
    pub version: String,
    pub description: String,
    pub homepage: Option<String>,
    pub keywords: Vec<String>,
    /// Base URL baked into the generated constructor.
    pub base_url: String,
    /// Header name carrying the auth token on every generated request.
    pub auth_header: String,
    /// Directory the raw schema copies live in, linked from the README.
    pub schema_dir: String,
    /// Whether the README carries a sorted index of operation names.
    pub operation_index: bool,
    /// External documentation base URL for index links.
    pub docs_url: Option<String>,
    /// URLs the schemas were acquired from, listed in the README.
    pub schema_sources: Vec<String>,
}

impl ClientContext {
    pub fn from_config(
        config: &AcgConfig,
        schema_title: &str,
        schema_sources: Vec<String>,
    ) -> Self {
        Self {
            title: schema_title.to_string(),
            package_name: config.package.resolved_name(schema_title),
            version: config.package.version.clone(),
            description: config.package.description.clone(),
            homepage: config.package.homepage.clone(),
            keywords: config.package.keywords.clone(),
            base_url: config.client.base_url.clone(),
            auth_header: config.client.auth_header.clone(),
            schema_dir: config.schema_dir.clone(),
            operation_index: config.readme.operation_index,
            docs_url: config.readme.docs_url.clone(),
            schema_sources,
        }
    }

    /// Identifying header sent by every generated method.
    pub fn user_agent(&self) -> String {
        format!("node-{}/{}", self.package_name, self.version)
    }
}
