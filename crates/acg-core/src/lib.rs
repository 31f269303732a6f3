pub mod config;
pub mod error;
pub mod merge;
pub mod parse;
pub mod resolve;

use indexmap::IndexMap;

use parse::operation::PathItem;

/// A generated file with path and content.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Trait for code generators that produce files from a merged path map.
///
/// Generation is all-or-nothing: an error from any artifact aborts the whole
/// invocation and no files are returned.
pub trait CodeGenerator {
    type Config;
    type Error: std::error::Error;
    fn generate(
        &self,
        paths: &IndexMap<String, PathItem>,
        config: &Self::Config,
    ) -> Result<Vec<GeneratedFile>, Self::Error>;
}
