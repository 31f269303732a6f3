pub mod builder;
pub mod context;
pub mod emitters;
pub mod error;
pub mod synth;

use indexmap::IndexMap;

use acg_core::parse::operation::PathItem;
use acg_core::{CodeGenerator, GeneratedFile};

pub use context::ClientContext;
pub use error::EmitError;

/// Node.js axios client generator.
///
/// Produces three artifacts from a merged path map: the client module
/// (`lib.js`), a `README.md`, and a `jsdoc.json` documentation-tool
/// configuration. Artifacts are assembled fully in memory; any failure
/// aborts the whole invocation with nothing emitted.
pub struct NodeClientGenerator;

impl CodeGenerator for NodeClientGenerator {
    type Config = ClientContext;
    type Error = EmitError;

    fn generate(
        &self,
        paths: &IndexMap<String, PathItem>,
        config: &ClientContext,
    ) -> Result<Vec<GeneratedFile>, EmitError> {
        let lib = emitters::client::emit_client(paths, config)?;
        let readme = emitters::readme::emit_readme(paths, config)?;
        let jsdoc = emitters::jsdoc::emit_jsdoc_config(config);

        log::debug!("assembled artifacts for {}", config.package_name);

        Ok(vec![
            GeneratedFile {
                path: "lib.js".to_string(),
                content: lib,
            },
            GeneratedFile {
                path: "README.md".to_string(),
                content: readme,
            },
            GeneratedFile {
                path: "jsdoc.json".to_string(),
                content: jsdoc,
            },
        ])
    }
}
