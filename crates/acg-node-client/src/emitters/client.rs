use indexmap::IndexMap;
use minijinja::context;

use acg_core::parse::operation::PathItem;

use crate::builder::ClientBuilder;
use crate::context::ClientContext;
use crate::error::EmitError;
use crate::synth;

use super::template_env;

/// Emit `lib.js` — the constructor plus one generated method per operation,
/// concatenated in path-then-verb iteration order and terminated with the
/// module export.
pub fn emit_client(
    paths: &IndexMap<String, PathItem>,
    ctx: &ClientContext,
) -> Result<String, EmitError> {
    let env = template_env();

    let header = env
        .get_template("client_header.js.j2")
        .unwrap()
        .render(context! {
            package_name => ctx.package_name.clone(),
            title => ctx.title.clone(),
            base_url => ctx.base_url.clone(),
        })
        .expect("render should succeed");

    let mut builder = ClientBuilder::new(header);
    for (path, item) in paths {
        for (verb, op) in item.operations() {
            let snippet = synth::method_snippet(&env, path, verb, op, ctx)?;
            builder.push(path, verb, snippet);
        }
    }

    log::info!("synthesized {} client methods", builder.len());
    Ok(builder.finish())
}
