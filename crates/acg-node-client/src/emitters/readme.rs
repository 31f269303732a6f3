use indexmap::IndexMap;
use minijinja::context;

use acg_core::parse::operation::PathItem;
use acg_core::resolve;

use crate::context::ClientContext;
use crate::error::EmitError;

use super::template_env;

/// Emit `README.md` — static template text plus, when enabled, a sorted
/// index of operation names.
pub fn emit_readme(
    paths: &IndexMap<String, PathItem>,
    ctx: &ClientContext,
) -> Result<String, EmitError> {
    let operations = if ctx.operation_index {
        operation_index(paths, ctx)?
    } else {
        Vec::new()
    };

    let env = template_env();
    let rendered = env
        .get_template("readme.md.j2")
        .unwrap()
        .render(context! {
            title => ctx.title.clone(),
            package_name => ctx.package_name.clone(),
            schema_dir => ctx.schema_dir.clone(),
            schema_sources => ctx.schema_sources.clone(),
            operations => operations,
        })
        .expect("render should succeed");

    Ok(rendered)
}

/// Alphabetically sorted operation names with their documentation links.
fn operation_index(
    paths: &IndexMap<String, PathItem>,
    ctx: &ClientContext,
) -> Result<Vec<minijinja::Value>, EmitError> {
    let mut names = Vec::new();
    for (path, item) in paths {
        for (verb, op) in item.operations() {
            names.push(resolve::operation_id(path, verb, op)?.to_string());
        }
    }
    names.sort();

    Ok(names
        .into_iter()
        .map(|name| {
            let href = match &ctx.docs_url {
                Some(base) => format!("{}#{}", base, name.to_lowercase()),
                None => format!("./{}", ctx.schema_dir),
            };
            context! { name => name, href => href }
        })
        .collect())
}
