use serde_json::{Map, Value, json};

use crate::context::ClientContext;

/// Emit `jsdoc.json` — the documentation-tool configuration. The structure
/// is independent of the schema; only package metadata is interpolated.
pub fn emit_jsdoc_config(ctx: &ClientContext) -> String {
    let mut menu = Map::new();
    if let Some(homepage) = &ctx.homepage {
        menu.insert(
            "Github".to_string(),
            json!({
                "href": homepage,
                "target": "_blank",
                "class": "menu-item",
            }),
        );
    }

    let config = json!({
        "source": {
            "include": ["lib.js", "package.json", "README.md"],
        },
        "opts": {
            "template": "node_modules/docdash",
            "destination": "./docs",
            "recurse": true,
        },
        "docdash": {
            "openGraph": {
                "title": ctx.description,
                "type": "website",
                "image": "",
                "site_name": ctx.package_name,
            },
            "meta": {
                "title": format!("{} - {}", ctx.package_name, ctx.description),
                "description": ctx.description,
                "keyword": ctx.keywords.join(", "),
            },
            "search": true,
            "menu": Value::Object(menu),
        },
    });

    let mut out = serde_json::to_string_pretty(&config).expect("config serializes to JSON");
    out.push('\n');
    out
}
