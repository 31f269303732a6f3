use minijinja::{Environment, context};

use acg_core::parse::operation::{HttpVerb, Operation};
use acg_core::parse::parameter::{Parameter, ParameterLocation};
use acg_core::resolve;

use crate::context::ClientContext;
use crate::error::EmitError;

/// The request every generated method issues, reduced to the parts that vary
/// per operation. Everything else (base URL, headers, response type) is
/// constant across the client and lives in the method template.
///
/// The generated code ends the descriptor with `...options`: the optional
/// trailing argument is shallow-merged over these fields at call time, and
/// caller-supplied keys win, including method, url, and headers.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    /// Lowercase HTTP verb.
    pub method: &'static str,
    /// URL expression: the quoted path template followed by one literal
    /// substring substitution per required path parameter.
    pub url_expr: String,
    /// Query object literal; each key re-reads the same-named argument at
    /// call time.
    pub query_obj: String,
    /// Payload expression: the `body` argument verbatim, or an empty object.
    pub data_expr: String,
}

impl RequestDescriptor {
    pub fn build(path: &str, verb: HttpVerb, required: &[Parameter]) -> Self {
        Self {
            method: verb.as_str(),
            url_expr: url_expression(path, required),
            query_obj: query_object(required),
            data_expr: data_expression(required),
        }
    }
}

/// Quote a string as a JavaScript string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).expect("string serialization cannot fail")
}

/// The quoted path template with one `.replace('{name}', name)` per required
/// path parameter, in declaration order. Values are inserted verbatim at call
/// time; no escaping or encoding is applied.
fn url_expression(path: &str, required: &[Parameter]) -> String {
    let mut expr = js_string(path);
    for param in required
        .iter()
        .filter(|p| p.location == ParameterLocation::Path)
    {
        expr.push_str(&format!(".replace('{{{}}}', {})", param.name, param.name));
    }
    expr
}

/// Object literal mapping each required query parameter's name to the
/// same-named argument.
fn query_object(required: &[Parameter]) -> String {
    let pairs: Vec<String> = required
        .iter()
        .filter(|p| p.location == ParameterLocation::Query)
        .map(|p| format!("{}: {}", js_string(&p.name), p.name))
        .collect();

    if pairs.is_empty() {
        "{}".to_string()
    } else {
        format!("{{ {} }}", pairs.join(", "))
    }
}

fn data_expression(required: &[Parameter]) -> String {
    if required
        .iter()
        .any(|p| p.location == ParameterLocation::Body)
    {
        resolve::BODY_PARAM.to_string()
    } else {
        "{}".to_string()
    }
}

/// One documentation line per parameter; object-typed schemas additionally
/// document each declared property as `name.property`.
pub fn param_doc_lines(param: &Parameter) -> Vec<String> {
    let type_keyword = param
        .schema
        .as_ref()
        .map(|s| s.type_keyword())
        .unwrap_or("object");

    let mut lines = vec![format!(
        " * @param {{{}}} {} - {}",
        type_keyword,
        param.name,
        param.description.as_deref().unwrap_or_default()
    )];

    if let Some(schema) = &param.schema
        && schema.is_object()
    {
        for (prop_name, prop) in &schema.properties {
            lines.push(format!(
                " * @param {{{}}} {}.{} - {}",
                prop.type_keyword(),
                param.name,
                prop_name,
                prop.description.as_deref().unwrap_or_default()
            ));
        }
    }

    lines
}

/// Synthesize one generated method from an operation.
///
/// The method is named exactly after the schema's operation identifier and
/// accepts the resolved required parameters positionally, followed by the
/// options argument.
pub fn method_snippet(
    env: &Environment<'_>,
    path: &str,
    verb: HttpVerb,
    op: &Operation,
    ctx: &ClientContext,
) -> Result<String, EmitError> {
    let name = resolve::operation_id(path, verb, op)?;
    let required = resolve::required_parameters(path, verb, op)?;
    let descriptor = RequestDescriptor::build(path, verb, &required);

    let args: Vec<&str> = required
        .iter()
        .map(|p| p.name.as_str())
        .chain(["options"])
        .collect();

    let mut jsdoc_params = required
        .iter()
        .flat_map(|p| param_doc_lines(p))
        .collect::<Vec<_>>()
        .join("\n");
    if !jsdoc_params.is_empty() {
        jsdoc_params.push('\n');
    }

    let tmpl = env.get_template("method.js.j2").unwrap();
    let rendered = tmpl
        .render(context! {
            name => name,
            summary => op.summary.as_deref().unwrap_or_default(),
            description => op.description.as_deref().unwrap_or_default(),
            jsdoc_params => jsdoc_params,
            args => args.join(", "),
            method => descriptor.method,
            url => descriptor.url_expr,
            params => descriptor.query_obj,
            data => descriptor.data_expr,
            user_agent => ctx.user_agent(),
            auth_header => ctx.auth_header.clone(),
        })
        .expect("render should succeed");

    Ok(rendered)
}
