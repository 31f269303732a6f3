use crate::error::ResolveError;
use crate::parse::operation::{HttpVerb, Operation};
use crate::parse::parameter::{Parameter, ParameterLocation};

/// Name of the synthesized request-body parameter.
pub const BODY_PARAM: &str = "body";

/// The operation identifier, used verbatim as the generated method name.
pub fn operation_id<'a>(
    path: &str,
    verb: HttpVerb,
    op: &'a Operation,
) -> Result<&'a str, ResolveError> {
    op.operation_id
        .as_deref()
        .ok_or_else(|| ResolveError::MissingOperationId {
            path: path.to_string(),
            verb: verb.to_string(),
        })
}

/// Resolve an operation's ordered required-input list.
///
/// Declared parameters marked required come first, in declaration order. When
/// the verb is `post`/`put` and the operation declares a required request
/// body, its JSON schema is checked to be object-typed and a trailing `body`
/// parameter is appended carrying that schema. This ordering fixes the
/// generated method's positional-argument order; changing it breaks the
/// generated client's public surface.
pub fn required_parameters(
    path: &str,
    verb: HttpVerb,
    op: &Operation,
) -> Result<Vec<Parameter>, ResolveError> {
    let mut required: Vec<Parameter> = op
        .parameters
        .iter()
        .filter(|p| p.required)
        .cloned()
        .collect();

    if verb.takes_body()
        && let Some(body) = &op.request_body
        && body.required
    {
        let schema = body.json_schema().filter(|s| s.is_object()).ok_or_else(|| {
            let found = match body.json_schema() {
                Some(schema) => schema
                    .schema_type
                    .map(|t| t.as_str().to_string())
                    .unwrap_or_else(|| "untyped".to_string()),
                None => "no application/json schema".to_string(),
            };
            ResolveError::UnsupportedBodySchema {
                path: path.to_string(),
                verb: verb.to_string(),
                found,
            }
        })?;

        required.push(Parameter {
            name: BODY_PARAM.to_string(),
            location: ParameterLocation::Body,
            description: Some("Request content".to_string()),
            required: true,
            schema: Some(schema.clone()),
        });
    }

    Ok(required)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResolveError;
    use crate::parse;

    fn single_op(yaml: &str, path: &str, verb: HttpVerb) -> Operation {
        let doc = parse::from_yaml(yaml).expect("fixture should parse");
        doc.paths[path]
            .operations()
            .find(|(v, _)| *v == verb)
            .map(|(_, op)| op.clone())
            .expect("operation should exist")
    }

    #[test]
    fn declared_order_is_preserved_and_optionals_drop() {
        let op = single_op(
            r#"
info: { title: T }
paths:
  "/zones/{zone}/servers":
    get:
      operationId: ListServers
      parameters:
        - { name: zone, in: path, required: true, schema: { type: string } }
        - { name: page, in: query, required: false, schema: { type: integer } }
        - { name: per_page, in: query, required: true, schema: { type: integer } }
"#,
            "/zones/{zone}/servers",
            HttpVerb::Get,
        );

        let params = required_parameters("/zones/{zone}/servers", HttpVerb::Get, &op).unwrap();
        let names: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["zone", "per_page"]);
    }

    #[test]
    fn object_body_appends_exactly_one_trailing_body_param() {
        let op = single_op(
            r#"
info: { title: T }
paths:
  "/servers":
    post:
      operationId: CreateServer
      parameters:
        - { name: zone, in: path, required: true, schema: { type: string } }
      requestBody:
        required: true
        content:
          application/json:
            schema:
              type: object
              properties:
                name: { type: string, description: Server name }
"#,
            "/servers",
            HttpVerb::Post,
        );

        let params = required_parameters("/servers", HttpVerb::Post, &op).unwrap();
        assert_eq!(params.len(), 2);

        let body = params.last().unwrap();
        assert_eq!(body.name, BODY_PARAM);
        assert_eq!(body.location, ParameterLocation::Body);
        assert!(body.required);
        assert!(body.schema.as_ref().unwrap().is_object());
        assert_eq!(
            params.iter().filter(|p| p.name == BODY_PARAM).count(),
            1,
            "exactly one body parameter"
        );
    }

    #[test]
    fn non_object_body_schema_is_fatal() {
        let op = single_op(
            r#"
info: { title: T }
paths:
  "/servers":
    post:
      operationId: CreateServer
      requestBody:
        required: true
        content:
          application/json:
            schema: { type: array }
"#,
            "/servers",
            HttpVerb::Post,
        );

        let err = required_parameters("/servers", HttpVerb::Post, &op).unwrap_err();
        match err {
            ResolveError::UnsupportedBodySchema { found, .. } => assert_eq!(found, "array"),
            other => panic!("expected UnsupportedBodySchema, got {other:?}"),
        }
    }

    #[test]
    fn optional_body_is_not_synthesized() {
        let op = single_op(
            r#"
info: { title: T }
paths:
  "/servers":
    post:
      operationId: CreateServer
      requestBody:
        required: false
        content:
          application/json:
            schema: { type: object }
"#,
            "/servers",
            HttpVerb::Post,
        );

        let params = required_parameters("/servers", HttpVerb::Post, &op).unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn get_with_required_body_is_ignored() {
        // Only post/put synthesize a body parameter.
        let op = single_op(
            r#"
info: { title: T }
paths:
  "/servers":
    get:
      operationId: ListServers
      requestBody:
        required: true
        content:
          application/json:
            schema: { type: object }
"#,
            "/servers",
            HttpVerb::Get,
        );

        let params = required_parameters("/servers", HttpVerb::Get, &op).unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn missing_operation_id_is_fatal() {
        let op = Operation::default();
        let err = operation_id("/servers", HttpVerb::Get, &op).unwrap_err();
        assert!(matches!(err, ResolveError::MissingOperationId { .. }));
    }
}
