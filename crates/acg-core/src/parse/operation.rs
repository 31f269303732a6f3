use std::fmt;

use serde::{Deserialize, Serialize};

use super::parameter::Parameter;
use super::request_body::RequestBody;

/// HTTP verb, serialized lowercase as it appears in `paths` keys and in the
/// generated request descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
    Trace,
}

impl HttpVerb {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVerb::Get => "get",
            HttpVerb::Post => "post",
            HttpVerb::Put => "put",
            HttpVerb::Delete => "delete",
            HttpVerb::Patch => "patch",
            HttpVerb::Options => "options",
            HttpVerb::Head => "head",
            HttpVerb::Trace => "trace",
        }
    }

    /// Whether this verb may carry a synthesized `body` parameter.
    pub fn takes_body(&self) -> bool {
        matches!(self, HttpVerb::Post | HttpVerb::Put)
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An API operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Operation {
    #[serde(rename = "operationId", skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,

    #[serde(rename = "requestBody", skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
}

/// A path item, containing operations keyed by HTTP verb.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Operation>,
}

impl PathItem {
    /// Iterate the declared operations in fixed verb order. This order, with
    /// document order of the path keys, fixes the concatenation order of the
    /// generated methods.
    pub fn operations(&self) -> impl Iterator<Item = (HttpVerb, &Operation)> {
        [
            (HttpVerb::Get, &self.get),
            (HttpVerb::Post, &self.post),
            (HttpVerb::Put, &self.put),
            (HttpVerb::Delete, &self.delete),
            (HttpVerb::Patch, &self.patch),
            (HttpVerb::Options, &self.options),
            (HttpVerb::Head, &self.head),
            (HttpVerb::Trace, &self.trace),
        ]
        .into_iter()
        .filter_map(|(verb, op)| op.as_ref().map(|op| (verb, op)))
    }

    /// Overlay `other` onto `self`, verb by verb. A verb declared by `other`
    /// replaces the one declared here; a verb `other` omits survives.
    pub fn absorb(&mut self, other: PathItem) {
        macro_rules! take {
            ($field:ident) => {
                if other.$field.is_some() {
                    self.$field = other.$field;
                }
            };
        }
        take!(get);
        take!(post);
        take!(put);
        take!(delete);
        take!(patch);
        take!(options);
        take!(head);
        take!(trace);
    }
}
