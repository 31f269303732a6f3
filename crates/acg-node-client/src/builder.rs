use indexmap::IndexMap;

use acg_core::parse::operation::HttpVerb;

/// Accumulates one immutable snippet per operation, then joins exactly once.
///
/// Snippets are keyed by (path, verb), so insertion order is the
/// path-then-verb iteration order of the merged map and a key can never be
/// emitted twice. Nothing is written anywhere until `finish`.
pub struct ClientBuilder {
    header: String,
    snippets: IndexMap<(String, HttpVerb), String>,
}

impl ClientBuilder {
    pub fn new(header: String) -> Self {
        Self {
            header,
            snippets: IndexMap::new(),
        }
    }

    pub fn push(&mut self, path: &str, verb: HttpVerb, snippet: String) {
        self.snippets.insert((path.to_string(), verb), snippet);
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    /// Join header, snippets, and the module export into the final source.
    pub fn finish(self) -> String {
        let mut out = self.header.trim_end().to_string();
        for snippet in self.snippets.values() {
            out.push_str("\n\n");
            out.push_str(snippet.trim_end());
        }
        out.push_str("\nmodule.exports = Client;\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_header_snippets_and_export() {
        let mut builder = ClientBuilder::new("// header\n".to_string());
        builder.push("/a", HttpVerb::Get, "function A(){}\n".to_string());
        builder.push("/b", HttpVerb::Post, "function B(){}\n".to_string());

        let out = builder.finish();
        assert_eq!(
            out,
            "// header\n\nfunction A(){}\n\nfunction B(){}\nmodule.exports = Client;\n"
        );
    }

    #[test]
    fn same_key_keeps_last_snippet_only() {
        let mut builder = ClientBuilder::new(String::new());
        builder.push("/a", HttpVerb::Get, "first".to_string());
        builder.push("/a", HttpVerb::Get, "second".to_string());
        assert_eq!(builder.len(), 1);
        assert!(builder.finish().contains("second"));
    }

    #[test]
    fn empty_builder_still_exports() {
        let builder = ClientBuilder::new("// header".to_string());
        assert!(builder.is_empty());
        assert_eq!(builder.finish(), "// header\nmodule.exports = Client;\n");
    }
}
