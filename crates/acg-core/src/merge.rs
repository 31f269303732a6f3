use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::parse::document::OpenApiDoc;
use crate::parse::operation::PathItem;

/// Merge the `paths` maps of every source document into one combined mapping.
///
/// Path keys keep first-seen document order. Within a shared path, later
/// documents overwrite earlier ones verb by verb, so on an identical
/// path+verb key the last source wins. Merge order is therefore part of the
/// contract: callers must pass documents in acquisition order.
pub fn merge_paths<I>(docs: I) -> IndexMap<String, PathItem>
where
    I: IntoIterator<Item = OpenApiDoc>,
{
    let mut merged: IndexMap<String, PathItem> = IndexMap::new();
    let mut sources = 0usize;

    for doc in docs {
        sources += 1;
        for (path, item) in doc.paths {
            match merged.entry(path) {
                Entry::Occupied(mut entry) => entry.get_mut().absorb(item),
                Entry::Vacant(entry) => {
                    entry.insert(item);
                }
            }
        }
    }

    log::debug!("merged {} document(s) into {} path(s)", sources, merged.len());
    merged
}
