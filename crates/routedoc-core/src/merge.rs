use indexmap::{IndexMap, IndexSet};
use log::debug;

use crate::document::{Components, Operation, PathItem, SpecDocument};

/// Merge a freshly generated document into a previously persisted one.
///
/// Paths new to `existing` are appended. A path present in both takes the
/// incoming path item, with tags of operations known on both sides unioned.
/// Component schemas are unioned with incoming winning, then sorted by name.
/// The persisted `info` block is kept.
pub fn merge(existing: &SpecDocument, incoming: &SpecDocument) -> SpecDocument {
    let mut paths = existing.paths.clone();

    for (path, item) in &incoming.paths {
        let resolved = match existing.paths.get(path) {
            Some(previous) => {
                debug!("resolving conflict on {path}");
                resolve_conflict(previous, item)
            }
            None => {
                debug!("adding new path {path}");
                item.clone()
            }
        };
        paths.insert(path.clone(), resolved);
    }

    let mut schemas = existing.components.schemas.clone();
    schemas.extend(
        incoming
            .components
            .schemas
            .iter()
            .map(|(name, schema)| (name.clone(), schema.clone())),
    );

    let mut merged = SpecDocument {
        info: existing.info.clone(),
        paths,
        components: Components { schemas },
    };
    merged.sort_schemas();
    merged
}

fn resolve_conflict(previous: &PathItem, incoming: &PathItem) -> PathItem {
    let operations: IndexMap<String, Operation> = incoming
        .operations
        .iter()
        .map(|(method, operation)| {
            let resolved = match previous.operations.get(method) {
                Some(old) => Operation {
                    tags: union_tags(old.tags.as_deref(), operation.tags.as_deref()),
                    ..operation.clone()
                },
                None => operation.clone(),
            };
            (method.clone(), resolved)
        })
        .collect();

    PathItem {
        operations,
        parameters: incoming.parameters.clone(),
    }
}

/// Set union in first-occurrence order; `None` only when both sides are `None`.
///
/// Duplicates within one side are folded too, so a document that repeats a
/// tag on one operation does not survive `merge(d, d)` unchanged.
fn union_tags(existing: Option<&[String]>, incoming: Option<&[String]>) -> Option<Vec<String>> {
    if existing.is_none() && incoming.is_none() {
        return None;
    }
    let union: IndexSet<String> = existing
        .unwrap_or_default()
        .iter()
        .chain(incoming.unwrap_or_default())
        .cloned()
        .collect();
    Some(union.into_iter().collect())
}
