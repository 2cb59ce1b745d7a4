use indexmap::IndexMap;
use routedoc_core::document::{Info, ObjectType, Operation, PathItem, SpecDocument};
use routedoc_core::merge;

fn info(title: &str) -> Info {
    Info {
        title: title.to_string(),
        description: None,
        version: "1.0.0".to_string(),
    }
}

fn tagged(tags: &[&str]) -> Operation {
    Operation {
        tags: Some(tags.iter().map(|t| t.to_string()).collect()),
        ..Default::default()
    }
}

fn doc_with(paths: &[(&str, &str, &[&str])]) -> SpecDocument {
    let mut doc = SpecDocument::new(info("Test"));
    for (path, method, tags) in paths {
        doc.paths
            .entry(path.to_string())
            .or_insert_with(PathItem::default)
            .operations
            .insert(method.to_string(), tagged(tags));
    }
    doc
}

fn schema_keys(doc: &SpecDocument) -> Vec<String> {
    doc.components.schemas.keys().cloned().collect()
}

#[test]
fn merge_with_itself_is_identity() {
    let mut doc = doc_with(&[
        ("/a", "get", &["X"]),
        ("/a", "post", &["X", "Y"]),
        ("/b/{id}", "delete", &[]),
    ]);
    doc.components
        .schemas
        .insert("pkg.A".to_string(), ObjectType::primitive("object"));
    let mut props = IndexMap::new();
    props.insert("field".to_string(), ObjectType::primitive("string"));
    doc.components
        .schemas
        .insert("pkg.B".to_string(), ObjectType::object(props));

    let merged = merge(&doc, &doc);
    assert_eq!(merged, doc);
    assert!(merged.paths.keys().eq(doc.paths.keys()));
    assert_eq!(schema_keys(&merged), schema_keys(&doc));
}

#[test]
fn merge_with_itself_normalizes_schema_order() {
    let mut doc = doc_with(&[]);
    doc.components
        .schemas
        .insert("z.Last".to_string(), ObjectType::primitive("object"));
    doc.components
        .schemas
        .insert("a.First".to_string(), ObjectType::primitive("object"));

    let merged = merge(&doc, &doc);
    let mut sorted = doc.clone();
    sorted.sort_schemas();
    assert_eq!(schema_keys(&merged), schema_keys(&sorted));
    assert_eq!(merge(&merged, &merged), merged);
}

// Identity holds for documents whose operation tags are already distinct.
// Repeated tags on one operation are folded on the first merge, after which
// merging is stable again.
#[test]
fn merge_with_itself_folds_repeated_tags() {
    let doc = doc_with(&[("/a", "get", &["X", "X", "Y"])]);

    let merged = merge(&doc, &doc);
    assert_ne!(merged, doc);
    assert_eq!(
        merged.paths["/a"].operations["get"].tags,
        Some(vec!["X".to_string(), "Y".to_string()])
    );
    assert_eq!(merge(&merged, &merged), merged);
}

#[test]
fn tags_are_unioned_on_conflict() {
    let existing = doc_with(&[("/a", "get", &["X"])]);
    let incoming = doc_with(&[("/a", "get", &["Y"])]);

    let merged = merge(&existing, &incoming);
    let mut tags = merged.paths["/a"].operations["get"].tags.clone().unwrap();
    tags.sort();
    assert_eq!(tags, vec!["X", "Y"]);
}

#[test]
fn tag_union_collapses_duplicates() {
    let existing = doc_with(&[("/a", "get", &["X", "Y"])]);
    let incoming = doc_with(&[("/a", "get", &["Y", "Z"])]);

    let merged = merge(&existing, &incoming);
    assert_eq!(
        merged.paths["/a"].operations["get"].tags,
        Some(vec!["X".to_string(), "Y".to_string(), "Z".to_string()])
    );
}

#[test]
fn new_paths_are_appended_and_old_kept() {
    let existing = doc_with(&[("/old", "get", &["A"]), ("/shared", "get", &["A"])]);
    let incoming = doc_with(&[("/shared", "get", &["B"]), ("/new", "post", &["B"])]);

    let merged = merge(&existing, &incoming);
    let keys: Vec<&String> = merged.paths.keys().collect();
    assert_eq!(keys, vec!["/old", "/shared", "/new"]);
    assert_eq!(
        merged.paths["/old"].operations["get"].tags,
        Some(vec!["A".to_string()])
    );
    assert_eq!(
        merged.paths["/new"].operations["post"].tags,
        Some(vec!["B".to_string()])
    );
}

#[test]
fn incoming_operation_fields_win_on_conflict() {
    let mut existing = doc_with(&[("/a", "get", &["X"])]);
    existing.paths["/a"].operations["get"].summary = Some("old".to_string());
    let mut incoming = doc_with(&[("/a", "get", &["Y"])]);
    incoming.paths["/a"].operations["get"].summary = Some("new".to_string());

    let merged = merge(&existing, &incoming);
    assert_eq!(
        merged.paths["/a"].operations["get"].summary.as_deref(),
        Some("new")
    );
}

#[test]
fn schemas_override_and_sort() {
    let mut existing = doc_with(&[]);
    existing
        .components
        .schemas
        .insert("pkg.Foo".to_string(), ObjectType::primitive("string"));
    existing
        .components
        .schemas
        .insert("pkg.Bar".to_string(), ObjectType::primitive("object"));

    let mut incoming = doc_with(&[]);
    let mut props = IndexMap::new();
    props.insert("value".to_string(), ObjectType::primitive("integer"));
    incoming
        .components
        .schemas
        .insert("pkg.Foo".to_string(), ObjectType::object(props.clone()));
    incoming
        .components
        .schemas
        .insert("pkg.Baz".to_string(), ObjectType::primitive("object"));

    let merged = merge(&existing, &incoming);
    let schemas = &merged.components.schemas;
    assert_eq!(schemas["pkg.Foo"], ObjectType::object(props));
    assert_eq!(schemas["pkg.Bar"], ObjectType::primitive("object"));
    assert_eq!(schema_keys(&merged), vec!["pkg.Bar", "pkg.Baz", "pkg.Foo"]);
}

#[test]
fn persisted_info_is_kept() {
    let existing = SpecDocument::new(info("Persisted"));
    let incoming = SpecDocument::new(info("Fresh"));
    assert_eq!(merge(&existing, &incoming).info.title, "Persisted");
}
