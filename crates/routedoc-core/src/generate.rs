use std::path::PathBuf;

use indexmap::IndexMap;
use log::info;
use serde::{Deserialize, Serialize};

use crate::compile::{combine_batches, compile};
use crate::config::DocsConfig;
use crate::document::{Components, ObjectType, SpecDocument};
use crate::error::{GenerateError, SerializeError};
use crate::output::write_document;
use crate::reduce::reduce_batches;
use crate::serialize::Format;
use crate::tree::RouteNode;

/// Everything the route producer hands over for one generation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteDump {
    /// One root per documented entry point.
    #[serde(default)]
    pub entries: Vec<RouteNode>,

    /// Component schemas keyed by fully-qualified type name.
    #[serde(default)]
    pub schemas: IndexMap<String, ObjectType>,
}

impl RouteDump {
    pub fn from_text(text: &str, format: Format) -> Result<Self, SerializeError> {
        let dump = match format {
            Format::Json => serde_json::from_str(text)?,
            Format::Yaml => serde_yaml_ng::from_str(text)?,
        };
        Ok(dump)
    }
}

/// Build a fresh document from route trees and the component table.
pub fn generate(
    entries: &[RouteNode],
    schemas: &IndexMap<String, ObjectType>,
    config: &DocsConfig,
) -> Result<SpecDocument, GenerateError> {
    let mut batches = Vec::new();
    for entry in entries {
        for records in reduce_batches(entry)? {
            batches.push(compile(&records));
        }
    }

    let mut doc = SpecDocument::new(config.info());
    doc.paths = combine_batches(batches);
    doc.components = Components {
        schemas: normalize_components(schemas),
    };

    info!(
        "generated {} path(s) from {} entry point(s)",
        doc.paths.len(),
        entries.len()
    );
    Ok(doc)
}

/// Fresh copy of the component table with empty property maps dropped.
pub fn normalize_components(schemas: &IndexMap<String, ObjectType>) -> IndexMap<String, ObjectType> {
    schemas
        .iter()
        .map(|(name, schema)| (name.clone(), schema.normalized()))
        .collect()
}

/// Generate a document and merge it into the persisted one.
///
/// Returns the written path, or `None` when the config is disabled.
pub fn run_pass(dump: &RouteDump, config: &DocsConfig) -> Result<Option<PathBuf>, GenerateError> {
    if !config.enabled {
        info!("document generation disabled, skipping");
        return Ok(None);
    }
    let doc = generate(&dump.entries, &dump.schemas, config)?;
    let path = write_document(doc, config)?;
    Ok(Some(path))
}
