//! Locating the persisted document and the read-merge-write pass over it.

use std::ffi::OsStr;
use std::fs;
use std::path::{Component, Path, PathBuf};

use log::{debug, info, warn};

use crate::config::DocsConfig;
use crate::document::SpecDocument;
use crate::error::OutputError;
use crate::merge::merge;
use crate::serialize::{Format, deserialize, serialize};

/// Base name of the written document.
pub const DOCUMENT_STEM: &str = "openapi";

const RESOURCE_DIR_NAMES: [&str; 2] = ["res", "resources"];

/// Resolve the document path, creating its directory where needed.
pub fn locate_output_file(config: &DocsConfig) -> Result<PathBuf, OutputError> {
    let file_name = format!("{DOCUMENT_STEM}.{}", config.format.extension());
    let output = &config.output;

    let dir = if let Some(dir) = &output.file_path {
        dir.clone()
    } else if output.save_in_build {
        output.build_path.join(DOCUMENT_STEM)
    } else {
        let main_dir = main_source_dir(&output.module_path);
        let resources = find_resources_dir(&main_dir).ok_or_else(|| {
            OutputError::UnresolvableDirectory {
                searched: main_dir.clone(),
            }
        })?;
        resources.join("raw")
    };

    create_dir(&dir)?;
    Ok(dir.join(file_name))
}

/// `module_path` cut right after its first `main` component.
fn main_source_dir(module_path: &Path) -> PathBuf {
    let mut dir = PathBuf::new();
    for component in module_path.components() {
        dir.push(component);
        if component == Component::Normal(OsStr::new("main")) {
            return dir;
        }
    }
    module_path.join("main")
}

fn find_resources_dir(main_dir: &Path) -> Option<PathBuf> {
    let entries = fs::read_dir(main_dir).ok()?;
    entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .find(|path| {
            path.is_dir()
                && path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| RESOURCE_DIR_NAMES.contains(&n))
        })
}

fn create_dir(dir: &Path) -> Result<(), OutputError> {
    fs::create_dir_all(dir).map_err(|source| OutputError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

/// Combine the incoming document with whatever is persisted in `existing`.
///
/// Missing or unparsable persisted text means there is nothing to merge with.
pub fn reconcile(existing: Option<&str>, incoming: SpecDocument, format: Format) -> SpecDocument {
    let Some(text) = existing else {
        debug!("no persisted document, using generated one");
        let mut doc = incoming;
        doc.sort_schemas();
        return doc;
    };

    match deserialize(text, format) {
        Ok(previous) => merge(&previous, &incoming),
        Err(e) => {
            warn!("ignoring unreadable persisted document: {e}");
            let mut doc = incoming;
            doc.sort_schemas();
            doc
        }
    }
}

/// Merge `doc` into the persisted document and overwrite it. Returns the path written.
pub fn write_document(doc: SpecDocument, config: &DocsConfig) -> Result<PathBuf, OutputError> {
    let path = locate_output_file(config)?;

    let existing = match fs::read_to_string(&path) {
        Ok(text) => Some(text),
        Err(e) => {
            debug!("cannot read {}: {e}", path.display());
            None
        }
    };

    let merged = reconcile(existing.as_deref(), doc, config.format);
    let text = serialize(&merged, config.format)?;

    fs::write(&path, text).map_err(|source| OutputError::Io {
        path: path.clone(),
        source,
    })?;

    info!(
        "wrote {} path(s) and {} schema(s) to {}",
        merged.paths.len(),
        merged.components.schemas.len(),
        path.display()
    );
    Ok(path)
}
