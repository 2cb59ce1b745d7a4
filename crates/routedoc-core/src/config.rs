use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::document::Info;
use crate::error::ConfigError;
use crate::serialize::Format;

/// Top-level project configuration loaded from `.routedoc.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// A disabled configuration turns every pass into a no-op.
    pub enabled: bool,
    pub title: String,
    pub description: Option<String>,
    pub version: String,
    pub format: Format,
    pub output: OutputConfig,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: "Open API Specification".to_string(),
            description: None,
            version: "1.0.0".to_string(),
            format: Format::Yaml,
            output: OutputConfig::default(),
        }
    }
}

impl DocsConfig {
    pub fn info(&self) -> Info {
        Info {
            title: self.title.clone(),
            description: self.description.clone(),
            version: self.version.clone(),
        }
    }
}

/// Where the document is written.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Explicit output directory; wins over everything else.
    pub file_path: Option<PathBuf>,
    /// Write under `<build_path>/openapi/` instead of the resources directory.
    pub save_in_build: bool,
    pub build_path: PathBuf,
    /// Source directory of the module; its `main` ancestor is searched for resources.
    pub module_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_path: None,
            save_in_build: false,
            build_path: PathBuf::from("build"),
            module_path: PathBuf::from("."),
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".routedoc.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<DocsConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: DocsConfig =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# routedoc configuration
enabled: true
title: Open API Specification
# description: What this API does
version: 1.0.0
format: yaml          # json | yaml

output:
  # file_path: docs/api          # write <file_path>/openapi.<format>
  save_in_build: false           # true = write <build_path>/openapi/openapi.<format>
  build_path: build
  module_path: src/main/kotlin   # resources are looked up next to the `main` directory
"#
}
