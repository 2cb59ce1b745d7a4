use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReduceError {
    #[error("malformed route path after normalization: {path}")]
    MalformedPath { path: String },
}

#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("failed to process YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to process JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown output format: {0} (expected json or yaml)")]
    UnknownFormat(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml_ng::Error,
    },
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error(
        "cannot determine where to write the document: no output path or build directory \
         is configured and no res/resources directory exists under {searched}"
    )]
    UnresolvableDirectory { searched: PathBuf },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("serialize error: {0}")]
    Serialize(#[from] SerializeError),
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("reduce error: {0}")]
    Reduce(#[from] ReduceError),

    #[error("output error: {0}")]
    Output(#[from] OutputError),
}
