use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::document::SpecDocument;
use crate::error::SerializeError;

/// Text format of the persisted document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Json,
    #[default]
    Yaml,
}

impl Format {
    /// File extension used for the document.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for Format {
    type Err = SerializeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            other => Err(SerializeError::UnknownFormat(other.to_string())),
        }
    }
}

/// Render a document as pretty-printed text. Absent fields are omitted.
pub fn serialize(doc: &SpecDocument, format: Format) -> Result<String, SerializeError> {
    let text = match format {
        Format::Json => {
            let mut text = serde_json::to_string_pretty(doc)?;
            text.push('\n');
            text
        }
        Format::Yaml => serde_yaml_ng::to_string(doc)?,
    };
    Ok(text)
}

/// Parse a previously persisted document.
pub fn deserialize(text: &str, format: Format) -> Result<SpecDocument, SerializeError> {
    let doc = match format {
        Format::Json => serde_json::from_str(text)?,
        Format::Yaml => serde_yaml_ng::from_str(text)?,
    };
    Ok(doc)
}
