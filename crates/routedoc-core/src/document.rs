use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Info object describing the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub version: String,
}

/// The generated specification document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecDocument {
    pub info: Info,

    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,

    #[serde(default)]
    pub components: Components,
}

impl SpecDocument {
    pub fn new(info: Info) -> Self {
        Self {
            info,
            paths: IndexMap::new(),
            components: Components::default(),
        }
    }

    /// Sort component schemas by name so output does not depend on discovery order.
    pub fn sort_schemas(&mut self) {
        self.components.schemas.sort_keys();
    }
}

/// Operations of one path keyed by lowercase method, plus the aggregated
/// parameters of all of them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathItem {
    #[serde(flatten)]
    pub operations: IndexMap<String, Operation>,

    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

/// A single operation under a path.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Operation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responses: Option<IndexMap<String, Response>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub description: String,
}

/// Parameter location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Body,
}

/// A path or body parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,

    #[serde(rename = "in")]
    pub location: ParameterLocation,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub param_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<ParameterSchema>,
}

/// Schema of a body parameter: a type plus an optional reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSchema {
    #[serde(rename = "type")]
    pub schema_type: String,

    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// Components object holding the named schemas.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub schemas: IndexMap<String, ObjectType>,
}

/// A component schema: a type name and, for objects, its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectType {
    #[serde(rename = "type")]
    pub object_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, ObjectType>>,
}

impl ObjectType {
    pub fn primitive(object_type: impl Into<String>) -> Self {
        Self {
            object_type: object_type.into(),
            properties: None,
        }
    }

    pub fn object(properties: IndexMap<String, ObjectType>) -> Self {
        Self {
            object_type: "object".to_string(),
            properties: Some(properties),
        }
    }

    /// Rebuild this schema with empty property maps dropped at every level.
    pub fn normalized(&self) -> Self {
        let properties = self
            .properties
            .as_ref()
            .filter(|props| !props.is_empty())
            .map(|props| {
                props
                    .iter()
                    .map(|(name, prop)| (name.clone(), prop.normalized()))
                    .collect()
            });
        Self {
            object_type: self.object_type.clone(),
            properties,
        }
    }
}
