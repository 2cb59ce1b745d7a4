//! Route tree handed over by the route producer, and the flat records the
//! reducer turns it into.

use serde::{Deserialize, Serialize};

/// A node of the route tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RouteNode {
    Group(RouteGroup),
    Endpoint(Endpoint),
    /// Anything the producer could not classify.
    #[serde(other)]
    Other,
}

/// A path prefix grouping nested routes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RouteGroup {
    #[serde(default)]
    pub path: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default)]
    pub children: Vec<RouteNode>,
}

/// A single handler declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Lowercase HTTP verb.
    pub method: String,

    #[serde(default)]
    pub body: BodyDescriptor,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Response status name, e.g. `Created`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Endpoint {
    pub fn new(method: impl Into<String>, path: Option<&str>) -> Self {
        Self {
            path: path.map(String::from),
            method: method.into(),
            body: BodyDescriptor::default(),
            tags: Vec::new(),
            summary: None,
            description: None,
            status: None,
        }
    }
}

impl RouteNode {
    pub fn group(path: impl Into<String>, children: Vec<RouteNode>) -> Self {
        RouteNode::Group(RouteGroup {
            path: path.into(),
            tags: Vec::new(),
            children,
        })
    }

    pub fn endpoint(method: impl Into<String>, path: Option<&str>) -> Self {
        RouteNode::Endpoint(Endpoint::new(method, path))
    }

    pub fn is_group(&self) -> bool {
        matches!(self, RouteNode::Group(_))
    }
}

/// Request body shape of an endpoint.
///
/// `name` refers to a registered component and wins over `ref` when both are set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyDescriptor {
    #[serde(rename = "type", default = "default_body_type")]
    pub body_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

fn default_body_type() -> String {
    "object".to_string()
}

impl Default for BodyDescriptor {
    fn default() -> Self {
        Self {
            body_type: default_body_type(),
            name: None,
            reference: None,
        }
    }
}

impl BodyDescriptor {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn inline(reference: impl Into<String>) -> Self {
        Self {
            reference: Some(reference.into()),
            ..Self::default()
        }
    }
}

/// One fully-qualified route produced by the reducer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteRecord {
    pub path: String,
    pub method: String,
    pub body: BodyDescriptor,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
