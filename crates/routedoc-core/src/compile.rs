use std::sync::LazyLock;

use indexmap::IndexMap;
use log::debug;
use regex::Regex;

use crate::document::{
    Operation, Parameter, ParameterLocation, ParameterSchema, PathItem, Response,
};
use crate::status::HttpStatus;
use crate::tree::RouteRecord;

static PATH_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^}]*)\}").expect("path parameter pattern is valid"));

/// Name given to the inferred request body parameter.
pub const BODY_PARAM_NAME: &str = "request";

/// Prefix of references to registered component schemas.
pub const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// Compile route records into path items, grouped by path in first-seen order.
pub fn compile(records: &[RouteRecord]) -> IndexMap<String, PathItem> {
    let mut paths: IndexMap<String, PathItem> = IndexMap::new();

    for record in records {
        let item = paths.entry(record.path.clone()).or_default();
        item.operations.insert(record.method.clone(), build_operation(record));
        item.parameters.extend(path_parameters(&record.path));
        item.parameters.extend(body_parameter(record));
    }

    debug!("compiled {} record(s) into {} path(s)", records.len(), paths.len());
    paths
}

/// Union independently compiled batches; a later batch wins per path and key.
pub fn combine_batches<I>(batches: I) -> IndexMap<String, PathItem>
where
    I: IntoIterator<Item = IndexMap<String, PathItem>>,
{
    let mut combined: IndexMap<String, PathItem> = IndexMap::new();

    for batch in batches {
        for (path, item) in batch {
            match combined.get_mut(&path) {
                Some(existing) => {
                    debug!("path {path} declared by more than one batch, later wins");
                    existing.operations.extend(item.operations);
                    existing.parameters = item.parameters;
                }
                None => {
                    combined.insert(path, item);
                }
            }
        }
    }

    combined
}

fn build_operation(record: &RouteRecord) -> Operation {
    let responses = record.status.as_deref().map(|name| {
        let status = HttpStatus::from_name(name).unwrap_or(HttpStatus::OK);
        let mut responses = IndexMap::new();
        responses.insert(
            HttpStatus::resolve(Some(name)).to_string(),
            Response {
                description: status.name().to_string(),
            },
        );
        responses
    });

    Operation {
        tags: (!record.tags.is_empty()).then(|| record.tags.clone()),
        summary: record.summary.clone(),
        description: record.description.clone(),
        responses,
    }
}

/// One required string parameter per `{name}` segment, left to right.
pub fn path_parameters(path: &str) -> Vec<Parameter> {
    PATH_PARAM
        .captures_iter(path)
        .map(|caps| Parameter {
            name: caps
                .get(1)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
            location: ParameterLocation::Path,
            required: Some(true),
            param_type: Some("string".to_string()),
            schema: None,
        })
        .collect()
}

/// The request body parameter. Only `post` routes carry one.
pub fn body_parameter(record: &RouteRecord) -> Option<Parameter> {
    if record.method != "post" {
        return None;
    }

    let reference = match &record.body.name {
        Some(name) => Some(format!("{DEFINITIONS_PREFIX}{name}")),
        None => record.body.reference.clone(),
    };

    Some(Parameter {
        name: BODY_PARAM_NAME.to_string(),
        location: ParameterLocation::Body,
        required: None,
        param_type: None,
        schema: Some(ParameterSchema {
            schema_type: record.body.body_type.clone(),
            reference,
        }),
    })
}
