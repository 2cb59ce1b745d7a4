use indexmap::IndexSet;
use log::debug;

use crate::error::ReduceError;
use crate::tree::{RouteGroup, RouteNode, RouteRecord};

/// Path prefix given to endpoints declared outside of any group.
pub const IMPLICIT_ROOT_PATH: &str = "/";

/// Flatten a route tree into fully-qualified, normalized route records.
pub fn reduce(root: &RouteNode) -> Result<Vec<RouteRecord>, ReduceError> {
    Ok(reduce_batches(root)?.into_iter().flatten().collect())
}

/// Flatten a route tree into one batch of records per top-level group.
///
/// A root group with a path of its own is a single batch. A pathless root is
/// a routing block: each child group is a batch, and stray endpoints end up in
/// a trailing batch under `/`.
pub fn reduce_batches(root: &RouteNode) -> Result<Vec<Vec<RouteRecord>>, ReduceError> {
    top_level_groups(root)
        .iter()
        .map(|group| {
            let mut records = Vec::new();
            walk(&group.path, &group.tags, &group.children, &mut records);
            clean_paths(records)
        })
        .collect()
}

/// Resolve the groups a root node contributes.
fn top_level_groups(root: &RouteNode) -> Vec<RouteGroup> {
    match root {
        RouteNode::Group(root) if !root.path.is_empty() => vec![root.clone()],
        RouteNode::Group(root) => wrap_stray_children(&root.children)
            .into_iter()
            .map(|group| RouteGroup {
                tags: merge_tags(&root.tags, &group.tags),
                ..group
            })
            .collect(),
        RouteNode::Endpoint(_) => wrap_stray_children(std::slice::from_ref(root)),
        RouteNode::Other => Vec::new(),
    }
}

/// Keep explicit groups, and collect everything else under an implicit `/` group.
fn wrap_stray_children(children: &[RouteNode]) -> Vec<RouteGroup> {
    let (groups, stray): (Vec<&RouteNode>, Vec<&RouteNode>) =
        children.iter().partition(|child| child.is_group());

    let mut result: Vec<RouteGroup> = groups
        .into_iter()
        .filter_map(|node| match node {
            RouteNode::Group(group) => Some(group.clone()),
            _ => None,
        })
        .collect();

    if !stray.is_empty() {
        debug!(
            "wrapping {} top-level node(s) under implicit root group",
            stray.len()
        );
        result.push(RouteGroup {
            path: IMPLICIT_ROOT_PATH.to_string(),
            tags: Vec::new(),
            children: stray.into_iter().cloned().collect(),
        });
    }

    result
}

fn walk(prefix: &str, tags: &[String], children: &[RouteNode], out: &mut Vec<RouteRecord>) {
    for child in children {
        match child {
            RouteNode::Group(group) => {
                let path = format!("{prefix}{}", group.path);
                let tags = merge_tags(tags, &group.tags);
                walk(&path, &tags, &group.children, out);
            }
            RouteNode::Endpoint(endpoint) => {
                let path = format!("{prefix}{}", endpoint.path.as_deref().unwrap_or(""));
                debug!("route {} {}", endpoint.method, path);
                out.push(RouteRecord {
                    path,
                    method: endpoint.method.clone(),
                    body: endpoint.body.clone(),
                    tags: merge_tags(tags, &endpoint.tags),
                    summary: endpoint.summary.clone(),
                    description: endpoint.description.clone(),
                    status: endpoint.status.clone(),
                });
            }
            RouteNode::Other => {}
        }
    }
}

/// Inherited tags first, then own tags, without duplicates.
fn merge_tags(inherited: &[String], own: &[String]) -> Vec<String> {
    inherited
        .iter()
        .chain(own)
        .cloned()
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}

/// Collapse the `//` left behind by concatenating path fragments.
///
/// A single pass only: runs of three or more separators are rejected.
pub fn clean_paths(records: Vec<RouteRecord>) -> Result<Vec<RouteRecord>, ReduceError> {
    records
        .into_iter()
        .map(|mut record| {
            let cleaned = record.path.replace("//", "/");
            if cleaned.contains("//") {
                return Err(ReduceError::MalformedPath { path: record.path });
            }
            record.path = cleaned;
            Ok(record)
        })
        .collect()
}
