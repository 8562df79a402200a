//! Shaping flat parent/child records into hierarchies.
//!
//! Records are JSON objects that carry an id field and a parent-id field.
//! Ids compare loosely: the number `3` and the string `"3"` name the same
//! node.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Names of the id and parent-id fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeFields {
    pub parent: String,
    pub id: String,
}

impl Default for TreeFields {
    fn default() -> Self {
        Self {
            parent: "pid".to_string(),
            id: "id".to_string(),
        }
    }
}

/// Canonical form of an id used for comparisons.
fn id_key(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(u8::from(*b).to_string()),
        _ => None,
    }
}

fn is_root_parent(value: Option<&Value>) -> bool {
    match id_key(value) {
        None => true,
        Some(key) => key.is_empty() || key == "0",
    }
}

/// Lists the descendants of `root` depth first, each tagged with `"level"`.
///
/// Direct children of `root` are level 0. Nodes at level `max_depth` and
/// below are left out. Non-object records are ignored.
pub fn flatten(
    records: &[Value],
    fields: &TreeFields,
    root: &Value,
    max_depth: usize,
) -> Vec<Value> {
    let mut used = vec![false; records.len()];
    let mut out = Vec::new();

    if let Some(root) = id_key(Some(root)) {
        flatten_level(records, fields, &root, 0, max_depth, &mut used, &mut out);
    }

    out
}

fn flatten_level(
    records: &[Value],
    fields: &TreeFields,
    parent: &str,
    level: usize,
    max_depth: usize,
    used: &mut [bool],
    out: &mut Vec<Value>,
) {
    if level >= max_depth {
        return;
    }

    for (index, record) in records.iter().enumerate() {
        if used[index] {
            continue;
        }
        let Some(map) = record.as_object() else {
            continue;
        };
        if id_key(map.get(&fields.parent)).as_deref() != Some(parent) {
            continue;
        }

        used[index] = true;

        let mut node = map.clone();
        node.insert("level".to_string(), Value::from(level));
        out.push(Value::Object(node));

        if let Some(id) = id_key(map.get(&fields.id)) {
            flatten_level(records, fields, &id, level + 1, max_depth, used, out);
        }
    }
}

/// Builds a nested tree where every node carries a `"child"` array.
///
/// Roots are records whose parent is missing, empty or `0`. Records whose
/// parent does not exist, and cycles detached from any root, are dropped.
pub fn nest(records: &[Value], fields: &TreeFields) -> Vec<Value> {
    let nodes: Vec<&Map<String, Value>> = records.iter().filter_map(Value::as_object).collect();

    let mut children: HashMap<String, Vec<usize>> = HashMap::new();
    let mut roots = Vec::new();
    for (index, node) in nodes.iter().enumerate() {
        let parent = node.get(&fields.parent);
        if is_root_parent(parent) {
            roots.push(index);
        } else if let Some(parent) = id_key(parent) {
            children.entry(parent).or_default().push(index);
        }
    }

    let mut visited = vec![false; nodes.len()];
    roots
        .into_iter()
        .filter_map(|index| build_node(index, &nodes, &children, fields, &mut visited))
        .collect()
}

fn build_node(
    index: usize,
    nodes: &[&Map<String, Value>],
    children: &HashMap<String, Vec<usize>>,
    fields: &TreeFields,
    visited: &mut [bool],
) -> Option<Value> {
    if visited[index] {
        return None;
    }
    visited[index] = true;

    let mut node = nodes[index].clone();
    let kids: Vec<Value> = id_key(node.get(&fields.id))
        .and_then(|id| children.get(&id))
        .map(|indices| {
            indices
                .iter()
                .filter_map(|&child| build_node(child, nodes, children, fields, visited))
                .collect()
        })
        .unwrap_or_default();

    node.insert("child".to_string(), Value::Array(kids));
    Some(Value::Object(node))
}
