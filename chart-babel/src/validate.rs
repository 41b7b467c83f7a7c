//! Canonical-model validation
//!
//! Two gates live here. [`from_value`] is the boundary between loosely-typed
//! JSON input and the typed model: it inspects the candidate's keys in a
//! fixed order (tabular, hierarchical, flow-graph, word-list) and converts
//! leniently, the first failing rule winning. [`check`] gatekeeps typed data
//! before a session installs it as current.
//!
//! No shape coercion between the four kinds happens here; producing the right
//! shape is the parsers' job.

use crate::error::FormatError;
use crate::model::{
    ChartData, Dataset, FlowGraph, FlowLink, FlowNode, NodeRef, Table, TreeNode, Word, WordList,
};
use serde_json::Value;

/// Convert a parsed JSON value into canonical chart data.
///
/// Key inspection order and error messages follow the validator contract:
/// `labels`+`datasets`, then `name`+`children`, then `nodes`+`links`, then
/// `words`, otherwise `InvalidShape("unrecognized data format")`.
pub fn from_value(value: &Value) -> Result<ChartData, FormatError> {
    if value.is_null() {
        return Err(FormatError::InvalidShape("data is empty".to_string()));
    }
    let Some(obj) = value.as_object() else {
        return Err(FormatError::InvalidShape(
            "unrecognized data format".to_string(),
        ));
    };

    if obj.contains_key("labels") && obj.contains_key("datasets") {
        return table_from_value(obj).map(ChartData::Tabular);
    }
    if obj.contains_key("name") && obj.contains_key("children") {
        return Ok(ChartData::Hierarchy(tree_from_value(value)));
    }
    if obj.contains_key("nodes") && obj.contains_key("links") {
        return flow_from_value(obj).map(ChartData::Flow);
    }
    if obj.contains_key("words") {
        return words_from_value(&obj["words"]).map(ChartData::Words);
    }

    Err(FormatError::InvalidShape(
        "unrecognized data format".to_string(),
    ))
}

/// Check invariants on already-typed data before it is accepted as current.
pub fn check(data: &ChartData) -> Result<(), FormatError> {
    match data {
        ChartData::Tabular(table) => {
            for (i, dataset) in table.datasets.iter().enumerate() {
                if dataset.data.len() != table.labels.len() {
                    return Err(FormatError::InvalidShape(format!(
                        "dataset {} misaligned with labels ({} values for {} labels)",
                        i + 1,
                        dataset.data.len(),
                        table.labels.len()
                    )));
                }
            }
            Ok(())
        }
        ChartData::Flow(flow) => {
            for (i, link) in flow.links.iter().enumerate() {
                if link.source.resolve(&flow.nodes).is_none()
                    || link.target.resolve(&flow.nodes).is_none()
                {
                    return Err(FormatError::InvalidShape(format!(
                        "link {} references undeclared node",
                        i + 1
                    )));
                }
            }
            Ok(())
        }
        // Accepted as-is: the tree structure is trusted and word lists carry
        // no cross-references.
        ChartData::Hierarchy(_) | ChartData::Words(_) => Ok(()),
    }
}

fn table_from_value(obj: &serde_json::Map<String, Value>) -> Result<Table, FormatError> {
    let Some(labels) = obj["labels"].as_array() else {
        return Err(FormatError::InvalidShape(
            "labels must be an array".to_string(),
        ));
    };
    let Some(datasets) = obj["datasets"].as_array() else {
        return Err(FormatError::InvalidShape(
            "datasets must be an array".to_string(),
        ));
    };

    let mut converted = Vec::with_capacity(datasets.len());
    for (i, ds) in datasets.iter().enumerate() {
        let data = ds.get("data").and_then(Value::as_array).ok_or_else(|| {
            FormatError::InvalidShape(format!("dataset {} missing data array", i + 1))
        })?;
        converted.push(Dataset {
            label: ds
                .get("label")
                .map(value_to_string)
                .unwrap_or_default(),
            data: data.iter().map(value_to_f64).collect(),
        });
    }

    Ok(Table {
        labels: labels.iter().map(value_to_string).collect(),
        datasets: converted,
    })
}

fn tree_from_value(value: &Value) -> TreeNode {
    TreeNode {
        name: value.get("name").map(value_to_string).unwrap_or_default(),
        value: value.get("value").map(value_to_f64).unwrap_or(0.0),
        children: value
            .get("children")
            .and_then(Value::as_array)
            .map(|children| {
                children
                    .iter()
                    .filter(|c| c.is_object())
                    .map(tree_from_value)
                    .collect()
            })
            .unwrap_or_default(),
    }
}

fn flow_from_value(obj: &serde_json::Map<String, Value>) -> Result<FlowGraph, FormatError> {
    let nodes = obj["nodes"]
        .as_array()
        .ok_or_else(|| FormatError::InvalidShape("nodes must be an array".to_string()))?
        .iter()
        .map(|n| FlowNode {
            name: n.get("name").map(value_to_string).unwrap_or_default(),
        })
        .collect();

    let raw_links = obj["links"]
        .as_array()
        .ok_or_else(|| FormatError::InvalidShape("links must be an array".to_string()))?;
    let mut links = Vec::with_capacity(raw_links.len());
    for (i, link) in raw_links.iter().enumerate() {
        let source = link.get("source").and_then(node_ref_from_value);
        let target = link.get("target").and_then(node_ref_from_value);
        let (Some(source), Some(target)) = (source, target) else {
            return Err(FormatError::InvalidShape(format!(
                "link {} has an invalid source or target reference",
                i + 1
            )));
        };
        links.push(FlowLink {
            source,
            target,
            value: link.get("value").map(value_to_f64).unwrap_or(0.0),
        });
    }

    Ok(FlowGraph { nodes, links })
}

fn words_from_value(value: &Value) -> Result<WordList, FormatError> {
    let entries = value
        .as_array()
        .ok_or_else(|| FormatError::InvalidShape("words must be an array".to_string()))?;

    let mut words = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        if !entry.is_object() {
            return Err(FormatError::InvalidShape(format!(
                "word {} must be an object with text and weight",
                i + 1
            )));
        }
        words.push(Word {
            text: entry.get("text").map(value_to_string).unwrap_or_default(),
            weight: entry.get("weight").map(value_to_f64).unwrap_or(0.0),
        });
    }
    Ok(WordList { words })
}

fn node_ref_from_value(value: &Value) -> Option<NodeRef> {
    match value {
        Value::Number(n) => n.as_u64().map(|i| NodeRef::Index(i as usize)),
        Value::String(s) => Some(NodeRef::Name(s.clone())),
        _ => None,
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Lenient numeric coercion: JSON numbers pass through, numeric strings are
/// parsed like any other cell, everything else is 0.
fn value_to_f64(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => crate::common::parse_number(s),
        _ => 0.0,
    }
}
