//! Canonical data model
//!
//! Every parser converges on one of four canonical shapes, and every exporter
//! consumes them. The shapes are mutually exclusive per dataset and carried as
//! a tagged union ([`ChartData`]) so that downstream code matches on an
//! explicit discriminant instead of sniffing object keys.
//!
//! On the wire (JSON import/export) the union is untagged: the serialized
//! forms are the plain `{labels, datasets}` / `{name, value, children}` /
//! `{nodes, links}` / `{words}` objects chart renderers consume directly.

use serde::{Deserialize, Serialize};

/// A canonical dataset, one of the four supported shapes.
///
/// All variants own their data fully, so `Clone` is a deep copy: a cloned
/// value shares no mutable state with the original.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartData {
    /// Category axis + one numeric series per column
    Tabular(Table),
    /// Nested breakdowns (treemap, sunburst)
    Hierarchy(TreeNode),
    /// Node/link flow graphs (sankey)
    Flow(FlowGraph),
    /// Weighted word lists (word cloud)
    Words(WordList),
}

impl ChartData {
    /// Short name of the shape, for logs and CLI output.
    pub fn kind(&self) -> &'static str {
        match self {
            ChartData::Tabular(_) => "tabular",
            ChartData::Hierarchy(_) => "hierarchical",
            ChartData::Flow(_) => "flow-graph",
            ChartData::Words(_) => "word-list",
        }
    }

    /// Borrow the tabular payload, if this is tabular data.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            ChartData::Tabular(table) => Some(table),
            _ => None,
        }
    }
}

/// Tabular data: `labels` is the category axis, each dataset is one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// A single named series of numbers, aligned with the table's labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
}

/// A node in a hierarchical breakdown. Leaves have no children and
/// serialize without a `children` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub name: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

/// Flow-graph data: declared nodes plus value-weighted links between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub links: Vec<FlowLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowLink {
    pub source: NodeRef,
    pub target: NodeRef,
    pub value: f64,
}

/// Reference to a declared flow node, either positional or by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeRef {
    Index(usize),
    Name(String),
}

impl NodeRef {
    /// Resolve this reference against the declared node list.
    pub fn resolve(&self, nodes: &[FlowNode]) -> Option<usize> {
        match self {
            NodeRef::Index(i) => (*i < nodes.len()).then_some(*i),
            NodeRef::Name(name) => nodes.iter().position(|n| n.name == *name),
        }
    }
}

/// Word-cloud data: weighted words in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordList {
    pub words: Vec<Word>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    pub weight: f64,
}
