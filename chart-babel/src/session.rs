//! Session state and bounded history
//!
//! A [`Session`] is the caller-owned replacement for the original global
//! "current data" slot: ingestion and export operate on a session the caller
//! passes around, so independent sessions never see each other's state.
//!
//! Every installed dataset is recorded at the front of a bounded history
//! (newest first), so the front entry mirrors the current dataset. When the
//! history exceeds its capacity the oldest entry is evicted. Snapshots are
//! deep copies by construction: `ChartData` owns all of its contents, so a
//! clone shares nothing with the value it came from.

use crate::detect;
use crate::error::FormatError;
use crate::format::FormatId;
use crate::model::ChartData;
use crate::registry::FormatRegistry;
use crate::validate;
use std::collections::VecDeque;

/// Default number of history snapshots kept per session.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// A single ingestion context: one current dataset plus its undo history.
pub struct Session {
    current: Option<ChartData>,
    history: VecDeque<ChartData>,
    capacity: usize,
}

impl Session {
    /// Create a session with the default history capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create a session keeping at most `capacity` history snapshots.
    pub fn with_capacity(capacity: usize) -> Self {
        Session {
            current: None,
            history: VecDeque::new(),
            capacity,
        }
    }

    /// Validate and install `data` as current.
    ///
    /// The installed dataset is recorded at the front of the history; beyond
    /// capacity the oldest snapshot is evicted. Rejected data leaves the
    /// session untouched.
    pub fn set_data(&mut self, data: ChartData) -> Result<&ChartData, FormatError> {
        validate::check(&data)?;
        self.history.push_front(data.clone());
        self.history.truncate(self.capacity);
        self.current = Some(data);
        Ok(self.current.as_ref().expect("current was just set"))
    }

    /// Deep copy of the current dataset for consumers (renderers must never
    /// be able to mutate pipeline state).
    pub fn data(&self) -> Option<ChartData> {
        self.current.clone()
    }

    /// Borrow the current dataset.
    pub fn current(&self) -> Option<&ChartData> {
        self.current.as_ref()
    }

    /// History snapshots, newest first. The front entry mirrors the current
    /// dataset.
    pub fn history(&self) -> impl Iterator<Item = &ChartData> {
        self.history.iter()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Discard the current dataset and restore the previous snapshot.
    ///
    /// Returns `None` (leaving the session untouched) when there is no
    /// earlier state to fall back to.
    pub fn undo(&mut self) -> Option<&ChartData> {
        if self.history.len() < 2 {
            return None;
        }
        self.history.pop_front();
        self.current = self.history.front().cloned();
        self.current.as_ref()
    }

    /// Detect, parse, validate and install in one step.
    pub fn ingest(
        &mut self,
        registry: &FormatRegistry,
        content: &str,
        hint: Option<&str>,
    ) -> Result<&ChartData, FormatError> {
        let id = detect::detect(content, hint)?;
        let data = registry.parse(content, id)?;
        self.set_data(data)
    }

    /// Serialize the current dataset in the requested format.
    pub fn export(
        &self,
        registry: &FormatRegistry,
        id: FormatId,
    ) -> Result<String, FormatError> {
        let data = self.current.as_ref().ok_or_else(|| {
            FormatError::NotSupported("no data in session to export".to_string())
        })?;
        registry.serialize(data, id)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Built-in sample datasets, one per canonical shape.
pub mod samples {
    use crate::model::{
        ChartData, Dataset, FlowGraph, FlowLink, FlowNode, NodeRef, Table, TreeNode, Word,
        WordList,
    };

    /// Minimal two-series tabular dataset for initial display.
    pub fn default_table() -> ChartData {
        ChartData::Tabular(Table {
            labels: ["A", "B", "C", "D", "E"].map(String::from).to_vec(),
            datasets: vec![
                Dataset {
                    label: "Series 1".to_string(),
                    data: vec![30.0, 50.0, 40.0, 70.0, 25.0],
                },
                Dataset {
                    label: "Series 2".to_string(),
                    data: vec![45.0, 35.0, 60.0, 25.0, 55.0],
                },
            ],
        })
    }

    /// Monthly sales, two years.
    pub fn sales() -> ChartData {
        ChartData::Tabular(Table {
            labels: [
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov",
                "Dec",
            ]
            .map(String::from)
            .to_vec(),
            datasets: vec![
                Dataset {
                    label: "Sales 2024".to_string(),
                    data: vec![
                        12000.0, 19000.0, 15000.0, 25000.0, 22000.0, 30000.0, 28000.0, 35000.0,
                        32000.0, 40000.0, 38000.0, 45000.0,
                    ],
                },
                Dataset {
                    label: "Sales 2023".to_string(),
                    data: vec![
                        10000.0, 15000.0, 12000.0, 20000.0, 18000.0, 25000.0, 23000.0, 28000.0,
                        26000.0, 32000.0, 30000.0, 38000.0,
                    ],
                },
            ],
        })
    }

    /// Company org breakdown for treemap/sunburst charts.
    pub fn hierarchy() -> ChartData {
        fn node(name: &str, value: f64, children: Vec<TreeNode>) -> TreeNode {
            TreeNode {
                name: name.to_string(),
                value,
                children,
            }
        }
        ChartData::Hierarchy(node(
            "Company",
            1000.0,
            vec![
                node(
                    "Engineering",
                    400.0,
                    vec![
                        node("Frontend", 150.0, vec![]),
                        node("Backend", 180.0, vec![]),
                        node("DevOps", 70.0, vec![]),
                    ],
                ),
                node(
                    "Marketing",
                    250.0,
                    vec![
                        node("Digital", 120.0, vec![]),
                        node("Content", 80.0, vec![]),
                        node("SEO", 50.0, vec![]),
                    ],
                ),
                node(
                    "Sales",
                    200.0,
                    vec![node("Direct", 120.0, vec![]), node("Partner", 80.0, vec![])],
                ),
                node(
                    "HR",
                    150.0,
                    vec![
                        node("Recruiting", 80.0, vec![]),
                        node("Training", 70.0, vec![]),
                    ],
                ),
            ],
        ))
    }

    /// Checkout funnel for sankey charts.
    pub fn flow() -> ChartData {
        let link = |source: usize, target: usize, value: f64| FlowLink {
            source: NodeRef::Index(source),
            target: NodeRef::Index(target),
            value,
        };
        ChartData::Flow(FlowGraph {
            nodes: [
                "Website Visitors",
                "Product Page",
                "Add to Cart",
                "Checkout",
                "Purchase",
                "Bounce",
            ]
            .map(|name| FlowNode {
                name: name.to_string(),
            })
            .to_vec(),
            links: vec![
                link(0, 1, 5000.0),
                link(0, 5, 3000.0),
                link(1, 2, 2500.0),
                link(1, 5, 2500.0),
                link(2, 3, 1500.0),
                link(2, 5, 1000.0),
                link(3, 4, 1000.0),
                link(3, 5, 500.0),
            ],
        })
    }

    /// Technology keyword weights for word clouds.
    pub fn word_frequencies() -> ChartData {
        let words = [
            ("JavaScript", 100.0),
            ("Python", 90.0),
            ("React", 85.0),
            ("Node.js", 75.0),
            ("TypeScript", 70.0),
            ("Rust", 88.0),
            ("HTML", 80.0),
            ("CSS", 78.0),
            ("SQL", 60.0),
            ("Docker", 50.0),
            ("Git", 72.0),
            ("API", 68.0),
            ("Cloud", 55.0),
            ("Machine Learning", 72.0),
            ("Data", 85.0),
            ("Database", 62.0),
        ];
        ChartData::Words(WordList {
            words: words
                .into_iter()
                .map(|(text, weight)| Word {
                    text: text.to_string(),
                    weight,
                })
                .collect(),
        })
    }

    /// Look up a sample dataset by name.
    pub fn by_name(name: &str) -> Option<ChartData> {
        match name {
            "default" => Some(default_table()),
            "sales" => Some(sales()),
            "hierarchy" => Some(hierarchy()),
            "flow" => Some(flow()),
            "wordfreq" => Some(word_frequencies()),
            _ => None,
        }
    }

    /// Names accepted by [`by_name`].
    pub const NAMES: [&str; 5] = ["default", "sales", "hierarchy", "flow", "wordfreq"];
}
