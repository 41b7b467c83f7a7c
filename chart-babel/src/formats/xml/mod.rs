//! XML format implementation
//!
//! There is no fixed schema for chart data in XML, so rows are found
//! heuristically: any element named `row`, `record`, `item`, `data` or
//! `entry`, anywhere in the document. If none exist, the root element's
//! direct children are treated as rows instead — inputs using synonymous
//! tag names still parse through that fallback.
//!
//! Within a row the first child element is the label; every later child
//! contributes to a dataset keyed by its tag name, ordered by first
//! appearance. Rows missing a tag get `0` for that dataset.

use crate::common::parse_number;
use crate::error::FormatError;
use crate::format::{Format, FormatId};
use crate::model::{ChartData, Dataset, Table};
use roxmltree::Node;
use std::collections::HashMap;

/// Element names recognized as data rows.
const ROW_TAGS: [&str; 5] = ["row", "record", "item", "data", "entry"];

pub struct XmlFormat;

impl Format for XmlFormat {
    fn id(&self) -> FormatId {
        FormatId::Xml
    }

    fn description(&self) -> &str {
        "XML with row/record/item/data/entry elements"
    }

    fn file_extensions(&self) -> &[&str] {
        &["xml"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<ChartData, FormatError> {
        let doc = roxmltree::Document::parse(source)
            .map_err(|e| FormatError::FormatMismatch(format!("XML parsing error: {e}")))?;

        // the root element is a container, never a row, even if named <data>
        let root = doc.root_element();
        let mut rows: Vec<Node> = doc
            .descendants()
            .filter(|n| n.is_element() && *n != root && ROW_TAGS.contains(&n.tag_name().name()))
            .collect();
        if rows.is_empty() {
            rows = root.children().filter(Node::is_element).collect();
        }

        let mut labels: Vec<String> = Vec::new();
        let mut datasets: Vec<Dataset> = Vec::new();
        let mut by_tag: HashMap<String, usize> = HashMap::new();

        for row in rows {
            let children: Vec<Node> = row.children().filter(Node::is_element).collect();
            let Some((first, rest)) = children.split_first() else {
                continue;
            };
            labels.push(element_text(first));

            for child in rest {
                let tag = child.tag_name().name().to_string();
                let idx = *by_tag.entry(tag.clone()).or_insert_with(|| {
                    // a column first seen on a later row starts zero-filled
                    datasets.push(Dataset {
                        label: tag,
                        data: vec![0.0; labels.len() - 1],
                    });
                    datasets.len() - 1
                });
                // repeated tags within one row keep the first value
                if datasets[idx].data.len() < labels.len() {
                    datasets[idx].data.push(parse_number(&element_text(child)));
                }
            }

            for dataset in &mut datasets {
                while dataset.data.len() < labels.len() {
                    dataset.data.push(0.0);
                }
            }
        }

        if labels.is_empty() {
            return Err(FormatError::FormatMismatch(
                "no valid data found in XML".to_string(),
            ));
        }

        Ok(ChartData::Tabular(Table { labels, datasets }))
    }
}

fn element_text(node: &Node) -> String {
    node.text().unwrap_or("").trim().to_string()
}
