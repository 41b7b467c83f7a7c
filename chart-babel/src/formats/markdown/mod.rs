//! Markdown table format implementation
//!
//! Parsing goes through Comrak with the GFM table extension enabled: the
//! first pipe table in the document supplies the data, and the separator row
//! (`| --- | --- |`) is grammar, consumed by Comrak — it can never leak into
//! labels or values. Numeric cells are display-formatted in the wild
//! (`1,500`, `$42`, `85%`), so they parse with formatting stripped.
//!
//! Serialization emits a plain pipe table with a `---` separator row.

use crate::common::{format_cell, rows_to_table};
use crate::error::FormatError;
use crate::format::{Format, FormatId};
use crate::model::ChartData;
use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};

pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn id(&self) -> FormatId {
        FormatId::Markdown
    }

    fn description(&self) -> &str {
        "Markdown pipe table"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<ChartData, FormatError> {
        let arena = Arena::new();
        let mut options = ComrakOptions::default();
        options.extension.table = true;
        let root = parse_document(&arena, source, &options);

        let Some(table_node) = find_table(root) else {
            return Err(FormatError::FormatMismatch(
                "no table found in Markdown".to_string(),
            ));
        };

        let mut rows: Vec<Vec<String>> = Vec::new();
        for row in table_node.children() {
            if !matches!(row.data.borrow().value, NodeValue::TableRow(_)) {
                continue;
            }
            let cells = row
                .children()
                .map(|cell| {
                    let mut text = String::new();
                    collect_text_content(cell, &mut text);
                    text.trim().to_string()
                })
                .collect();
            rows.push(cells);
        }

        rows_to_table(&rows, true).map(ChartData::Tabular)
    }

    fn serialize(&self, data: &ChartData) -> Result<String, FormatError> {
        let table = crate::common::require_table(data, "markdown")?;

        let mut out = String::new();
        out.push_str("| Category |");
        for dataset in &table.datasets {
            out.push(' ');
            out.push_str(if dataset.label.is_empty() {
                "Data"
            } else {
                &dataset.label
            });
            out.push_str(" |");
        }
        out.push('\n');

        out.push_str("| --- |");
        for _ in &table.datasets {
            out.push_str(" --- |");
        }
        out.push('\n');

        for (i, label) in table.labels.iter().enumerate() {
            out.push_str("| ");
            out.push_str(label);
            out.push_str(" |");
            for dataset in &table.datasets {
                out.push(' ');
                if let Some(value) = dataset.data.get(i) {
                    out.push_str(&format_cell(*value));
                }
                out.push_str(" |");
            }
            out.push('\n');
        }

        Ok(out)
    }
}

/// Depth-first search for the first table in the document.
fn find_table<'a>(node: &'a AstNode<'a>) -> Option<&'a AstNode<'a>> {
    if matches!(node.data.borrow().value, NodeValue::Table(_)) {
        return Some(node);
    }
    node.children().find_map(find_table)
}

/// Recursively collect the plain text of a node (inline markup flattened).
fn collect_text_content<'a>(node: &'a AstNode<'a>, output: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(text) => output.push_str(text),
        NodeValue::Code(code) => output.push_str(&code.literal),
        NodeValue::SoftBreak | NodeValue::LineBreak => output.push(' '),
        _ => {
            for child in node.children() {
                collect_text_content(child, output);
            }
        }
    }
}
