//! HTML table format implementation
//!
//! Uses the `html5ever` + `markup5ever_rcdom` ecosystem: a browser-grade,
//! WHATWG-compliant parser that tolerates the malformed markup clipboard
//! and scraped content tend to carry. The first `<table>` in the document
//! supplies the data; the first `<tr>` is the header (`<th>` or `<td>`),
//! later rows are data. Numeric cells parse with display formatting
//! (`$`, `,`, `%`) stripped.

use crate::common::rows_to_table;
use crate::error::FormatError;
use crate::format::{Format, FormatId};
use crate::model::ChartData;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn id(&self) -> FormatId {
        FormatId::Html
    }

    fn description(&self) -> &str {
        "HTML table"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<ChartData, FormatError> {
        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut source.as_bytes())
            .map_err(|e| FormatError::FormatMismatch(format!("HTML parsing error: {e}")))?;

        let Some(table) = find_element(&dom.document, "table") else {
            return Err(FormatError::FormatMismatch(
                "no table found in HTML".to_string(),
            ));
        };

        let mut tr_nodes = Vec::new();
        collect_elements(&table, "tr", &mut tr_nodes);

        let mut rows: Vec<Vec<String>> = Vec::new();
        for tr in &tr_nodes {
            let cells: Vec<String> = tr
                .children
                .borrow()
                .iter()
                .filter(|child| is_element(child, "th") || is_element(child, "td"))
                .map(|cell| {
                    let mut text = String::new();
                    text_content(cell, &mut text);
                    text.trim().to_string()
                })
                .collect();
            if !cells.is_empty() {
                rows.push(cells);
            }
        }

        rows_to_table(&rows, true).map(ChartData::Tabular)
    }
}

fn element_name(handle: &Handle) -> Option<&str> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

fn is_element(handle: &Handle, tag: &str) -> bool {
    element_name(handle) == Some(tag)
}

/// Depth-first search for the first element with the given tag name.
fn find_element(handle: &Handle, tag: &str) -> Option<Handle> {
    if is_element(handle, tag) {
        return Some(handle.clone());
    }
    for child in handle.children.borrow().iter() {
        if let Some(found) = find_element(child, tag) {
            return Some(found);
        }
    }
    None
}

/// Collect every descendant element with the given tag name, in document
/// order.
fn collect_elements(handle: &Handle, tag: &str, out: &mut Vec<Handle>) {
    for child in handle.children.borrow().iter() {
        if is_element(child, tag) {
            out.push(child.clone());
        }
        collect_elements(child, tag, out);
    }
}

fn text_content(handle: &Handle, out: &mut String) {
    match &handle.data {
        NodeData::Text { contents } => out.push_str(&contents.borrow()),
        _ => {
            for child in handle.children.borrow().iter() {
                text_content(child, out);
            }
        }
    }
}
