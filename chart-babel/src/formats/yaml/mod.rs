//! YAML subset implementation
//!
//! Deliberately not a general YAML grammar: this is a line-oriented
//! recognizer for the one document shape chart data uses — top-level
//! `labels:` and `datasets:` keys, with `- label:` / `data:` entries below
//! `datasets:`. Both inline arrays (`[a, b, c]`) and block lists (`- item`
//! per line) are accepted. Anything outside that shape is a format
//! mismatch.

use crate::common::parse_number;
use crate::error::FormatError;
use crate::format::{Format, FormatId};
use crate::model::{ChartData, Dataset, Table};

pub struct YamlFormat;

impl Format for YamlFormat {
    fn id(&self) -> FormatId {
        FormatId::Yaml
    }

    fn description(&self) -> &str {
        "YAML subset for labels/datasets chart data"
    }

    fn file_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<ChartData, FormatError> {
        let mut labels: Vec<String> = Vec::new();
        let mut datasets: Vec<Dataset> = Vec::new();
        let mut in_labels = false;
        let mut in_datasets = false;
        let mut in_data = false;

        for line in source.trim().lines() {
            let trimmed = line.trim();

            if let Some(rest) = trimmed.strip_prefix("labels:") {
                in_labels = true;
                in_datasets = false;
                in_data = false;
                if let Some(items) = inline_array(rest) {
                    labels = items.iter().map(|i| strip_quotes(i)).collect();
                    in_labels = false;
                }
            } else if trimmed.starts_with("datasets:") {
                in_labels = false;
                in_datasets = true;
                in_data = false;
            } else if in_labels && trimmed.starts_with('-') {
                labels.push(strip_quotes(trimmed[1..].trim()));
            } else if in_datasets && trimmed.starts_with("- label:") {
                datasets.push(Dataset {
                    label: strip_quotes(value_after_colon(&trimmed[2..])),
                    data: Vec::new(),
                });
                in_data = false;
            } else if trimmed.starts_with("label:") && !datasets.is_empty() {
                if let Some(current) = datasets.last_mut() {
                    current.label = strip_quotes(value_after_colon(trimmed));
                }
            } else if let Some(rest) = trimmed.strip_prefix("data:") {
                in_data = true;
                if let Some(items) = inline_array(rest) {
                    if let Some(current) = datasets.last_mut() {
                        current.data = items.iter().map(|i| parse_number(i)).collect();
                    }
                    in_data = false;
                }
            } else if in_data && trimmed.starts_with('-') {
                if let Some(current) = datasets.last_mut() {
                    current.data.push(parse_number(trimmed[1..].trim()));
                }
            }
        }

        if labels.is_empty() || datasets.is_empty() {
            return Err(FormatError::FormatMismatch(
                "expected labels and datasets arrays".to_string(),
            ));
        }

        Ok(ChartData::Tabular(Table { labels, datasets }))
    }
}

/// Extract the items of an inline `[a, b, c]` array, if present.
fn inline_array(rest: &str) -> Option<Vec<String>> {
    let rest = rest.trim();
    let inner = rest.strip_prefix('[')?.strip_suffix(']')?;
    Some(inner.split(',').map(|i| i.trim().to_string()).collect())
}

/// The value part of a `key: value` line.
fn value_after_colon(line: &str) -> &str {
    line.split_once(':').map(|(_, v)| v.trim()).unwrap_or("")
}

fn strip_quotes(s: &str) -> String {
    s.chars().filter(|c| !matches!(c, '\'' | '"')).collect()
}
