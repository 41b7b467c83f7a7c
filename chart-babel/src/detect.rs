//! Content sniffing and delimiter detection
//!
//! When no hint is available the pipeline has to guess which grammar a blob
//! of text obeys. The heuristics here are ordered by the strength of their
//! structural markers: JSON braces, then a Markdown separator row, then HTML
//! table tags, then a literal tab, and finally CSV as the fallback that never
//! fails to be chosen (its parser may still reject the content).

use crate::common::is_markdown_separator;
use crate::error::FormatError;
use crate::format::FormatId;
use crate::model::ChartData;
use crate::registry::FormatRegistry;

/// Decide which parser should handle `content`.
///
/// An explicit `hint` (file extension or MIME type) always wins over
/// sniffing; a hint that maps to no registered format is an error rather
/// than a silent fallback. Without a hint, detection never fails.
pub fn detect(content: &str, hint: Option<&str>) -> Result<FormatId, FormatError> {
    match hint {
        Some(hint) => FormatId::from_hint(hint)
            .ok_or_else(|| FormatError::UnsupportedExtension(hint.to_string())),
        None => Ok(sniff(content)),
    }
}

/// Guess the format of `content` from structural markers alone.
pub fn sniff(content: &str) -> FormatId {
    let trimmed = content.trim();

    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return FormatId::Json;
    }
    if trimmed.contains('|') && trimmed.lines().any(is_markdown_separator) {
        return FormatId::Markdown;
    }
    let lower = trimmed.to_ascii_lowercase();
    if lower.contains("<table") || lower.contains("<tr") {
        return FormatId::Html;
    }
    if trimmed.contains('\t') {
        return FormatId::Tsv;
    }
    FormatId::Csv
}

/// Sniff the text and dispatch to the matching parser.
///
/// This is the clipboard auto-route: pasted or fetched content of unknown
/// provenance goes through the same heuristics as [`sniff`], prioritizing
/// structural markers over delimiter counting.
pub fn parse_clipboard(
    registry: &FormatRegistry,
    text: &str,
) -> Result<ChartData, FormatError> {
    registry.parse(text, sniff(text))
}

/// Candidate delimiters for plain-text input, in tie-breaking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Tab,
    Comma,
    Semicolon,
    Pipe,
    /// A run of two or more spaces
    Spaces,
}

impl Delimiter {
    const ORDERED: [Delimiter; 5] = [
        Delimiter::Tab,
        Delimiter::Comma,
        Delimiter::Semicolon,
        Delimiter::Pipe,
        Delimiter::Spaces,
    ];

    /// Number of occurrences in one line.
    fn count(self, line: &str) -> usize {
        match self {
            Delimiter::Tab => line.matches('\t').count(),
            Delimiter::Comma => line.matches(',').count(),
            Delimiter::Semicolon => line.matches(';').count(),
            Delimiter::Pipe => line.matches('|').count(),
            Delimiter::Spaces => space_runs(line),
        }
    }

    /// Split a line into trimmed cells.
    pub fn split(self, line: &str) -> Vec<String> {
        match self {
            Delimiter::Tab => line.split('\t').map(|c| c.trim().to_string()).collect(),
            Delimiter::Comma => line.split(',').map(|c| c.trim().to_string()).collect(),
            Delimiter::Semicolon => line.split(';').map(|c| c.trim().to_string()).collect(),
            Delimiter::Pipe => line.split('|').map(|c| c.trim().to_string()).collect(),
            Delimiter::Spaces => split_on_space_runs(line),
        }
    }
}

/// Pick the delimiter with the highest count in the given (header) line.
///
/// Ties favor the earlier delimiter in the order tab, comma, semicolon,
/// pipe, multi-space; a line with no delimiter at all falls back to comma.
pub fn sniff_delimiter(line: &str) -> Delimiter {
    let mut best = Delimiter::Comma;
    let mut max_count = 0;
    for candidate in Delimiter::ORDERED {
        let count = candidate.count(line);
        if count > max_count {
            max_count = count;
            best = candidate;
        }
    }
    best
}

fn space_runs(line: &str) -> usize {
    let mut runs = 0;
    let mut current = 0;
    for c in line.chars() {
        if c == ' ' {
            current += 1;
        } else {
            if current >= 2 {
                runs += 1;
            }
            current = 0;
        }
    }
    if current >= 2 {
        runs += 1;
    }
    runs
}

fn split_on_space_runs(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut spaces = 0;
    for c in line.chars() {
        if c == ' ' {
            spaces += 1;
            continue;
        }
        if spaces >= 2 && !current.is_empty() {
            cells.push(std::mem::take(&mut current));
        } else if spaces > 0 && !current.is_empty() {
            current.push(' ');
        }
        spaces = 0;
        current.push(c);
    }
    if !current.is_empty() {
        cells.push(current);
    }
    cells.iter_mut().for_each(|c| *c = c.trim().to_string());
    cells
}
