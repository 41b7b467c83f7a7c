//! File and URL input sources
//!
//! Convenience entry points that take data from the outside world (a path
//! on disk, a remote URL) and hand it to the detection pipeline. Binary
//! spreadsheet formats are out of scope here; callers with an `xlsx`
//! decoder feed its cell grid through [`crate::common::from_rows`].

use crate::detect;
use crate::error::FormatError;
use crate::format::FormatId;
use crate::model::ChartData;
use crate::registry::FormatRegistry;
use std::path::Path;
use std::time::Duration;

/// Default timeout for URL fetches.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Read a file into a string, mapping failures into the pipeline's error
/// type.
pub fn read_path(path: &Path) -> Result<String, FormatError> {
    std::fs::read_to_string(path)
        .map_err(|e| FormatError::Io(format!("reading {}: {e}", path.display())))
}

/// Parse a file, routing by its extension.
///
/// The extension acts as a hint: a `.csv` file is parsed as CSV even if its
/// content would sniff differently. Unknown extensions are rejected rather
/// than sniffed so that a typo in a filename surfaces as an error instead of
/// a silently misparsed chart.
pub fn parse_path(registry: &FormatRegistry, path: &Path) -> Result<ChartData, FormatError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| {
            FormatError::UnsupportedExtension(format!("{} has no extension", path.display()))
        })?;

    if matches!(ext.as_str(), "xlsx" | "xls") {
        return Err(FormatError::NotSupported(
            "binary spreadsheets are not decoded here; pass the decoded cell grid to from_rows"
                .to_string(),
        ));
    }

    let id = FormatId::from_hint(&ext)
        .ok_or_else(|| FormatError::UnsupportedExtension(ext.clone()))?;
    let content = read_path(path)?;
    registry.parse(&content, id)
}

/// Fetch chart data from a URL.
///
/// Routing order: a JSON content type wins, then the URL path's extension,
/// then content sniffing as for clipboard text.
pub fn fetch_url(registry: &FormatRegistry, url: &str) -> Result<ChartData, FormatError> {
    fetch_url_with_timeout(registry, url, DEFAULT_FETCH_TIMEOUT)
}

pub fn fetch_url_with_timeout(
    registry: &FormatRegistry,
    url: &str,
    timeout: Duration,
) -> Result<ChartData, FormatError> {
    let agent = ureq::AgentBuilder::new().timeout(timeout).build();
    let response = agent
        .get(url)
        .call()
        .map_err(|e| FormatError::Io(format!("fetching {url}: {e}")))?;

    let content_type = response.content_type().to_string();
    let body = response
        .into_string()
        .map_err(|e| FormatError::Io(format!("reading response from {url}: {e}")))?;

    if content_type.contains("json") {
        return registry.parse(&body, FormatId::Json);
    }

    if let Some(id) = url_extension_hint(url) {
        return registry.parse(&body, id);
    }

    detect::parse_clipboard(registry, &body)
}

/// Format hint from the path component of a URL, ignoring query and
/// fragment.
fn url_extension_hint(url: &str) -> Option<FormatId> {
    let parsed = url::Url::parse(url).ok()?;
    let ext = Path::new(parsed.path()).extension()?.to_str()?.to_lowercase();
    FormatId::from_hint(&ext)
}
