//! Scalar metrics scraped from the decoupling analyzer's HTML summary.
//!
//! The summary is a loose HTML page whose list items carry sentences such as
//! `Decoupling Level is 45,3%`. There is no stable structure to parse, so the
//! page is reduced to the plain text of its `<li>` elements and each metric is
//! located by substring, then read from the window up to the next `%`.

use crate::errors::{Result, SnapshotError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const DECOUPLING_LEVEL: &str = "Decoupling Level";
pub const PROPAGATION_COST: &str = "Propagation Cost";

static LI_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<li\b[^>]*>").unwrap());
static LIST_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</\s*(?:li|ul|ol)\s*>").unwrap());
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());

/// System-wide percentages reported by the decoupling analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SystemScalarMetrics {
    /// Percent, e.g. `45.3` for `45,3%`.
    pub decoupling_level: f64,
    /// Percent. Some summaries omit it; the system row then falls back to
    /// the fan-in formula.
    pub propagation_cost: Option<f64>,
}

/// Read the system metrics from a summary file. Decoupling level is
/// required; propagation cost is optional but must be readable when present.
pub fn read_system_scalar_metrics(path: &Path) -> Result<SystemScalarMetrics> {
    let html = fs::read_to_string(path).map_err(|e| SnapshotError::io(path, e))?;
    let fragments = list_item_fragments(&html);

    let metrics = SystemScalarMetrics {
        decoupling_level: extract_metric(&fragments, DECOUPLING_LEVEL, path)?,
        propagation_cost: extract_optional_metric(&fragments, PROPAGATION_COST, path)?,
    };
    debug!(?metrics, path = %path.display(), "read decoupling summary");
    Ok(metrics)
}

/// Plain text of every list item, tags stripped, entities decoded and
/// whitespace collapsed. A list item ends at its closing tag, the end of its
/// list, or the next `<li>`, whichever comes first.
pub fn list_item_fragments(html: &str) -> Vec<String> {
    let opens: Vec<_> = LI_OPEN.find_iter(html).collect();

    opens
        .iter()
        .enumerate()
        .map(|(i, open)| {
            let limit = opens.get(i + 1).map_or(html.len(), |next| next.start());
            let body = &html[open.end()..limit];
            let body = LIST_CLOSE.find(body).map_or(body, |close| &body[..close.start()]);
            normalize_text(body)
        })
        .collect()
}

fn normalize_text(fragment: &str) -> String {
    let without_tags = TAG.replace_all(fragment, " ");
    let decoded = html_escape::decode_html_entities(&without_tags);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Find `"<metric> is"` in the fragments and parse the percentage after it.
pub fn extract_metric(fragments: &[String], metric: &str, path: &Path) -> Result<f64> {
    let needle = format!("{metric} is");

    let (fragment, offset) = fragments
        .iter()
        .find_map(|text| text.find(&needle).map(|pos| (text, pos + needle.len())))
        .ok_or_else(|| SnapshotError::MetricNotFound {
            metric: metric.to_string(),
            path: path.to_path_buf(),
        })?;

    let tail = &fragment[offset..];
    parse_percentage_window(tail).ok_or_else(|| SnapshotError::MalformedMetric {
        metric: metric.to_string(),
        path: path.to_path_buf(),
        text: fragment.clone(),
    })
}

/// Like [`extract_metric`], but a metric no list item mentions is `None`.
pub fn extract_optional_metric(
    fragments: &[String],
    metric: &str,
    path: &Path,
) -> Result<Option<f64>> {
    match extract_metric(fragments, metric, path) {
        Ok(value) => Ok(Some(value)),
        Err(SnapshotError::MetricNotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Parse the number between the start of `tail` and the next `%`.
///
/// A comma decimal separator is read as a dot.
pub fn parse_percentage_window(tail: &str) -> Option<f64> {
    let end = tail.find('%')?;
    let number = tail[..end].trim().replace(',', ".");
    number.parse::<f64>().ok().filter(|value| value.is_finite())
}
