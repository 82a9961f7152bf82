//! Input records for the analysis engine.
//!
//! An upstream normalization layer has already mapped spreadsheet columns
//! onto the canonical camelCase field names; this module only normalizes
//! scan times to epoch milliseconds.

use crate::types::TimestampMs;
use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One timestamped record of a worker processing a package.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRecord {
    #[serde(default)]
    pub tracking_id: String,
    #[serde(default)]
    pub operator: String,
    #[serde(default)]
    pub scan_time: Option<ScanTime>,
}

impl ScanRecord {
    pub fn new(
        tracking_id: impl Into<String>,
        operator: impl Into<String>,
        scan_time: ScanTime,
    ) -> Self {
        Self {
            tracking_id: tracking_id.into(),
            operator: operator.into(),
            scan_time: Some(scan_time),
        }
    }
}

/// Assigns a package to a destination routing code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRecord {
    #[serde(default)]
    pub tracking_id: String,
    #[serde(default)]
    pub route_code: String,
}

impl RouteRecord {
    pub fn new(tracking_id: impl Into<String>, route_code: impl Into<String>) -> Self {
        Self {
            tracking_id: tracking_id.into(),
            route_code: route_code.into(),
        }
    }
}

/// A scan time as it arrives on the wire: either a native epoch-millisecond
/// timestamp or an ISO-8601-parseable string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ScanTime {
    Millis(i64),
    Text(String),
}

impl ScanTime {
    /// Normalize to epoch milliseconds. `None` means the text form could not
    /// be parsed; callers treat that exactly like an absent scan time.
    pub fn to_millis(&self) -> Option<TimestampMs> {
        match self {
            ScanTime::Millis(ms) => Some(*ms),
            ScanTime::Text(text) => parse_text_timestamp(text),
        }
    }
}

/// Accepts RFC 3339 plus the naive date-time forms spreadsheet exports
/// commonly emit; naive times are read as UTC.
fn parse_text_timestamp(text: &str) -> Option<TimestampMs> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.timestamp_millis());
    }
    for fmt in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(naive.and_utc().timestamp_millis());
        }
    }
    None
}
