//! Report structures — the plain data handed to external export collaborators.

use crate::types::{OperatorName, RegionKey, TimestampMs};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Throughput of one operator inside one delivery region.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegionEfficiencyEntry {
    pub region_key: RegionKey,
    pub scan_count: usize,
    pub working_hours: f64,
    pub efficiency: f64,
}

/// One worker's full efficiency report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OperatorEfficiencyReport {
    pub name: OperatorName,
    pub scan_count: usize,
    pub working_hours: f64,
    pub total_efficiency: f64,
    pub first_scan_time: TimestampMs,
    pub last_scan_time: TimestampMs,
    /// Sorted descending by efficiency, ties ascending by region key.
    pub region_efficiencies: Vec<RegionEfficiencyEntry>,
}

/// Fleet-wide view of one delivery region, across all operators.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegionSummaryEntry {
    pub region_key: RegionKey,
    pub total_scans: usize,
    pub operator_count: usize,
    pub efficiency: f64,
    pub average_per_operator: f64,
}

/// The complete result of one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Sorted descending by total efficiency, ties ascending by name.
    pub operators: Vec<OperatorEfficiencyReport>,
    pub total_scans: usize,
    pub average_total_efficiency: f64,
    /// Sorted descending by efficiency, ties ascending by region key.
    pub region_summary: Vec<RegionSummaryEntry>,
    pub processed_at: DateTime<Utc>,
}
