//! Per-operator efficiency — overall throughput plus the operator's
//! per-region breakdown.
//!
//! The overall numbers count every one of the operator's scans, whether or
//! not the tracking id resolves to a route. Only the region breakdown skips
//! unresolved scans.

use crate::operator_groups::OperatorScan;
use crate::report::{OperatorEfficiencyReport, RegionEfficiencyEntry};
use crate::route_lookup::region_key;
use crate::types::{RegionKey, TimestampMs, TrackingId};
use std::cmp::Ordering;
use std::collections::HashMap;

pub(crate) const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// scanCount / workingHours, guarded: a zero-width time window is zero
/// throughput, never a division error.
pub fn guarded_efficiency(scan_count: usize, working_hours: f64) -> f64 {
    if working_hours > 0.0 {
        scan_count as f64 / working_hours
    } else {
        0.0
    }
}

/// Elapsed hours of ONE operator-region bucket: a single min/max over every
/// timestamp in the bucket.
///
/// Distinct from [`crate::region_summary::region_tracking_hours`], which
/// sums per-tracking-id spans for the fleet-wide summary. The two rules give
/// different numbers on the same data and must not be unified.
pub fn operator_region_hours(times: &[TimestampMs]) -> f64 {
    match (times.iter().min(), times.iter().max()) {
        (Some(min), Some(max)) => (max - min) as f64 / MILLIS_PER_HOUR,
        _ => 0.0,
    }
}

/// Build one operator's report: scan count, active span between first and
/// last scan, overall throughput, and the per-region breakdown.
pub fn operator_report(
    name: &str,
    scans: &[OperatorScan],
    route_lookup: &HashMap<TrackingId, String>,
) -> OperatorEfficiencyReport {
    let scan_count = scans.len();
    let first_scan_time = scans.iter().map(|s| s.scan_time_ms).min().unwrap_or(0);
    let last_scan_time = scans.iter().map(|s| s.scan_time_ms).max().unwrap_or(0);
    let working_hours = (last_scan_time - first_scan_time) as f64 / MILLIS_PER_HOUR;

    OperatorEfficiencyReport {
        name: name.to_string(),
        scan_count,
        working_hours,
        total_efficiency: guarded_efficiency(scan_count, working_hours),
        first_scan_time,
        last_scan_time,
        region_efficiencies: region_breakdown(scans, route_lookup),
    }
}

/// Bucket the operator's scans by resolved region and rate each bucket.
/// A scan with no resolvable route contributes to nothing here.
fn region_breakdown(
    scans: &[OperatorScan],
    route_lookup: &HashMap<TrackingId, String>,
) -> Vec<RegionEfficiencyEntry> {
    let mut buckets: HashMap<RegionKey, Vec<TimestampMs>> = HashMap::new();

    for scan in scans {
        let Some(route_code) = route_lookup.get(&scan.tracking_id) else {
            continue;
        };
        let Some(key) = region_key(route_code) else {
            continue;
        };
        buckets.entry(key).or_default().push(scan.scan_time_ms);
    }

    let mut entries: Vec<RegionEfficiencyEntry> = buckets
        .into_iter()
        .map(|(region_key, times)| {
            let scan_count = times.len();
            let working_hours = operator_region_hours(&times);
            RegionEfficiencyEntry {
                region_key,
                scan_count,
                working_hours,
                efficiency: guarded_efficiency(scan_count, working_hours),
            }
        })
        .collect();

    // Stable ranking: throughput first, region key breaks ties.
    entries.sort_by(|a, b| {
        b.efficiency
            .partial_cmp(&a.efficiency)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.region_key.cmp(&b.region_key))
    });

    entries
}
