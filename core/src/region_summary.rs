//! Fleet-wide region summary — an independent pass over every scan, across
//! all operators, with per-tracking-id time accounting.

use crate::operator_efficiency::{guarded_efficiency, MILLIS_PER_HOUR};
use crate::operator_groups::OperatorScan;
use crate::report::RegionSummaryEntry;
use crate::route_lookup::region_key;
use crate::types::{OperatorName, RegionKey, TimestampMs, TrackingId};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Working hours of one region bucket: the SUM of each tracking id's own
/// `(max − min)` span, in hours.
///
/// This is not a single min/max over the whole bucket — two packages worked
/// in parallel each contribute their full individual spans. Distinct from
/// [`crate::operator_efficiency::operator_region_hours`], and kept that way.
pub fn region_tracking_hours(events: &[(TrackingId, TimestampMs)]) -> f64 {
    let mut spans: HashMap<&str, (TimestampMs, TimestampMs)> = HashMap::new();

    for (tracking_id, time) in events {
        let span = spans.entry(tracking_id.as_str()).or_insert((*time, *time));
        span.0 = span.0.min(*time);
        span.1 = span.1.max(*time);
    }

    spans
        .values()
        .map(|(min, max)| (max - min) as f64)
        .sum::<f64>()
        / MILLIS_PER_HOUR
}

#[derive(Default)]
struct RegionAccumulator {
    events: Vec<(TrackingId, TimestampMs)>,
    operators: HashSet<OperatorName>,
}

/// Aggregate every route-resolved scan into one summary entry per observed
/// region. Scans whose tracking id has no route are excluded entirely.
pub fn region_summary(
    groups: &HashMap<OperatorName, Vec<OperatorScan>>,
    route_lookup: &HashMap<TrackingId, String>,
) -> Vec<RegionSummaryEntry> {
    let mut regions: HashMap<RegionKey, RegionAccumulator> = HashMap::new();

    for (operator, scans) in groups {
        for scan in scans {
            let Some(route_code) = route_lookup.get(&scan.tracking_id) else {
                continue;
            };
            let Some(key) = region_key(route_code) else {
                continue;
            };
            let acc = regions.entry(key).or_default();
            acc.events.push((scan.tracking_id.clone(), scan.scan_time_ms));
            acc.operators.insert(operator.clone());
        }
    }

    let mut entries: Vec<RegionSummaryEntry> = regions
        .into_iter()
        .map(|(key, acc)| {
            let total_scans = acc.events.len();
            let operator_count = acc.operators.len();
            let working_hours = region_tracking_hours(&acc.events);
            RegionSummaryEntry {
                region_key: key,
                total_scans,
                operator_count,
                efficiency: guarded_efficiency(total_scans, working_hours),
                average_per_operator: if operator_count > 0 {
                    total_scans as f64 / operator_count as f64
                } else {
                    0.0
                },
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
