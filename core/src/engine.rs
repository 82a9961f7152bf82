//! The analysis engine — one-shot batch transform from raw scan events and
//! route assignments to the ranked efficiency report.
//!
//! PIPELINE ORDER (fixed, documented, never reordered):
//!   1. Input validation       (empty feeds abort before any computation)
//!   2. Route lookup           (trackingId → routeCode, last record wins)
//!   3. Operator grouping      (incomplete scans dropped)
//!   4. Per-operator reports   (overall + per-region throughput)
//!   5. Operator ranking and fleet average
//!   6. Global region summary  (independent pass, per-tracking-id spans)
//!
//! RULES:
//!   - Every lookup and accumulator is owned by the invocation. No statics,
//!     no cross-call state; concurrent calls on independent inputs need no
//!     coordination.
//!   - Identical inputs produce a structurally identical report. Only
//!     `processed_at` varies between runs.

use crate::{
    error::{AnalysisError, AnalysisResult},
    input::{RouteRecord, ScanRecord},
    operator_efficiency::operator_report,
    operator_groups::group_by_operator,
    region_summary::region_summary,
    report::{AnalysisReport, OperatorEfficiencyReport},
    route_lookup::build_route_lookup,
};
use chrono::Utc;
use std::cmp::Ordering;

/// Run the full analysis over one batch of scans and route assignments.
///
/// Fails with [`AnalysisError::EmptyScanData`] before the route array is
/// even looked at, and with [`AnalysisError::EmptyRouteData`] before any
/// computation; there is never a partial result.
pub fn analyze(scans: &[ScanRecord], routes: &[RouteRecord]) -> AnalysisResult<AnalysisReport> {
    if scans.is_empty() {
        return Err(AnalysisError::EmptyScanData);
    }
    if routes.is_empty() {
        return Err(AnalysisError::EmptyRouteData);
    }

    let route_lookup = build_route_lookup(routes);
    let groups = group_by_operator(scans);

    // Data-quality signal only. Unmatched scans still count toward operator
    // totals below; they are silently excluded from the region aggregates.
    let unmatched = groups
        .values()
        .flatten()
        .filter(|scan| !route_lookup.contains_key(&scan.tracking_id))
        .count();
    if unmatched > 0 {
        log::warn!(
            "{unmatched} scans have no route assignment; counted in operator totals, \
             excluded from region aggregates"
        );
    }

    let mut operators: Vec<OperatorEfficiencyReport> = groups
        .iter()
        .map(|(name, scans)| operator_report(name, scans, &route_lookup))
        .collect();

    // Stable ranking: throughput first, operator name breaks ties.
    operators.sort_by(|a, b| {
        b.total_efficiency
            .partial_cmp(&a.total_efficiency)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });

    let total_scans: usize = operators.iter().map(|op| op.scan_count).sum();

    // Unweighted mean over operators; scan volume does not weight it.
    let average_total_efficiency = if operators.is_empty() {
        0.0
    } else {
        operators.iter().map(|op| op.total_efficiency).sum::<f64>() / operators.len() as f64
    };

    let region_summary = region_summary(&groups, &route_lookup);

    log::info!(
        "analysis complete: {} operators, {total_scans} scans, {} regions",
        operators.len(),
        region_summary.len(),
    );

    Ok(AnalysisReport {
        operators,
        total_scans,
        average_total_efficiency,
        region_summary,
        processed_at: Utc::now(),
    })
}
