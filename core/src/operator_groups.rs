//! Operator grouping — partitions the raw scan feed by worker identity.

use crate::input::ScanRecord;
use crate::types::{OperatorName, TimestampMs, TrackingId};
use std::collections::HashMap;

/// One usable scan after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorScan {
    pub tracking_id: TrackingId,
    pub scan_time_ms: TimestampMs,
}

/// Partition scans by operator.
///
/// A record missing its operator, its tracking id, or a parseable scan time
/// is dropped here and contributes to nothing downstream. Drops are logged
/// individually at debug level with one warn-level total.
pub fn group_by_operator(scans: &[ScanRecord]) -> HashMap<OperatorName, Vec<OperatorScan>> {
    let mut groups: HashMap<OperatorName, Vec<OperatorScan>> = HashMap::new();
    let mut dropped = 0usize;

    for record in scans {
        if record.operator.is_empty() || record.tracking_id.is_empty() {
            dropped += 1;
            log::debug!(
                "scan dropped (blank operator or trackingId): operator={:?} trackingId={:?}",
                record.operator,
                record.tracking_id,
            );
            continue;
        }
        let Some(scan_time_ms) = record.scan_time.as_ref().and_then(|t| t.to_millis()) else {
            dropped += 1;
            log::debug!(
                "scan dropped (missing or unparseable scanTime): trackingId={}",
                record.tracking_id,
            );
            continue;
        };

        groups
            .entry(record.operator.clone())
            .or_default()
            .push(OperatorScan {
                tracking_id: record.tracking_id.clone(),
                scan_time_ms,
            });
    }

    if dropped > 0 {
        log::warn!("operator grouping: dropped {dropped} incomplete scan records");
    }

    groups
}
