//! Per-operator efficiency: overall throughput, zero-span guards, and the
//! per-region breakdown.

use sortline_core::operator_efficiency::{guarded_efficiency, operator_report};
use sortline_core::operator_groups::OperatorScan;
use sortline_core::route_lookup::build_route_lookup;
use sortline_core::RouteRecord;

const T0: i64 = 1_700_000_000_000;
const MINUTE: i64 = 60_000;

fn scan(tracking_id: &str, scan_time_ms: i64) -> OperatorScan {
    OperatorScan {
        tracking_id: tracking_id.into(),
        scan_time_ms,
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Alice scans T1 at 08:00 and 08:10 and T2 at 09:00, with T1 routed to
/// "P100" and T2 to "X200". Overall: 3 scans over exactly one hour. Region
/// "P": 2 scans over 10 minutes. Region "X": a single scan, zero span, zero
/// throughput.
#[test]
fn single_operator_report_with_region_breakdown() {
    let scans = vec![
        scan("T1", T0),
        scan("T1", T0 + 10 * MINUTE),
        scan("T2", T0 + 60 * MINUTE),
    ];
    let lookup = build_route_lookup(&[
        RouteRecord::new("T1", "P100"),
        RouteRecord::new("T2", "X200"),
    ]);

    let report = operator_report("alice", &scans, &lookup);

    assert_eq!(report.name, "alice");
    assert_eq!(report.scan_count, 3);
    assert!(approx(report.working_hours, 1.0));
    assert!(approx(report.total_efficiency, 3.0));
    assert_eq!(report.first_scan_time, T0);
    assert_eq!(report.last_scan_time, T0 + 60 * MINUTE);

    assert_eq!(report.region_efficiencies.len(), 2);

    let p = &report.region_efficiencies[0];
    assert_eq!(p.region_key, 'P');
    assert_eq!(p.scan_count, 2);
    assert!(approx(p.working_hours, 1.0 / 6.0));
    assert!(approx(p.efficiency, 12.0));

    let x = &report.region_efficiencies[1];
    assert_eq!(x.region_key, 'X');
    assert_eq!(x.scan_count, 1);
    assert!(approx(x.working_hours, 0.0));
    assert!(approx(x.efficiency, 0.0));
}

/// A scan whose tracking id has no route still counts toward the operator's
/// totals and time span, but never reaches the region breakdown.
#[test]
fn unrouted_scans_count_in_totals_only() {
    let scans = vec![
        scan("T1", T0),
        scan("UNROUTED", T0 + 120 * MINUTE),
    ];
    let lookup = build_route_lookup(&[RouteRecord::new("T1", "P100")]);

    let report = operator_report("bob", &scans, &lookup);

    assert_eq!(report.scan_count, 2);
    assert!(approx(report.working_hours, 2.0), "span includes the unrouted scan");
    assert!(approx(report.total_efficiency, 1.0));

    assert_eq!(report.region_efficiencies.len(), 1);
    assert_eq!(report.region_efficiencies[0].region_key, 'P');
    assert_eq!(report.region_efficiencies[0].scan_count, 1);
}

/// A single scan means a zero-width window: zero hours, zero throughput,
/// never a division error.
#[test]
fn zero_span_guards_to_zero_efficiency() {
    let scans = vec![scan("T1", T0)];
    let lookup = build_route_lookup(&[RouteRecord::new("T1", "P100")]);

    let report = operator_report("carol", &scans, &lookup);

    assert!(approx(report.working_hours, 0.0));
    assert!(approx(report.total_efficiency, 0.0));

    assert!(approx(guarded_efficiency(5, 0.0), 0.0));
    assert!(approx(guarded_efficiency(5, 2.0), 2.5));
}

/// Region entries rank by throughput; equal throughput breaks ties by
/// region key, ascending.
#[test]
fn region_entries_tie_break_by_key() {
    // Both regions: one scan, zero span, zero efficiency.
    let scans = vec![scan("T2", T0), scan("T1", T0)];
    let lookup = build_route_lookup(&[
        RouteRecord::new("T1", "A100"),
        RouteRecord::new("T2", "B200"),
    ]);

    let report = operator_report("dana", &scans, &lookup);

    let keys: Vec<char> = report
        .region_efficiencies
        .iter()
        .map(|e| e.region_key)
        .collect();
    assert_eq!(keys, vec!['A', 'B']);
}

/// Repeated scans of the same tracking id are not deduplicated; every event
/// counts.
#[test]
fn repeat_scans_are_not_deduplicated() {
    let scans = vec![
        scan("T1", T0),
        scan("T1", T0 + 10 * MINUTE),
        scan("T1", T0 + 30 * MINUTE),
    ];
    let lookup = build_route_lookup(&[RouteRecord::new("T1", "P100")]);

    let report = operator_report("erin", &scans, &lookup);

    assert_eq!(report.scan_count, 3);
    assert_eq!(report.region_efficiencies[0].scan_count, 3);
}
