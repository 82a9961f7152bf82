//! Route lookup construction: duplicate policy, blank-field skips, and
//! region key derivation.

use sortline_core::route_lookup::{build_route_lookup, region_key};
use sortline_core::RouteRecord;

/// On duplicate tracking ids the later record wins, silently.
#[test]
fn last_record_wins_on_duplicate_tracking_id() {
    let routes = vec![
        RouteRecord::new("T1", "P100"),
        RouteRecord::new("T2", "X200"),
        RouteRecord::new("T1", "X900"),
    ];

    let lookup = build_route_lookup(&routes);

    assert_eq!(lookup.len(), 2, "duplicates must not add entries");
    assert_eq!(lookup.get("T1").map(String::as_str), Some("X900"));
    assert_eq!(lookup.get("T2").map(String::as_str), Some("X200"));
}

/// Records with a blank tracking id or route code are skipped entirely.
#[test]
fn blank_fields_are_skipped() {
    let routes = vec![
        RouteRecord::new("", "P100"),
        RouteRecord::new("T1", ""),
        RouteRecord::new("T2", "P200"),
    ];

    let lookup = build_route_lookup(&routes);

    assert_eq!(lookup.len(), 1);
    assert_eq!(lookup.get("T2").map(String::as_str), Some("P200"));
}

/// The region key is the uppercased first character of the route code.
#[test]
fn region_key_uppercases_first_character() {
    assert_eq!(region_key("P100"), Some('P'));
    assert_eq!(region_key("x200"), Some('X'));
    assert_eq!(region_key("7A"), Some('7'));
    assert_eq!(region_key(""), None);
}
