//! Route lookup construction — tracking id to route code.

use crate::input::RouteRecord;
use crate::types::{RegionKey, TrackingId};
use std::collections::HashMap;

/// Build the trackingId → routeCode lookup in a single pass.
///
/// Records with a blank tracking id or route code are skipped. Duplicate
/// tracking ids are not an error: the later record wins, which is what the
/// upstream assignment feed means by re-sending a mapping.
pub fn build_route_lookup(routes: &[RouteRecord]) -> HashMap<TrackingId, String> {
    let mut lookup: HashMap<TrackingId, String> = HashMap::with_capacity(routes.len());

    for record in routes {
        if record.tracking_id.is_empty() || record.route_code.is_empty() {
            continue;
        }
        if let Some(previous) =
            lookup.insert(record.tracking_id.clone(), record.route_code.clone())
        {
            log::debug!(
                "route lookup: {} reassigned {previous} -> {}",
                record.tracking_id,
                record.route_code,
            );
        }
    }

    lookup
}

/// Derive the coarse delivery region from a route code: its uppercased
/// first character.
pub fn region_key(route_code: &str) -> Option<RegionKey> {
    route_code.chars().next().and_then(|c| c.to_uppercase().next())
}
