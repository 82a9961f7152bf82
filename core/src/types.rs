//! Shared primitive types used across the analysis engine.

/// A scan timestamp normalized to epoch milliseconds, UTC.
pub type TimestampMs = i64;

/// Unique package identifier linking a scan event to a route assignment.
pub type TrackingId = String;

/// Worker identity exactly as it appears in the scan feed.
pub type OperatorName = String;

/// Coarse delivery region: the uppercased first character of a route code.
pub type RegionKey = char;
