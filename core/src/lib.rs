//! # sortline-core
//!
//! Sorting-efficiency analysis for warehouse package-scan data.
//!
//! Given raw package-scan events and a package→route mapping, the engine
//! groups events by worker and by delivery region, derives time-span-based
//! throughput rates, and ranks workers and regions. It is a pure, one-shot,
//! in-memory batch transform: no I/O, no configuration, no shared state.
//!
//! Entry point: [`analyze`]. Inputs are plain [`ScanRecord`] and
//! [`RouteRecord`] arrays produced by an upstream normalization layer; the
//! resulting [`AnalysisReport`] is handed back as plain data for external
//! export or persistence.

pub mod engine;
pub mod error;
pub mod input;
pub mod operator_efficiency;
pub mod operator_groups;
pub mod region_summary;
pub mod report;
pub mod route_lookup;
pub mod types;

pub use engine::analyze;
pub use error::{AnalysisError, AnalysisResult};
pub use input::{RouteRecord, ScanRecord, ScanTime};
pub use report::{
    AnalysisReport, OperatorEfficiencyReport, RegionEfficiencyEntry, RegionSummaryEntry,
};
