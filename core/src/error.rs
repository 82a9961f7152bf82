use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("scan data empty")]
    EmptyScanData,

    #[error("route data empty")]
    EmptyRouteData,
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
