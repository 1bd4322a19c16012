use ap_core::CoreError;
use ap_trace::TraceError;
use thiserror::Error;

/// Errors raised while composing a report.
///
/// Only invalid input is an error.  Missing data (no history, no curve,
/// empty resource lists) produces neutral values instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyticsError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error(transparent)]
    Trace(#[from] TraceError),
}

pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
