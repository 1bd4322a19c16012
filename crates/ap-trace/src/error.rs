use ap_core::{CoreError, FlightId, LineKind, PassengerId};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TraceError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("unknown {passenger} in {kind} line {line} ({at})")]
    UnknownPassenger {
        kind:      LineKind,
        line:      usize,
        /// `"interval N"` or `"live"`.
        at:        String,
        passenger: PassengerId,
    },

    #[error("{passenger} references unknown {flight}")]
    UnknownFlight {
        passenger: PassengerId,
        flight:    FlightId,
    },

    #[error("arrival counts supplied for unknown {0}")]
    ArrivalsForUnknownFlight(FlightId),

    #[error("interval {got} recorded out of order (expected {expected})")]
    IntervalOutOfOrder { expected: usize, got: usize },

    #[error("trace contract version {found} is not supported (expected {expected})")]
    UnsupportedVersion { found: u16, expected: u16 },
}

pub type TraceResult<T> = Result<T, TraceError>;
