//! `ap-core`: foundational types for the `rust_apron` ground-operations toolkit.
//!
//! This crate is a dependency of every other `ap-*` crate.  It has no `ap-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`ids`]       | `FlightId`, `PassengerId`, `CounterId`, `CheckpointId`, `HoldRoomId` |
//! | [`time`]      | `ClockTime` (minute of day), `RunClock`                   |
//! | [`flight`]    | `Flight`, expected passenger count                        |
//! | [`passenger`] | `Passenger` stage timestamps, dwell helper                |
//! | [`resource`]  | Ticket counter / checkpoint / hold room configs, `LineKind` |
//! | [`curve`]     | `ArrivalCurveConfig` (shape parameters only)              |
//! | [`config`]    | `RunConfig`, the engine ↔ analytics contract             |
//! | [`error`]     | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod curve;
pub mod error;
pub mod flight;
pub mod ids;
pub mod passenger;
pub mod resource;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::RunConfig;
pub use curve::ArrivalCurveConfig;
pub use error::{CoreError, CoreResult};
pub use flight::Flight;
pub use ids::{CheckpointId, CounterId, FlightId, HoldRoomId, PassengerId};
pub use passenger::{Passenger, dwell, stage_minute};
pub use resource::{CheckpointConfig, HoldRoomConfig, LineKind, TicketCounterConfig};
pub use time::{ClockTime, RunClock};
