//! Resource configurations: ticket counters, checkpoints, hold rooms.
//!
//! Each config carries a stable configured id *and* sits at a position in its
//! list.  The list position is the line index into the per-interval history:
//! `history[interval][position]` is always the same physical resource.

use std::collections::BTreeSet;
use std::fmt;

use crate::{CheckpointId, CounterId, FlightId, HoldRoomId};

// ── LineKind ──────────────────────────────────────────────────────────────────

/// Selects one of the three resource kinds recorded in a snapshot.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineKind {
    TicketCounter,
    Checkpoint,
    HoldRoom,
}

impl LineKind {
    pub const ALL: [LineKind; 3] = [LineKind::TicketCounter, LineKind::Checkpoint, LineKind::HoldRoom];

    /// Prefix used when labelling a single unit, e.g. `"Counter 3"`.
    pub fn unit_label(self) -> &'static str {
        match self {
            LineKind::TicketCounter => "Counter",
            LineKind::Checkpoint    => "Checkpoint",
            LineKind::HoldRoom      => "Hold Room",
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineKind::TicketCounter => "ticket counters",
            LineKind::Checkpoint    => "checkpoints",
            LineKind::HoldRoom      => "hold rooms",
        })
    }
}

// ── Configs ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TicketCounterConfig {
    pub id:              CounterId,
    /// Service rate in passengers per minute.
    pub rate_per_minute: f64,
    /// Flights this counter serves.  Empty means every flight.
    pub allowed_flights: Vec<FlightId>,
}

impl TicketCounterConfig {
    pub fn new(id: CounterId, rate_per_minute: f64) -> Self {
        Self { id, rate_per_minute, allowed_flights: Vec::new() }
    }

    #[inline]
    pub fn rate_per_hour(&self) -> f64 {
        self.rate_per_minute * 60.0
    }

    pub fn serves(&self, flight: FlightId) -> bool {
        self.allowed_flights.is_empty() || self.allowed_flights.contains(&flight)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckpointConfig {
    pub id:            CheckpointId,
    pub rate_per_hour: f64,
}

impl CheckpointConfig {
    pub fn new(id: CheckpointId, rate_per_hour: f64) -> Self {
        Self { id, rate_per_hour }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HoldRoomConfig {
    pub id:                     HoldRoomId,
    /// Walking time from security to this room.
    pub walk_seconds:           u32,
    /// Flight numbers boarding from this room.  Empty means every flight.
    pub allowed_flight_numbers: BTreeSet<String>,
}

impl HoldRoomConfig {
    pub fn new(id: HoldRoomId, walk_seconds: u32) -> Self {
        Self { id, walk_seconds, allowed_flight_numbers: BTreeSet::new() }
    }

    #[inline]
    pub fn walk_minutes(&self) -> u32 {
        self.walk_seconds / 60
    }

    #[inline]
    pub fn walk_seconds_part(&self) -> u32 {
        self.walk_seconds % 60
    }

    /// `"ALL"` when unrestricted, otherwise the sorted flight numbers joined
    /// with `", "`.
    pub fn allowed_flights_label(&self) -> String {
        if self.allowed_flight_numbers.is_empty() {
            return "ALL".to_owned();
        }
        self.allowed_flight_numbers
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
