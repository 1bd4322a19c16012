//! Passenger records.
//!
//! Stage timestamps are simulation minutes.  A stage the passenger never
//! reached is `None`; it must be left out of any duration computation, never
//! treated as zero.  Engines that report `-1` for "unset" convert with
//! [`stage_minute`].

use crate::FlightId;

/// One simulated traveller.
///
/// Records have no business key: two passengers can be attribute-identical.
/// Identity is the [`PassengerId`][crate::PassengerId] slot in the trace's
/// passenger arena.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passenger {
    pub flight:                 FlightId,
    pub arrival_minute:         Option<u32>,
    /// `true` if the passenger visits a ticket counter before security.
    pub in_person:              bool,
    pub ticket_done_minute:     Option<u32>,
    pub checkpoint_done_minute: Option<u32>,
    pub hold_entry_minute:      Option<u32>,
    /// Flagged by the engine when the passenger did not make the departure.
    pub missed:                 bool,
}

impl Passenger {
    /// A passenger for `flight` with no stage reached yet.
    pub fn new(flight: FlightId, in_person: bool) -> Self {
        Self {
            flight,
            in_person,
            ..Self::default()
        }
    }

    /// Minutes from arrival to ticket completion.
    pub fn ticket_dwell(&self) -> Option<u32> {
        dwell(self.arrival_minute, self.ticket_done_minute)
    }

    /// Minutes from arrival to clearing security (the online path).
    pub fn checkpoint_dwell_from_arrival(&self) -> Option<u32> {
        dwell(self.arrival_minute, self.checkpoint_done_minute)
    }

    /// Minutes from ticket completion to clearing security (the in-person path).
    pub fn checkpoint_dwell_from_ticket(&self) -> Option<u32> {
        dwell(self.ticket_done_minute, self.checkpoint_done_minute)
    }

    /// Minutes from arrival to entering a hold room.
    pub fn arrival_to_hold_dwell(&self) -> Option<u32> {
        dwell(self.arrival_minute, self.hold_entry_minute)
    }
}

/// Duration between two stage timestamps.
///
/// `None` unless both are recorded and `end >= start`.
#[inline]
pub fn dwell(start: Option<u32>, end: Option<u32>) -> Option<u32> {
    match (start, end) {
        (Some(s), Some(e)) if e >= s => Some(e - s),
        _ => None,
    }
}

/// Convert an engine minute where any negative value means "not reached".
#[inline]
pub fn stage_minute(raw: i32) -> Option<u32> {
    u32::try_from(raw).ok()
}
