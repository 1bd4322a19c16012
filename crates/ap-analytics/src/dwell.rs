//! Stage dwell averages.

use ap_core::{Passenger, PassengerId};
use ap_trace::Trace;

/// Average minutes spent between stages, each rounded to the nearest minute.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DwellAverages {
    /// Arrival to ticket completion, in-person passengers.
    pub ticket:               u32,
    /// Arrival to clearing security, online passengers.
    pub checkpoint_online:    u32,
    /// Ticket completion to clearing security, in-person passengers.
    pub checkpoint_in_person: u32,
    /// Arrival to hold-room entry, everyone.
    pub arrival_to_hold:      u32,
}

/// Dwell averages over the passengers in `ids`.
///
/// A passenger missing either endpoint of a stage (or with the endpoints out
/// of order) is left out of that stage's average entirely.
pub fn dwell_averages(trace: &Trace, ids: &[PassengerId]) -> DwellAverages {
    let group: Vec<&Passenger> = ids.iter().filter_map(|&id| trace.passenger(id)).collect();
    let in_person = || group.iter().filter(|p| p.in_person);
    let online = || group.iter().filter(|p| !p.in_person);

    DwellAverages {
        ticket:               average_minutes(in_person().map(|p| p.ticket_dwell())),
        checkpoint_online:    average_minutes(online().map(|p| p.checkpoint_dwell_from_arrival())),
        checkpoint_in_person: average_minutes(in_person().map(|p| p.checkpoint_dwell_from_ticket())),
        arrival_to_hold:      average_minutes(group.iter().map(|p| p.arrival_to_hold_dwell())),
    }
}

/// Rounded mean of the `Some` samples; `0` when there are none.
pub fn average_minutes(samples: impl IntoIterator<Item = Option<u32>>) -> u32 {
    let (sum, count) = samples
        .into_iter()
        .flatten()
        .fold((0u64, 0u64), |(sum, count), d| (sum + d as u64, count + 1));
    if count == 0 {
        return 0;
    }
    (sum as f64 / count as f64).round() as u32
}
