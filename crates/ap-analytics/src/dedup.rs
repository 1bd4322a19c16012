//! Ever-occupied passenger sets.
//!
//! The engine clears a hold room once its flight departs, so the live lines
//! at the end of a run say little about who *used* a resource.  The answer
//! comes from walking every interval of history and collecting passenger ids
//! by identity, keeping the order in which they were first seen.
//!
//! When the walk finds nobody (history empty or not retained) the live lines
//! are scanned instead.  The result records which source it came from so a
//! caller can tell "nobody, ever" from "no history to look at".

use std::fmt;

use ap_core::{LineKind, PassengerId};
use ap_trace::Trace;
use log::{debug, warn};

#[cfg(feature = "fx-hash")]
type SeenSet = rustc_hash::FxHashSet<PassengerId>;
#[cfg(not(feature = "fx-hash"))]
type SeenSet = std::collections::HashSet<PassengerId>;

/// Where an [`EverOccupants`] set came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OccupancySource {
    /// The history walk found occupants.
    History,
    /// History held nobody; the set is read from the live lines and may
    /// under-count.
    LiveFallback,
    /// Neither history nor the live lines held anybody.
    Empty,
}

impl OccupancySource {
    /// `false` when the count is a best-effort approximation.
    pub fn is_complete(self) -> bool {
        !matches!(self, OccupancySource::LiveFallback)
    }
}

impl fmt::Display for OccupancySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OccupancySource::History      => "history",
            OccupancySource::LiveFallback => "live fallback",
            OccupancySource::Empty        => "empty",
        })
    }
}

/// Passengers who appeared at least once in the selected lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EverOccupants {
    /// First-seen order, no duplicates.
    pub passengers:       Vec<PassengerId>,
    pub source:           OccupancySource,
    /// Intervals of history examined.  Zero means no history was available.
    pub intervals_walked: usize,
}

impl EverOccupants {
    #[inline]
    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    #[inline]
    pub fn history_available(&self) -> bool {
        self.intervals_walked > 0
    }
}

/// Everyone who was ever in any line of `kind`.
pub fn ever_occupants(trace: &Trace, kind: LineKind) -> EverOccupants {
    let history = trace
        .history(kind)
        .flat_map(|lines| lines.iter().map(Vec::as_slice));
    let live = trace.live().lines(kind).iter().map(Vec::as_slice);
    collect(kind, trace.interval_count(), history, live)
}

/// Everyone who was ever in line `index` of `kind`.
///
/// Intervals whose snapshot has no such line contribute nothing.
pub fn ever_occupants_of_line(trace: &Trace, kind: LineKind, index: usize) -> EverOccupants {
    let history = trace
        .history(kind)
        .filter_map(|lines| lines.get(index).map(Vec::as_slice));
    let live = trace.live().line(kind, index).into_iter();
    collect(kind, trace.interval_count(), history, live)
}

fn collect<'a>(
    kind: LineKind,
    intervals_walked: usize,
    history: impl Iterator<Item = &'a [PassengerId]>,
    live: impl Iterator<Item = &'a [PassengerId]>,
) -> EverOccupants {
    let mut seen = FirstSeen::default();
    for line in history {
        seen.extend(line);
    }
    if !seen.order.is_empty() {
        return EverOccupants {
            passengers: seen.order,
            source: OccupancySource::History,
            intervals_walked,
        };
    }

    for line in live {
        seen.extend(line);
    }
    let source = if seen.order.is_empty() {
        debug!("no {kind} occupants in {intervals_walked} intervals or live lines");
        OccupancySource::Empty
    } else {
        warn!(
            "{kind}: history of {intervals_walked} intervals held nobody; \
             using {} passengers from live lines",
            seen.order.len()
        );
        OccupancySource::LiveFallback
    };
    EverOccupants { passengers: seen.order, source, intervals_walked }
}

#[derive(Default)]
struct FirstSeen {
    seen:  SeenSet,
    order: Vec<PassengerId>,
}

impl FirstSeen {
    fn extend(&mut self, ids: &[PassengerId]) {
        for &id in ids {
            if self.seen.insert(id) {
                self.order.push(id);
            }
        }
    }
}
