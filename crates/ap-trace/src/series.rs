//! Sparse interval-indexed count series.
//!
//! The engine only records intervals in which something happened, so a
//! series is a `BTreeMap<interval, count>`: ordered iteration comes for free
//! and a missing interval reads as zero.

use std::collections::BTreeMap;
use std::fmt;

use ap_core::LineKind;

use crate::Snapshot;

// ── Series ───────────────────────────────────────────────────────────────────

/// Sparse map from interval index to an integer count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Series(BTreeMap<usize, u32>);

impl Series {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `count` for `interval`, replacing any previous value.
    pub fn insert(&mut self, interval: usize, count: u32) {
        self.0.insert(interval, count);
    }

    /// Count at `interval`; zero when the interval was not recorded.
    #[inline]
    pub fn get(&self, interval: usize) -> u32 {
        self.0.get(&interval).copied().unwrap_or(0)
    }

    /// `(interval, count)` pairs in ascending interval order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.0.iter().map(|(&k, &v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(usize, u32)> for Series {
    fn from_iter<I: IntoIterator<Item = (usize, u32)>>(iter: I) -> Self {
        Series(iter.into_iter().collect())
    }
}

// ── SeriesKind ───────────────────────────────────────────────────────────────

/// Selects one of the four aggregate series.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeriesKind {
    TicketQueued,
    CheckpointQueued,
    HoldRoomTotal,
    /// Ticket + checkpoint queues combined.
    HeldUp,
}

impl SeriesKind {
    pub const ALL: [SeriesKind; 4] = [
        SeriesKind::TicketQueued,
        SeriesKind::CheckpointQueued,
        SeriesKind::HoldRoomTotal,
        SeriesKind::HeldUp,
    ];
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SeriesKind::TicketQueued     => "ticket queue",
            SeriesKind::CheckpointQueued => "checkpoint queue",
            SeriesKind::HoldRoomTotal    => "hold rooms total",
            SeriesKind::HeldUp           => "held-up (ticket+checkpoint)",
        })
    }
}

// ── AggregateSeries ──────────────────────────────────────────────────────────

/// The four system-wide series the engine reports alongside its snapshots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AggregateSeries {
    pub ticket_queued:     Series,
    pub checkpoint_queued: Series,
    pub hold_room_total:   Series,
    pub held_up:           Series,
}

impl AggregateSeries {
    #[inline]
    pub fn get(&self, kind: SeriesKind) -> &Series {
        match kind {
            SeriesKind::TicketQueued     => &self.ticket_queued,
            SeriesKind::CheckpointQueued => &self.checkpoint_queued,
            SeriesKind::HoldRoomTotal    => &self.hold_room_total,
            SeriesKind::HeldUp           => &self.held_up,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, kind: SeriesKind) -> &mut Series {
        match kind {
            SeriesKind::TicketQueued     => &mut self.ticket_queued,
            SeriesKind::CheckpointQueued => &mut self.checkpoint_queued,
            SeriesKind::HoldRoomTotal    => &mut self.hold_room_total,
            SeriesKind::HeldUp           => &mut self.held_up,
        }
    }

    /// Rebuild all four series by summing line lengths in each snapshot.
    ///
    /// Every interval gets an entry, including zero counts.
    pub fn from_snapshots(snapshots: &[Snapshot]) -> Self {
        let mut out = Self::default();
        for (i, snap) in snapshots.iter().enumerate() {
            let ticket     = snap.occupancy(LineKind::TicketCounter);
            let checkpoint = snap.occupancy(LineKind::Checkpoint);
            out.ticket_queued.insert(i, ticket);
            out.checkpoint_queued.insert(i, checkpoint);
            out.hold_room_total.insert(i, snap.occupancy(LineKind::HoldRoom));
            out.held_up.insert(i, ticket + checkpoint);
        }
        out
    }

    /// Held-up as ticket + checkpoint over the union of their intervals.
    pub fn combined_held_up(&self) -> Series {
        self.ticket_queued
            .iter()
            .map(|(i, _)| i)
            .chain(self.checkpoint_queued.iter().map(|(i, _)| i))
            .map(|i| (i, self.ticket_queued.get(i) + self.checkpoint_queued.get(i)))
            .collect()
    }
}
