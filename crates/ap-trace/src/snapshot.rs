//! Per-interval snapshots of every queue and hold room.

use ap_core::{LineKind, PassengerId};

/// Passengers physically present in one resource at one instant.
pub type Line = Vec<PassengerId>;

/// The state of all lines at the end of one interval.
///
/// Each `Vec<Line>` is indexed by the resource's position in its config list.
/// A snapshot may hold fewer lines than there are configs (the engine had
/// not opened that resource yet); readers treat the missing line as absent,
/// not as an error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub ticket_lines:     Vec<Line>,
    pub checkpoint_lines: Vec<Line>,
    pub hold_room_lines:  Vec<Line>,
}

impl Snapshot {
    pub fn new(ticket_lines: Vec<Line>, checkpoint_lines: Vec<Line>, hold_room_lines: Vec<Line>) -> Self {
        Self { ticket_lines, checkpoint_lines, hold_room_lines }
    }

    /// All lines of one kind.
    #[inline]
    pub fn lines(&self, kind: LineKind) -> &[Line] {
        match kind {
            LineKind::TicketCounter => &self.ticket_lines,
            LineKind::Checkpoint    => &self.checkpoint_lines,
            LineKind::HoldRoom      => &self.hold_room_lines,
        }
    }

    /// Line `index` of `kind`, or `None` if this snapshot is too short.
    #[inline]
    pub fn line(&self, kind: LineKind, index: usize) -> Option<&[PassengerId]> {
        self.lines(kind).get(index).map(Vec::as_slice)
    }

    /// Total passengers across all lines of `kind`.
    pub fn occupancy(&self, kind: LineKind) -> u32 {
        self.lines(kind).iter().map(|l| l.len() as u32).sum()
    }

    pub fn is_empty(&self) -> bool {
        LineKind::ALL
            .iter()
            .all(|&k| self.lines(k).iter().all(Vec::is_empty))
    }
}
