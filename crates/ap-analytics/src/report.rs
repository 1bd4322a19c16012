//! The composed report.
//!
//! Plain data only: every value is already computed and formatted for a
//! presentation layer to lay out as tables or cards.

use ap_core::{ArrivalCurveConfig, CheckpointId, CounterId, HoldRoomId, LineKind};
use ap_trace::SeriesKind;

use crate::{DwellAverages, OccupancySource};

/// Caveat carried by every sizing section.
pub const SUM_OF_MAXIMA_NOTE: &str = "Totals (sum of per-unit maxima): each unit's maximum is \
taken independently, so units that peak at different times make the total overstate the \
floor space needed at any one moment.";

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    pub inputs:   InputsSection,
    pub overview: OverviewSection,
    pub flights:  Vec<FlightRow>,
    pub sizing:   SizingSection,
}

// ── Inputs ────────────────────────────────────────────────────────────────────

/// Echo of the run configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputsSection {
    pub general:     GeneralInputs,
    pub curve:       CurveSection,
    pub counters:    Vec<CounterInputRow>,
    pub checkpoints: Vec<CheckpointInputRow>,
    pub hold_rooms:  Vec<HoldRoomInputRow>,
    pub flights:     Vec<FlightInputRow>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneralInputs {
    pub percent_in_person:              f64,
    pub arrival_span_minutes:           u32,
    /// Span after widening for the curve window.
    pub effective_arrival_span_minutes: u32,
    pub transit_delay_minutes:          u32,
    pub hold_delay_minutes:             u32,
    pub interval_minutes:               u32,
    pub sqft_per_passenger:             u32,
}

/// Arrival-curve parameters, or an explicit marker that the run had none.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveSection {
    Available(ArrivalCurveConfig),
    Unavailable,
}

impl CurveSection {
    pub fn is_available(&self) -> bool {
        matches!(self, CurveSection::Available(_))
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CounterInputRow {
    /// e.g. `"Counter 3"`.
    pub label:           String,
    pub id:              CounterId,
    pub rate_per_hour:   f64,
    /// `"ALL"` or comma-joined flight numbers.
    pub allowed_flights: String,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckpointInputRow {
    pub label:         String,
    pub id:            CheckpointId,
    pub rate_per_hour: f64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HoldRoomInputRow {
    pub label:           String,
    pub id:              HoldRoomId,
    pub walk_minutes:    u32,
    pub walk_seconds:    u32,
    pub allowed_flights: String,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlightInputRow {
    pub number:        String,
    /// `HH:MM`.
    pub departure:     String,
    pub seats:         u32,
    pub fill_fraction: f64,
}

// ── Overview ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverviewSection {
    pub flights:         usize,
    /// Sum of every flight's per-minute arrivals.
    pub total_generated: u32,
    /// Ever held in a hold room, excluding passengers flagged missed.
    pub reached_hold:    u32,
    /// Sum of per-flight shortfalls, each floored at zero.
    pub missed:          u32,
    /// Whether `reached_hold` came from full history or the live fallback.
    pub hold_history:    OccupancySource,
    pub mix:             PassengerMix,
    pub dwell:           DwellAverages,
    /// One row per series, in `SeriesKind::ALL` order.
    pub peaks:           Vec<PeakRow>,
}

impl OverviewSection {
    pub fn peak(&self, kind: SeriesKind) -> Option<&PeakRow> {
        self.peaks.iter().find(|row| row.kind == kind)
    }
}

/// Split of generated passengers by the configured in-person fraction.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassengerMix {
    pub percent_in_person: f64,
    pub in_person:         u32,
    pub online:            u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeakRow {
    pub kind:           SeriesKind,
    pub value:          u32,
    pub interval:       Option<usize>,
    pub time_label:     String,
    pub interval_label: String,
}

// ── Flights ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlightRow {
    pub number:         String,
    pub departure:      String,
    pub boarding_close: String,
    pub expected:       u32,
    pub generated:      u32,
    pub reached:        u32,
    pub missed:         u32,
}

// ── Sizing ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizingSection {
    pub ticket_counters: SizingTable,
    pub checkpoints:     SizingTable,
    pub hold_rooms:      SizingTable,
    pub note:            String,
}

impl SizingSection {
    pub fn table(&self, kind: LineKind) -> &SizingTable {
        match kind {
            LineKind::TicketCounter => &self.ticket_counters,
            LineKind::Checkpoint    => &self.checkpoints,
            LineKind::HoldRoom      => &self.hold_rooms,
        }
    }

    pub fn tables(&self) -> [&SizingTable; 3] {
        [&self.ticket_counters, &self.checkpoints, &self.hold_rooms]
    }
}

/// Per-unit maxima for one resource kind.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizingTable {
    pub kind:                 LineKind,
    pub rows:                 Vec<SizingRow>,
    /// Sum of the rows' `max_passengers`, not a simultaneous peak.
    pub total_max_passengers: u32,
    pub total_sqft:           u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizingRow {
    pub label:          String,
    pub resource_id:    u32,
    pub max_passengers: u32,
    pub max_sqft:       u64,
    pub time_label:     String,
    pub interval_label: String,
}
