//! The immutable `Trace`.

use ap_core::{
    CheckpointConfig, Flight, FlightId, HoldRoomConfig, LineKind, Passenger, PassengerId, RunConfig,
    TicketCounterConfig,
};

use crate::builder::check_structure;
use crate::{AggregateSeries, Line, Series, SeriesKind, Snapshot, TraceError, TraceResult};

/// Version of the engine → analytics data contract carried by every trace.
pub const TRACE_CONTRACT_VERSION: u16 = 1;

/// A finished simulation run, fully materialised before analysis.
///
/// Every accessor returns a (possibly empty) container; a run with no
/// history yields empty slices and empty series, never `None`.  There are no
/// `&mut` accessors; build a new trace instead.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trace {
    pub(crate) version:         u16,
    pub(crate) config:          RunConfig,
    pub(crate) passengers:      Vec<Passenger>,
    pub(crate) snapshots:       Vec<Snapshot>,
    pub(crate) live:            Snapshot,
    pub(crate) series:          AggregateSeries,
    /// Indexed by `FlightId`; always `config.flights.len()` long.
    pub(crate) minute_arrivals: Vec<Vec<u32>>,
}

impl Trace {
    /// A trace for a run that produced nothing.
    pub fn empty(config: RunConfig) -> Self {
        let minute_arrivals = vec![Vec::new(); config.flights.len()];
        Self {
            version: TRACE_CONTRACT_VERSION,
            config,
            passengers: Vec::new(),
            snapshots: Vec::new(),
            live: Snapshot::default(),
            series: AggregateSeries::default(),
            minute_arrivals,
        }
    }

    /// Reject traces produced against a different contract version (e.g.
    /// deserialized from an older engine's output).
    pub fn check_version(&self) -> TraceResult<()> {
        if self.version != TRACE_CONTRACT_VERSION {
            return Err(TraceError::UnsupportedVersion {
                found:    self.version,
                expected: TRACE_CONTRACT_VERSION,
            });
        }
        Ok(())
    }

    /// Re-run the structural checks [`TraceBuilder::build`] applies, for
    /// traces that did not come through a builder (deserialized ones).
    /// Config ranges are checked separately by `RunConfig::validate`.
    ///
    /// [`TraceBuilder::build`]: crate::TraceBuilder::build
    pub fn check_integrity(&self) -> TraceResult<()> {
        check_structure(&self.config, &self.passengers, &self.snapshots, &self.live)?;
        if self.minute_arrivals.len() > self.config.flights.len() {
            return Err(TraceError::ArrivalsForUnknownFlight(FlightId(
                self.config.flights.len() as u32,
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn version(&self) -> u16 {
        self.version
    }

    // ── Static configuration ──────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    #[inline]
    pub fn flights(&self) -> &[Flight] {
        &self.config.flights
    }

    #[inline]
    pub fn counters(&self) -> &[TicketCounterConfig] {
        &self.config.counters
    }

    #[inline]
    pub fn checkpoints(&self) -> &[CheckpointConfig] {
        &self.config.checkpoints
    }

    #[inline]
    pub fn hold_rooms(&self) -> &[HoldRoomConfig] {
        &self.config.hold_rooms
    }

    /// Number of configured resources of `kind`, the line count analytics
    /// iterate over.
    pub fn resource_count(&self, kind: LineKind) -> usize {
        match kind {
            LineKind::TicketCounter => self.config.counters.len(),
            LineKind::Checkpoint    => self.config.checkpoints.len(),
            LineKind::HoldRoom      => self.config.hold_rooms.len(),
        }
    }

    #[inline]
    pub fn minutes_per_interval(&self) -> u32 {
        self.config.interval_minutes
    }

    #[inline]
    pub fn sqft_per_passenger(&self) -> u32 {
        self.config.sqft_per_passenger
    }

    // ── Passengers ────────────────────────────────────────────────────────

    #[inline]
    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    /// Look up a passenger.  Ids inside a built trace always resolve.
    #[inline]
    pub fn passenger(&self, id: PassengerId) -> Option<&Passenger> {
        self.passengers.get(id.index())
    }

    // ── History ───────────────────────────────────────────────────────────

    /// Snapshot arena, addressed by interval index.
    #[inline]
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    #[inline]
    pub fn interval_count(&self) -> usize {
        self.snapshots.len()
    }

    /// Per-interval lines of `kind`, in ascending interval order.
    pub fn history(&self, kind: LineKind) -> impl Iterator<Item = &[Line]> + '_ {
        self.snapshots.iter().map(move |s| s.lines(kind))
    }

    /// The engine's current lines when the run ended.  Hold rooms are
    /// typically empty here because they clear at departure.
    #[inline]
    pub fn live(&self) -> &Snapshot {
        &self.live
    }

    #[inline]
    pub fn series(&self, kind: SeriesKind) -> &Series {
        self.series.get(kind)
    }

    #[inline]
    pub fn aggregate_series(&self) -> &AggregateSeries {
        &self.series
    }

    // ── Generation ────────────────────────────────────────────────────────

    /// Per-minute generated arrival counts, one row per flight.
    #[inline]
    pub fn minute_arrivals(&self) -> &[Vec<u32>] {
        &self.minute_arrivals
    }

    /// Per-minute arrivals for one flight; empty if the flight is unknown.
    pub fn arrivals_for(&self, flight: FlightId) -> &[u32] {
        self.minute_arrivals
            .get(flight.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
