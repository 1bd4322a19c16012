//! Fluent builder for constructing a [`Trace`].

use ap_core::{FlightId, LineKind, Passenger, PassengerId, RunConfig};
use log::debug;

use crate::{AggregateSeries, Series, SeriesKind, Snapshot, Trace, TraceError, TraceResult};
use crate::trace::TRACE_CONTRACT_VERSION;

/// Fluent builder for [`Trace`].
///
/// # Required inputs
///
/// - [`RunConfig`]: flights, resources and scalars for the run.
///
/// # Optional inputs (have defaults)
///
/// | Method                           | Default                                 |
/// |----------------------------------|-----------------------------------------|
/// | `.passengers(v)`                 | Empty arena                             |
/// | `.snapshots(v)` / `.push_snapshot(s)` | No history                         |
/// | `.live(s)`                       | Empty snapshot                          |
/// | `.series(kind, s)`               | Empty series                            |
/// | `.derive_series_from_snapshots()`| Off; series are taken as supplied       |
/// | `.minute_arrivals(flight, v)`    | No arrivals for that flight             |
///
/// The held-up series, when not supplied, is derived as ticket + checkpoint.
///
/// # Example
///
/// ```rust,ignore
/// let trace = TraceBuilder::new(config)
///     .passengers(passengers)
///     .snapshots(history)
///     .series(SeriesKind::HoldRoomTotal, hold_totals)
///     .build()?;
/// ```
pub struct TraceBuilder {
    config:          RunConfig,
    passengers:      Vec<Passenger>,
    snapshots:       Vec<Snapshot>,
    live:            Snapshot,
    series:          AggregateSeries,
    derive_series:   bool,
    minute_arrivals: Vec<(FlightId, Vec<u32>)>,
}

impl TraceBuilder {
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            passengers:      Vec::new(),
            snapshots:       Vec::new(),
            live:            Snapshot::default(),
            series:          AggregateSeries::default(),
            derive_series:   false,
            minute_arrivals: Vec::new(),
        }
    }

    /// Passenger arena; `PassengerId(i)` refers to `passengers[i]`.
    pub fn passengers(mut self, passengers: Vec<Passenger>) -> Self {
        self.passengers = passengers;
        self
    }

    /// Full history, one snapshot per interval in order.
    pub fn snapshots(mut self, snapshots: Vec<Snapshot>) -> Self {
        self.snapshots = snapshots;
        self
    }

    /// Append the snapshot for the next interval.
    pub fn push_snapshot(mut self, snapshot: Snapshot) -> Self {
        self.snapshots.push(snapshot);
        self
    }

    /// The engine's current lines at end of run.
    pub fn live(mut self, live: Snapshot) -> Self {
        self.live = live;
        self
    }

    pub fn series(mut self, kind: SeriesKind, series: Series) -> Self {
        *self.series.get_mut(kind) = series;
        self
    }

    /// Ignore supplied series and recompute all four from the snapshots.
    pub fn derive_series_from_snapshots(mut self) -> Self {
        self.derive_series = true;
        self
    }

    /// Per-minute generated arrivals for `flight`.  A later call for the same
    /// flight replaces the earlier one.
    pub fn minute_arrivals(mut self, flight: FlightId, per_minute: Vec<u32>) -> Self {
        self.minute_arrivals.push((flight, per_minute));
        self
    }

    /// Validate and construct the [`Trace`].
    ///
    /// # Errors
    ///
    /// - `TraceError::Config` if the run config fails validation.
    /// - `TraceError::UnknownFlight` if a passenger names a flight not in the
    ///   config.
    /// - `TraceError::UnknownPassenger` if any line holds an id outside the
    ///   passenger arena.
    /// - `TraceError::ArrivalsForUnknownFlight` for arrival counts keyed by a
    ///   flight not in the config.
    ///
    /// Snapshots with fewer lines than configured resources are accepted.
    pub fn build(self) -> TraceResult<Trace> {
        self.config.validate()?;
        check_structure(&self.config, &self.passengers, &self.snapshots, &self.live)?;

        let flight_count = self.config.flights.len();
        let arena = self.passengers.len();

        let mut minute_arrivals = vec![Vec::new(); flight_count];
        for (flight, per_minute) in self.minute_arrivals {
            let slot = minute_arrivals
                .get_mut(flight.index())
                .ok_or(TraceError::ArrivalsForUnknownFlight(flight))?;
            *slot = per_minute;
        }

        let series = if self.derive_series {
            AggregateSeries::from_snapshots(&self.snapshots)
        } else {
            let mut series = self.series;
            if series.held_up.is_empty() {
                series.held_up = series.combined_held_up();
            }
            series
        };

        debug!(
            "trace built: {} intervals, {} passengers, {} flights",
            self.snapshots.len(),
            arena,
            flight_count
        );

        Ok(Trace {
            version: TRACE_CONTRACT_VERSION,
            config: self.config,
            passengers: self.passengers,
            snapshots: self.snapshots,
            live: self.live,
            series,
            minute_arrivals,
        })
    }
}

/// Every passenger names a configured flight and every line id resolves in
/// the arena.
pub(crate) fn check_structure(
    config: &RunConfig,
    passengers: &[Passenger],
    snapshots: &[Snapshot],
    live: &Snapshot,
) -> TraceResult<()> {
    let flight_count = config.flights.len();
    for (i, p) in passengers.iter().enumerate() {
        if p.flight.index() >= flight_count {
            return Err(TraceError::UnknownFlight {
                passenger: PassengerId(i as u32),
                flight:    p.flight,
            });
        }
    }

    let arena = passengers.len();
    for (i, snap) in snapshots.iter().enumerate() {
        check_lines(snap, arena, || format!("interval {i}"))?;
    }
    check_lines(live, arena, || "live".to_owned())
}

fn check_lines(snap: &Snapshot, arena: usize, at: impl Fn() -> String) -> TraceResult<()> {
    for kind in LineKind::ALL {
        for (line, ids) in snap.lines(kind).iter().enumerate() {
            if let Some(&bad) = ids.iter().find(|id| id.index() >= arena) {
                return Err(TraceError::UnknownPassenger {
                    kind,
                    line,
                    at: at(),
                    passenger: bad,
                });
            }
        }
    }
    Ok(())
}
