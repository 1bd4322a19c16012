//! Engine-facing observer that records a [`Trace`] as the run progresses.

use ap_core::{FlightId, Passenger, RunConfig};
use log::debug;

use crate::{AggregateSeries, SeriesKind, Snapshot, Trace, TraceBuilder, TraceError, TraceResult};

/// Callbacks a simulation engine invokes while it runs.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: interval counter
///
/// ```rust,ignore
/// struct Progress { intervals: usize }
///
/// impl TraceObserver for Progress {
///     fn on_interval(&mut self, _index: usize, _snapshot: &Snapshot) {
///         self.intervals += 1;
///     }
/// }
/// ```
pub trait TraceObserver {
    /// Called once per interval, in ascending `index` order, with the state
    /// of every line at the end of that interval.
    fn on_interval(&mut self, _index: usize, _snapshot: &Snapshot) {}

    /// Called for each aggregate count the engine reports.  Intervals with
    /// nothing to report may be skipped.
    fn on_series(&mut self, _kind: SeriesKind, _index: usize, _count: u32) {}

    /// Called once per flight with its generated per-minute arrival counts.
    fn on_arrivals(&mut self, _flight: FlightId, _per_minute: &[u32]) {}

    /// Called once after the final interval with the final passenger records
    /// and the engine's current lines.
    fn on_run_end(&mut self, _passengers: &[Passenger], _live: &Snapshot) {}
}

/// A [`TraceObserver`] that accumulates everything into a [`Trace`].
///
/// Errors (an out-of-order interval) are stored internally because observer
/// methods have no return value; [`finish`][Self::finish] reports the first
/// one.
pub struct TraceRecorder {
    config:          RunConfig,
    retain_history:  bool,
    next_interval:   usize,
    snapshots:       Vec<Snapshot>,
    series:          AggregateSeries,
    minute_arrivals: Vec<(FlightId, Vec<u32>)>,
    passengers:      Vec<Passenger>,
    live:            Snapshot,
    last_error:      Option<TraceError>,
}

impl TraceRecorder {
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            retain_history:  true,
            next_interval:   0,
            snapshots:       Vec::new(),
            series:          AggregateSeries::default(),
            minute_arrivals: Vec::new(),
            passengers:      Vec::new(),
            live:            Snapshot::default(),
            last_error:      None,
        }
    }

    /// Keep (`true`, default) or drop per-interval snapshots.
    ///
    /// Dropping them bounds memory on very long runs; ever-occupied counts
    /// then fall back to the live lines.
    pub fn retain_history(mut self, retain: bool) -> Self {
        self.retain_history = retain;
        self
    }

    /// Number of intervals observed so far.
    pub fn intervals_seen(&self) -> usize {
        self.next_interval
    }

    /// Validate everything recorded and produce the [`Trace`].
    pub fn finish(self) -> TraceResult<Trace> {
        if let Some(e) = self.last_error {
            return Err(e);
        }
        debug!(
            "recorder finishing: {} intervals seen, {} retained",
            self.next_interval,
            self.snapshots.len()
        );

        let mut builder = TraceBuilder::new(self.config)
            .passengers(self.passengers)
            .snapshots(self.snapshots)
            .live(self.live);
        for kind in SeriesKind::ALL {
            builder = builder.series(kind, self.series.get(kind).clone());
        }
        for (flight, per_minute) in self.minute_arrivals {
            builder = builder.minute_arrivals(flight, per_minute);
        }
        builder.build()
    }

    fn store_err(&mut self, e: TraceError) {
        // Keep only the first error.
        if self.last_error.is_none() {
            self.last_error = Some(e);
        }
    }
}

impl TraceObserver for TraceRecorder {
    fn on_interval(&mut self, index: usize, snapshot: &Snapshot) {
        if index != self.next_interval {
            self.store_err(TraceError::IntervalOutOfOrder {
                expected: self.next_interval,
                got:      index,
            });
            return;
        }
        self.next_interval += 1;
        if self.retain_history {
            self.snapshots.push(snapshot.clone());
        }
    }

    fn on_series(&mut self, kind: SeriesKind, index: usize, count: u32) {
        self.series.get_mut(kind).insert(index, count);
    }

    fn on_arrivals(&mut self, flight: FlightId, per_minute: &[u32]) {
        self.minute_arrivals.push((flight, per_minute.to_vec()));
    }

    fn on_run_end(&mut self, passengers: &[Passenger], live: &Snapshot) {
        self.passengers = passengers.to_vec();
        self.live = live.clone();
    }
}
