//! Unit tests for ap-trace.

use ap_core::{
    ClockTime, Flight, FlightId, HoldRoomConfig, HoldRoomId, Passenger, PassengerId, RunConfig,
};

use crate::Snapshot;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn one_flight_config() -> RunConfig {
    RunConfig {
        flights: vec![Flight::new("AB100", ClockTime::from_hm(9, 0).unwrap(), 100, 0.9)],
        hold_rooms: vec![HoldRoomConfig::new(HoldRoomId(1), 90)],
        ..RunConfig::default()
    }
}

fn passengers(n: usize) -> Vec<Passenger> {
    (0..n).map(|_| Passenger::new(FlightId(0), false)).collect()
}

fn ids(raw: &[u32]) -> Vec<PassengerId> {
    raw.iter().copied().map(PassengerId).collect()
}

fn hold_snapshot(rooms: &[&[u32]]) -> Snapshot {
    Snapshot {
        hold_room_lines: rooms.iter().map(|r| ids(r)).collect(),
        ..Snapshot::default()
    }
}

// ── Series ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod series_tests {
    use crate::{AggregateSeries, Series, Snapshot};

    use super::ids;

    #[test]
    fn missing_interval_reads_zero() {
        let s: Series = [(0, 3), (4, 9)].into_iter().collect();
        assert_eq!(s.get(0), 3);
        assert_eq!(s.get(2), 0);
        assert_eq!(s.get(4), 9);
    }

    #[test]
    fn iteration_is_ascending() {
        let mut s = Series::new();
        s.insert(5, 1);
        s.insert(1, 2);
        s.insert(3, 3);
        let keys: Vec<_> = s.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, [1, 3, 5]);
    }

    #[test]
    fn held_up_combines_union_of_intervals() {
        let agg = AggregateSeries {
            ticket_queued:     [(0, 2), (1, 4)].into_iter().collect(),
            checkpoint_queued: [(1, 1), (2, 5)].into_iter().collect(),
            ..AggregateSeries::default()
        };
        let held = agg.combined_held_up();
        assert_eq!(held.iter().collect::<Vec<_>>(), [(0, 2), (1, 5), (2, 5)]);
    }

    #[test]
    fn from_snapshots_sums_line_lengths() {
        let snaps = vec![
            Snapshot::new(vec![ids(&[0, 1]), ids(&[2])], vec![ids(&[3])], vec![]),
            Snapshot::new(vec![], vec![], vec![ids(&[0, 1, 2])]),
        ];
        let agg = AggregateSeries::from_snapshots(&snaps);
        assert_eq!(agg.ticket_queued.get(0), 3);
        assert_eq!(agg.checkpoint_queued.get(0), 1);
        assert_eq!(agg.held_up.get(0), 4);
        assert_eq!(agg.hold_room_total.get(1), 3);
        assert_eq!(agg.held_up.len(), 2); // zero-count intervals still present
    }
}

// ── Snapshot ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod snapshot_tests {
    use ap_core::LineKind;

    use super::{hold_snapshot, ids};
    use crate::Snapshot;

    #[test]
    fn short_snapshot_line_is_none() {
        let snap = hold_snapshot(&[&[0, 1]]);
        assert_eq!(snap.line(LineKind::HoldRoom, 0), Some(ids(&[0, 1]).as_slice()));
        assert_eq!(snap.line(LineKind::HoldRoom, 1), None);
        assert_eq!(snap.line(LineKind::TicketCounter, 0), None);
    }

    #[test]
    fn empty_detection() {
        assert!(Snapshot::default().is_empty());
        assert!(hold_snapshot(&[&[], &[]]).is_empty());
        assert!(!hold_snapshot(&[&[], &[4]]).is_empty());
    }
}

// ── TraceBuilder ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use ap_core::{CoreError, Flight, FlightId, LineKind, Passenger, PassengerId, RunConfig};

    use super::*;
    use crate::{Series, SeriesKind, TRACE_CONTRACT_VERSION, Trace, TraceBuilder, TraceError};

    #[test]
    fn builds_with_defaults() {
        let trace = TraceBuilder::new(one_flight_config()).build().unwrap();
        assert_eq!(trace.interval_count(), 0);
        assert!(trace.passengers().is_empty());
        assert!(trace.series(SeriesKind::HeldUp).is_empty());
        assert_eq!(trace.history(LineKind::HoldRoom).count(), 0);
        assert_eq!(trace.minute_arrivals().len(), 1);
        assert!(trace.arrivals_for(FlightId(0)).is_empty());
        assert!(trace.arrivals_for(FlightId(9)).is_empty());
        assert_eq!(trace.version(), TRACE_CONTRACT_VERSION);
    }

    #[test]
    fn empty_trace_matches_built_empty_trace() {
        let built = TraceBuilder::new(one_flight_config()).build().unwrap();
        assert_eq!(Trace::empty(one_flight_config()), built);
    }

    #[test]
    fn invalid_config_rejected() {
        let mut config = one_flight_config();
        config.flights.push(Flight::new("BAD", ClockTime::MIDNIGHT, 10, 2.0));
        let err = TraceBuilder::new(config).build().unwrap_err();
        assert!(matches!(err, TraceError::Config(CoreError::Config { .. })));
    }

    #[test]
    fn passenger_with_unknown_flight_rejected() {
        let err = TraceBuilder::new(one_flight_config())
            .passengers(vec![Passenger::new(FlightId(3), true)])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            TraceError::UnknownFlight { passenger: PassengerId(0), flight: FlightId(3) }
        );
    }

    #[test]
    fn line_with_unknown_passenger_rejected() {
        let err = TraceBuilder::new(one_flight_config())
            .passengers(passengers(2))
            .push_snapshot(hold_snapshot(&[&[0, 1]]))
            .push_snapshot(hold_snapshot(&[&[7]]))
            .build()
            .unwrap_err();
        match err {
            TraceError::UnknownPassenger { kind, line, at, passenger } => {
                assert_eq!(kind, LineKind::HoldRoom);
                assert_eq!(line, 0);
                assert_eq!(at, "interval 1");
                assert_eq!(passenger, PassengerId(7));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn live_lines_checked_too() {
        let err = TraceBuilder::new(one_flight_config())
            .passengers(passengers(1))
            .live(hold_snapshot(&[&[1]]))
            .build()
            .unwrap_err();
        assert!(matches!(err, TraceError::UnknownPassenger { .. }));
    }

    #[test]
    fn short_snapshots_accepted() {
        let mut config = one_flight_config();
        config.hold_rooms.push(config.hold_rooms[0].clone());
        let trace = TraceBuilder::new(config)
            .passengers(passengers(1))
            .push_snapshot(hold_snapshot(&[&[0]]))
            .build()
            .unwrap();
        assert_eq!(trace.resource_count(LineKind::HoldRoom), 2);
        assert_eq!(trace.snapshots()[0].hold_room_lines.len(), 1);
    }

    #[test]
    fn arrivals_for_unknown_flight_rejected() {
        let err = TraceBuilder::new(one_flight_config())
            .minute_arrivals(FlightId(1), vec![1, 2])
            .build()
            .unwrap_err();
        assert_eq!(err, TraceError::ArrivalsForUnknownFlight(FlightId(1)));
    }

    #[test]
    fn held_up_derived_when_missing() {
        let trace = TraceBuilder::new(RunConfig::default())
            .series(SeriesKind::TicketQueued, [(0, 2)].into_iter().collect())
            .series(SeriesKind::CheckpointQueued, [(0, 3), (1, 1)].into_iter().collect())
            .build()
            .unwrap();
        assert_eq!(trace.series(SeriesKind::HeldUp).get(0), 5);
        assert_eq!(trace.series(SeriesKind::HeldUp).get(1), 1);
    }

    #[test]
    fn supplied_held_up_kept() {
        let held: Series = [(0, 42)].into_iter().collect();
        let trace = TraceBuilder::new(RunConfig::default())
            .series(SeriesKind::TicketQueued, [(0, 2)].into_iter().collect())
            .series(SeriesKind::HeldUp, held.clone())
            .build()
            .unwrap();
        assert_eq!(trace.series(SeriesKind::HeldUp), &held);
    }

    #[test]
    fn derive_series_overrides_supplied() {
        let trace = TraceBuilder::new(one_flight_config())
            .passengers(passengers(3))
            .push_snapshot(hold_snapshot(&[&[0, 1, 2]]))
            .series(SeriesKind::HoldRoomTotal, [(0, 99)].into_iter().collect())
            .derive_series_from_snapshots()
            .build()
            .unwrap();
        assert_eq!(trace.series(SeriesKind::HoldRoomTotal).get(0), 3);
    }

    #[test]
    fn version_mismatch_detected() {
        let mut trace = Trace::empty(RunConfig::default());
        assert!(trace.check_version().is_ok());
        trace.version = TRACE_CONTRACT_VERSION + 1;
        assert!(matches!(trace.check_version(), Err(TraceError::UnsupportedVersion { .. })));
    }

    #[test]
    fn integrity_check_catches_unbuilt_defects() {
        let mut trace = Trace::empty(one_flight_config());
        assert!(trace.check_integrity().is_ok());

        trace.passengers = vec![Passenger::new(FlightId(0), true), Passenger::new(FlightId(4), true)];
        assert_eq!(
            trace.check_integrity(),
            Err(TraceError::UnknownFlight { passenger: PassengerId(1), flight: FlightId(4) })
        );

        trace.passengers = passengers(2);
        trace.live = hold_snapshot(&[&[1, 5]]);
        assert!(matches!(
            trace.check_integrity(),
            Err(TraceError::UnknownPassenger { passenger: PassengerId(5), .. })
        ));

        trace.live = Snapshot::default();
        trace.minute_arrivals.push(vec![1]);
        assert_eq!(
            trace.check_integrity(),
            Err(TraceError::ArrivalsForUnknownFlight(FlightId(1)))
        );
    }
}

// ── TraceRecorder ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod recorder_tests {
    use ap_core::{FlightId, LineKind};

    use super::*;
    use crate::{SeriesKind, TraceError, TraceObserver, TraceRecorder};

    fn drive(recorder: &mut impl TraceObserver) {
        let arena = passengers(2);
        recorder.on_arrivals(FlightId(0), &[1, 1]);
        recorder.on_interval(0, &hold_snapshot(&[&[0]]));
        recorder.on_series(SeriesKind::HoldRoomTotal, 0, 1);
        recorder.on_interval(1, &hold_snapshot(&[&[0, 1]]));
        recorder.on_series(SeriesKind::HoldRoomTotal, 1, 2);
        recorder.on_interval(2, &hold_snapshot(&[&[]]));
        recorder.on_run_end(&arena, &hold_snapshot(&[&[]]));
    }

    #[test]
    fn records_full_run() {
        let mut rec = TraceRecorder::new(one_flight_config());
        drive(&mut rec);
        assert_eq!(rec.intervals_seen(), 3);

        let trace = rec.finish().unwrap();
        assert_eq!(trace.interval_count(), 3);
        assert_eq!(trace.passengers().len(), 2);
        assert_eq!(trace.series(SeriesKind::HoldRoomTotal).get(1), 2);
        assert_eq!(trace.arrivals_for(FlightId(0)), &[1, 1]);
        let sizes: Vec<usize> = trace
            .history(LineKind::HoldRoom)
            .map(|lines| lines[0].len())
            .collect();
        assert_eq!(sizes, [1, 2, 0]);
    }

    #[test]
    fn history_can_be_dropped() {
        let mut rec = TraceRecorder::new(one_flight_config()).retain_history(false);
        drive(&mut rec);
        let trace = rec.finish().unwrap();
        assert_eq!(trace.interval_count(), 0);
        // Series still recorded.
        assert_eq!(trace.series(SeriesKind::HoldRoomTotal).len(), 2);
    }

    #[test]
    fn out_of_order_interval_reported_at_finish() {
        let mut rec = TraceRecorder::new(one_flight_config());
        rec.on_interval(0, &Snapshot::default());
        rec.on_interval(2, &Snapshot::default());
        rec.on_interval(3, &Snapshot::default());
        assert_eq!(
            rec.finish().unwrap_err(),
            TraceError::IntervalOutOfOrder { expected: 1, got: 2 }
        );
    }
}
