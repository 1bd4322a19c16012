//! Unit tests for ap-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CounterId, FlightId, PassengerId};

    #[test]
    fn index_roundtrip() {
        let id = PassengerId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(PassengerId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(FlightId::default(), FlightId::INVALID);
        assert_eq!(FlightId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(CounterId(3).to_string(), "CounterId(3)");
    }
}

#[cfg(test)]
mod time {
    use crate::{ClockTime, Flight, RunClock, RunConfig};

    fn hm(h: u32, m: u32) -> ClockTime {
        ClockTime::from_hm(h, m).unwrap()
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(hm(7, 5).to_string(), "07:05");
        assert_eq!(ClockTime::MIDNIGHT.to_string(), "00:00");
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(ClockTime::from_hm(24, 0).is_err());
        assert!(ClockTime::from_hm(10, 60).is_err());
    }

    #[test]
    fn arithmetic_wraps_midnight() {
        assert_eq!(hm(0, 30).minus_minutes(60), hm(23, 30));
        assert_eq!(hm(23, 50).plus_minutes(15), hm(0, 5));
        assert_eq!(hm(12, 0).plus_minutes(1_440), hm(12, 0));
    }

    #[test]
    fn run_clock_starts_arrival_span_before_first_departure() {
        let config = RunConfig {
            arrival_span_minutes: 120,
            interval_minutes: 1,
            flights: vec![
                Flight::new("B2", hm(10, 0), 150, 0.8),
                Flight::new("A1", hm(8, 30), 150, 0.8),
            ],
            ..RunConfig::default()
        };
        let clock = RunClock::for_config(&config);
        assert_eq!(clock.run_start, hm(6, 30));
        // Snapshot 0 is stamped at the end of the first interval.
        assert_eq!(clock.time_at(0), hm(6, 31));
        assert_eq!(clock.time_at(59), hm(7, 30));
    }

    #[test]
    fn run_clock_without_flights_counts_back_from_midnight() {
        let config = RunConfig { arrival_span_minutes: 90, ..RunConfig::default() };
        assert_eq!(RunClock::for_config(&config).run_start, hm(22, 30));
    }

    #[test]
    fn run_clock_respects_interval_length() {
        let clock = RunClock::new(hm(6, 0), 5);
        assert_eq!(clock.time_at(2), hm(6, 15));
    }
}

#[cfg(test)]
mod flight {
    use crate::{ClockTime, Flight};

    #[test]
    fn expected_passengers_rounds() {
        let f = Flight::new("X", ClockTime::MIDNIGHT, 100, 0.9);
        assert_eq!(f.expected_passengers(), 90);
        let g = Flight::new("Y", ClockTime::MIDNIGHT, 181, 0.85);
        assert_eq!(g.expected_passengers(), 154); // 153.85
    }

    #[test]
    fn boarding_close_counts_back() {
        let f = Flight::new("X", ClockTime::from_hm(9, 10).unwrap(), 1, 1.0);
        assert_eq!(f.boarding_close(20).to_string(), "08:50");
    }
}

#[cfg(test)]
mod passenger {
    use crate::{FlightId, Passenger, dwell, stage_minute};

    #[test]
    fn dwell_requires_both_endpoints_in_order() {
        assert_eq!(dwell(Some(5), Some(12)), Some(7));
        assert_eq!(dwell(Some(5), Some(5)), Some(0));
        assert_eq!(dwell(Some(5), None), None);
        assert_eq!(dwell(None, Some(5)), None);
        assert_eq!(dwell(Some(9), Some(5)), None);
    }

    #[test]
    fn negative_engine_minutes_are_unset() {
        assert_eq!(stage_minute(-1), None);
        assert_eq!(stage_minute(0), Some(0));
        assert_eq!(stage_minute(37), Some(37));
    }

    #[test]
    fn stage_dwells() {
        let p = Passenger {
            arrival_minute: Some(5),
            ticket_done_minute: Some(15),
            checkpoint_done_minute: Some(30),
            hold_entry_minute: None,
            ..Passenger::new(FlightId(0), true)
        };
        assert_eq!(p.ticket_dwell(), Some(10));
        assert_eq!(p.checkpoint_dwell_from_ticket(), Some(15));
        assert_eq!(p.checkpoint_dwell_from_arrival(), Some(25));
        assert_eq!(p.arrival_to_hold_dwell(), None);
    }
}

#[cfg(test)]
mod resource {
    use crate::{FlightId, HoldRoomConfig, HoldRoomId, LineKind, TicketCounterConfig, CounterId};

    #[test]
    fn hold_room_labels() {
        let mut room = HoldRoomConfig::new(HoldRoomId(2), 135);
        assert_eq!(room.walk_minutes(), 2);
        assert_eq!(room.walk_seconds_part(), 15);
        assert_eq!(room.allowed_flights_label(), "ALL");

        room.allowed_flight_numbers.insert("UA20".into());
        room.allowed_flight_numbers.insert("AA10".into());
        assert_eq!(room.allowed_flights_label(), "AA10, UA20");
    }

    #[test]
    fn counter_serves_all_when_unrestricted() {
        let mut c = TicketCounterConfig::new(CounterId(1), 1.5);
        assert!(c.serves(FlightId(7)));
        assert_eq!(c.rate_per_hour(), 90.0);
        c.allowed_flights.push(FlightId(0));
        assert!(c.serves(FlightId(0)));
        assert!(!c.serves(FlightId(7)));
    }

    #[test]
    fn line_kind_labels() {
        assert_eq!(LineKind::TicketCounter.unit_label(), "Counter");
        assert_eq!(LineKind::HoldRoom.to_string(), "hold rooms");
    }
}

#[cfg(test)]
mod config {
    use crate::curve::{DEFAULT_BOARDING_CLOSE, DEFAULT_WINDOW_START};
    use crate::{
        ArrivalCurveConfig, CheckpointConfig, CheckpointId, ClockTime, CoreError, CounterId, Flight,
        FlightId, RunConfig, TicketCounterConfig,
    };

    fn field_of(err: CoreError) -> String {
        match err {
            CoreError::Config { field, .. } => field,
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert!(RunConfig::default().validate().is_ok());
    }

    #[test]
    fn fill_fraction_out_of_range_is_labeled() {
        let config = RunConfig {
            flights: vec![
                Flight::new("OK", ClockTime::MIDNIGHT, 100, 0.5),
                Flight::new("BAD", ClockTime::MIDNIGHT, 100, 1.2),
            ],
            ..RunConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(field_of(err), "flights[1].fill_fraction");
    }

    #[test]
    fn percent_in_person_is_not_clamped() {
        let config = RunConfig { percent_in_person: -0.1, ..RunConfig::default() };
        assert_eq!(field_of(config.validate().unwrap_err()), "percent_in_person");

        let config = RunConfig { percent_in_person: f64::NAN, ..RunConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_interval_rejected() {
        let config = RunConfig { interval_minutes: 0, ..RunConfig::default() };
        assert_eq!(field_of(config.validate().unwrap_err()), "interval_minutes");
    }

    #[test]
    fn negative_rates_rejected() {
        let config = RunConfig {
            checkpoints: vec![CheckpointConfig::new(CheckpointId(1), -5.0)],
            ..RunConfig::default()
        };
        assert_eq!(field_of(config.validate().unwrap_err()), "checkpoints[0].rate_per_hour");
    }

    #[test]
    fn counter_naming_unknown_flight_rejected() {
        let mut counter = TicketCounterConfig::new(CounterId(1), 1.0);
        counter.allowed_flights.push(FlightId(3));
        let config = RunConfig { counters: vec![counter], ..RunConfig::default() };
        assert_eq!(field_of(config.validate().unwrap_err()), "counters[0].allowed_flights");
    }

    #[test]
    fn curve_ordering_checked() {
        let curve = ArrivalCurveConfig {
            legacy_mode: false,
            peak_minutes_before_departure: 200,
            window_start_minutes_before_departure: 150,
            ..ArrivalCurveConfig::legacy_default()
        };
        let config = RunConfig { arrival_curve: Some(curve), ..RunConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn effective_span_widens_for_edited_curve() {
        let edited = ArrivalCurveConfig {
            legacy_mode: false,
            window_start_minutes_before_departure: 180,
            ..ArrivalCurveConfig::legacy_default()
        };
        assert_eq!(edited.effective_arrival_span(120), 180);
        assert_eq!(edited.effective_arrival_span(200), 200);

        let legacy = ArrivalCurveConfig {
            window_start_minutes_before_departure: 240,
            ..ArrivalCurveConfig::legacy_default()
        };
        assert_eq!(legacy.effective_arrival_span(60), DEFAULT_WINDOW_START);

        let no_curve = RunConfig { arrival_span_minutes: 60, ..RunConfig::default() };
        assert_eq!(no_curve.effective_arrival_span(), 60);
    }

    #[test]
    fn legacy_default_curve_validates() {
        assert!(ArrivalCurveConfig::legacy_default().validate().is_ok());
        assert_eq!(ArrivalCurveConfig::legacy_default().boarding_close_or_default(), 20);
    }

    #[test]
    fn unset_boarding_close_falls_back_to_default() {
        let mut curve = ArrivalCurveConfig::legacy_default();
        curve.boarding_close_minutes_before_departure = 0;
        assert_eq!(curve.boarding_close_or_default(), DEFAULT_BOARDING_CLOSE);
        curve.boarding_close_minutes_before_departure = 35;
        assert_eq!(curve.boarding_close_or_default(), 35);
    }
}
