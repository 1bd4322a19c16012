//! Metrics composer: one finished trace in, one [`Report`] out.

use ap_core::curve::DEFAULT_BOARDING_CLOSE;
use ap_core::{FlightId, LineKind, RunClock, RunConfig};
use ap_trace::{SeriesKind, Trace};
use log::info;

use crate::report::*;
use crate::{
    AnalyticsResult, EverOccupants, dwell_averages, ever_occupants, interval_label, line_maxima,
    series_peak, sum_of_line_maxima, time_label,
};

/// Compose the full report for `trace`.
///
/// Pure: the same trace always yields an equal report.
///
/// # Errors
///
/// - `AnalyticsError::Trace` if the trace was produced against another
///   contract version, or names flights or passengers it does not hold.
/// - `AnalyticsError::Config` if the run configuration is out of range.
///
/// Missing data (no history, no curve, empty resource lists) never errors.
pub fn compose_report(trace: &Trace) -> AnalyticsResult<Report> {
    trace.check_version()?;
    let config = trace.config();
    config.validate()?;
    trace.check_integrity()?;

    let clock = RunClock::for_config(config);
    let held = ever_occupants(trace, LineKind::HoldRoom);

    let flights = flight_rows(trace, &held);
    let overview = overview(trace, &clock, &held, &flights);
    let sizing = SizingSection {
        ticket_counters: sizing_table(trace, &clock, LineKind::TicketCounter),
        checkpoints:     sizing_table(trace, &clock, LineKind::Checkpoint),
        hold_rooms:      sizing_table(trace, &clock, LineKind::HoldRoom),
        note:            SUM_OF_MAXIMA_NOTE.to_owned(),
    };

    info!(
        "report composed: {} flights, {} generated, {} reached hold ({:?}), {} missed",
        overview.flights,
        overview.total_generated,
        overview.reached_hold,
        overview.hold_history,
        overview.missed
    );

    Ok(Report {
        inputs: inputs(config),
        overview,
        flights,
        sizing,
    })
}

// ── Flights ───────────────────────────────────────────────────────────────────

fn flight_rows(trace: &Trace, held: &EverOccupants) -> Vec<FlightRow> {
    let flights = trace.flights();

    let mut reached = vec![0u32; flights.len()];
    for &id in &held.passengers {
        let Some(p) = trace.passenger(id) else { continue };
        if p.missed {
            continue;
        }
        if let Some(slot) = reached.get_mut(p.flight.index()) {
            *slot += 1;
        }
    }

    let close_minutes = trace
        .config()
        .arrival_curve
        .as_ref()
        .map_or(DEFAULT_BOARDING_CLOSE, |c| c.boarding_close_or_default());

    flights
        .iter()
        .enumerate()
        .map(|(i, flight)| {
            let expected = flight.expected_passengers();
            FlightRow {
                number:         flight.number.clone(),
                departure:      flight.departure.to_string(),
                boarding_close: flight.boarding_close(close_minutes).to_string(),
                expected,
                generated:      generated_for(trace, FlightId(i as u32)),
                reached:        reached[i],
                missed:         expected.saturating_sub(reached[i]),
            }
        })
        .collect()
}

fn generated_for(trace: &Trace, flight: FlightId) -> u32 {
    trace.arrivals_for(flight).iter().sum()
}

// ── Overview ──────────────────────────────────────────────────────────────────

fn overview(
    trace: &Trace,
    clock: &RunClock,
    held: &EverOccupants,
    flights: &[FlightRow],
) -> OverviewSection {
    let total_generated: u32 = trace.minute_arrivals().iter().flatten().sum();
    let pct = trace.config().percent_in_person;
    let in_person = (total_generated as f64 * pct).round() as u32;

    let peaks = SeriesKind::ALL
        .into_iter()
        .map(|kind| {
            let peak = series_peak(trace.series(kind));
            PeakRow {
                kind,
                value:          peak.value,
                interval:       peak.interval,
                time_label:     time_label(clock, peak.interval),
                interval_label: interval_label(peak.interval),
            }
        })
        .collect();

    OverviewSection {
        flights:         flights.len(),
        total_generated,
        reached_hold:    reached_hold(trace, held),
        missed:          flights.iter().map(|f| f.missed).sum(),
        hold_history:    held.source,
        mix: PassengerMix {
            percent_in_person: pct,
            in_person,
            online:            total_generated.saturating_sub(in_person),
        },
        dwell:           dwell_averages(trace, &held.passengers),
        peaks,
    }
}

fn reached_hold(trace: &Trace, held: &EverOccupants) -> u32 {
    held.passengers
        .iter()
        .filter(|&&id| !trace.passenger(id).is_some_and(|p| p.missed))
        .count() as u32
}

// ── Sizing ────────────────────────────────────────────────────────────────────

fn sizing_table(trace: &Trace, clock: &RunClock, kind: LineKind) -> SizingTable {
    let sqft = u64::from(trace.sqft_per_passenger());
    let peaks = line_maxima(trace, kind);
    let ids = resource_ids(trace.config(), kind);

    let rows = peaks
        .iter()
        .zip(ids)
        .map(|(peak, id)| SizingRow {
            label:          format!("{} {id}", kind.unit_label()),
            resource_id:    id,
            max_passengers: peak.value,
            max_sqft:       u64::from(peak.value) * sqft,
            time_label:     time_label(clock, peak.interval),
            interval_label: interval_label(peak.interval),
        })
        .collect();

    let total = sum_of_line_maxima(&peaks);
    SizingTable {
        kind,
        rows,
        total_max_passengers: total,
        total_sqft:           u64::from(total) * sqft,
    }
}

fn resource_ids(config: &RunConfig, kind: LineKind) -> Vec<u32> {
    match kind {
        LineKind::TicketCounter => config.counters.iter().map(|c| c.id.0).collect(),
        LineKind::Checkpoint    => config.checkpoints.iter().map(|c| c.id.0).collect(),
        LineKind::HoldRoom      => config.hold_rooms.iter().map(|h| h.id.0).collect(),
    }
}

// ── Inputs ────────────────────────────────────────────────────────────────────

fn inputs(config: &RunConfig) -> InputsSection {
    let general = GeneralInputs {
        percent_in_person:              config.percent_in_person,
        arrival_span_minutes:           config.arrival_span_minutes,
        effective_arrival_span_minutes: config.effective_arrival_span(),
        transit_delay_minutes:          config.transit_delay_minutes,
        hold_delay_minutes:             config.hold_delay_minutes,
        interval_minutes:               config.interval_minutes,
        sqft_per_passenger:             config.sqft_per_passenger,
    };

    let curve = match &config.arrival_curve {
        Some(c) => CurveSection::Available(c.clone()),
        None => CurveSection::Unavailable,
    };

    let counters = config
        .counters
        .iter()
        .map(|c| CounterInputRow {
            label:           format!("{} {}", LineKind::TicketCounter.unit_label(), c.id.0),
            id:              c.id,
            rate_per_hour:   c.rate_per_hour(),
            allowed_flights: counter_flights_label(config, &c.allowed_flights),
        })
        .collect();

    let checkpoints = config
        .checkpoints
        .iter()
        .map(|c| CheckpointInputRow {
            label:         format!("{} {}", LineKind::Checkpoint.unit_label(), c.id.0),
            id:            c.id,
            rate_per_hour: c.rate_per_hour,
        })
        .collect();

    let hold_rooms = config
        .hold_rooms
        .iter()
        .map(|h| HoldRoomInputRow {
            label:           format!("{} {}", LineKind::HoldRoom.unit_label(), h.id.0),
            id:              h.id,
            walk_minutes:    h.walk_minutes(),
            walk_seconds:    h.walk_seconds_part(),
            allowed_flights: h.allowed_flights_label(),
        })
        .collect();

    let flights = config
        .flights
        .iter()
        .map(|f| FlightInputRow {
            number:        f.number.clone(),
            departure:     f.departure.to_string(),
            seats:         f.seats,
            fill_fraction: f.fill_fraction,
        })
        .collect();

    InputsSection { general, curve, counters, checkpoints, hold_rooms, flights }
}

/// `"ALL"` for an unrestricted counter, else its flight numbers as listed.
fn counter_flights_label(config: &RunConfig, allowed: &[FlightId]) -> String {
    if allowed.is_empty() {
        return "ALL".to_owned();
    }
    allowed
        .iter()
        .filter_map(|&id| config.flight(id))
        .map(|f| f.number.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
