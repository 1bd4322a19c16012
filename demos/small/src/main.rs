//! small: smallest example for the rust_apron ground-operations toolkit.
//!
//! Three morning departures share two security lanes and three hold rooms.
//! A toy queue model stands in for the real simulation engine; the trace it
//! records is analysed exactly as an engine trace would be.
//!
//! Set `RUST_LOG=debug` to see the analytics layer's structural logging.

mod model;

use std::collections::BTreeSet;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use log::info;

use ap_analytics::{Report, SizingTable, compose_report};
use ap_core::{
    ArrivalCurveConfig, CheckpointConfig, CheckpointId, ClockTime, CounterId, Flight, FlightId,
    HoldRoomConfig, HoldRoomId, RunConfig, TicketCounterConfig,
};
use ap_output::{CsvWriter, export_report};
use ap_trace::{SeriesKind, TraceRecorder};

use model::ToyModel;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:       u64  = 42;
const OUTPUT_DIR: &str = "output/small";

// ── Scenario ──────────────────────────────────────────────────────────────────

fn build_config() -> Result<RunConfig> {
    let flights = vec![
        Flight::new("AP101", ClockTime::from_hm(8, 0)?, 150, 0.85),
        Flight::new("AP205", ClockTime::from_hm(8, 30)?, 120, 0.90),
        Flight::new("AP330", ClockTime::from_hm(9, 15)?, 180, 0.80),
    ];

    // Counter 3 is dedicated to the late widebody.
    let mut dedicated = TicketCounterConfig::new(CounterId(3), 1.5);
    dedicated.allowed_flights = vec![FlightId(2)];
    let counters = vec![
        TicketCounterConfig::new(CounterId(1), 1.0),
        TicketCounterConfig::new(CounterId(2), 1.0),
        dedicated,
    ];

    let checkpoints = vec![
        CheckpointConfig::new(CheckpointId(1), 150.0),
        CheckpointConfig::new(CheckpointId(2), 150.0),
    ];

    let mut gate_c = HoldRoomConfig::new(HoldRoomId(3), 150);
    gate_c.allowed_flight_numbers = BTreeSet::from(["AP330".to_owned()]);
    let hold_rooms = vec![
        HoldRoomConfig::new(HoldRoomId(1), 120),
        HoldRoomConfig::new(HoldRoomId(2), 90),
        gate_c,
    ];

    Ok(RunConfig {
        flights,
        counters,
        checkpoints,
        hold_rooms,
        arrival_curve: Some(ArrivalCurveConfig::legacy_default()),
        ..RunConfig::default()
    })
}

// ── Printing ──────────────────────────────────────────────────────────────────

fn print_overview(report: &Report) {
    let o = &report.overview;
    println!("Overview");
    println!("  flights          : {}", o.flights);
    println!("  generated        : {} ({} in person, {} online)", o.total_generated, o.mix.in_person, o.mix.online);
    println!("  reached hold     : {} (from {})", o.reached_hold, o.hold_history);
    println!("  missed           : {}", o.missed);
    println!(
        "  dwell (min)      : ticket {}, security online {}, security in person {}, arrival→hold {}",
        o.dwell.ticket, o.dwell.checkpoint_online, o.dwell.checkpoint_in_person, o.dwell.arrival_to_hold
    );
    for kind in SeriesKind::ALL {
        if let Some(peak) = o.peak(kind) {
            println!(
                "  peak {:<28}: {:>4} at {} (interval {})",
                kind.to_string(), peak.value, peak.time_label, peak.interval_label
            );
        }
    }
    println!();
}

fn print_flights(report: &Report) {
    println!(
        "{:<8} {:<6} {:<6} {:>8} {:>9} {:>7} {:>6}",
        "Flight", "Dep", "Close", "Expected", "Generated", "Reached", "Missed"
    );
    println!("{}", "-".repeat(56));
    for f in &report.flights {
        println!(
            "{:<8} {:<6} {:<6} {:>8} {:>9} {:>7} {:>6}",
            f.number, f.departure, f.boarding_close, f.expected, f.generated, f.reached, f.missed
        );
    }
    println!();
}

fn print_sizing(table: &SizingTable) {
    println!("Sizing: {}", table.kind);
    println!("{:<12} {:>8} {:>8} {:<6} {:>8}", "Unit", "Max pax", "Max sqft", "Time", "Interval");
    println!("{}", "-".repeat(46));
    for row in &table.rows {
        println!(
            "{:<12} {:>8} {:>8} {:<6} {:>8}",
            row.label, row.max_passengers, row.max_sqft, row.time_label, row.interval_label
        );
    }
    println!(
        "{:<12} {:>8} {:>8}",
        "TOTAL", table.total_max_passengers, table.total_sqft
    );
    println!();
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== small: rust_apron ground operations ===");
    println!("Seed: {SEED}");
    println!();

    // 1. Scenario.
    let config = build_config()?;
    config.validate()?;
    println!(
        "Scenario: {} flights, {} counters, {} checkpoints, {} hold rooms",
        config.flights.len(),
        config.counters.len(),
        config.checkpoints.len(),
        config.hold_rooms.len()
    );

    // 2. Run the toy model into a recorder.
    let t0 = Instant::now();
    let mut recorder = TraceRecorder::new(config.clone());
    let generated = ToyModel::new(&config, SEED).run(&mut recorder);
    let trace = recorder.finish()?;
    info!("trace recorded: {} intervals, {generated} passengers", trace.interval_count());

    // 3. Analyse.
    let report = compose_report(&trace)?;
    println!("Run + analysis complete in {:.3} s", t0.elapsed().as_secs_f64());
    println!();

    print_overview(&report);
    print_flights(&report);
    for table in report.sizing.tables() {
        print_sizing(table);
    }
    println!("Note: {}", report.sizing.note);
    println!();

    // 4. Export.
    let dir = Path::new(OUTPUT_DIR);
    std::fs::create_dir_all(dir)?;
    let mut writer = CsvWriter::new(dir)?;
    export_report(&mut writer, &report)?;
    std::fs::write(dir.join("report.json"), serde_json::to_string_pretty(&report)?)?;
    println!("Wrote CSV tables and report.json to {OUTPUT_DIR}/");

    Ok(())
}
