//! CSV output backend.
//!
//! Creates five files in the configured output directory:
//! - `ticket_counters.csv`, `checkpoints.csv`, `hold_rooms.csv`
//! - `flights.csv`
//! - `overview.csv`

use std::fs::File;
use std::path::Path;

use ap_analytics::{FlightRow, OverviewSection, SizingTable};
use ap_core::LineKind;
use csv::Writer;
use log::debug;

use crate::OutputResult;
use crate::row::overview_rows;
use crate::writer::ReportWriter;

const SIZING_HEADER: [&str; 6] =
    ["unit", "resource_id", "max_passengers", "max_sqft", "time", "interval"];

/// Writes a report as one CSV file per table.
pub struct CsvWriter {
    ticket_counters: Writer<File>,
    checkpoints:     Writer<File>,
    hold_rooms:      Writer<File>,
    flights:         Writer<File>,
    overview:        Writer<File>,
    finished:        bool,
}

impl CsvWriter {
    /// Open (or create) the five CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let sizing = |name: &str| -> OutputResult<Writer<File>> {
            let mut w = Writer::from_path(dir.join(name))?;
            w.write_record(SIZING_HEADER)?;
            Ok(w)
        };
        let ticket_counters = sizing("ticket_counters.csv")?;
        let checkpoints = sizing("checkpoints.csv")?;
        let hold_rooms = sizing("hold_rooms.csv")?;

        let mut flights = Writer::from_path(dir.join("flights.csv"))?;
        flights.write_record([
            "flight", "departure", "boarding_close", "expected", "generated", "reached", "missed",
        ])?;

        let mut overview = Writer::from_path(dir.join("overview.csv"))?;
        overview.write_record(["metric", "value"])?;

        debug!("csv report files opened in {}", dir.display());
        Ok(Self {
            ticket_counters,
            checkpoints,
            hold_rooms,
            flights,
            overview,
            finished: false,
        })
    }

    fn sizing_writer(&mut self, kind: LineKind) -> &mut Writer<File> {
        match kind {
            LineKind::TicketCounter => &mut self.ticket_counters,
            LineKind::Checkpoint    => &mut self.checkpoints,
            LineKind::HoldRoom      => &mut self.hold_rooms,
        }
    }
}

impl ReportWriter for CsvWriter {
    fn write_sizing(&mut self, table: &SizingTable) -> OutputResult<()> {
        let w = self.sizing_writer(table.kind);
        for row in &table.rows {
            w.write_record(&[
                row.label.clone(),
                row.resource_id.to_string(),
                row.max_passengers.to_string(),
                row.max_sqft.to_string(),
                row.time_label.clone(),
                row.interval_label.clone(),
            ])?;
        }
        w.write_record(&[
            "TOTAL".to_owned(),
            String::new(),
            table.total_max_passengers.to_string(),
            table.total_sqft.to_string(),
            String::new(),
            String::new(),
        ])?;
        Ok(())
    }

    fn write_flights(&mut self, rows: &[FlightRow]) -> OutputResult<()> {
        for row in rows {
            self.flights.write_record(&[
                row.number.clone(),
                row.departure.clone(),
                row.boarding_close.clone(),
                row.expected.to_string(),
                row.generated.to_string(),
                row.reached.to_string(),
                row.missed.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_overview(&mut self, overview: &OverviewSection) -> OutputResult<()> {
        for row in overview_rows(overview) {
            self.overview.write_record([row.metric, row.value])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.ticket_counters.flush()?;
        self.checkpoints.flush()?;
        self.hold_rooms.flush()?;
        self.flights.flush()?;
        self.overview.flush()?;
        Ok(())
    }
}
