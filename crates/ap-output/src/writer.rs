//! The `ReportWriter` trait implemented by export backends.

use ap_analytics::{FlightRow, OverviewSection, SizingTable};

use crate::OutputResult;

/// One method per report table.  [`export_report`][crate::export_report]
/// calls each once, then `finish`.
pub trait ReportWriter {
    /// Write one resource kind's sizing table, including its total.
    fn write_sizing(&mut self, table: &SizingTable) -> OutputResult<()>;

    fn write_flights(&mut self, rows: &[FlightRow]) -> OutputResult<()>;

    fn write_overview(&mut self, overview: &OverviewSection) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; a second call is a no-op.
    fn finish(&mut self) -> OutputResult<()>;
}
