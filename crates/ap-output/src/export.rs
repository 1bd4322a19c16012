//! Drive a [`ReportWriter`] over a whole report.

use ap_analytics::Report;
use log::info;

use crate::OutputResult;
use crate::writer::ReportWriter;

/// Write every table of `report`, then finish the writer.
///
/// Sizing tables are written in ticket counter, checkpoint, hold room order.
/// Stops at the first write error.
pub fn export_report<W: ReportWriter>(writer: &mut W, report: &Report) -> OutputResult<()> {
    for table in report.sizing.tables() {
        writer.write_sizing(table)?;
    }
    writer.write_flights(&report.flights)?;
    writer.write_overview(&report.overview)?;
    writer.finish()?;
    info!(
        "report exported: {} flights, {} sizing rows",
        report.flights.len(),
        report.sizing.tables().iter().map(|t| t.rows.len()).sum::<usize>()
    );
    Ok(())
}
