//! `ap-output`: report exporters for the rust_apron toolkit.
//!
//! | Backend | Files created                                                             |
//! |---------|---------------------------------------------------------------------------|
//! | CSV     | `ticket_counters.csv`, `checkpoints.csv`, `hold_rooms.csv`, `flights.csv`, `overview.csv` |
//!
//! Backends implement [`ReportWriter`] and are driven by [`export_report`].
//! Each sizing file ends with a `TOTAL` row holding the sum of per-unit
//! maxima.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ap_output::{CsvWriter, export_report};
//!
//! let report = ap_analytics::compose_report(&trace)?;
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! export_report(&mut writer, &report)?;
//! ```

pub mod csv;
pub mod error;
pub mod export;
pub mod row;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use export::export_report;
pub use row::{MetricRow, overview_rows};
pub use writer::ReportWriter;
