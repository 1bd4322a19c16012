//! `ap-analytics` turns a finished [`Trace`][ap_trace::Trace] into the
//! operational figures a planner reads: who ever used each resource, peak
//! occupancy, floor-space sizing, missed passengers and stage dwell times.
//!
//! # Pipeline
//!
//! ```text
//! Trace ──► dedup (ever-occupied sets)
//!   │          │
//!   │          ▼
//!   ├────► peak (series peaks, per-line maxima)
//!   │          │
//!   │          ▼
//!   └────► composer ──► Report { inputs, overview, flights, sizing }
//! ```
//!
//! Everything here is a pure function of the trace.  Composing the same
//! trace twice yields equal reports; nothing is cached between calls.
//!
//! # Modules
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`dedup`]    | `ever_occupants`, `EverOccupants`, `OccupancySource`       |
//! | [`peak`]     | `Peak`, `series_peak`, `line_max`, `line_maxima`           |
//! | [`dwell`]    | `DwellAverages`, `dwell_averages`, `average_minutes`       |
//! | [`labels`]   | `time_label`, `interval_label`                             |
//! | [`report`]   | `Report` and its section/row types                         |
//! | [`composer`] | `compose_report`                                           |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                    |
//! |-----------|-----------------------------------------------------------|
//! | `serde`   | `Serialize`/`Deserialize` on `Report` and its parts.      |
//! | `fx-hash` | FxHash instead of SipHash for the ever-occupied seen-set. |

pub mod composer;
pub mod dedup;
pub mod dwell;
pub mod error;
pub mod labels;
pub mod peak;
pub mod report;


pub use composer::compose_report;
pub use dedup::{EverOccupants, OccupancySource, ever_occupants, ever_occupants_of_line};
pub use dwell::{DwellAverages, average_minutes, dwell_averages};
pub use error::{AnalyticsError, AnalyticsResult};
pub use labels::{interval_label, time_label};
pub use peak::{Peak, line_max, line_maxima, series_peak, sum_of_line_maxima};
pub use report::{
    CheckpointInputRow, CounterInputRow, CurveSection, FlightInputRow, FlightRow, GeneralInputs,
    HoldRoomInputRow, InputsSection, OverviewSection, PassengerMix, PeakRow, Report,
    SUM_OF_MAXIMA_NOTE, SizingRow, SizingSection, SizingTable,
};
