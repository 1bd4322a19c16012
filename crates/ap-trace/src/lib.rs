//! `ap-trace`: the read-only view over a finished simulation run.
//!
//! The simulation engine advances passengers minute by minute; this crate
//! only holds what it leaves behind:
//!
//! ```text
//! Trace
//!   ├─ config          RunConfig (flights, resources, scalars)
//!   ├─ passengers      arena, addressed by PassengerId
//!   ├─ snapshots[i]    one per interval i
//!   │    ├─ ticket_lines[k]      passengers queued at counter k
//!   │    ├─ checkpoint_lines[k]  passengers queued at checkpoint k
//!   │    └─ hold_room_lines[k]   passengers seated in hold room k
//!   ├─ live            the engine's current lines at end of run
//!   ├─ series          four sparse interval → count maps
//!   └─ arrivals        per-flight, per-minute generated counts
//! ```
//!
//! Lines hold `PassengerId`s, not passenger values, so the same traveller
//! seen in many snapshots is one identity.  A `Trace` is built once, by a
//! [`TraceBuilder`] or a [`TraceRecorder`] fed by the engine, and never
//! changes afterwards.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let mut recorder = TraceRecorder::new(config);
//! engine.run(&mut recorder);
//! let trace = recorder.finish()?;
//! ```

pub mod builder;
pub mod error;
pub mod recorder;
pub mod series;
pub mod snapshot;
pub mod trace;

#[cfg(test)]
mod tests;

pub use builder::TraceBuilder;
pub use error::{TraceError, TraceResult};
pub use recorder::{TraceObserver, TraceRecorder};
pub use series::{AggregateSeries, Series, SeriesKind};
pub use snapshot::{Line, Snapshot};
pub use trace::{TRACE_CONTRACT_VERSION, Trace};
