//! Display labels for history indices.

use ap_core::RunClock;

/// Wall-clock `HH:MM` at the end of interval `index`; empty for `None`.
pub fn time_label(clock: &RunClock, index: Option<usize>) -> String {
    index.map(|i| clock.time_at(i).to_string()).unwrap_or_default()
}

/// 1-based interval number; empty for `None`.
pub fn interval_label(index: Option<usize>) -> String {
    index.map(|i| (i + 1).to_string()).unwrap_or_default()
}
