//! Time-of-day model.
//!
//! # Design
//!
//! Departures and labels are times of day with no date attached, so a
//! `ClockTime` is simply a minute-of-day counter in `0..1440`.  Arithmetic
//! wraps around midnight the same way a wall clock does: 00:30 minus 60
//! minutes is 23:30.
//!
//! The mapping from a history index to a wall-clock label is held in
//! `RunClock`:
//!
//!   label(index) = run_start + (index + 1) * interval_minutes
//!
//! where `run_start` is the earliest departure minus the arrival span.  The
//! `+ 1` reflects that snapshot `index` is recorded at the *end* of its
//! interval.

use std::fmt;

use crate::{CoreError, CoreResult, RunConfig};

const MINUTES_PER_DAY: u32 = 1_440;

// ── ClockTime ────────────────────────────────────────────────────────────────

/// A wall-clock time of day with minute resolution.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClockTime(u32);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Build from hour and minute.
    ///
    /// # Errors
    /// `CoreError::ClockTime` if `hour >= 24` or `minute >= 60`.
    pub fn from_hm(hour: u32, minute: u32) -> CoreResult<ClockTime> {
        if hour >= 24 || minute >= 60 {
            return Err(CoreError::ClockTime { hour, minute });
        }
        Ok(ClockTime(hour * 60 + minute))
    }

    /// Build from any minute count; values past midnight wrap.
    #[inline]
    pub fn from_minutes(minutes: u64) -> ClockTime {
        ClockTime((minutes % MINUTES_PER_DAY as u64) as u32)
    }

    /// Minutes since midnight, in `0..1440`.
    #[inline]
    pub fn minute_of_day(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn hour(self) -> u32 {
        self.0 / 60
    }

    #[inline]
    pub fn minute(self) -> u32 {
        self.0 % 60
    }

    /// The time `minutes` later, wrapping past midnight.
    #[inline]
    pub fn plus_minutes(self, minutes: u64) -> ClockTime {
        ClockTime::from_minutes(self.0 as u64 + minutes % MINUTES_PER_DAY as u64)
    }

    /// The time `minutes` earlier, wrapping before midnight.
    #[inline]
    pub fn minus_minutes(self, minutes: u64) -> ClockTime {
        let back = (minutes % MINUTES_PER_DAY as u64) as u32;
        ClockTime((self.0 + MINUTES_PER_DAY - back) % MINUTES_PER_DAY)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

// ── RunClock ──────────────────────────────────────────────────────────────────

/// Converts history indices into wall-clock times for one run.
///
/// `RunClock` is cheap to copy and intentionally holds no heap data.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunClock {
    /// Wall-clock time at which the first interval begins.
    pub run_start:        ClockTime,
    /// Minutes represented by one history interval.
    pub interval_minutes: u32,
}

impl RunClock {
    pub fn new(run_start: ClockTime, interval_minutes: u32) -> Self {
        Self { run_start, interval_minutes }
    }

    /// Clock for `config`: earliest departure minus the arrival span.
    ///
    /// With no flights the earliest departure is taken to be midnight.
    pub fn for_config(config: &RunConfig) -> Self {
        let first_departure = config
            .flights
            .iter()
            .map(|f| f.departure)
            .min()
            .unwrap_or(ClockTime::MIDNIGHT);
        Self {
            run_start:        first_departure.minus_minutes(config.arrival_span_minutes as u64),
            interval_minutes: config.interval_minutes,
        }
    }

    /// Wall-clock time at the end of history interval `index`.
    #[inline]
    pub fn time_at(&self, index: usize) -> ClockTime {
        self.run_start
            .plus_minutes((index as u64 + 1) * self.interval_minutes as u64)
    }
}
