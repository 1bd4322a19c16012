//! Arrival-curve shape parameters.
//!
//! The curve generator itself is owned by the simulation engine.  This crate
//! only carries the parameters so they can be validated and echoed back in a
//! report, and so the effective arrival span can be derived from them.

use crate::{CoreError, CoreResult};

/// Window start used in legacy mode.
pub const DEFAULT_WINDOW_START: u32 = 120;
/// Boarding close when no curve is configured, or the curve's is not positive.
pub const DEFAULT_BOARDING_CLOSE: u32 = 20;
/// Earliest the edited curve may start before departure.
pub const MAX_WINDOW_START: u32 = 240;

/// Asymmetric-Gaussian arrival curve, all offsets in minutes before departure.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrivalCurveConfig {
    /// Ignore the edited parameters and reproduce the fixed two-hour curve.
    pub legacy_mode:                             bool,
    pub window_start_minutes_before_departure:   u32,
    pub peak_minutes_before_departure:           u32,
    pub left_sigma_minutes:                      u32,
    pub right_sigma_minutes:                     u32,
    pub late_clamp_enabled:                      bool,
    pub late_clamp_minutes_before_departure:     u32,
    pub boarding_close_minutes_before_departure: u32,
}

impl ArrivalCurveConfig {
    /// The curve the tool shipped with before the editor existed.
    pub fn legacy_default() -> Self {
        Self {
            legacy_mode:                             true,
            window_start_minutes_before_departure:   DEFAULT_WINDOW_START,
            peak_minutes_before_departure:           70,
            left_sigma_minutes:                      25,
            right_sigma_minutes:                     15,
            late_clamp_enabled:                      true,
            late_clamp_minutes_before_departure:     DEFAULT_BOARDING_CLOSE,
            boarding_close_minutes_before_departure: DEFAULT_BOARDING_CLOSE,
        }
    }

    /// Check the ordering window start ≥ peak ≥ late clamp ≥ boarding close.
    ///
    /// Out-of-order values are reported, not clamped.
    pub fn validate(&self) -> CoreResult<()> {
        if self.window_start_minutes_before_departure > MAX_WINDOW_START {
            return Err(CoreError::config(
                "arrival_curve.window_start_minutes_before_departure",
                format!(
                    "{} exceeds the {MAX_WINDOW_START} minute maximum",
                    self.window_start_minutes_before_departure
                ),
            ));
        }
        if self.peak_minutes_before_departure > self.window_start_minutes_before_departure {
            return Err(CoreError::config(
                "arrival_curve.peak_minutes_before_departure",
                "peak falls before the arrival window opens",
            ));
        }
        if self.left_sigma_minutes == 0 || self.right_sigma_minutes == 0 {
            return Err(CoreError::config(
                "arrival_curve.sigma",
                "left and right sigma must be positive",
            ));
        }
        if self.late_clamp_enabled
            && self.late_clamp_minutes_before_departure > self.peak_minutes_before_departure
        {
            return Err(CoreError::config(
                "arrival_curve.late_clamp_minutes_before_departure",
                "late clamp falls before the peak",
            ));
        }
        if self.boarding_close_minutes_before_departure > self.peak_minutes_before_departure {
            return Err(CoreError::config(
                "arrival_curve.boarding_close_minutes_before_departure",
                "boarding closes before the peak",
            ));
        }
        Ok(())
    }

    /// Arrival span actually simulated: the configured base span, widened to
    /// cover the curve window when the curve starts earlier.
    pub fn effective_arrival_span(&self, base_span_minutes: u32) -> u32 {
        let curve_start = if self.legacy_mode {
            DEFAULT_WINDOW_START
        } else {
            self.window_start_minutes_before_departure
        };
        base_span_minutes.max(curve_start)
    }

    /// Boarding close offset, falling back to the default when unset.
    pub fn boarding_close_or_default(&self) -> u32 {
        if self.boarding_close_minutes_before_departure > 0 {
            self.boarding_close_minutes_before_departure
        } else {
            DEFAULT_BOARDING_CLOSE
        }
    }
}

impl Default for ArrivalCurveConfig {
    fn default() -> Self {
        Self::legacy_default()
    }
}
