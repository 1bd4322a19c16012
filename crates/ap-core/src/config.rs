//! Run configuration: the single data contract between the simulation
//! engine and the analytics layer.
//!
//! Every input the analytics need is a named, typed field here.  Engines of
//! a different vintage are adapted into this struct once, at configuration
//! time; nothing downstream looks values up by name.

use crate::curve::ArrivalCurveConfig;
use crate::{
    CheckpointConfig, CoreError, CoreResult, Flight, FlightId, HoldRoomConfig, TicketCounterConfig,
};

/// Top-level configuration of one simulation run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RunConfig {
    /// Fraction of generated passengers who visit a ticket counter, `[0, 1]`.
    pub percent_in_person:     f64,
    /// Minutes before the first departure at which arrivals begin.
    pub arrival_span_minutes:  u32,
    /// Minutes from the front door to the first queue.
    pub transit_delay_minutes: u32,
    /// Minutes from clearing security to entering a hold room.
    pub hold_delay_minutes:    u32,
    /// Minutes per history interval.  Must be positive.
    pub interval_minutes:      u32,
    /// Floor area allotted to one standing passenger.
    pub sqft_per_passenger:    u32,

    pub flights:     Vec<Flight>,
    pub counters:    Vec<TicketCounterConfig>,
    pub checkpoints: Vec<CheckpointConfig>,
    pub hold_rooms:  Vec<HoldRoomConfig>,

    /// `None` when the engine ran without a curve config.
    pub arrival_curve: Option<ArrivalCurveConfig>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            percent_in_person:     0.4,
            arrival_span_minutes:  120,
            transit_delay_minutes: 2,
            hold_delay_minutes:    5,
            interval_minutes:      1,
            sqft_per_passenger:    15,
            flights:               Vec::new(),
            counters:              Vec::new(),
            checkpoints:           Vec::new(),
            hold_rooms:            Vec::new(),
            arrival_curve:         None,
        }
    }
}

impl RunConfig {
    /// Check every range constraint, returning the first violation.
    ///
    /// Empty lists and a missing arrival curve are valid.
    pub fn validate(&self) -> CoreResult<()> {
        check_fraction("percent_in_person", self.percent_in_person)?;

        if self.interval_minutes == 0 {
            return Err(CoreError::config("interval_minutes", "must be at least 1"));
        }

        for (i, flight) in self.flights.iter().enumerate() {
            check_fraction(&format!("flights[{i}].fill_fraction"), flight.fill_fraction)?;
        }

        for (i, counter) in self.counters.iter().enumerate() {
            check_rate(&format!("counters[{i}].rate_per_minute"), counter.rate_per_minute)?;
            if let Some(bad) = counter
                .allowed_flights
                .iter()
                .find(|f| f.index() >= self.flights.len())
            {
                return Err(CoreError::config(
                    format!("counters[{i}].allowed_flights"),
                    format!("{bad} does not name a configured flight"),
                ));
            }
        }

        for (i, checkpoint) in self.checkpoints.iter().enumerate() {
            check_rate(&format!("checkpoints[{i}].rate_per_hour"), checkpoint.rate_per_hour)?;
        }

        if let Some(curve) = &self.arrival_curve {
            curve.validate()?;
        }
        Ok(())
    }

    /// Look up a flight by its list position.
    #[inline]
    pub fn flight(&self, id: FlightId) -> Option<&Flight> {
        self.flights.get(id.index())
    }

    /// Arrival span after widening for the curve window (base span when no
    /// curve is configured).
    pub fn effective_arrival_span(&self) -> u32 {
        match &self.arrival_curve {
            Some(curve) => curve.effective_arrival_span(self.arrival_span_minutes),
            None => self.arrival_span_minutes,
        }
    }
}

fn check_fraction(field: &str, value: f64) -> CoreResult<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(CoreError::config(field, format!("{value} is outside [0, 1]")));
    }
    Ok(())
}

fn check_rate(field: &str, value: f64) -> CoreResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::config(field, format!("{value} is not a non-negative rate")));
    }
    Ok(())
}
