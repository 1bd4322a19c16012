//! Flights.

use crate::ClockTime;

/// One scheduled departure.
///
/// Immutable once loaded; owned by the [`RunConfig`][crate::RunConfig].
/// Passengers refer to a flight by its position in the config's flight list
/// ([`FlightId`][crate::FlightId]), never by value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flight {
    /// Operator-facing flight number, e.g. `"UA 1432"`.
    pub number:        String,
    pub departure:     ClockTime,
    pub seats:         u32,
    /// Expected load factor in `[0, 1]`.  Checked by `RunConfig::validate`.
    pub fill_fraction: f64,
}

impl Flight {
    pub fn new(number: impl Into<String>, departure: ClockTime, seats: u32, fill_fraction: f64) -> Self {
        Self {
            number: number.into(),
            departure,
            seats,
            fill_fraction,
        }
    }

    /// `round(seats × fill)`.
    pub fn expected_passengers(&self) -> u32 {
        (self.seats as f64 * self.fill_fraction).round().max(0.0) as u32
    }

    /// Time at which boarding closes, `close_minutes` before departure.
    #[inline]
    pub fn boarding_close(&self, close_minutes: u32) -> ClockTime {
        self.departure.minus_minutes(close_minutes as u64)
    }
}
