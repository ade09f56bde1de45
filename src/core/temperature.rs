//! Mapping from Sun altitude to display color temperature.

use std::fmt;

/// Inclusive Kelvin bounds for the color temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureRange {
    pub min: f64,
    pub max: f64,
}

impl TemperatureRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Linear map of altitude in [-90, 90] onto [min, max].
    ///
    /// The altitude is not clamped first, so an altitude outside the nominal
    /// range extrapolates past the bounds.
    pub fn temperature_for_altitude(&self, altitude: f64) -> f64 {
        self.min + (self.max - self.min) * (altitude + 90.0) / 180.0
    }

    /// Same as [`Self::temperature_for_altitude`], but never leaves [min, max].
    pub fn clamped(&self, altitude: f64) -> f64 {
        self.temperature_for_altitude(altitude)
            .clamp(self.min.min(self.max), self.max.max(self.min))
    }
}

impl fmt::Display for TemperatureRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}K - {}K", self.min, self.max)
    }
}
