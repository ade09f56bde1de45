//! Sun altitude from day of year, wall-clock time and observer position.
//!
//! This is a low-precision model meant for driving screen color, not for
//! pointing telescopes: declination follows a single sinusoid anchored on the
//! spring equinox, and the equation of time uses the two-term approximation
//! from <https://en.wikipedia.org/wiki/Equation_of_time>.
//!
//! The timestamp's hour and minute are read as-is. Callers must supply a
//! wall-clock time in the zone that matches the observer's longitude; no
//! timezone or DST adjustment happens here.

use chrono::{Datelike, NaiveDateTime, Timelike};

use super::GeoCoordinate;
use crate::constants::{
    DAYS_PER_YEAR, DEGREES_PER_HOUR, EARTH_AXIS_TILT, EQUINOX_DAY_OFFSET, MINUTES_PER_DEGREE,
};

/// Intermediate angles for one instant, recomputed on every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarAngles {
    /// Degrees north of the celestial equator.
    pub declination: f64,
    /// Apparent minus mean solar time, in minutes.
    pub equation_of_time: f64,
    /// Degrees from local solar noon, negative in the morning.
    pub hour_angle: f64,
}

/// Solar declination in degrees for a 1-based day of year.
pub fn solar_declination(day_of_year: u32) -> f64 {
    let angle = (day_of_year as f64 - EQUINOX_DAY_OFFSET) * 360.0 / DAYS_PER_YEAR;
    EARTH_AXIS_TILT * angle.to_radians().sin()
}

/// Equation of time in minutes.
pub fn equation_of_time(year: i32, day_of_year: u32) -> f64 {
    let d = 6.24 + 0.0172 * (365.25 * (year - 2000) as f64 + day_of_year as f64);
    -7.659 * d.sin() + 9.863 * (2.0 * d + 3.5932).sin()
}

/// Minutes to add to clock time to get local solar time.
pub fn time_correction(longitude: f64, equation_of_time: f64) -> f64 {
    MINUTES_PER_DEGREE * longitude + equation_of_time
}

/// Hour angle in degrees for a wall-clock hour and minute.
pub fn solar_hour_angle(hour: u32, minute: u32, time_correction: f64) -> f64 {
    let solar_time = (hour as f64 * 60.0 + minute as f64 + time_correction) / 60.0;
    (solar_time - 12.0) * DEGREES_PER_HOUR
}

/// Altitude above the horizon in degrees.
///
/// The asin argument is mathematically within [-1, 1]; it is clamped so that
/// rounding at the poles or solstices cannot turn into NaN.
pub fn solar_altitude(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let latitude_rad = latitude.to_radians();
    let declination_rad = declination.to_radians();
    let hour_angle_rad = hour_angle.to_radians();

    let sin_altitude = latitude_rad.sin() * declination_rad.sin()
        + latitude_rad.cos() * declination_rad.cos() * hour_angle_rad.cos();

    sin_altitude.clamp(-1.0, 1.0).asin().to_degrees()
}

/// Declination, equation of time and hour angle at `at`.
pub fn solar_angles(coord: GeoCoordinate, at: &NaiveDateTime) -> SolarAngles {
    let day_of_year = at.ordinal();
    let declination = solar_declination(day_of_year);
    let equation_of_time = equation_of_time(at.year(), day_of_year);
    let correction = time_correction(coord.longitude, equation_of_time);
    let hour_angle = solar_hour_angle(at.hour(), at.minute(), correction);

    SolarAngles {
        declination,
        equation_of_time,
        hour_angle,
    }
}

/// Sun altitude in degrees above the horizon at `coord` and wall-clock `at`.
pub fn sun_altitude(coord: GeoCoordinate, at: &NaiveDateTime) -> f64 {
    let angles = solar_angles(coord, at);
    solar_altitude(coord.latitude, angles.declination, angles.hour_angle)
}
