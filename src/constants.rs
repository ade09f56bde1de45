//! Application-wide defaults and validation limits.
//!
//! The defaults are the values sunbreak runs with when no configuration file
//! exists. Limits bound what `config::validation` accepts.

// # Location

pub const DEFAULT_LATITUDE: f64 = 43.94;
pub const DEFAULT_LONGITUDE: f64 = -70.91;

// # Color temperature (Kelvin)

pub const DEFAULT_MIN_TEMP: u32 = 3200;
pub const DEFAULT_MAX_TEMP: u32 = 3500;
pub const MINIMUM_TEMP: u32 = 1000;
pub const MAXIMUM_TEMP: u32 = 20000;

// # Break schedule

/// Minutes between the end of one break and the start of the next.
pub const DEFAULT_BREAK_PERIOD: u64 = 20;
pub const MINIMUM_BREAK_PERIOD: u64 = 1;
pub const MAXIMUM_BREAK_PERIOD: u64 = 240;

/// Seconds the display stays off.
pub const DEFAULT_BREAK_DURATION: u64 = 20;
pub const MINIMUM_BREAK_DURATION: u64 = 1;
pub const MAXIMUM_BREAK_DURATION: u64 = 600;

/// Milliseconds to wait after restoring the display before resuming.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 250;
pub const MAXIMUM_SETTLE_DELAY_MS: u64 = 10_000;

// # Main loop

/// Seconds slept between ticks.
pub const DEFAULT_TICK_INTERVAL: u64 = 60;
pub const MINIMUM_TICK_INTERVAL: u64 = 1;
pub const MAXIMUM_TICK_INTERVAL: u64 = 3600;

// # External tools

pub const DEFAULT_XRANDR_COMMAND: &str = "xrandr";
pub const DEFAULT_SCT_COMMAND: &str = "sct";

// # Solar geometry

/// Earth's axial tilt in degrees.
pub const EARTH_AXIS_TILT: f64 = 23.44;
/// Day of year on which the declination model crosses zero (spring equinox).
pub const EQUINOX_DAY_OFFSET: f64 = 81.0;
pub const DAYS_PER_YEAR: f64 = 365.0;
/// Earth turns one degree of longitude every four minutes.
pub const MINUTES_PER_DEGREE: f64 = 4.0;
pub const DEGREES_PER_HOUR: f64 = 15.0;

// # Files

pub const CONFIG_DIR_NAME: &str = "sunbreak";
pub const CONFIG_FILE_NAME: &str = "sunbreak.toml";

// # Process exit codes

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
