//! Configuration for location, temperature range and break schedule.
//!
//! sunbreak runs fine with no configuration at all: every field has a
//! compiled-in default. An optional TOML file overrides any subset of them.
//!
//! ## Configuration Sources
//!
//! 1. `<dir>/sunbreak.toml` when started with `--config <dir>`
//! 2. `$XDG_CONFIG_HOME/sunbreak/sunbreak.toml` (usually `~/.config/sunbreak/`)
//! 3. Built-in defaults when neither file exists
//!
//! The file is never created automatically.
//!
//! ## Configuration Structure
//!
//! ```toml
//! #[Location]
//! latitude = 43.94            # Degrees north (-90 to 90)
//! longitude = -70.91          # Degrees east (-180 to 180)
//!
//! #[Color temperature]
//! min_temp = 3200             # Kelvin with the Sun at the nadir (1000-20000)
//! max_temp = 3500             # Kelvin with the Sun overhead (1000-20000)
//! clamp_temperature = false   # Keep results inside [min_temp, max_temp]
//!
//! #[Breaks]
//! break_period = 20           # Minutes between breaks (1-240)
//! break_duration = 20         # Seconds the screen stays off (1-600)
//! settle_delay = 250          # Milliseconds to wait after restoring (0-10000)
//! apply_after_break = false   # Re-apply the temperature right after a break
//!
//! #[Loop]
//! tick_interval = 60          # Seconds between updates (1-3600)
//!
//! #[Tools]
//! xrandr_command = "xrandr"
//! sct_command = "sct"
//! ```
//!
//! The wall clock is read as local solar time, so the machine's timezone
//! should roughly match the configured longitude.

pub mod loading;
pub mod validation;


use anyhow::Result;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::constants::*;
use crate::core::ScheduleSettings;
use crate::core::temperature::TemperatureRange;
use crate::geo::GeoCoordinate;

pub use loading::{get_config_path, load_from_path};

/// Raw configuration as read from TOML. `None` means "use the default".
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub min_temp: Option<u32>,
    pub max_temp: Option<u32>,
    pub clamp_temperature: Option<bool>,
    pub apply_after_break: Option<bool>,
    pub break_period: Option<u64>,
    pub break_duration: Option<u64>,
    pub settle_delay: Option<u64>,
    pub tick_interval: Option<u64>,
    pub xrandr_command: Option<String>,
    pub sct_command: Option<String>,
}

impl Config {
    /// Load the configuration, falling back to defaults when no file exists.
    pub fn load(config_dir: Option<&Path>) -> Result<Self> {
        loading::load(config_dir)
    }

    pub fn coordinate(&self) -> GeoCoordinate {
        GeoCoordinate::new_unchecked(
            self.latitude.unwrap_or(DEFAULT_LATITUDE),
            self.longitude.unwrap_or(DEFAULT_LONGITUDE),
        )
    }

    pub fn temperature_range(&self) -> TemperatureRange {
        TemperatureRange::new(
            self.min_temp.unwrap_or(DEFAULT_MIN_TEMP) as f64,
            self.max_temp.unwrap_or(DEFAULT_MAX_TEMP) as f64,
        )
    }

    pub fn xrandr_command(&self) -> &str {
        self.xrandr_command
            .as_deref()
            .unwrap_or(DEFAULT_XRANDR_COMMAND)
    }

    pub fn sct_command(&self) -> &str {
        self.sct_command.as_deref().unwrap_or(DEFAULT_SCT_COMMAND)
    }

    /// Resolve every schedule value, applying defaults.
    pub fn schedule_settings(&self) -> ScheduleSettings {
        ScheduleSettings {
            coordinate: self.coordinate(),
            temperature_range: self.temperature_range(),
            clamp_temperature: self.clamp_temperature.unwrap_or(false),
            apply_after_break: self.apply_after_break.unwrap_or(false),
            break_period: Duration::from_secs(
                self.break_period.unwrap_or(DEFAULT_BREAK_PERIOD) * 60,
            ),
            break_duration: Duration::from_secs(
                self.break_duration.unwrap_or(DEFAULT_BREAK_DURATION),
            ),
            settle_delay: Duration::from_millis(
                self.settle_delay.unwrap_or(DEFAULT_SETTLE_DELAY_MS),
            ),
            tick_interval: Duration::from_secs(
                self.tick_interval.unwrap_or(DEFAULT_TICK_INTERVAL),
            ),
        }
    }

    /// Print the resolved configuration as an indented block.
    pub fn log_config(&self) {
        let settings = self.schedule_settings();
        log_block_start!("Configuration");
        log_indented!("Location: {}", settings.coordinate);
        log_indented!("Temperature: {}", settings.temperature_range);
        if settings.clamp_temperature {
            log_indented!("Temperature clamping: enabled");
        }
        log_indented!(
            "Break: {}s every {} minutes",
            settings.break_duration.as_secs(),
            settings.break_period.as_secs() / 60
        );
        if settings.apply_after_break {
            log_indented!("Temperature re-applied after each break");
        }
        log_indented!("Update interval: {}s", settings.tick_interval.as_secs());
    }
}
