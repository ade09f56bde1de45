//! Configuration validation.
//!
//! Rejects values that would make the loop misbehave: coordinates off the
//! globe, inverted temperature ranges, and break or tick timings that are
//! zero or absurdly long.

use anyhow::Result;

use super::Config;
use crate::constants::*;
use crate::geo::{validate_latitude, validate_longitude};

pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(lat) = config.latitude {
        validate_latitude(lat)?;
    }

    if let Some(lon) = config.longitude {
        validate_longitude(lon)?;
    }

    for (name, value) in [("min_temp", config.min_temp), ("max_temp", config.max_temp)] {
        if let Some(temp) = value
            && !(MINIMUM_TEMP..=MAXIMUM_TEMP).contains(&temp)
        {
            anyhow::bail!(
                "{} ({}) must be between {} and {} Kelvin",
                name,
                temp,
                MINIMUM_TEMP,
                MAXIMUM_TEMP
            );
        }
    }

    let min_temp = config.min_temp.unwrap_or(DEFAULT_MIN_TEMP);
    let max_temp = config.max_temp.unwrap_or(DEFAULT_MAX_TEMP);
    if min_temp > max_temp {
        anyhow::bail!(
            "min_temp ({}) must not be greater than max_temp ({})",
            min_temp,
            max_temp
        );
    }

    if let Some(minutes) = config.break_period
        && !(MINIMUM_BREAK_PERIOD..=MAXIMUM_BREAK_PERIOD).contains(&minutes)
    {
        anyhow::bail!(
            "break_period ({} minutes) must be between {} and {} minutes",
            minutes,
            MINIMUM_BREAK_PERIOD,
            MAXIMUM_BREAK_PERIOD
        );
    }

    if let Some(secs) = config.break_duration
        && !(MINIMUM_BREAK_DURATION..=MAXIMUM_BREAK_DURATION).contains(&secs)
    {
        anyhow::bail!(
            "break_duration ({} seconds) must be between {} and {} seconds",
            secs,
            MINIMUM_BREAK_DURATION,
            MAXIMUM_BREAK_DURATION
        );
    }

    if let Some(ms) = config.settle_delay
        && ms > MAXIMUM_SETTLE_DELAY_MS
    {
        anyhow::bail!(
            "settle_delay ({} ms) must be at most {} milliseconds",
            ms,
            MAXIMUM_SETTLE_DELAY_MS
        );
    }

    if let Some(secs) = config.tick_interval
        && !(MINIMUM_TICK_INTERVAL..=MAXIMUM_TICK_INTERVAL).contains(&secs)
    {
        anyhow::bail!(
            "tick_interval ({} seconds) must be between {} and {} seconds",
            secs,
            MINIMUM_TICK_INTERVAL,
            MAXIMUM_TICK_INTERVAL
        );
    }

    for (name, value) in [
        ("xrandr_command", config.xrandr_command.as_deref()),
        ("sct_command", config.sct_command.as_deref()),
    ] {
        if value.is_some_and(|command| command.trim().is_empty()) {
            anyhow::bail!("{} must not be empty", name);
        }
    }

    Ok(())
}
