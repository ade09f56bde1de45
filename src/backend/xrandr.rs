//! Monitor discovery and blanking through `xrandr`.

use anyhow::{Context, Result};

use super::{DisplayBlanker, MonitorLister, run_tool};

/// Extract the monitor identifier from `xrandr --listactivemonitors` output.
///
/// The listing looks like:
///
/// ```text
/// Monitors: 1
///  0: +*eDP-1 1920/344x1080/194+0+0  eDP-1
/// ```
///
/// The identifier is the fourth whitespace-separated token of the second line.
pub fn parse_active_monitor(listing: &str) -> Result<String> {
    let line = listing
        .lines()
        .nth(1)
        .context("xrandr listed no active monitors")?;

    line.split_whitespace()
        .nth(3)
        .map(str::to_string)
        .with_context(|| format!("Unexpected xrandr monitor line: {:?}", line.trim()))
}

/// Queries the active monitor with `xrandr --listactivemonitors`.
pub struct XrandrMonitorLister {
    command: String,
}

impl XrandrMonitorLister {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl MonitorLister for XrandrMonitorLister {
    fn active_monitor(&self) -> Result<String> {
        let listing = run_tool(&self.command, &["--listactivemonitors"])
            .context("Failed to list active monitors")?;
        parse_active_monitor(&listing)
    }
}

/// Blanks an output with `xrandr --output <id> --off` and restores it with `--auto`.
#[derive(Debug, Clone)]
pub struct XrandrBlanker {
    command: String,
}

impl XrandrBlanker {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl DisplayBlanker for XrandrBlanker {
    fn off(&mut self, monitor: &str) -> Result<()> {
        run_tool(&self.command, &["--output", monitor, "--off"])
            .with_context(|| format!("Failed to turn off {monitor}"))?;
        Ok(())
    }

    fn restore(&mut self, monitor: &str) -> Result<()> {
        run_tool(&self.command, &["--output", monitor, "--auto"])
            .with_context(|| format!("Failed to restore {monitor}"))?;
        Ok(())
    }
}
