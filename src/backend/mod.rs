//! External control surfaces driven by the schedule loop.
//!
//! sunbreak does not talk to the display server itself. It shells out to
//! small tools and treats them as black boxes that either succeed or fail:
//!
//! - **[`MonitorLister`]**: finds the active output once at startup
//!   (`xrandr --listactivemonitors`)
//! - **[`DisplayBlanker`]**: turns that output off and back on for breaks
//!   (`xrandr --output <id> --off|--auto`)
//! - **[`ColorTemperatureSetter`]**: sets the global color temperature
//!   (`sct <kelvin>`)
//!
//! The traits are the seam the controller is written against; the loop is
//! tested with mock implementations and never spawns a real process.
//!
//! ## Error Policy
//!
//! A failing monitor lookup is fatal because nothing can be blanked without an
//! output name. Blanking and temperature failures are returned to the caller,
//! which logs them and moves on to the next tick.

use anyhow::{Context, Result};
use std::process::Command;

pub mod sct;
pub mod xrandr;

pub use sct::SctSetter;
pub use xrandr::{XrandrBlanker, XrandrMonitorLister, parse_active_monitor};

/// Source of the display output identifier.
#[cfg_attr(test, mockall::automock)]
pub trait MonitorLister {
    /// Return the identifier of the active monitor.
    fn active_monitor(&self) -> Result<String>;
}

/// Turns a named display output off and back on.
#[cfg_attr(test, mockall::automock)]
pub trait DisplayBlanker {
    /// Switch the output off.
    fn off(&mut self, monitor: &str) -> Result<()>;

    /// Return the output to its automatic mode.
    fn restore(&mut self, monitor: &str) -> Result<()>;
}

/// Sets the global display color temperature.
#[cfg_attr(test, mockall::automock)]
pub trait ColorTemperatureSetter {
    /// Apply a color temperature in Kelvin.
    fn apply(&mut self, temperature: f64) -> Result<()>;
}

/// Run an external tool to completion and return its stdout.
///
/// Spawn errors and non-zero exit statuses are both reported as errors that
/// include the command line and whatever the tool wrote to stderr.
pub(crate) fn run_tool(program: &str, args: &[&str]) -> Result<String> {
    let output = Command::new(program)
        .args(args)
        .output()
        .with_context(|| format!("Failed to execute {program}"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!(
            "`{} {}` exited with {}: {}",
            program,
            args.join(" "),
            output.status,
            stderr.trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
