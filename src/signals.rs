//! Shutdown signal handling.
//!
//! The schedule loop has no exit condition of its own; sunbreak runs until the
//! session sends it SIGTERM, SIGINT or SIGHUP. A dedicated thread waits for
//! those signals so that a termination arriving in the middle of a break does
//! not leave the display switched off.

use anyhow::{Context, Result};
use signal_hook::{
    consts::signal::{SIGHUP, SIGINT, SIGTERM},
    iterator::Signals,
};
use std::{
    sync::Arc,
    sync::atomic::{AtomicBool, Ordering},
    thread,
};

use crate::backend::DisplayBlanker;
use crate::constants::EXIT_SUCCESS;

/// Human-readable name for the signals sunbreak listens to.
pub fn signal_name(signal: i32) -> &'static str {
    match signal {
        SIGINT => "SIGINT",
        SIGTERM => "SIGTERM",
        SIGHUP => "SIGHUP",
        _ => "signal",
    }
}

/// Restore the display if a break is in progress.
///
/// Returns whether a restore was attempted.
pub fn handle_shutdown(
    signal: i32,
    on_break: &AtomicBool,
    monitor: &str,
    blanker: &mut dyn DisplayBlanker,
) -> bool {
    log_block_start!("Received {}, shutting down...", signal_name(signal));

    if !on_break.load(Ordering::SeqCst) {
        return false;
    }

    log_decorated!("Restoring {monitor} before exit");
    match blanker.restore(monitor) {
        Ok(()) => log_info!("Display {monitor} restored"),
        Err(e) => {
            log_pipe!();
            log_error!("Display {monitor} may still be off: {e:#}");
        }
    }
    true
}

/// Start the signal thread. The process exits from that thread.
pub fn setup_signal_handler(
    on_break: Arc<AtomicBool>,
    monitor: String,
    mut blanker: Box<dyn DisplayBlanker + Send>,
) -> Result<()> {
    let mut signals =
        Signals::new([SIGINT, SIGTERM, SIGHUP]).context("failed to register signal handlers")?;

    thread::Builder::new()
        .name("signal-handler".to_string())
        .spawn(move || {
            if let Some(signal) = signals.forever().next() {
                handle_shutdown(signal, &on_break, &monitor, blanker.as_mut());
                log_end!();
                std::process::exit(EXIT_SUCCESS);
            }
        })
        .context("failed to spawn signal handler thread")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockDisplayBlanker;
    use crate::logger::Log;

    #[test]
    fn test_signal_names() {
        assert_eq!(signal_name(SIGTERM), "SIGTERM");
        assert_eq!(signal_name(SIGINT), "SIGINT");
        assert_eq!(signal_name(SIGHUP), "SIGHUP");
    }

    #[test]
    fn test_shutdown_outside_break_leaves_display_alone() {
        Log::set_enabled(false);
        let mut blanker = MockDisplayBlanker::new();
        blanker.expect_restore().never();

        let on_break = AtomicBool::new(false);
        assert!(!handle_shutdown(SIGTERM, &on_break, "eDP-1", &mut blanker));
    }

    #[test]
    fn test_shutdown_during_break_restores_display() {
        Log::set_enabled(false);
        let mut blanker = MockDisplayBlanker::new();
        blanker
            .expect_restore()
            .withf(|m| m == "eDP-1")
            .times(1)
            .returning(|_| Ok(()));

        let on_break = AtomicBool::new(true);
        assert!(handle_shutdown(SIGINT, &on_break, "eDP-1", &mut blanker));
    }

    #[test]
    fn test_shutdown_restore_failure_is_reported_not_fatal() {
        Log::set_enabled(false);
        let mut blanker = MockDisplayBlanker::new();
        blanker
            .expect_restore()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("xrandr failed")));

        let on_break = AtomicBool::new(true);
        assert!(handle_shutdown(SIGTERM, &on_break, "eDP-1", &mut blanker));
    }
}
