//! Application coordinator that wires configuration, tools and the loop.
//!
//! Startup runs in a fixed order:
//! - Configuration loading (defaults when no file exists)
//! - Active monitor lookup, the only fatal external call
//! - Shutdown signal handler installation
//! - Schedule loop, which does not return under real time
//!
//! ```no_run
//! use sunbreak::Sunbreak;
//!
//! # fn main() -> anyhow::Result<()> {
//! Sunbreak::new(false).run()?;
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crate::{
    backend::{MonitorLister, SctSetter, XrandrBlanker, XrandrMonitorLister},
    config::Config,
    core::{CoreParams, ScheduleController},
    signals::setup_signal_handler,
    time_source::RealTimeSource,
};

/// Look up the monitor the breaks will blank. Startup cannot continue without it.
pub fn resolve_monitor(lister: &dyn MonitorLister) -> Result<String> {
    lister
        .active_monitor()
        .context("Failed to determine the active monitor")
}

/// Builder for a sunbreak run.
pub struct Sunbreak {
    debug_enabled: bool,
    config_dir: Option<PathBuf>,
    monitor_lister: Option<Box<dyn MonitorLister>>,
}

impl Sunbreak {
    pub fn new(debug_enabled: bool) -> Self {
        Self {
            debug_enabled,
            config_dir: None,
            monitor_lister: None,
        }
    }

    /// Replace the `xrandr` monitor lookup.
    pub fn with_monitor_lister(mut self, lister: Box<dyn MonitorLister>) -> Self {
        self.monitor_lister = Some(lister);
        self
    }

    /// Read `sunbreak.toml` from `dir` instead of the XDG location.
    pub fn with_config_dir(mut self, dir: Option<impl Into<PathBuf>>) -> Self {
        self.config_dir = dir.map(Into::into);
        self
    }

    /// Start the application. Returns only on a startup failure.
    pub fn run(self) -> Result<()> {
        log_version!();

        let config = Config::load(self.config_dir.as_deref())
            .context("Failed to load configuration")?;
        config.log_config();

        let monitor = match &self.monitor_lister {
            Some(lister) => resolve_monitor(lister.as_ref())?,
            None => resolve_monitor(&XrandrMonitorLister::new(config.xrandr_command()))?,
        };
        log_block_start!("Using monitor {}", monitor);

        if self.debug_enabled {
            log_debug!("Color temperature tool: {}", config.sct_command());
        }
        let setter = SctSetter::new(config.sct_command());

        let on_break = Arc::new(AtomicBool::new(false));
        setup_signal_handler(
            on_break.clone(),
            monitor.clone(),
            Box::new(XrandrBlanker::new(config.xrandr_command())),
        )?;

        let mut controller = ScheduleController::new(CoreParams {
            settings: config.schedule_settings(),
            monitor,
            blanker: Box::new(XrandrBlanker::new(config.xrandr_command())),
            setter: Box::new(setter),
            time_source: Arc::new(RealTimeSource),
            on_break,
            debug_enabled: self.debug_enabled,
        });

        log_block_start!("Starting schedule loop");
        controller.run();

        log_end!();
        Ok(())
    }
}
