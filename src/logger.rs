//! Structured console logging with box-drawing decoration.
//!
//! Every line sunbreak prints goes through this module so the output keeps a
//! single visual spine:
//!
//! ```text
//! ┏ sunbreak v0.1.0 ━━╸
//! ┃
//! ┣ Using monitor eDP-1
//! ┣ Sun altitude: 12.34°, Temp: 3368.56 K
//! ┃
//! ┣ Taking a break
//! ╹
//! ```
//!
//! ## Conventions
//!
//! - **`log_block_start!`** opens a new conceptual block (startup phases, a
//!   break beginning). It prints a spacer pipe first, then `┣ message`.
//! - **`log_decorated!`** continues the current block with `┣ message`. The
//!   per-tick status line uses it.
//! - **`log_indented!`** prints nested detail (`┃   message`), e.g. the
//!   resolved configuration values.
//! - **`log_pipe!`** inserts a bare `┃` for spacing, normally right before a
//!   `log_warning!` or `log_error!` that starts its own block.
//! - **`log_version!`** / **`log_end!`** frame the whole run.
//! - **`log_info!`, `log_warning!`, `log_error!`, `log_debug!`** carry a
//!   colored `[LEVEL]` tag. `log_error_exit!` closes the spine with `┗` and is
//!   only used right before the process exits with a failure.
//!
//! Output can be switched off at runtime with [`Log::set_enabled`], which the
//! test suites use to keep `cargo test` quiet.

use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

static LOGGING_ENABLED: AtomicBool = AtomicBool::new(true);

/// Severity tags rendered as `[LEVEL]` with an ANSI color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Debug,
    Warning,
    Error,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Level::Info => "\x1b[32mINFO\x1b[0m",
            Level::Debug => "\x1b[32mDEBUG\x1b[0m",
            Level::Warning => "\x1b[33mWARNING\x1b[0m",
            Level::Error => "\x1b[31mERROR\x1b[0m",
        }
    }
}

/// Line shapes understood by [`Log::emit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Decorated,
    Indented,
    BlockStart,
    Tagged(Level),
    ErrorExit,
}

/// Entry point used by the logging macros.
pub struct Log;

impl Log {
    /// Enable or disable all output.
    pub fn set_enabled(enabled: bool) {
        LOGGING_ENABLED.store(enabled, Ordering::SeqCst);
    }

    pub fn is_enabled() -> bool {
        LOGGING_ENABLED.load(Ordering::SeqCst)
    }

    /// Format a message in the given style and write it to stdout.
    pub fn emit(style: Style, args: fmt::Arguments<'_>) {
        if Self::is_enabled() {
            write_output(&render(style, args));
        }
    }

    /// Write a fixed frame line (`┃`, `╹`, version header).
    pub fn emit_raw(line: &str) {
        if Self::is_enabled() {
            write_output(&format!("{line}\n"));
        }
    }
}

/// Build the full output text for one message, including the trailing newline.
pub fn render(style: Style, args: fmt::Arguments<'_>) -> String {
    match style {
        Style::Decorated => format!("┣ {args}\n"),
        Style::Indented => format!("┃   {args}\n"),
        Style::BlockStart => format!("┃\n┣ {args}\n"),
        Style::Tagged(level) => format!("┣[{}] {args}\n", level.tag()),
        Style::ErrorExit => format!("┃\n┗[{}] {args}\n", Level::Error.tag()),
    }
}

fn write_output(text: &str) {
    let mut stdout = std::io::stdout().lock();
    let _ = stdout.write_all(text.as_bytes());
    let _ = stdout.flush();
}

/// Continue the current block with `┣ message`.
#[macro_export]
macro_rules! log_decorated {
    ($($arg:tt)*) => {
        $crate::logger::Log::emit($crate::logger::Style::Decorated, format_args!($($arg)*))
    };
}

/// Nested detail line `┃   message`.
#[macro_export]
macro_rules! log_indented {
    ($($arg:tt)*) => {
        $crate::logger::Log::emit($crate::logger::Style::Indented, format_args!($($arg)*))
    };
}

/// Open a new block: spacer pipe, then `┣ message`.
#[macro_export]
macro_rules! log_block_start {
    ($($arg:tt)*) => {
        $crate::logger::Log::emit($crate::logger::Style::BlockStart, format_args!($($arg)*))
    };
}

/// Bare `┃` spacer.
#[macro_export]
macro_rules! log_pipe {
    () => {
        $crate::logger::Log::emit_raw("┃")
    };
}

/// Application header, printed once at startup.
#[macro_export]
macro_rules! log_version {
    () => {
        $crate::logger::Log::emit_raw(concat!("┏ sunbreak v", env!("CARGO_PKG_VERSION"), " ━━╸"))
    };
}

/// Final termination marker.
#[macro_export]
macro_rules! log_end {
    () => {
        $crate::logger::Log::emit_raw("╹")
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::logger::Log::emit(
            $crate::logger::Style::Tagged($crate::logger::Level::Info),
            format_args!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logger::Log::emit(
            $crate::logger::Style::Tagged($crate::logger::Level::Debug),
            format_args!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => {
        $crate::logger::Log::emit(
            $crate::logger::Style::Tagged($crate::logger::Level::Warning),
            format_args!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logger::Log::emit(
            $crate::logger::Style::Tagged($crate::logger::Level::Error),
            format_args!($($arg)*),
        )
    };
}

/// Close the spine with an error, right before a failing exit.
#[macro_export]
macro_rules! log_error_exit {
    ($($arg:tt)*) => {
        $crate::logger::Log::emit($crate::logger::Style::ErrorExit, format_args!($($arg)*))
    };
}
