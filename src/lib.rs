//! # Sunbreak Library
//!
//! Internal library for the sunbreak binary.
//!
//! sunbreak adjusts the screen's color temperature according to the Sun's
//! altitude at a fixed location and blanks the screen for a short break every
//! twenty minutes. The library exists so the solar math and the schedule loop
//! can be tested without touching a real display.
//!
//! ## Architecture
//!
//! - **Entry Point**: `Sunbreak` builder handles startup and hands off to the loop
//! - **Core Logic**: `core` owns the schedule state and the tick/break cycle
//! - **Geographic**: `geo` computes Sun altitude from coordinates and wall-clock time
//! - **Backends**: `backend` wraps the external tools (`xrandr`, `sct`) behind traits
//! - **Configuration**: `config` for optional TOML overrides of the built-in defaults
//! - **Infrastructure**: injectable clock, shutdown signals, console logging

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

pub mod args;
pub mod backend;
pub mod config;
pub mod constants;
pub mod core;
pub mod geo;
pub mod signals;
pub mod time_source;

mod sunbreak;

pub use sunbreak::Sunbreak;
