//! The schedule loop: color temperature by Sun altitude, plus periodic breaks.
//!
//! One loop drives two concerns, once per tick:
//!
//! - **Breaks**: when more than `break_period` has passed since the last
//!   break, the display is switched off for `break_duration`, restored, and
//!   the loop waits a short settle delay. That tick does nothing else unless
//!   `apply_after_break` is set, in which case the temperature is applied
//!   right after the settle delay, since `xrandr --auto` can reset gamma.
//! - **Temperature**: otherwise the Sun altitude is computed for the current
//!   wall-clock time and mapped linearly onto the configured Kelvin range.
//!
//! Everything blocks on the caller's thread. Time comes from an injected
//! [`TimeSource`], so the whole loop runs under a simulated clock in tests.
//! External tool failures are logged and swallowed; the next tick retries
//! the equivalent action.

pub mod temperature;

use chrono::{DateTime, Local};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::backend::{ColorTemperatureSetter, DisplayBlanker};
use crate::geo::{GeoCoordinate, solar_angles, sun_altitude};
use crate::time_source::TimeSource;
use temperature::TemperatureRange;

/// Resolved, validated timing and location settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleSettings {
    pub coordinate: GeoCoordinate,
    pub temperature_range: TemperatureRange,
    pub clamp_temperature: bool,
    pub apply_after_break: bool,
    pub break_period: Duration,
    pub break_duration: Duration,
    pub settle_delay: Duration,
    pub tick_interval: Duration,
}

impl ScheduleSettings {
    /// Temperature for an altitude, honoring `clamp_temperature`.
    pub fn temperature_for_altitude(&self, altitude: f64) -> f64 {
        if self.clamp_temperature {
            self.temperature_range.clamped(altitude)
        } else {
            self.temperature_range.temperature_for_altitude(altitude)
        }
    }
}

/// The only mutable state of the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleState {
    pub last_break: DateTime<Local>,
}

impl ScheduleState {
    pub fn new(start: DateTime<Local>) -> Self {
        Self { last_break: start }
    }

    /// True once strictly more than `period` has elapsed since the last break.
    pub fn break_due(&self, now: DateTime<Local>, period: Duration) -> bool {
        match chrono::Duration::from_std(period) {
            Ok(period) => now.signed_duration_since(self.last_break) > period,
            Err(_) => false,
        }
    }

    pub fn record_break(&mut self, at: DateTime<Local>) {
        self.last_break = at;
    }
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// The tick ran the break sequence. A temperature is applied afterwards
    /// only with `apply_after_break`.
    Break,
    /// The tick computed and applied a color temperature.
    Temperature { altitude: f64, temperature: f64 },
}

/// Dependencies for a [`ScheduleController`].
pub struct CoreParams {
    pub settings: ScheduleSettings,
    pub monitor: String,
    pub blanker: Box<dyn DisplayBlanker>,
    pub setter: Box<dyn ColorTemperatureSetter>,
    pub time_source: Arc<dyn TimeSource>,
    /// Raised while the display is blanked, read by the shutdown handler.
    pub on_break: Arc<AtomicBool>,
    pub debug_enabled: bool,
}

/// Owns the schedule state and drives the external collaborators.
pub struct ScheduleController {
    settings: ScheduleSettings,
    monitor: String,
    blanker: Box<dyn DisplayBlanker>,
    setter: Box<dyn ColorTemperatureSetter>,
    time_source: Arc<dyn TimeSource>,
    on_break: Arc<AtomicBool>,
    debug_enabled: bool,
    state: ScheduleState,
}

impl ScheduleController {
    /// Create a controller whose last break is "now".
    pub fn new(params: CoreParams) -> Self {
        let state = ScheduleState::new(params.time_source.now());
        Self {
            settings: params.settings,
            monitor: params.monitor,
            blanker: params.blanker,
            setter: params.setter,
            time_source: params.time_source,
            on_break: params.on_break,
            debug_enabled: params.debug_enabled,
            state,
        }
    }

    pub fn state(&self) -> ScheduleState {
        self.state
    }

    /// Run ticks until the time source ends. With real time that is never;
    /// the process is stopped by a signal.
    pub fn run(&mut self) {
        while !self.time_source.is_ended() {
            self.tick();
            self.time_source.sleep(self.settings.tick_interval);
        }
    }

    /// Perform one loop iteration, without the trailing tick sleep.
    pub fn tick(&mut self) -> TickOutcome {
        let now = self.time_source.now();

        if self.state.break_due(now, self.settings.break_period) {
            self.take_break();
            if self.settings.apply_after_break {
                self.update_temperature(self.time_source.now());
            }
            return TickOutcome::Break;
        }

        let (altitude, temperature) = self.update_temperature(now);
        TickOutcome::Temperature {
            altitude,
            temperature,
        }
    }

    fn update_temperature(&mut self, now: DateTime<Local>) -> (f64, f64) {
        let (altitude, temperature) = self.compute_temperature(now);
        log_decorated!("Sun altitude: {altitude:.2}°, Temp: {temperature:.2} K");

        if let Err(e) = self.setter.apply(temperature) {
            log_pipe!();
            log_warning!("{e:#}");
        }

        (altitude, temperature)
    }

    fn compute_temperature(&self, now: DateTime<Local>) -> (f64, f64) {
        let at = now.naive_local();
        let altitude = sun_altitude(self.settings.coordinate, &at);
        let temperature = self.settings.temperature_for_altitude(altitude);

        if self.debug_enabled {
            let angles = solar_angles(self.settings.coordinate, &at);
            log_debug!(
                "declination {:.3}°, equation of time {:.3} min, hour angle {:.3}°",
                angles.declination,
                angles.equation_of_time,
                angles.hour_angle
            );
        }

        (altitude, temperature)
    }

    /// Blank, wait, restore, record, settle.
    fn take_break(&mut self) {
        log_block_start!("Taking a break");

        self.on_break.store(true, Ordering::SeqCst);
        if let Err(e) = self.blanker.off(&self.monitor) {
            log_pipe!();
            log_warning!("{e:#}");
        }

        self.time_source.sleep(self.settings.break_duration);

        if let Err(e) = self.blanker.restore(&self.monitor) {
            log_pipe!();
            log_error!("Display {} may still be off: {e:#}", self.monitor);
        }
        self.on_break.store(false, Ordering::SeqCst);

        self.state.record_break(self.time_source.now());
        self.time_source.sleep(self.settings.settle_delay);

        if self.debug_enabled {
            log_debug!(
                "Break finished, next one after {}",
                (self.state.last_break
                    + chrono::Duration::from_std(self.settings.break_period)
                        .unwrap_or_else(|_| chrono::Duration::zero()))
                .format("%H:%M:%S")
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{MockColorTemperatureSetter, MockDisplayBlanker};
    use crate::logger::Log;
    use crate::time_source::SimulatedTimeSource;
    use chrono::TimeZone;
    use mockall::Sequence;

    fn start() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 22, 16, 51, 0).single().unwrap()
    }

    fn settings() -> ScheduleSettings {
        crate::config::Config::default().schedule_settings()
    }

    fn controller(
        clock: Arc<SimulatedTimeSource>,
        blanker: MockDisplayBlanker,
        setter: MockColorTemperatureSetter,
    ) -> ScheduleController {
        Log::set_enabled(false);
        ScheduleController::new(CoreParams {
            settings: settings(),
            monitor: "eDP-1".to_string(),
            blanker: Box::new(blanker),
            setter: Box::new(setter),
            time_source: clock,
            on_break: Arc::new(AtomicBool::new(false)),
            debug_enabled: true,
        })
    }

    #[test]
    fn test_break_due_is_strict() {
        let state = ScheduleState::new(start());
        let period = Duration::from_secs(20 * 60);

        assert!(!state.break_due(start() + chrono::Duration::minutes(10), period));
        assert!(!state.break_due(start() + chrono::Duration::minutes(20), period));
        assert!(state.break_due(
            start() + chrono::Duration::minutes(20) + chrono::Duration::seconds(1),
            period
        ));
    }

    #[test]
    fn test_initial_state_is_start_time() {
        let clock = Arc::new(SimulatedTimeSource::new(start()));
        let ctl = controller(
            clock,
            MockDisplayBlanker::new(),
            MockColorTemperatureSetter::new(),
        );
        assert_eq!(ctl.state().last_break, start());
    }

    #[test]
    fn test_tick_applies_temperature() {
        let clock = Arc::new(SimulatedTimeSource::new(start()));
        let mut setter = MockColorTemperatureSetter::new();
        setter
            .expect_apply()
            .withf(|t| *t > 3200.0 && *t < 3500.0)
            .times(1)
            .returning(|_| Ok(()));

        let mut ctl = controller(clock.clone(), MockDisplayBlanker::new(), setter);

        match ctl.tick() {
            TickOutcome::Temperature {
                altitude,
                temperature,
            } => {
                assert!((altitude - 46.06).abs() < 0.01);
                assert!((temperature - 3426.77).abs() < 0.01);
            }
            other => panic!("expected temperature tick, got {other:?}"),
        }
        assert!(clock.sleeps().is_empty());
    }

    #[test]
    fn test_setter_failure_is_swallowed() {
        let clock = Arc::new(SimulatedTimeSource::new(start()));
        let mut setter = MockColorTemperatureSetter::new();
        setter
            .expect_apply()
            .times(2)
            .returning(|_| Err(anyhow::anyhow!("sct not installed")));

        let mut ctl = controller(clock.clone(), MockDisplayBlanker::new(), setter);

        assert!(matches!(ctl.tick(), TickOutcome::Temperature { .. }));
        clock.advance(chrono::Duration::minutes(1));
        assert!(matches!(ctl.tick(), TickOutcome::Temperature { .. }));
    }

    #[test]
    fn test_break_sequence_order_and_timing() {
        let clock = Arc::new(SimulatedTimeSource::new(start()));
        let mut seq = Sequence::new();
        let mut blanker = MockDisplayBlanker::new();
        blanker
            .expect_off()
            .withf(|m| m == "eDP-1")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        blanker
            .expect_restore()
            .withf(|m| m == "eDP-1")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        let mut setter = MockColorTemperatureSetter::new();
        setter.expect_apply().never();

        let mut ctl = controller(clock.clone(), blanker, setter);
        clock.advance(chrono::Duration::minutes(21));

        assert_eq!(ctl.tick(), TickOutcome::Break);
        assert_eq!(
            clock.sleeps(),
            vec![Duration::from_secs(20), Duration::from_millis(250)]
        );
        assert_eq!(
            ctl.state().last_break,
            start() + chrono::Duration::minutes(21) + chrono::Duration::seconds(20)
        );
    }

    #[test]
    fn test_blanker_failure_still_restores_and_records() {
        let clock = Arc::new(SimulatedTimeSource::new(start()));
        let mut blanker = MockDisplayBlanker::new();
        blanker
            .expect_off()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("xrandr failed")));
        blanker
            .expect_restore()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("xrandr failed")));

        let mut ctl = controller(clock.clone(), blanker, MockColorTemperatureSetter::new());
        clock.advance(chrono::Duration::minutes(25));

        assert_eq!(ctl.tick(), TickOutcome::Break);
        assert!(ctl.state().last_break > start() + chrono::Duration::minutes(25));
    }

    #[test]
    fn test_no_break_before_period() {
        let clock = Arc::new(SimulatedTimeSource::new(start()));
        let mut blanker = MockDisplayBlanker::new();
        blanker.expect_off().never();
        blanker.expect_restore().never();
        let mut setter = MockColorTemperatureSetter::new();
        setter.expect_apply().times(1).returning(|_| Ok(()));

        let mut ctl = controller(clock.clone(), blanker, setter);
        clock.advance(chrono::Duration::minutes(10));

        assert!(matches!(ctl.tick(), TickOutcome::Temperature { .. }));
        assert_eq!(ctl.state().last_break, start());
    }

    #[test]
    fn test_apply_after_break_follows_settle_delay() {
        let clock = Arc::new(SimulatedTimeSource::new(start()));
        let mut seq = Sequence::new();
        let mut blanker = MockDisplayBlanker::new();
        blanker
            .expect_off()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        blanker
            .expect_restore()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        let mut setter = MockColorTemperatureSetter::new();
        let applied_at = Arc::new(std::sync::Mutex::new(None));
        let recorded = applied_at.clone();
        let observed = clock.clone();
        setter
            .expect_apply()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| {
                *recorded.lock().unwrap() = Some(observed.now());
                Ok(())
            });

        let mut ctl = controller(clock.clone(), blanker, setter);
        ctl.settings.apply_after_break = true;
        clock.advance(chrono::Duration::minutes(21));

        assert_eq!(ctl.tick(), TickOutcome::Break);
        assert_eq!(
            *applied_at.lock().unwrap(),
            Some(
                start()
                    + chrono::Duration::minutes(21)
                    + chrono::Duration::seconds(20)
                    + chrono::Duration::milliseconds(250)
            )
        );
    }

    #[test]
    fn test_clamped_settings() {
        let mut settings = settings();
        assert!(settings.temperature_for_altitude(95.0) > 3500.0);
        settings.clamp_temperature = true;
        assert_eq!(settings.temperature_for_altitude(95.0), 3500.0);
    }
}
