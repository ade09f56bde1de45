//! Clock abstraction for the schedule loop.
//!
//! The controller never calls `Local::now()` or `thread::sleep` directly; it
//! goes through a [`TimeSource`] handed to it at construction. Production uses
//! [`RealTimeSource`]. Tests use [`SimulatedTimeSource`], a fast-forward clock
//! whose `sleep` advances simulated time instantly, so a twenty minute break
//! schedule runs in microseconds.

use chrono::{DateTime, Local};
use std::time::Duration as StdDuration;

#[cfg(any(test, feature = "testing-support"))]
use std::sync::Mutex;

/// Source of the current time and of blocking sleeps.
pub trait TimeSource: Send + Sync {
    /// Current wall-clock time.
    fn now(&self) -> DateTime<Local>;

    /// Block for `duration` (or pretend to).
    fn sleep(&self, duration: StdDuration);

    /// Whether the clock has run out. Real time never does.
    fn is_ended(&self) -> bool {
        false
    }
}

/// System clock and real sleeps.
pub struct RealTimeSource;

impl TimeSource for RealTimeSource {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }

    fn sleep(&self, duration: StdDuration) {
        std::thread::sleep(duration);
    }
}

/// Fast-forward clock for tests.
///
/// Every `sleep` is recorded and moves the clock forward by exactly the
/// requested amount without blocking. With an end time set, `is_ended`
/// reports `true` once the clock reaches it, which stops the run loop.
#[cfg(any(test, feature = "testing-support"))]
pub struct SimulatedTimeSource {
    current: Mutex<DateTime<Local>>,
    end_time: Option<DateTime<Local>>,
    sleeps: Mutex<Vec<StdDuration>>,
}

#[cfg(any(test, feature = "testing-support"))]
impl SimulatedTimeSource {
    pub fn new(start_time: DateTime<Local>) -> Self {
        Self {
            current: Mutex::new(start_time),
            end_time: None,
            sleeps: Mutex::new(Vec::new()),
        }
    }

    /// Stop the simulation once the clock reaches `end_time`.
    pub fn with_end_time(mut self, end_time: DateTime<Local>) -> Self {
        self.end_time = Some(end_time);
        self
    }

    /// Move the clock forward without recording a sleep.
    pub fn advance(&self, duration: chrono::Duration) {
        let mut current = self.current.lock().unwrap();
        *current += duration;
    }

    /// Every duration passed to `sleep`, in call order.
    pub fn sleeps(&self) -> Vec<StdDuration> {
        self.sleeps.lock().unwrap().clone()
    }
}

#[cfg(any(test, feature = "testing-support"))]
impl TimeSource for SimulatedTimeSource {
    fn now(&self) -> DateTime<Local> {
        *self.current.lock().unwrap()
    }

    fn sleep(&self, duration: StdDuration) {
        self.sleeps.lock().unwrap().push(duration);
        let step = chrono::Duration::from_std(duration).unwrap_or_else(|_| chrono::Duration::zero());
        self.advance(step);
    }

    fn is_ended(&self) -> bool {
        self.end_time.is_some_and(|end| self.now() >= end)
    }
}
