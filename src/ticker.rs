//! Time source for the pomodoro countdown.
//!
//! The store only understands discrete ticks. [`TickDriver`] turns elapsed
//! clock time into a tick count while the timer is running, and forgets its
//! schedule as soon as the timer stops.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Default event poll interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Shortest poll interval accepted from config
const MIN_TICK_MS: u64 = 10;

/// One pomodoro tick per second
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// How long the UI waits for a key before redrawing
pub fn tick_duration(ui_tick_ms: u64) -> Duration {
    Duration::from_millis(ui_tick_ms.max(MIN_TICK_MS))
}

pub trait Clock {
    fn now(&self) -> Instant;
}

/// Monotonic wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// A periodic tick armed at a fixed instant.
///
/// Counts whole periods since arming, so a slow frame is caught up on the
/// next poll instead of being lost.
#[derive(Debug, Clone)]
pub struct TickSchedule {
    armed_at: Instant,
    period: Duration,
    fired: u128,
}

impl TickSchedule {
    pub fn arm(now: Instant, period: Duration) -> Self {
        Self {
            armed_at: now,
            period,
            fired: 0,
        }
    }

    /// Ticks that came due since the last call
    pub fn due(&mut self, now: Instant) -> u64 {
        let period = self.period.as_nanos().max(1);
        let elapsed = now.saturating_duration_since(self.armed_at).as_nanos();
        let total = elapsed / period;
        let due = total.saturating_sub(self.fired);
        self.fired = total;
        u64::try_from(due).unwrap_or(u64::MAX)
    }
}

/// Arms a [`TickSchedule`] while the timer runs and drops it when it stops
pub struct TickDriver<C: Clock> {
    clock: C,
    period: Duration,
    schedule: Option<TickSchedule>,
}

impl<C: Clock> TickDriver<C> {
    pub fn new(clock: C) -> Self {
        Self::with_period(clock, TICK_PERIOD)
    }

    pub fn with_period(clock: C, period: Duration) -> Self {
        Self {
            clock,
            period,
            schedule: None,
        }
    }

    /// Follow the timer's running flag. Re-arming starts a fresh period, so a
    /// pause never carries a partial second over.
    pub fn sync(&mut self, active: bool) {
        match (active, self.schedule.is_some()) {
            (true, false) => {
                self.schedule = Some(TickSchedule::arm(self.clock.now(), self.period));
                log::debug!("event=tick_armed");
            }
            (false, true) => {
                self.schedule = None;
                log::debug!("event=tick_disarmed");
            }
            _ => {}
        }
    }

    pub fn is_armed(&self) -> bool {
        self.schedule.is_some()
    }

    /// Ticks owed since the last poll, zero while disarmed
    pub fn due_ticks(&mut self) -> u64 {
        let now = self.clock.now();
        self.schedule
            .as_mut()
            .map(|schedule| schedule.due(now))
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        assert_eq!(tick_duration(DEFAULT_TICK_MS), Duration::from_millis(250));
        assert_eq!(tick_duration(0), Duration::from_millis(10));
    }

    #[test]
    fn test_schedule_counts_whole_periods() {
        let clock = ManualClock::new();
        let mut schedule = TickSchedule::arm(clock.now(), TICK_PERIOD);

        clock.advance(Duration::from_millis(999));
        assert_eq!(schedule.due(clock.now()), 0);
        clock.advance(Duration::from_millis(1));
        assert_eq!(schedule.due(clock.now()), 1);
        assert_eq!(schedule.due(clock.now()), 0);
    }

    #[test]
    fn test_schedule_catches_up_after_slow_frame() {
        let clock = ManualClock::new();
        let mut schedule = TickSchedule::arm(clock.now(), TICK_PERIOD);

        clock.advance(Duration::from_millis(3500));
        assert_eq!(schedule.due(clock.now()), 3);
        clock.advance(Duration::from_millis(500));
        assert_eq!(schedule.due(clock.now()), 1);
    }

    #[test]
    fn test_driver_idle_until_armed() {
        let clock = ManualClock::new();
        let mut driver = TickDriver::new(clock.clone());

        clock.advance(Duration::from_secs(5));
        assert!(!driver.is_armed());
        assert_eq!(driver.due_ticks(), 0);
    }

    #[test]
    fn test_driver_disarm_drops_partial_period() {
        let clock = ManualClock::new();
        let mut driver = TickDriver::new(clock.clone());
        driver.sync(true);

        clock.advance(Duration::from_millis(1500));
        assert_eq!(driver.due_ticks(), 1);

        driver.sync(false);
        clock.advance(Duration::from_secs(10));
        assert_eq!(driver.due_ticks(), 0);

        driver.sync(true);
        clock.advance(Duration::from_millis(600));
        assert_eq!(driver.due_ticks(), 0);
        clock.advance(Duration::from_millis(400));
        assert_eq!(driver.due_ticks(), 1);
    }

    #[test]
    fn test_sync_while_armed_keeps_schedule() {
        let clock = ManualClock::new();
        let mut driver = TickDriver::new(clock.clone());
        driver.sync(true);
        clock.advance(Duration::from_millis(700));
        driver.sync(true);
        clock.advance(Duration::from_millis(300));
        assert_eq!(driver.due_ticks(), 1);
    }
}
