use super::enums::Phase;
use serde::{Deserialize, Serialize};

/// Default work phase length (25 minutes)
pub const DEFAULT_WORK_SECS: u32 = 25 * 60;
/// Default break phase length (5 minutes)
pub const DEFAULT_BREAK_SECS: u32 = 5 * 60;

/// Shortest accepted phase length in minutes
pub const MIN_DURATION_MINUTES: i64 = 1;
/// Longest accepted phase length in minutes
pub const MAX_DURATION_MINUTES: i64 = 24 * 60;

/// Clamp a duration given in minutes to the accepted range and convert to seconds
pub fn clamp_minutes_to_secs(minutes: i64) -> u32 {
    let minutes = minutes.clamp(MIN_DURATION_MINUTES, MAX_DURATION_MINUTES);
    (minutes * 60) as u32
}

/// Pomodoro timer state.
///
/// Every transition takes the state by value and returns the next one, so the
/// engine never touches the clock. Time only moves through [`tick`](Self::tick).
///
/// Invariant after every transition:
/// `time_left <= current_duration()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PomodoroState {
    pub is_active: bool,
    pub time_left: u32,
    pub work_duration: u32,
    pub break_duration: u32,
    pub is_break: bool,
}

impl Default for PomodoroState {
    fn default() -> Self {
        Self {
            is_active: false,
            time_left: DEFAULT_WORK_SECS,
            work_duration: DEFAULT_WORK_SECS,
            break_duration: DEFAULT_BREAK_SECS,
            is_break: false,
        }
    }
}

impl PomodoroState {
    /// Start (or keep) the countdown
    pub fn start(self) -> Self {
        Self {
            is_active: true,
            ..self
        }
    }

    /// Stop the countdown, keeping the remaining time
    pub fn pause(self) -> Self {
        Self {
            is_active: false,
            ..self
        }
    }

    /// Back to an idle work phase with a full countdown
    pub fn reset(self) -> Self {
        Self {
            is_active: false,
            is_break: false,
            time_left: self.work_duration,
            ..self
        }
    }

    /// Change the work phase length.
    ///
    /// During a work phase the countdown restarts at the new length, running or
    /// not. During a break the countdown is left alone; the new length applies
    /// from the next work phase.
    pub fn set_work_duration(self, minutes: i64) -> Self {
        let secs = clamp_minutes_to_secs(minutes);
        let time_left = if self.is_break { self.time_left } else { secs };
        Self {
            work_duration: secs,
            time_left,
            ..self
        }
    }

    /// Change the break phase length without touching the phase.
    ///
    /// A running break is shortened to the new length if it would otherwise
    /// exceed it.
    pub fn set_break_duration(self, minutes: i64) -> Self {
        let secs = clamp_minutes_to_secs(minutes);
        let time_left = if self.is_break {
            self.time_left.min(secs)
        } else {
            self.time_left
        };
        Self {
            break_duration: secs,
            time_left,
            ..self
        }
    }

    /// Advance by one second.
    ///
    /// A tick that arrives at 00:00 flips the phase and loads the new phase's
    /// full length. `is_active` is never changed here, so the cycle keeps going
    /// until paused.
    pub fn tick(self) -> Self {
        if self.time_left > 0 {
            return Self {
                time_left: self.time_left - 1,
                ..self
            };
        }

        let is_break = !self.is_break;
        let time_left = if is_break {
            self.break_duration
        } else {
            self.work_duration
        };
        Self {
            is_break,
            time_left,
            ..self
        }
    }

    pub fn phase(&self) -> Phase {
        if self.is_break {
            Phase::Break
        } else {
            Phase::Work
        }
    }

    /// Length of the phase currently counting down
    pub fn current_duration(&self) -> u32 {
        match self.phase() {
            Phase::Work => self.work_duration,
            Phase::Break => self.break_duration,
        }
    }

    /// Fraction of the current phase still remaining (1.0 = full, 0.0 = done)
    pub fn progress(&self) -> f64 {
        let total = self.current_duration();
        if total == 0 {
            return 0.0;
        }
        (self.time_left as f64 / total as f64).clamp(0.0, 1.0)
    }

    /// Countdown formatted as "MM:SS"
    pub fn clock_label(&self) -> String {
        format!("{:02}:{:02}", self.time_left / 60, self.time_left % 60)
    }
}
