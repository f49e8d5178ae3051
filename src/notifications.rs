//! Desktop notifications. Only macOS is implemented; elsewhere these are no-ops.

use crate::domain::{Phase, PomodoroState};
use crate::store::Snapshot;

#[cfg(target_os = "macos")]
use std::process::Command;

/// Announce that the pomodoro just entered `phase`
pub fn notify_phase_change(phase: Phase) {
    let message = match phase {
        Phase::Work => "Break is over. Back to focus.",
        Phase::Break => "Focus session done. Take a break.",
    };
    log::info!("event=notify_phase phase={:?}", phase);

    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "{}" with title "Hub - {}""#,
            message.replace('"', "\\\""),
            phase.label()
        );

        let _ = Command::new("osascript").arg("-e").arg(&script).output();
    }

    #[cfg(not(target_os = "macos"))]
    {
        let _ = message;
    }
}

/// Store subscriber that notifies whenever the pomodoro phase flips
pub fn phase_watcher(initial: &PomodoroState) -> impl FnMut(&Snapshot) + 'static {
    phase_watcher_with(initial, notify_phase_change)
}

/// [`phase_watcher`] with a custom sink
pub fn phase_watcher_with<F>(initial: &PomodoroState, mut sink: F) -> impl FnMut(&Snapshot) + 'static
where
    F: FnMut(Phase) + 'static,
{
    let mut last = initial.phase();
    move |snapshot: &Snapshot| {
        let phase = snapshot.pomodoro.phase();
        // reset() also lands in Work; only a running timer flips phases
        if phase != last && snapshot.pomodoro.is_active {
            sink(phase);
        }
        last = phase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn snapshot_with(pomodoro: PomodoroState) -> Snapshot {
        Snapshot {
            pomodoro,
            ..Snapshot::default()
        }
    }

    #[test]
    fn test_watcher_reports_flips_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let start = PomodoroState::default().set_work_duration(1).start();
        let mut watcher = phase_watcher_with(&start, move |phase| sink.borrow_mut().push(phase));

        let mut state = start;
        for _ in 0..61 {
            state = state.tick();
            watcher(&snapshot_with(state));
        }
        assert_eq!(*seen.borrow(), vec![Phase::Break]);
    }

    #[test]
    fn test_watcher_ignores_reset_out_of_break() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut state = PomodoroState::default().set_work_duration(1).start();
        for _ in 0..61 {
            state = state.tick();
        }
        assert!(state.is_break);
        let mut watcher = phase_watcher_with(&state, move |phase| sink.borrow_mut().push(phase));

        watcher(&snapshot_with(state.reset()));
        assert!(seen.borrow().is_empty());
    }
}
