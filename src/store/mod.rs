//! The application store.
//!
//! One [`Store`] owns every collection, the pomodoro timer and the modal
//! selection. Each public mutator runs the same pipeline:
//!
//! 1. compute the next [`Snapshot`] with a pure transition,
//! 2. write it through to the [`Backend`] under [`STORAGE_KEY`],
//! 3. install it as the current state,
//! 4. call every subscriber with it.
//!
//! A transition that changes nothing stops after step 1. A failed write is
//! returned to the caller but never undoes step 3.

pub mod error;
pub mod snapshot;

pub use error::StoreError;
pub use snapshot::{decode, encode, encode_pretty, Snapshot, STORAGE_KEY};

use crate::domain::collection::{append, remove, replace};
use crate::domain::{HabitTrack, JournalEntry, ModalState, Note, PomodoroState, Task, Tool};
use crate::persistence::Backend;
use chrono::{NaiveDate, Utc};
use log::{debug, info, trace, warn};

/// Outcome of a mutation. `Err` means the new state is live but was not saved.
pub type Persisted = Result<(), StoreError>;

/// Handle returned by [`Store::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&Snapshot)>;

pub struct Store<B: Backend> {
    backend: B,
    state: Snapshot,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<B: Backend> Store<B> {
    /// Rehydrate from `backend`. An absent or unreadable snapshot is a cold
    /// start with defaults, never an error.
    pub fn open(mut backend: B) -> Self {
        let state = hydrate(&mut backend);
        Self::with_state(backend, state)
    }

    /// Store seeded with `state` without reading the backend
    pub fn with_state(backend: B, state: Snapshot) -> Self {
        Self {
            backend,
            state,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.state
    }

    pub fn modal(&self) -> &ModalState {
        &self.state.modal
    }

    pub fn pomodoro(&self) -> &PomodoroState {
        &self.state.pomodoro
    }

    pub fn tasks(&self) -> &[Task] {
        &self.state.tasks
    }

    pub fn notes(&self) -> &[Note] {
        &self.state.notes
    }

    pub fn habits(&self) -> &[HabitTrack] {
        &self.state.habits
    }

    pub fn journal(&self) -> &[JournalEntry] {
        &self.state.journal
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Write the current state even if nothing changed
    pub fn flush(&mut self) -> Persisted {
        let state = self.state.clone();
        self.persist(&state)
    }

    /// Current state as the pretty-printed persisted document
    pub fn export(&self) -> Result<String, StoreError> {
        Ok(encode_pretty(&self.state)?)
    }

    /// Call `f` with the new snapshot after every change
    pub fn subscribe<F>(&mut self, f: F) -> SubscriptionId
    where
        F: FnMut(&Snapshot) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(f)));
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    fn mutate<F>(&mut self, op: F) -> Persisted
    where
        F: FnOnce(&Snapshot) -> Snapshot,
    {
        let next = op(&self.state);
        if next == self.state {
            return Ok(());
        }

        let saved = self.persist(&next);
        self.state = next;
        self.notify();
        saved
    }

    fn persist(&mut self, next: &Snapshot) -> Persisted {
        let raw = encode(next)?;
        self.backend.save(STORAGE_KEY, &raw).map_err(|err| {
            warn!("event=snapshot_save_failed key={} error={:#}", STORAGE_KEY, err);
            StoreError::Backend(err)
        })
    }

    fn notify(&mut self) {
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.state);
        }
    }

    // Modal

    /// Show `tool`, replacing any open tool
    pub fn open_modal(&mut self, tool: Tool) -> Persisted {
        debug!("event=modal_open tool={}", tool.id);
        self.mutate(|s| Snapshot {
            modal: ModalState::open(tool),
            ..s.clone()
        })
    }

    pub fn close_modal(&mut self) -> Persisted {
        self.mutate(|s| Snapshot {
            modal: ModalState::closed(),
            ..s.clone()
        })
    }

    // Pomodoro

    fn update_pomodoro<F>(&mut self, f: F) -> Persisted
    where
        F: FnOnce(PomodoroState) -> PomodoroState,
    {
        self.mutate(|s| Snapshot {
            pomodoro: f(s.pomodoro),
            ..s.clone()
        })
    }

    pub fn start_pomodoro(&mut self) -> Persisted {
        self.update_pomodoro(PomodoroState::start)
    }

    pub fn pause_pomodoro(&mut self) -> Persisted {
        self.update_pomodoro(PomodoroState::pause)
    }

    pub fn reset_pomodoro(&mut self) -> Persisted {
        self.update_pomodoro(PomodoroState::reset)
    }

    /// Minutes outside 1..=1440 are clamped
    pub fn set_work_duration(&mut self, minutes: i64) -> Persisted {
        self.update_pomodoro(|p| p.set_work_duration(minutes))
    }

    /// Minutes outside 1..=1440 are clamped
    pub fn set_break_duration(&mut self, minutes: i64) -> Persisted {
        self.update_pomodoro(|p| p.set_break_duration(minutes))
    }

    /// One second of countdown. Ignored while the timer is paused, so a tick
    /// that races a pause cannot move the clock.
    pub fn tick(&mut self) -> Persisted {
        self.advance(1)
    }

    /// Apply `ticks` one-second ticks as a single transition, written once.
    /// Catching up after the loop was blocked costs one write, not one per second.
    pub fn advance(&mut self, ticks: u64) -> Persisted {
        if !self.state.pomodoro.is_active {
            trace!("event=tick_ignored reason=inactive");
            return Ok(());
        }
        if ticks > 1 {
            debug!("event=tick_catch_up ticks={}", ticks);
        }
        let before = self.state.pomodoro.phase();
        let result = self.update_pomodoro(|mut pomodoro| {
            for _ in 0..ticks {
                pomodoro = pomodoro.tick();
            }
            pomodoro
        });
        let after = self.state.pomodoro.phase();
        if before != after {
            info!("event=pomodoro_phase from={:?} to={:?}", before, after);
        }
        result
    }

    // Tasks

    pub fn add_task(&mut self, task: Task) -> Persisted {
        self.mutate(|s| Snapshot {
            tasks: append(&s.tasks, task),
            ..s.clone()
        })
    }

    pub fn toggle_task(&mut self, id: &str) -> Persisted {
        self.mutate(|s| Snapshot {
            tasks: replace(&s.tasks, id, Task::toggled),
            ..s.clone()
        })
    }

    pub fn toggle_task_important(&mut self, id: &str) -> Persisted {
        self.mutate(|s| Snapshot {
            tasks: replace(&s.tasks, id, Task::toggled_important),
            ..s.clone()
        })
    }

    pub fn remove_task(&mut self, id: &str) -> Persisted {
        self.mutate(|s| Snapshot {
            tasks: remove(&s.tasks, id),
            ..s.clone()
        })
    }

    // Notes

    pub fn add_note(&mut self, note: Note) -> Persisted {
        self.mutate(|s| Snapshot {
            notes: append(&s.notes, note),
            ..s.clone()
        })
    }

    pub fn update_note(&mut self, id: &str, content: &str) -> Persisted {
        let now = Utc::now();
        self.mutate(|s| Snapshot {
            notes: replace(&s.notes, id, |note| note.edited(content, now)),
            ..s.clone()
        })
    }

    pub fn remove_note(&mut self, id: &str) -> Persisted {
        self.mutate(|s| Snapshot {
            notes: remove(&s.notes, id),
            ..s.clone()
        })
    }

    // Habits

    pub fn add_habit(&mut self, habit: HabitTrack) -> Persisted {
        self.mutate(|s| Snapshot {
            habits: append(&s.habits, habit),
            ..s.clone()
        })
    }

    pub fn toggle_habit_day(&mut self, habit_id: &str, date: NaiveDate) -> Persisted {
        self.mutate(|s| Snapshot {
            habits: replace(&s.habits, habit_id, |habit| habit.toggled_day(date)),
            ..s.clone()
        })
    }

    pub fn remove_habit(&mut self, id: &str) -> Persisted {
        self.mutate(|s| Snapshot {
            habits: remove(&s.habits, id),
            ..s.clone()
        })
    }

    // Journal

    pub fn add_journal_entry(&mut self, entry: JournalEntry) -> Persisted {
        self.mutate(|s| Snapshot {
            journal: append(&s.journal, entry),
            ..s.clone()
        })
    }

    pub fn update_journal_entry(&mut self, id: &str, content: &str) -> Persisted {
        self.mutate(|s| Snapshot {
            journal: replace(&s.journal, id, |entry| entry.edited(content)),
            ..s.clone()
        })
    }

    pub fn remove_journal_entry(&mut self, id: &str) -> Persisted {
        self.mutate(|s| Snapshot {
            journal: remove(&s.journal, id),
            ..s.clone()
        })
    }

    /// Back to a first-run state, persisted like any other change
    pub fn reset_all(&mut self) -> Persisted {
        info!("event=store_reset");
        self.mutate(|_| Snapshot::default())
    }
}

fn hydrate<B: Backend>(backend: &mut B) -> Snapshot {
    let raw = match backend.load(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            info!("event=store_cold_start reason=absent");
            return Snapshot::default();
        }
        Err(err) => {
            warn!("event=store_cold_start reason=unreadable error={:#}", err);
            quarantine(backend);
            return Snapshot::default();
        }
    };

    match decode(&raw) {
        Ok(snapshot) => {
            info!(
                "event=store_rehydrated tasks={} notes={} habits={} journal={}",
                snapshot.tasks.len(),
                snapshot.notes.len(),
                snapshot.habits.len(),
                snapshot.journal.len()
            );
            snapshot
        }
        Err(err) => {
            warn!("event=store_cold_start reason=malformed error={}", err);
            quarantine(backend);
            Snapshot::default()
        }
    }
}

/// Keep a copy of whatever is stored before the next write replaces it
fn quarantine<B: Backend>(backend: &mut B) {
    if let Err(err) = backend.quarantine(STORAGE_KEY) {
        warn!("event=snapshot_quarantine_failed error={:#}", err);
    }
}
