use super::error::DecodeError;
use crate::domain::{HabitTrack, JournalEntry, ModalState, Note, PomodoroState, Task};
use serde::{Deserialize, Serialize};

/// The single storage slot the whole application lives in
pub const STORAGE_KEY: &str = "productivity-hub-storage";

/// Envelope version written next to the state
pub const SNAPSHOT_VERSION: u32 = 0;

/// Everything the store owns, at one instant.
///
/// Sections missing from stored JSON load as their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub modal: ModalState,
    pub pomodoro: PomodoroState,
    pub tasks: Vec<Task>,
    pub notes: Vec<Note>,
    pub habits: Vec<HabitTrack>,
    pub journal: Vec<JournalEntry>,
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    state: &'a Snapshot,
    version: u32,
}

#[derive(Deserialize)]
struct Envelope {
    state: Snapshot,
    #[serde(default)]
    version: u32,
}

/// Serialize as `{"state": ..., "version": 0}`
pub fn encode(snapshot: &Snapshot) -> Result<String, serde_json::Error> {
    serde_json::to_string(&EnvelopeRef {
        state: snapshot,
        version: SNAPSHOT_VERSION,
    })
}

/// Same envelope, indented for humans
pub fn encode_pretty(snapshot: &Snapshot) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&EnvelopeRef {
        state: snapshot,
        version: SNAPSHOT_VERSION,
    })
}

/// Parse a stored envelope. All or nothing: any bad section rejects the whole snapshot.
pub fn decode(raw: &str) -> Result<Snapshot, DecodeError> {
    let envelope: Envelope = serde_json::from_str(raw)?;
    if envelope.version != SNAPSHOT_VERSION {
        return Err(DecodeError::Version(envelope.version));
    }
    Ok(envelope.state)
}
