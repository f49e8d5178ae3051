use super::collection::{new_id, Record};
use super::enums::Mood;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A journal entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
}

impl JournalEntry {
    pub fn new(content: &str, mood: Option<Mood>) -> Self {
        Self {
            id: new_id(),
            content: content.to_string(),
            created_at: Utc::now(),
            mood,
        }
    }

    /// Same entry with new content; `created_at` and `mood` are kept
    pub fn edited(&self, content: &str) -> Self {
        Self {
            content: content.to_string(),
            ..self.clone()
        }
    }
}

impl Record for JournalEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edited_keeps_created_at_and_mood() {
        let entry = JournalEntry::new("Slept well", Some(Mood::Good));
        let edited = entry.edited("Slept well, long run");
        assert_eq!(edited.content, "Slept well, long run");
        assert_eq!(edited.created_at, entry.created_at);
        assert_eq!(edited.mood, Some(Mood::Good));
    }

    #[test]
    fn test_mood_is_optional_on_the_wire() {
        let entry = JournalEntry::new("x", None);
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("mood").is_none());

        let parsed: JournalEntry = serde_json::from_str(
            r#"{"id":"j1","content":"c","createdAt":"2024-02-01T08:00:00Z","mood":null}"#,
        )
        .unwrap();
        assert_eq!(parsed.mood, None);

        let parsed: JournalEntry = serde_json::from_str(
            r#"{"id":"j2","content":"c","createdAt":"2024-02-01T08:00:00Z","mood":"Bad"}"#,
        )
        .unwrap();
        assert_eq!(parsed.mood, Some(Mood::Bad));
    }
}
