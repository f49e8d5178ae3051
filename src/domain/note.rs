use super::collection::{new_id, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A quick note; `content` is markdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(content: &str) -> Self {
        let now = Utc::now();
        Self {
            id: new_id(),
            content: content.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the content and stamp `updated_at`, never earlier than `created_at`
    pub fn edited(&self, content: &str, now: DateTime<Utc>) -> Self {
        Self {
            content: content.to_string(),
            updated_at: now.max(self.created_at),
            ..self.clone()
        }
    }

    /// First non-empty line, used as a title in lists
    pub fn headline(&self) -> &str {
        self.content
            .lines()
            .map(|line| line.trim_start_matches('#').trim())
            .find(|line| !line.is_empty())
            .unwrap_or("")
    }
}

impl Record for Note {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_note_timestamps_match() {
        let note = Note::new("hello");
        assert_eq!(note.created_at, note.updated_at);
    }

    #[test]
    fn test_edited_refreshes_updated_at() {
        let note = Note::new("hello");
        let later = note.created_at + Duration::minutes(5);
        let edited = note.edited("hello world", later);
        assert_eq!(edited.content, "hello world");
        assert_eq!(edited.updated_at, later);
        assert_eq!(edited.created_at, note.created_at);
    }

    #[test]
    fn test_edited_never_goes_before_created_at() {
        let note = Note::new("hello");
        let skewed = note.created_at - Duration::hours(1);
        let edited = note.edited("x", skewed);
        assert_eq!(edited.updated_at, note.created_at);
    }

    #[test]
    fn test_headline_skips_blank_and_heading_marks() {
        let note = Note::new("\n\n## Groceries\n- milk");
        assert_eq!(note.headline(), "Groceries");
        assert_eq!(Note::new("").headline(), "");
    }
}
