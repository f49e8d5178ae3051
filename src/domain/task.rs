use super::collection::{new_id, non_empty, Record, ValidationError};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Older snapshots may not carry this field at all
    #[serde(default)]
    pub important: bool,
}

impl Task {
    pub fn new(title: &str, due_date: Option<NaiveDate>) -> Result<Self, ValidationError> {
        Ok(Self {
            id: new_id(),
            title: non_empty("task title", title)?,
            completed: false,
            created_at: Utc::now(),
            due_date,
            important: false,
        })
    }

    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }

    pub fn toggled_important(&self) -> Self {
        Self {
            important: !self.important,
            ..self.clone()
        }
    }

    /// Not completed and due strictly before `today`
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date.is_some_and(|due| due < today)
    }
}

impl Record for Task {
    fn id(&self) -> &str {
        &self.id
    }
}
