use super::collection::{new_id, non_empty, Record, ValidationError};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Format of the keys in [`HabitTrack::dates`]
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Calendar day as used for habit keys ("2024-01-31")
pub fn day_key(date: NaiveDate) -> String {
    date.format(DAY_KEY_FORMAT).to_string()
}

/// A habit and the days it was (or was not) done.
///
/// A day with no entry reads the same as an explicit `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitTrack {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub dates: IndexMap<String, bool>,
    pub created_at: DateTime<Utc>,
}

impl HabitTrack {
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            id: new_id(),
            name: non_empty("habit name", name)?,
            dates: IndexMap::new(),
            created_at: Utc::now(),
        })
    }

    /// Flip one day. A day never touched before becomes `true`.
    pub fn toggled_day(&self, date: NaiveDate) -> Self {
        let key = day_key(date);
        let mut dates = self.dates.clone();
        let done = dates.get(&key).copied().unwrap_or(false);
        dates.insert(key, !done);
        Self {
            dates,
            ..self.clone()
        }
    }

    pub fn is_done(&self, date: NaiveDate) -> bool {
        self.dates.get(&day_key(date)).copied().unwrap_or(false)
    }

    /// Consecutive done days ending at `date` (0 if `date` itself is not done)
    pub fn streak_ending(&self, date: NaiveDate) -> u32 {
        let mut streak = 0;
        let mut day = date;
        while self.is_done(day) {
            streak += 1;
            day -= Duration::days(1);
        }
        streak
    }
}

impl Record for HabitTrack {
    fn id(&self) -> &str {
        &self.id
    }
}
