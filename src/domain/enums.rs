use serde::{Deserialize, Serialize};

/// Phase of the pomodoro cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Work,
    Break,
}

impl Phase {
    /// Label shown under the countdown
    pub fn label(&self) -> &'static str {
        match self {
            Self::Work => "Focus Time",
            Self::Break => "Break Time",
        }
    }
}

/// Mood attached to a journal entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    Good,
    Neutral,
    Bad,
}

impl Mood {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Neutral => "Neutral",
            Self::Bad => "Bad",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Good => "🙂",
            Self::Neutral => "😐",
            Self::Bad => "🙁",
        }
    }

    /// Cycle through "no mood" and every label, in picker order
    pub fn cycle(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(Self::Good),
            Some(Self::Good) => Some(Self::Neutral),
            Some(Self::Neutral) => Some(Self::Bad),
            Some(Self::Bad) => None,
        }
    }
}

/// Launcher category of a tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Time Management")]
    TimeManagement,
    Productivity,
    Wellness,
    Utilities,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Self::TimeManagement => "Time Management",
            Self::Productivity => "Productivity",
            Self::Wellness => "Wellness",
            Self::Utilities => "Utilities",
        }
    }
}

/// UI mode for the terminal host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Browsing the tool grid
    Launcher,
    /// A tool modal is open and receives keys
    Tool,
    /// Single-line input prompt on top of a tool
    Input,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_label() {
        assert_eq!(Phase::Work.label(), "Focus Time");
        assert_eq!(Phase::Break.label(), "Break Time");
    }

    #[test]
    fn test_mood_cycle_returns_to_none() {
        let mut mood = None;
        for _ in 0..4 {
            mood = Mood::cycle(mood);
        }
        assert_eq!(mood, None);
    }

    #[test]
    fn test_mood_serializes_as_label() {
        let json = serde_json::to_string(&Mood::Neutral).unwrap();
        assert_eq!(json, "\"Neutral\"");
    }

    #[test]
    fn test_category_serializes_with_spaces() {
        let json = serde_json::to_string(&Category::TimeManagement).unwrap();
        assert_eq!(json, "\"Time Management\"");
        let parsed: Category = serde_json::from_str("\"Utilities\"").unwrap();
        assert_eq!(parsed, Category::Utilities);
    }
}
