use super::enums::Category;
use serde::{Deserialize, Serialize};

/// Launcher entry for one tool.
///
/// Only these fields survive a snapshot round trip; anything else a snapshot
/// carries for a tool is ignored on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub icon_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coming_soon: Option<bool>,
}

impl Tool {
    pub fn is_coming_soon(&self) -> bool {
        self.coming_soon.unwrap_or(false)
    }
}

// (id, name, description, category, color, icon color)
const CATALOG: &[(&str, &str, &str, Category, &str, &str)] = &[
    ("pomodoro", "Pomodoro Timer", "Focus timer with breaks", Category::TimeManagement, "from-[#3D2A3D] to-[#2D1F2D]", "text-red-500"),
    ("tasks", "Task Manager", "Manage your tasks", Category::Productivity, "from-[#2A3D35] to-[#1F2D28]", "text-emerald-500"),
    ("notes", "Quick Notes", "Jot down ideas", Category::Productivity, "from-[#3D3D2A] to-[#2D2D1F]", "text-amber-500"),
    ("habits", "Habit Tracker", "Build daily habits", Category::Wellness, "from-[#2A3D35] to-[#1F2D28]", "text-green-500"),
    ("journal", "Journal", "Record your thoughts", Category::Wellness, "from-[#2D2A3D] to-[#211F2D]", "text-purple-500"),
    ("focus", "Focus Timer", "Track focused work", Category::TimeManagement, "from-[#2D2A3D] to-[#211F2D]", "text-violet-500"),
    ("planner", "Daily Planner", "Plan your day", Category::TimeManagement, "from-[#2A2D3D] to-[#1F212D]", "text-blue-500"),
    ("weather", "Weather", "Check weather conditions", Category::Utilities, "from-[#2A333D] to-[#1F262D]", "text-sky-500"),
    ("calculator", "Calculator", "Quick calculations", Category::Utilities, "from-[#2A3D3D] to-[#1F2D2D]", "text-teal-500"),
    ("stopwatch", "Stopwatch", "Track elapsed time", Category::TimeManagement, "from-[#3D2A2A] to-[#2D1F1F]", "text-orange-500"),
    ("calendar", "Calendar", "Manage your schedule", Category::TimeManagement, "from-[#2A3D35] to-[#1F2D28]", "text-emerald-500"),
    ("reminders", "Reminders", "Set important reminders", Category::Productivity, "from-[#3D3D2A] to-[#2D2D1F]", "text-yellow-500"),
    ("worldclock", "World Clock", "Track different time zones", Category::Utilities, "from-[#2A3D3D] to-[#1F2D2D]", "text-cyan-500"),
    ("breathing", "Breathing", "Guided breathing exercises", Category::Wellness, "from-[#2A3D3D] to-[#1F2D2D]", "text-teal-500"),
    ("goals", "Goals", "Set and track goals", Category::Productivity, "from-[#2A3D35] to-[#1F2D28]", "text-emerald-500"),
    ("quotes", "Daily Quotes", "Get inspired daily", Category::Wellness, "from-[#3D2A3D] to-[#2D1F2D]", "text-pink-500"),
    ("music", "Focus Music", "Ambient sounds", Category::Wellness, "from-[#2D2A3D] to-[#211F2D]", "text-purple-500"),
];

/// Every tool the launcher shows, in display order
pub fn catalog() -> Vec<Tool> {
    CATALOG
        .iter()
        .map(|(id, name, description, category, color, icon_color)| Tool {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            category: *category,
            color: color.to_string(),
            icon_color: icon_color.to_string(),
            coming_soon: None,
        })
        .collect()
}

/// Look a tool up by id
pub fn find_tool(id: &str) -> Option<Tool> {
    catalog().into_iter().find(|tool| tool.id == id)
}

/// Which tool, if any, is shown in the modal.
///
/// The wire shape is `{ isOpen, activeTool }`; in memory only the tool is
/// kept so "open" and "has a tool" cannot disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ModalRecord", into = "ModalRecord")]
pub struct ModalState {
    active_tool: Option<Tool>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModalRecord {
    #[serde(default)]
    is_open: bool,
    #[serde(default)]
    active_tool: Option<Tool>,
}

impl From<ModalRecord> for ModalState {
    fn from(record: ModalRecord) -> Self {
        Self {
            active_tool: record.active_tool.filter(|_| record.is_open),
        }
    }
}

impl From<ModalState> for ModalRecord {
    fn from(state: ModalState) -> Self {
        Self {
            is_open: state.active_tool.is_some(),
            active_tool: state.active_tool,
        }
    }
}

impl ModalState {
    /// Open `tool`, replacing whatever was open
    pub fn open(tool: Tool) -> Self {
        Self {
            active_tool: Some(tool),
        }
    }

    pub fn closed() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active_tool.is_some()
    }

    pub fn active_tool(&self) -> Option<&Tool> {
        self.active_tool.as_ref()
    }

    /// Id of the open tool, if any
    pub fn active_id(&self) -> Option<&str> {
        self.active_tool.as_ref().map(|tool| tool.id.as_str())
    }
}
