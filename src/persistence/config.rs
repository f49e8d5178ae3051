use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings stored in config.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubConfig {
    /// trace, debug, info, warn, error or off
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// How long the UI waits for a key before redrawing (milliseconds)
    #[serde(default = "default_ui_tick_ms")]
    pub ui_tick_ms: u64,

    /// Desktop notification when a pomodoro phase ends
    #[serde(default = "default_notifications")]
    pub notifications: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_ui_tick_ms() -> u64 {
    crate::ticker::DEFAULT_TICK_MS
}

fn default_notifications() -> bool {
    true
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            ui_tick_ms: default_ui_tick_ms(),
            notifications: default_notifications(),
        }
    }
}

/// Load config from config.json; a missing file yields defaults
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<HubConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(HubConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config: HubConfig = serde_json::from_str(&content)
        .with_context(|| format!("Invalid config: {}", path.display()))?;
    Ok(config)
}

/// Save config to config.json
pub fn save_config<P: AsRef<Path>>(path: P, config: &HubConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    crate::persistence::atomic_write(path, &json)?;
    Ok(())
}
