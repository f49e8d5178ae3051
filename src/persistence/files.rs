use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Name of the per-project / per-user data directory
pub const HUB_DIR_NAME: &str = ".hub";

/// Get the hub directory - checks for local .hub first, then falls back to global ~/.hub
pub fn get_hub_dir() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;

    if let Some(local_dir) = find_local_hub(&current_dir) {
        return Ok(local_dir);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(HUB_DIR_NAME))
}

/// Find local .hub directory by walking up the directory tree
fn find_local_hub(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let hub_dir = current.join(HUB_DIR_NAME);
        if hub_dir.is_dir() {
            return Some(hub_dir);
        }

        current = current.parent()?;
    }
}

/// Ensure the hub directory exists
pub fn ensure_hub_dir() -> Result<PathBuf> {
    let dir = get_hub_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Initialize a local .hub directory in the current directory
pub fn init_local_hub() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let hub_dir = current_dir.join(HUB_DIR_NAME);

    if hub_dir.exists() {
        anyhow::bail!("Hub directory already exists: {}", hub_dir.display());
    }

    fs::create_dir_all(&hub_dir)
        .with_context(|| format!("Failed to create directory: {}", hub_dir.display()))?;

    Ok(hub_dir)
}

/// Path to config.json inside `dir`
pub fn config_file(dir: &Path) -> PathBuf {
    dir.join("config.json")
}

/// Directory for rotating log files inside `dir`
pub fn logs_dir(dir: &Path) -> PathBuf {
    dir.join("logs")
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;

    let mut temp_file = NamedTempFile::new_in(dir)
        .context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

/// Read file content, `None` if the file doesn't exist
pub fn read_optional<P: AsRef<Path>>(path: P) -> Result<Option<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    fs::read_to_string(path)
        .map(Some)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Copy a file aside with a timestamp and a label, e.g. `name.corrupt.20240101_120000.json`
pub fn backup_file<P: AsRef<Path>>(path: P, label: &str) -> Result<PathBuf> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(path.to_path_buf());
    }

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let backup_path = path.with_extension(format!("{}.{}.json", label, timestamp));

    fs::copy(path, &backup_path)
        .with_context(|| format!("Failed to backup file: {}", path.display()))?;

    Ok(backup_path)
}
