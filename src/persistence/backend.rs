//! Durable key-value storage behind the store.
//!
//! The store writes one serialized snapshot under one fixed key. A backend
//! only has to hand those bytes back on the next start.

use super::files::{atomic_write, backup_file, read_optional};
use anyhow::{bail, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub trait Backend {
    /// Stored value for `key`, `None` when nothing was ever saved
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn save(&mut self, key: &str, value: &str) -> Result<()>;

    /// Set an unreadable value aside before it gets overwritten.
    /// Backends with nowhere to put it do nothing.
    fn quarantine(&mut self, _key: &str) -> Result<()> {
        Ok(())
    }
}

/// One `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Backend for FileBackend {
    fn load(&self, key: &str) -> Result<Option<String>> {
        read_optional(self.path_for(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        atomic_write(self.path_for(key), value)
    }

    fn quarantine(&mut self, key: &str) -> Result<()> {
        let backup = backup_file(self.path_for(key), "corrupt")?;
        log::warn!("event=snapshot_quarantined path={}", backup.display());
        Ok(())
    }
}

/// In-memory backend. Writes can be made to fail to exercise the store's
/// degraded path.
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    values: HashMap<String, String>,
    fail_writes: bool,
    writes: usize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that already holds `value` under `key`
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut backend = Self::default();
        backend.values.insert(key.to_string(), value.to_string());
        backend
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of successful writes so far
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl Backend for MemoryBackend {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            bail!("write to `{}` refused", key);
        }
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }

    fn quarantine(&mut self, key: &str) -> Result<()> {
        if let Some(value) = self.values.get(key).cloned() {
            self.values.insert(format!("{}.corrupt", key), value);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_backend_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(temp_dir.path());

        assert!(backend.load("slot").unwrap().is_none());
        backend.save("slot", "{\"x\":1}").unwrap();
        assert_eq!(backend.load("slot").unwrap().as_deref(), Some("{\"x\":1}"));
        assert!(backend.path_for("slot").ends_with("slot.json"));
    }

    #[test]
    fn test_file_backend_quarantine_keeps_original() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(temp_dir.path());
        backend.save("slot", "garbage").unwrap();

        backend.quarantine("slot").unwrap();

        let copies = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains("corrupt"))
            .count();
        assert_eq!(copies, 1);
        assert_eq!(backend.load("slot").unwrap().as_deref(), Some("garbage"));
    }

    #[test]
    fn test_file_backend_save_fails_without_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(temp_dir.path().join("missing"));
        assert!(backend.save("slot", "x").is_err());
    }

    #[test]
    fn test_memory_backend_failing_writes() {
        let mut backend = MemoryBackend::new();
        backend.set_fail_writes(true);
        assert!(backend.save("k", "v").is_err());
        assert_eq!(backend.writes(), 0);
        assert!(backend.get("k").is_none());

        backend.set_fail_writes(false);
        backend.save("k", "v").unwrap();
        assert_eq!(backend.writes(), 1);
        assert_eq!(backend.get("k"), Some("v"));
    }
}
