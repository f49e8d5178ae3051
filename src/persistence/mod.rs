pub mod backend;
pub mod config;
pub mod files;

pub use backend::{Backend, FileBackend, MemoryBackend};
pub use config::{load_config, save_config, HubConfig};
pub use files::{atomic_write, config_file, ensure_hub_dir, init_local_hub, logs_dir};
