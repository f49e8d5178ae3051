use thiserror::Error;

/// A mutation was applied in memory but could not be written out.
///
/// Never fatal: the in-memory snapshot stays authoritative and the next
/// successful write catches storage up.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to save snapshot: {0:#}")]
    Backend(anyhow::Error),
}

/// Stored bytes that cannot be installed as a snapshot
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported snapshot version {0}")]
    Version(u32),
}
