//! Snapshot persistence errors.
//!
//! These errors never propagate out of [`crate::CartStore`] mutations; the
//! store recovers locally and reports durability through
//! [`crate::SaveOutcome`]. They are public so that direct users of a
//! [`crate::SnapshotStore`] adapter (e.g., the CLI) can inspect failures.

use thiserror::Error;

/// Errors that can occur reading or writing a cart snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The underlying storage could not be read or written.
    #[error("snapshot storage error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot exists but does not parse into valid cart lines.
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}
