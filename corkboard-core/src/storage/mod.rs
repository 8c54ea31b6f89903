pub mod local;
pub mod memory;

use std::sync::Arc;

use crate::types::Board;

/// Abstract snapshot store for the single board slot.
/// Implementations: LocalStore (filesystem), MemoryStore (tests, degraded mode).
pub trait SnapshotStore: Send + Sync {
    /// Fresh availability probe. Checked before every write, never cached;
    /// availability can change mid-session (quota, permissions).
    fn is_available(&self) -> bool;

    /// Load the stored board, if any. An absent slot is `Ok(None)`; a slot
    /// that does not deserialize to the board shape is an error.
    fn load(&self) -> Result<Option<Board>, StorageError>;

    /// Write a full-board snapshot. Single best-effort attempt, no retry.
    fn save(&self, board: &Board) -> Result<(), StorageError>;
}

impl<S: SnapshotStore + ?Sized> SnapshotStore for Arc<S> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn load(&self) -> Result<Option<Board>, StorageError> {
        (**self).load()
    }

    fn save(&self, board: &Board) -> Result<(), StorageError> {
        (**self).save(board)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored board is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}
