/// In-memory snapshot store.
///
/// Holds the serialized board in a mutex-guarded slot. Used by tests and as
/// the degraded session store when local storage is unavailable -- mutations
/// still apply in memory, they simply are not retained across restarts.
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::types::Board;

use super::{SnapshotStore, StorageError};

pub struct MemoryStore {
    slot: Mutex<Option<String>>,
    available: AtomicBool,
    save_count: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
            available: AtomicBool::new(true),
            save_count: AtomicUsize::new(0),
        }
    }

    /// Pre-fill the slot with a serialized board, as if a previous session
    /// had saved it.
    pub fn preload(&self, board: &Board) -> Result<(), StorageError> {
        let json = serde_json::to_string(board)?;
        *self.slot.lock().unwrap() = Some(json);
        Ok(())
    }

    /// Pre-fill the slot with raw text (possibly not board-shaped).
    pub fn preload_raw(&self, content: &str) {
        *self.slot.lock().unwrap() = Some(content.to_string());
    }

    /// Flip availability, simulating storage going away mid-session.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::Relaxed);
    }

    /// Number of snapshot writes accepted so far.
    pub fn save_count(&self) -> usize {
        self.save_count.load(Ordering::Relaxed)
    }

    /// Raw slot content, if any.
    pub fn snapshot(&self) -> Option<String> {
        self.slot.lock().unwrap().clone()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotStore for MemoryStore {
    fn is_available(&self) -> bool {
        self.available.load(Ordering::Relaxed)
    }

    fn load(&self) -> Result<Option<Board>, StorageError> {
        match self.slot.lock().unwrap().as_deref() {
            Some(content) => Ok(Some(serde_json::from_str(content)?)),
            None => Ok(None),
        }
    }

    fn save(&self, board: &Board) -> Result<(), StorageError> {
        let json = serde_json::to_string(board)?;
        *self.slot.lock().unwrap() = Some(json);
        self.save_count.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_then_round_trip() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());

        let board = Board::default_board();
        store.save(&board).unwrap();
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.load().unwrap().unwrap(), board);
    }

    #[test]
    fn test_malformed_preload_is_load_error() {
        let store = MemoryStore::new();
        store.preload_raw("not json");
        assert!(matches!(store.load(), Err(StorageError::Malformed(_))));
    }
}
