/// Local filesystem snapshot store.
///
/// Stands in for browser local storage: one directory holding a single
/// key file with the whole board as a JSON document. Writes are atomic
/// (write to .tmp, rename); the availability probe does a throwaway
/// write-and-delete in the slot directory.
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::types::Board;

use super::{SnapshotStore, StorageError};

/// Fixed storage key for the board slot.
pub const STORAGE_KEY: &str = "kanban-board";

const PROBE_KEY: &str = "__probe-local-storage__";

pub struct LocalStore {
    slot_dir: PathBuf,
}

impl LocalStore {
    pub fn new(slot_dir: impl Into<PathBuf>) -> Self {
        Self {
            slot_dir: slot_dir.into(),
        }
    }

    fn key_path(&self) -> PathBuf {
        self.slot_dir.join(format!("{}.json", STORAGE_KEY))
    }

    /// Atomic write: write to .tmp, then rename over the key file.
    fn atomic_write(path: &Path, content: &str) -> Result<(), std::io::Error> {
        let tmp_path = path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

impl SnapshotStore for LocalStore {
    fn is_available(&self) -> bool {
        if fs::create_dir_all(&self.slot_dir).is_err() {
            return false;
        }
        let probe = self.slot_dir.join(PROBE_KEY);
        match fs::write(&probe, PROBE_KEY) {
            Ok(()) => {
                let _ = fs::remove_file(&probe);
                true
            }
            Err(_) => false,
        }
    }

    fn load(&self) -> Result<Option<Board>, StorageError> {
        let content = match fs::read_to_string(self.key_path()) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let board: Board = serde_json::from_str(&content)?;
        Ok(Some(board))
    }

    fn save(&self, board: &Board) -> Result<(), StorageError> {
        fs::create_dir_all(&self.slot_dir)?;
        let json = serde_json::to_string(board)?;
        Self::atomic_write(&self.key_path(), &json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_absent_slot() {
        let dir = tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = LocalStore::new(dir.path());

        let board = Board::default_board();
        store.save(&board).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, board);
    }

    #[test]
    fn test_save_leaves_no_tmp_file() {
        let dir = tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        store.save(&Board::default_board()).unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec![format!("{}.json", STORAGE_KEY)]);
    }

    #[test]
    fn test_load_malformed_slot() {
        let dir = tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        fs::write(
            dir.path().join(format!("{}.json", STORAGE_KEY)),
            r#"{"title": "wrong shape"}"#,
        )
        .unwrap();

        let result = store.load();
        assert!(matches!(result, Err(StorageError::Malformed(_))));
    }

    #[test]
    fn test_availability_probe() {
        let dir = tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        assert!(store.is_available());

        // The probe file must not linger in the slot.
        let leftovers = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn test_probe_creates_missing_slot_dir() {
        let dir = tempdir().unwrap();
        let store = LocalStore::new(dir.path().join("nested").join("slot"));
        assert!(store.is_available());
    }
}
