/// Board controller: owns the in-memory board, applies UI-event-shaped
/// mutations, and writes a full-board snapshot to the store after every one.
///
/// All guard conditions (empty names, whitespace drafts, stale indices, no
/// open selection, unavailable storage) degrade to silent no-ops; nothing
/// here surfaces a hard failure after construction.
use crate::storage::{SnapshotStore, StorageError};
use crate::types::{Board, Column, Selection};

/// Startup notice shown once when the availability probe fails.
pub const STORAGE_UNAVAILABLE_NOTICE: &str =
    "Local storage is not available. Changes will not be saved.";

pub struct BoardController {
    board: Board,
    /// Pending new-task text per column, index-aligned with `board.columns`.
    drafts: Vec<String>,
    selection: Option<Selection>,
    edit_draft: String,
    store: Box<dyn SnapshotStore>,
    storage_notice: Option<String>,
}

impl BoardController {
    /// Load the stored board, falling back to the default seed when the slot
    /// is absent or storage is unavailable. A malformed snapshot is fatal to
    /// load and propagates.
    pub fn new(store: Box<dyn SnapshotStore>) -> Result<Self, StorageError> {
        let mut storage_notice = None;
        let board = if store.is_available() {
            match store.load()? {
                Some(board) => board,
                None => Board::default_board(),
            }
        } else {
            log::warn!("[corkboard.controller] storage unavailable at startup");
            storage_notice = Some(STORAGE_UNAVAILABLE_NOTICE.to_string());
            Board::default_board()
        };

        let drafts = vec![String::new(); board.columns.len()];
        Ok(Self {
            board,
            drafts,
            selection: None,
            edit_draft: String::new(),
            store,
            storage_notice,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn drafts(&self) -> &[String] {
        &self.drafts
    }

    pub fn draft(&self, column: usize) -> Option<&str> {
        self.drafts.get(column).map(String::as_str)
    }

    pub fn edit_draft(&self) -> &str {
        &self.edit_draft
    }

    /// One-shot startup warning for the UI, if storage was unavailable.
    pub fn take_notice(&mut self) -> Option<String> {
        self.storage_notice.take()
    }

    /// Move a task within one column. Relative order of all other tasks is
    /// preserved. Out-of-range `from` is a no-op; `to` is clamped.
    pub fn reorder(&mut self, column: usize, from: usize, to: usize) {
        let Some(col) = self.board.columns.get_mut(column) else {
            return;
        };
        if from >= col.tasks.len() {
            return;
        }
        let task = col.tasks.remove(from);
        let to = to.min(col.tasks.len());
        col.tasks.insert(to, task);
        self.close_selection();
        self.persist();
    }

    /// Move the task at `from` in `src` to position `to` in `dst`. Exactly
    /// one task changes column; everything else keeps its relative order.
    pub fn transfer(&mut self, src: usize, dst: usize, from: usize, to: usize) {
        if src == dst {
            self.reorder(src, from, to);
            return;
        }
        if dst >= self.board.columns.len() {
            return;
        }
        let Some(src_col) = self.board.columns.get_mut(src) else {
            return;
        };
        if from >= src_col.tasks.len() {
            return;
        }
        let task = src_col.tasks.remove(from);
        let dst_col = &mut self.board.columns[dst];
        let to = to.min(dst_col.tasks.len());
        dst_col.tasks.insert(to, task);
        self.close_selection();
        self.persist();
    }

    /// Append a column. Empty-after-trim (or cancelled prompt) is a no-op.
    pub fn add_column(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        self.board.columns.push(Column::new(name, Vec::new()));
        self.drafts.push(String::new());
        self.persist();
    }

    /// Remove the column and its draft slot; later columns shift down.
    /// No confirmation, irreversible within the session.
    pub fn delete_column(&mut self, index: usize) {
        if index >= self.board.columns.len() {
            return;
        }
        self.board.columns.remove(index);
        self.drafts.remove(index);
        self.close_selection();
        self.persist();
    }

    /// Update the form-bound new-task text for a column.
    pub fn set_draft(&mut self, column: usize, text: &str) {
        if let Some(slot) = self.drafts.get_mut(column) {
            *slot = text.to_string();
        }
    }

    /// Append the column's draft as a task if it is non-empty after trim,
    /// then clear the draft. Whitespace-only drafts are left untouched.
    pub fn add_task(&mut self, column: usize) {
        let Some(draft) = self.drafts.get(column) else {
            return;
        };
        let task = draft.trim();
        if task.is_empty() {
            return;
        }
        let task = task.to_string();
        self.board.columns[column].tasks.push(task);
        self.drafts[column].clear();
        self.persist();
    }

    /// Open the edit/delete flow on a task: record the coordinate and copy
    /// the current text into the edit draft.
    pub fn select_task(&mut self, column: usize, task: usize) {
        let Some(text) = self
            .board
            .columns
            .get(column)
            .and_then(|c| c.tasks.get(task))
        else {
            return;
        };
        self.edit_draft = text.clone();
        self.selection = Some(Selection { column, task });
    }

    /// Update the edit dialog's text binding.
    pub fn set_edit_draft(&mut self, text: &str) {
        self.edit_draft = text.to_string();
    }

    /// Overwrite the selected task with the edit draft verbatim. Unlike task
    /// creation there is no trim and no emptiness guard -- an edit may save
    /// whitespace or empty text. Closes the selection.
    pub fn save_edited_task(&mut self) {
        let Some(sel) = self.selection else {
            return;
        };
        if let Some(slot) = self
            .board
            .columns
            .get_mut(sel.column)
            .and_then(|c| c.tasks.get_mut(sel.task))
        {
            *slot = self.edit_draft.clone();
            self.persist();
        }
        self.close_selection();
    }

    /// Remove the selected task from its column. Closes the selection.
    pub fn delete_selected_task(&mut self) {
        let Some(sel) = self.selection else {
            return;
        };
        if let Some(col) = self.board.columns.get_mut(sel.column) {
            if sel.task < col.tasks.len() {
                col.tasks.remove(sel.task);
                self.persist();
            }
        }
        self.close_selection();
    }

    /// Clear the selection and edit draft without touching the board.
    pub fn close_selection(&mut self) {
        self.selection = None;
        self.edit_draft.clear();
    }

    /// Snapshot-on-write: serialize the whole board to the store. The
    /// availability probe runs fresh on every call; when it fails the write
    /// is skipped silently. Write errors are logged and swallowed -- a single
    /// best-effort attempt, no retry.
    fn persist(&self) {
        if !self.store.is_available() {
            log::debug!("[corkboard.controller] storage unavailable, snapshot skipped");
            return;
        }
        if let Err(e) = self.store.save(&self.board) {
            log::warn!("[corkboard.controller] failed to persist board snapshot: {}", e);
        }
    }
}
