/// Core undo/redo manager with save-point tracking.
///
/// Both stacks hold full document snapshots and are capped at the configured
/// size; the oldest snapshot is dropped on overflow. A saved index records
/// which undo depth matched the document at the last save, and the clean or
/// dirty state is derived by comparing it with the current undo depth.
use std::collections::VecDeque;

use anyhow::{Context, Result};

use crate::config::HistoryConfig;
use crate::snapshot::Snapshot;

/// Manages undo/redo history for a single open document.
///
/// A manager lives for one document session. Opening or creating another
/// document should go through [`HistoryManager::clear`] or a fresh manager.
pub struct HistoryManager<D> {
    /// Undo stack, oldest first; the back is the top.
    undo_stack: VecDeque<Snapshot<D>>,
    /// Redo stack, oldest first; the back is the most recently undone state.
    redo_stack: VecDeque<Snapshot<D>>,
    /// Undo depth minus one at the last save. `None` means the empty history
    /// is the saved baseline.
    saved_index: Option<usize>,
    /// Configuration parameters.
    config: HistoryConfig,
}

impl<D> std::fmt::Debug for HistoryManager<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryManager")
            .field("undo_len", &self.undo_stack.len())
            .field("redo_len", &self.redo_stack.len())
            .field("saved_index", &self.saved_index)
            .field("max_history_size", &self.config.max_history_size)
            .finish()
    }
}

impl<D: Clone> Default for HistoryManager<D> {
    fn default() -> Self {
        Self::from_valid_config(HistoryConfig::default())
    }
}

impl<D: Clone> HistoryManager<D> {
    /// Creates an empty manager that keeps at most `max_history_size`
    /// snapshots per stack.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_history_size` is zero.
    pub fn new(max_history_size: usize) -> Result<Self> {
        Self::with_config(HistoryConfig { max_history_size })
    }

    /// Creates an empty manager from a config.
    ///
    /// # Errors
    ///
    /// Returns an error if the config fails validation.
    pub fn with_config(config: HistoryConfig) -> Result<Self> {
        config
            .validate()
            .context("Failed to create history manager")?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: HistoryConfig) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            saved_index: None,
            config,
        }
    }

    /// Records the document as it was before an edit.
    ///
    /// Call this immediately before mutating `document`. Any redo history is
    /// discarded because the edit starts a new branch.
    pub fn push_state(&mut self, document: &D) {
        self.push_undo(Snapshot::capture(document));
        if !self.redo_stack.is_empty() {
            tracing::debug!("Discarding {} redo snapshot(s)", self.redo_stack.len());
            self.redo_stack.clear();
        }
    }

    /// Steps back one state.
    ///
    /// `current` is saved on the redo stack and the most recent undo snapshot
    /// is returned. Returns `None` and changes nothing if there is nothing to
    /// undo.
    pub fn undo(&mut self, current: &D) -> Option<D> {
        let previous = self.undo_stack.pop_back()?;
        self.redo_stack.push_back(Snapshot::capture(current));
        if self.redo_stack.len() > self.config.max_history_size {
            self.redo_stack.pop_front();
        }
        Some(previous.into_document())
    }

    /// Steps forward one state.
    ///
    /// `current` is saved on the undo stack (with the same eviction rule as
    /// [`push_state`](Self::push_state)) and the most recently undone state
    /// is returned. Returns `None` and changes nothing if there is nothing to
    /// redo.
    pub fn redo(&mut self, current: &D) -> Option<D> {
        let next = self.redo_stack.pop_back()?;
        self.push_undo(Snapshot::capture(current));
        Some(next.into_document())
    }

    /// Pushes onto the undo stack, evicting the oldest entry on overflow.
    fn push_undo(&mut self, snapshot: Snapshot<D>) {
        self.undo_stack.push_back(snapshot);
        if self.undo_stack.len() > self.config.max_history_size {
            self.undo_stack.pop_front();
            // An index of 0 is left as is when its own entry is evicted.
            if let Some(saved) = self.saved_index.as_mut() {
                if *saved > 0 {
                    *saved -= 1;
                }
            }
            tracing::debug!(
                "Evicted oldest undo snapshot, saved index now {:?}",
                self.saved_index
            );
        }
    }
}

impl<D> HistoryManager<D> {
    /// Whether undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Whether redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Drops all history and resets the save point to the empty baseline.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.saved_index = None;
    }

    /// Marks the current undo depth as the saved state.
    ///
    /// Call once after every successful save. Neither stack is touched.
    pub fn mark_as_saved(&mut self) {
        self.saved_index = self.undo_stack.len().checked_sub(1);
    }

    /// Whether the current undo depth matches the last save.
    pub fn is_at_saved_state(&self) -> bool {
        match self.saved_index {
            None => self.undo_stack.is_empty(),
            Some(index) => self.undo_stack.len() == index + 1,
        }
    }

    /// Number of snapshots on the undo stack.
    pub fn undo_stack_size(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of snapshots on the redo stack.
    pub fn redo_stack_size(&self) -> usize {
        self.redo_stack.len()
    }

    /// Cap applied to each stack.
    pub fn max_history_size(&self) -> usize {
        self.config.max_history_size
    }

    /// Saved anchor, `None` when the empty history is the saved baseline.
    pub fn saved_index(&self) -> Option<usize> {
        self.saved_index
    }

    /// The snapshot the next undo would return.
    pub fn latest_snapshot(&self) -> Option<&Snapshot<D>> {
        self.undo_stack.back()
    }
}
