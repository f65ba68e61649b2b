//! Editing session for one open layout document.
//!
//! An `EditorSession` owns the live document and its history, and keeps the
//! unsaved-changes flag in step with the history's save point. Every edit
//! flows through here so the pre-edit document is recorded before it
//! changes. Grouping several gestures into one undo step is up to the
//! caller: call [`EditorSession::edit`] once per step.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use vcp_config::EditorSettings;

use crate::history::DocumentHistory;
use crate::model::{Selection, VcpDocument};

/// A single open document with its history and save state.
pub struct EditorSession {
    document: VcpDocument,
    file_path: Option<PathBuf>,
    selection: Selection,
    history: DocumentHistory,
    /// Whether the document has unsaved changes.
    dirty: bool,
    /// Set when the history was rebuilt over unsaved changes, so no undo
    /// depth can reach the saved document any more.
    save_point_lost: bool,
    settings: EditorSettings,
    last_saved_at: Option<DateTime<Local>>,
}

impl std::fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorSession")
            .field("file_path", &self.file_path)
            .field("selection", &self.selection)
            .field("history", &self.history)
            .field("dirty", &self.dirty)
            .field("save_point_lost", &self.save_point_lost)
            .finish()
    }
}

impl EditorSession {
    /// Creates a session holding a fresh, clean default document.
    ///
    /// `settings` are sanitized before use.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be built from `settings`.
    pub fn new(mut settings: EditorSettings) -> Result<Self> {
        settings.sanitize();
        let history = DocumentHistory::with_config(settings.history_config())
            .context("Failed to create document history")?;
        Ok(Self {
            document: VcpDocument::default(),
            file_path: None,
            selection: Selection::Empty,
            history,
            dirty: false,
            save_point_lost: false,
            settings,
            last_saved_at: None,
        })
    }

    pub fn document(&self) -> &VcpDocument {
        &self.document
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Read-only view of the history, for menus and diagnostics.
    pub fn history(&self) -> &DocumentHistory {
        &self.history
    }

    pub fn last_saved_at(&self) -> Option<DateTime<Local>> {
        self.last_saved_at
    }

    /// Whether the document has unsaved changes.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whether closing or replacing the document should ask the user first.
    pub fn confirm_discard_needed(&self) -> bool {
        self.dirty
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Replaces the document as one undoable step.
    pub fn update_document(&mut self, document: VcpDocument) {
        self.history.push_state(&self.document);
        self.document = document;
        self.dirty = true;
    }

    /// Replaces the document without recording history.
    ///
    /// Used for follow-up changes that belong to an already recorded step.
    pub fn update_document_untracked(&mut self, document: VcpDocument) {
        self.document = document;
        self.dirty = true;
    }

    /// Applies `f` to the document in place as one undoable step.
    pub fn edit<F>(&mut self, f: F)
    where
        F: FnOnce(&mut VcpDocument),
    {
        self.history.push_state(&self.document);
        f(&mut self.document);
        self.dirty = true;
    }

    /// Restores the previous state. Returns `false` if there was nothing to
    /// undo.
    ///
    /// The document is clean again when undo lands on the saved depth,
    /// unless the saved state dropped out of the history.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.undo(&self.document) else {
            return false;
        };
        self.document = previous;
        self.selection = Selection::Empty;
        self.dirty = self.save_point_lost || !self.history.is_at_saved_state();
        true
    }

    /// Reapplies the last undone state. Returns `false` if there was nothing
    /// to redo.
    ///
    /// Always leaves the document dirty, even when the history reports the
    /// saved depth.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.history.redo(&self.document) else {
            return false;
        };
        self.document = next;
        self.selection = Selection::Empty;
        self.dirty = true;
        true
    }

    /// Records a successful save of the current document to `path`.
    pub fn mark_saved(&mut self, path: &Path) {
        self.file_path = Some(path.to_path_buf());
        self.last_saved_at = Some(Local::now());
        self.history.mark_as_saved();
        self.dirty = false;
        self.save_point_lost = false;
        tracing::debug!("Marked {} as saved", path.display());
    }

    /// Replaces the session's document with one just opened from `path`
    /// (or a brand new one when `path` is `None`), discarding all history.
    pub fn load_document(&mut self, document: VcpDocument, path: Option<PathBuf>) {
        self.document = document;
        self.file_path = path;
        self.selection = Selection::Empty;
        self.last_saved_at = None;
        self.history.clear();
        self.history.mark_as_saved();
        self.dirty = false;
        self.save_point_lost = false;
    }

    /// Starts over with an untitled default document.
    pub fn new_document(&mut self) {
        self.load_document(VcpDocument::default(), None);
    }

    /// Applies new editor settings, sanitizing them first.
    ///
    /// A changed undo depth rebuilds the history, discarding it. Unsaved
    /// changes stay unsaved until the next save or load.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be rebuilt.
    pub fn apply_settings(&mut self, mut settings: EditorSettings) -> Result<()> {
        settings.sanitize();
        if settings.undo_history_depth != self.settings.undo_history_depth {
            self.history = DocumentHistory::with_config(settings.history_config())
                .context("Failed to rebuild document history")?;
            if self.dirty {
                self.save_point_lost = true;
            }
            tracing::info!(
                "Undo depth changed to {}, history reset",
                self.history.max_history_size()
            );
        }
        self.settings = settings;
        Ok(())
    }

    /// Window title: file name (or `Untitled`) with a dot when dirty.
    pub fn window_title(&self) -> String {
        let name = self
            .file_path
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string());
        if self.dirty {
            format!("{name} •")
        } else {
            name
        }
    }
}
