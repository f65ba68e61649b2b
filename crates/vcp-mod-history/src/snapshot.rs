/// Point-in-time copies of a document.
use chrono::{DateTime, Local};

/// An owned copy of a document taken at one point in history.
///
/// The copy is detached from the live document, so later in-place edits
/// made by the caller never reach a stored snapshot. Stack position is the
/// only ordering authority; the timestamp is for display and logging.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<D> {
    document: D,
    timestamp: DateTime<Local>,
}

impl<D: Clone> Snapshot<D> {
    /// Deep-copies `document` and stamps it with the current local time.
    pub fn capture(document: &D) -> Self {
        Self {
            document: document.clone(),
            timestamp: Local::now(),
        }
    }
}

impl<D> Snapshot<D> {
    /// The captured document.
    pub fn document(&self) -> &D {
        &self.document
    }

    /// When the snapshot was taken.
    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// Consumes the snapshot, returning the captured document.
    pub fn into_document(self) -> D {
        self.document
    }
}
