/// Bounded undo/redo history with save-point tracking.
///
/// Provides a `HistoryManager` that keeps full document snapshots on two
/// capped stacks and remembers which undo depth matches the last save, so
/// the editor can derive its unsaved-changes indicator from history alone.
pub mod config;
pub mod manager;
pub mod snapshot;

pub use config::HistoryConfig;
pub use manager::HistoryManager;
pub use snapshot::Snapshot;
