//! Layout document model and the editing session that drives its history.

pub mod history;
pub mod model;
pub mod session;

pub use history::DocumentHistory;
pub use model::{Border, Button, Image, OnClick, OnHover, PlcWord, Selection, VcpDocument};
pub use session::EditorSession;
