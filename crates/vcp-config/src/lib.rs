pub mod settings;

pub use settings::EditorSettings;
