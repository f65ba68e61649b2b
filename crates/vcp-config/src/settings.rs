/// Editor settings: parse, sanitize, and derive the history config.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use vcp_mod_history::config::{HistoryConfig, MAX_HISTORY_DEPTH, MIN_HISTORY_DEPTH};

/// Editor section of the application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Snapshots kept for undo (and redo). Clamped to 5..=50.
    pub undo_history_depth: usize,
    /// Minutes between auto-saves. 0 = off.
    pub auto_save_interval_minutes: u32,
    pub confirm_before_delete: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            undo_history_depth: MIN_HISTORY_DEPTH,
            auto_save_interval_minutes: 0,
            confirm_before_delete: false,
        }
    }
}

impl EditorSettings {
    /// Returns the default settings path: `<config dir>/vcp-editor/settings.json`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("vcp-editor").join("settings.json"))
            .unwrap_or_else(|| PathBuf::from("settings.json"))
    }

    /// Parses settings from JSON and sanitizes them.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not a valid settings object.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut settings: Self =
            serde_json::from_str(json).context("Failed to parse editor settings")?;
        settings.sanitize();
        Ok(settings)
    }

    /// Loads settings from `path`.
    /// Returns defaults on any error (missing file, parse error, etc.).
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(settings) => return settings,
                Err(e) => {
                    tracing::warn!("Failed to load settings at {}: {e:#}", path.display());
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read settings at {}: {e}", path.display());
            }
        }
        Self::default()
    }

    /// Clamps values to valid ranges.
    pub fn sanitize(&mut self) {
        self.undo_history_depth = self
            .undo_history_depth
            .clamp(MIN_HISTORY_DEPTH, MAX_HISTORY_DEPTH);
    }

    /// History config matching `undo_history_depth`.
    pub fn history_config(&self) -> HistoryConfig {
        HistoryConfig::from_depth(self.undo_history_depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = EditorSettings::default();
        assert_eq!(settings.undo_history_depth, 5);
        assert_eq!(settings.auto_save_interval_minutes, 0);
        assert!(!settings.confirm_before_delete);
    }

    #[test]
    fn test_sanitize_clamps_depth() {
        let mut settings = EditorSettings {
            undo_history_depth: 1,
            ..Default::default()
        };
        settings.sanitize();
        assert_eq!(settings.undo_history_depth, 5);

        settings.undo_history_depth = 500;
        settings.sanitize();
        assert_eq!(settings.undo_history_depth, 50);

        settings.undo_history_depth = 30;
        settings.sanitize();
        assert_eq!(settings.undo_history_depth, 30);
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let settings = EditorSettings::from_json(r#"{"undo_history_depth": 12}"#).unwrap();
        assert_eq!(settings.undo_history_depth, 12);
        assert_eq!(settings.auto_save_interval_minutes, 0);
        assert!(!settings.confirm_before_delete);
    }

    #[test]
    fn test_from_json_sanitizes() {
        let settings = EditorSettings::from_json(r#"{"undo_history_depth": 0}"#).unwrap();
        assert_eq!(settings.undo_history_depth, 5);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = EditorSettings::from_json("{ nope").unwrap_err();
        assert!(err.to_string().contains("editor settings"));
    }

    #[test]
    fn test_history_config_follows_depth() {
        let settings = EditorSettings {
            undo_history_depth: 20,
            ..Default::default()
        };
        assert_eq!(settings.history_config().max_history_size, 20);
    }

    #[test]
    fn test_default_path_file_name() {
        let path = EditorSettings::default_path();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("settings.json"));
    }

    #[test]
    fn test_serde_round_trip() {
        let settings = EditorSettings {
            undo_history_depth: 42,
            auto_save_interval_minutes: 10,
            confirm_before_delete: true,
        };
        let json = serde_json::to_string_pretty(&settings).unwrap();
        let parsed = EditorSettings::from_json(&json).unwrap();
        assert_eq!(parsed, settings);
    }
}
