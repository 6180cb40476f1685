//! Runtime configuration and persisted preferences.

use crate::model::DEFAULT_WINDOW_MONTHS;
use crate::reports::ReportFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the `view` command.
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// Dataset file; `None` means the embedded sample
    pub dataset_path: Option<PathBuf>,
    /// Output format selection
    pub format: ReportFormat,
    /// Recency window in months
    pub window_months: u32,
    /// Disable recency pruning
    pub no_prune: bool,
    /// Version string to select initially instead of the newest patch
    pub select_version: Option<String>,
    /// Disable colored non-TUI output
    pub no_color: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            dataset_path: None,
            format: ReportFormat::Auto,
            window_months: DEFAULT_WINDOW_MONTHS,
            no_prune: false,
            select_version: None,
            no_color: false,
            quiet: false,
        }
    }
}

/// User preferences persisted across TUI sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiPreferences {
    /// Theme name: "dark" or "light"
    pub theme: String,
}

impl Default for TuiPreferences {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
        }
    }
}

impl TuiPreferences {
    /// Get the path to the preferences file.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("patch-notes").join("preferences.json"))
    }

    /// Load preferences from disk, or return defaults if not found.
    #[must_use]
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save preferences to disk.
    pub fn save(&self) -> std::io::Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let json = serde_json::to_string_pretty(self)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            std::fs::write(path, json)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferences_default_theme() {
        assert_eq!(TuiPreferences::default().theme, "dark");
    }

    #[test]
    fn test_preferences_roundtrip_json() {
        let prefs = TuiPreferences {
            theme: "light".to_string(),
        };
        let json = serde_json::to_string(&prefs).expect("serializes");
        let back: TuiPreferences = serde_json::from_str(&json).expect("parses");
        assert_eq!(back.theme, "light");
    }

    #[test]
    fn test_view_config_defaults() {
        let config = ViewConfig::default();
        assert_eq!(config.window_months, DEFAULT_WINDOW_MONTHS);
        assert!(config.dataset_path.is_none());
        assert!(!config.no_prune);
    }
}
