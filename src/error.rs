//! Unified error types for patch-notes.
//!
//! Dataset problems are classified into a small hierarchy so the CLI can
//! collapse them into a single operator-facing message at the loader
//! boundary while keeping the underlying cause available for logging.

use std::path::PathBuf;
use thiserror::Error;

/// The one message shown to operators when the dataset cannot be loaded,
/// whatever the underlying cause. Individual malformed patches never
/// trigger it; only a dataset that yields no usable patches does.
pub const REGENERATE_HINT: &str =
    "Patch data is unavailable. Regenerate data/patches.json with the update pipeline and retry.";

/// Main error type for patch-notes operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PatchNotesError {
    /// Errors while loading or validating the dataset
    #[error("Failed to load patch dataset: {context}")]
    Load {
        context: String,
        #[source]
        source: LoadErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific dataset load error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoadErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Dataset has no patches")]
    EmptyDataset,

    #[error("No patches remain inside the {window_months}-month recency window")]
    EmptyAfterPrune { window_months: u32 },

    #[error("Unknown patch id: {0}")]
    UnknownPatch(String),
}

/// Convenient Result type for patch-notes operations
pub type Result<T> = std::result::Result<T, PatchNotesError>;

impl PatchNotesError {
    /// Create a load error with context
    pub fn load(context: impl Into<String>, source: LoadErrorKind) -> Self {
        Self::Load {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether this error should be collapsed into [`REGENERATE_HINT`]
    /// when shown to an operator.
    #[must_use]
    pub const fn is_dataset_failure(&self) -> bool {
        matches!(self, Self::Load { .. } | Self::Io { .. })
    }
}

impl From<std::io::Error> for PatchNotesError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for PatchNotesError {
    fn from(err: serde_json::Error) -> Self {
        Self::load(
            "JSON deserialization",
            LoadErrorKind::InvalidJson(err.to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PatchNotesError::load("at data/patches.json", LoadErrorKind::EmptyDataset);
        assert!(err.to_string().contains("data/patches.json"));

        let err = PatchNotesError::load(
            "pruning",
            LoadErrorKind::EmptyAfterPrune { window_months: 3 },
        );
        assert!(format!("{err:?}").contains("window_months: 3"));
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = PatchNotesError::io("/path/to/patches.json", io_err);
        assert!(err.to_string().contains("/path/to/patches.json"));
        assert!(err.is_dataset_failure());
    }

    #[test]
    fn test_config_error_is_not_dataset_failure() {
        assert!(!PatchNotesError::config("bad flag").is_dataset_failure());
    }
}
