//! Dataset loading pipeline.
//!
//! The loader is the only place where dataset failures are classified:
//! read/parse errors, an empty `patches` array, and an empty store after
//! pruning all come back as [`crate::error::PatchNotesError`] values that
//! the CLI collapses into one operator-facing message. Malformed
//! individual records never fail the load; normalization is total.

mod normalize;

pub use normalize::normalize_patch;

use crate::error::{LoadErrorKind, PatchNotesError, Result};
use crate::model::{PatchStore, RawDataset, StoreOptions};
use std::path::{Path, PathBuf};

/// Sample dataset compiled into the binary, used when no path is given.
/// The analog of the original deployment's pre-embedded data object.
pub const EMBEDDED_DATASET: &str = include_str!("../../data/patches.json");

/// Where the raw dataset comes from.
#[derive(Debug, Clone)]
pub enum DatasetSource {
    /// Read from a JSON file on disk
    Path(PathBuf),
    /// Use the compiled-in sample dataset
    Embedded,
}

impl DatasetSource {
    /// Build a source from an optional CLI path argument.
    #[must_use]
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Embedded, Self::Path)
    }

    /// Human-readable origin for logs and error context.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Path(p) => p.display().to_string(),
            Self::Embedded => "<embedded dataset>".to_string(),
        }
    }
}

/// Load, normalize and store-build a dataset.
///
/// # Errors
///
/// Fails on unreadable input, invalid JSON, an empty `patches` array, or a
/// store left empty by recency pruning. All of these are dataset failures
/// in the sense of [`crate::error::PatchNotesError::is_dataset_failure`].
pub fn load_dataset(source: &DatasetSource, options: StoreOptions) -> Result<PatchStore> {
    let raw = read_raw(source)?;

    if raw.patches.is_empty() {
        return Err(PatchNotesError::load(
            format!("at {}", source.describe()),
            LoadErrorKind::EmptyDataset,
        ));
    }

    let patches: Vec<_> = raw
        .patches
        .iter()
        .enumerate()
        .map(|(index, record)| normalize_patch(record, index))
        .collect();

    let store = PatchStore::build(patches, options)?;
    tracing::info!(
        "Loaded {} patches from {} (window: {} months)",
        store.len(),
        source.describe(),
        store.window_months()
    );
    Ok(store)
}

fn read_raw(source: &DatasetSource) -> Result<RawDataset> {
    let content = match source {
        DatasetSource::Path(path) => read_file(path)?,
        DatasetSource::Embedded => EMBEDDED_DATASET.to_string(),
    };
    let raw: RawDataset = serde_json::from_str(&content)?;
    if let Some(generated) = &raw.generated_at {
        tracing::debug!("Dataset generated at {generated}");
    }
    Ok(raw)
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| PatchNotesError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_dataset_loads() {
        let mut options = StoreOptions::current();
        options.no_prune = true;
        let store =
            load_dataset(&DatasetSource::Embedded, options).expect("embedded dataset is valid");
        assert!(store.len() >= 2);
    }

    #[test]
    fn test_missing_file_is_dataset_failure() {
        let source = DatasetSource::Path(PathBuf::from("/no/such/patches.json"));
        let err = load_dataset(&source, StoreOptions::current()).expect_err("missing file");
        assert!(err.is_dataset_failure());
    }

    #[test]
    fn test_source_describe() {
        assert_eq!(DatasetSource::Embedded.describe(), "<embedded dataset>");
        assert_eq!(
            DatasetSource::from_arg(Some(PathBuf::from("x.json"))).describe(),
            "x.json"
        );
    }
}
