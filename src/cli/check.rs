//! Check command handler.
//!
//! Validates a dataset without opening the UI, for CI and for the update
//! pipeline to verify what it just wrote.

use super::exit_codes;
use crate::config::ViewConfig;
use crate::error::REGENERATE_HINT;
use crate::loader::{load_dataset, DatasetSource};
use crate::model::StoreOptions;
use anyhow::Result;

/// Run the check command.
#[allow(clippy::needless_pass_by_value)]
pub fn run_check(config: ViewConfig) -> Result<i32> {
    let source = DatasetSource::from_arg(config.dataset_path.clone());
    let mut options = StoreOptions::with_window(config.window_months);
    options.no_prune = config.no_prune;

    match load_dataset(&source, options) {
        Ok(store) => {
            if !config.quiet {
                println!(
                    "OK: {} patches from {} (newest: {})",
                    store.len(),
                    source.describe(),
                    store.newest().version
                );
            }
            Ok(exit_codes::SUCCESS)
        }
        Err(e) if e.is_dataset_failure() => {
            tracing::error!("{e}");
            eprintln!("{REGENERATE_HINT}");
            Ok(exit_codes::DATASET_ERROR)
        }
        Err(e) => Err(e.into()),
    }
}
