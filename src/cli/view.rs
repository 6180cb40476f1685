//! View command handler.
//!
//! Loads a dataset, selects a patch and hands off to the TUI or one of
//! the non-interactive report formats.

use super::exit_codes;
use crate::config::ViewConfig;
use crate::error::REGENERATE_HINT;
use crate::loader::{load_dataset, DatasetSource};
use crate::model::StoreOptions;
use crate::reports::{json_report, summary_report, ReportFormat};
use crate::tui::{run_tui, App};
use anyhow::Result;

/// Run the view command.
#[allow(clippy::needless_pass_by_value)]
pub fn run_view(config: ViewConfig) -> Result<i32> {
    let source = DatasetSource::from_arg(config.dataset_path.clone());
    let mut options = StoreOptions::with_window(config.window_months);
    options.no_prune = config.no_prune;

    // Every dataset failure collapses into the one regenerate message;
    // the cause only goes to the log.
    let store = match load_dataset(&source, options) {
        Ok(store) => store,
        Err(e) if e.is_dataset_failure() => {
            tracing::error!("{e}");
            eprintln!("{REGENERATE_HINT}");
            return Ok(exit_codes::DATASET_ERROR);
        }
        Err(e) => return Err(e.into()),
    };

    let mut app = App::new(store);
    if let Some(ref version) = config.select_version {
        if !app.select_version(version) && !config.quiet {
            eprintln!("Warning: no patch with version {version}, showing the newest instead");
        }
    }

    match config.format.resolve() {
        ReportFormat::Tui => run_tui(&mut app)?,
        ReportFormat::Json => println!("{}", json_report(app.store())?),
        _ => print!("{}", summary_report(app.store(), app.current())),
    }

    Ok(exit_codes::SUCCESS)
}
