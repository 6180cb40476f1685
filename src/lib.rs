//! **A viewer for game patch notes.**
//!
//! `patch-notes` loads a JSON dataset of release patches, normalizes the
//! tolerant input shape into a strict model, and presents the result in
//! an interactive terminal UI or as plain-text/JSON reports.
//!
//! ## Core Concepts & Modules
//!
//! - **[`loader`]**: Reads a dataset (a file or the embedded sample) and
//!   normalizes every record. Normalization is total: malformed fields
//!   fall back to defaults rather than failing the load.
//! - **[`model`]**: The normalized [`Patch`] and the [`PatchStore`], an
//!   immutable collection sorted newest-first and pruned to a trailing
//!   recency window.
//! - **[`tui`]**: The interactive viewer. Session state, pure view
//!   projections, and the ratatui render layer are kept separate so
//!   filtering and search are testable without a terminal.
//! - **[`reports`]**: Non-interactive summary and JSON output.
//! - **[`cli`]**: Command handlers invoked by the binary.
//!
//! ## Getting Started
//!
//! ```no_run
//! use patch_notes::loader::{load_dataset, DatasetSource};
//! use patch_notes::model::StoreOptions;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = load_dataset(&DatasetSource::Embedded, StoreOptions::current())?;
//!     println!("Newest patch: {}", store.newest().version);
//!     Ok(())
//! }
//! ```

#![warn(clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod reports;
pub mod tui;
pub mod utils;

pub use error::{PatchNotesError, Result, REGENERATE_HINT};
pub use loader::{load_dataset, DatasetSource};
pub use model::{Patch, PatchStore, StoreOptions};
pub use utils::{compare_versions, ReleaseKind};
