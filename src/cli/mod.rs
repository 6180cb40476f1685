//! CLI command handlers.
//!
//! Testable handlers invoked by main.rs; each implements the business
//! logic for one subcommand and returns a process exit code.

mod check;
mod view;

pub use check::run_check;
pub use view::run_view;

// Re-export config types used by handlers
pub use crate::config::ViewConfig;

/// Process exit codes.
pub mod exit_codes {
    /// Dataset loaded and rendered
    pub const SUCCESS: i32 = 0;
    /// Dataset missing, unparseable or empty
    pub const DATASET_ERROR: i32 = 1;
    /// Any other error
    pub const ERROR: i32 = 2;
}
