//! Shared utilities.

pub mod version;

pub use version::{compare_versions, compare_versions_desc, ReleaseKind};
