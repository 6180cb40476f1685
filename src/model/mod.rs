//! Canonical patch model and store.

mod patch;
mod store;

pub use patch::{Category, Patch, PatchStats, RawCategory, RawDataset, RawPatch, RawStats};
pub use store::{PatchStore, StoreOptions, DEFAULT_WINDOW_MONTHS};
