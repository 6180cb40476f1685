//! Non-interactive output: format selection, text summary, JSON export.

use crate::model::{Patch, PatchStore};
use crate::utils::ReleaseKind;
use std::io::IsTerminal;

/// Output format for the `view` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// TUI on an interactive terminal, summary otherwise
    Auto,
    /// Interactive terminal UI
    Tui,
    /// Plain-text summary
    Summary,
    /// Normalized store as JSON
    Json,
}

impl ReportFormat {
    /// Resolve `Auto` against the current stdout.
    #[must_use]
    pub fn resolve(self) -> Self {
        match self {
            Self::Auto => {
                if std::io::stdout().is_terminal() {
                    Self::Tui
                } else {
                    Self::Summary
                }
            }
            other => other,
        }
    }
}

/// Render a plain-text summary of the selected patch plus release history.
#[must_use]
pub fn summary_report(store: &PatchStore, selected: &Patch) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Patch {} ({}) — {} [{}]\n",
        selected.version, selected.build_channel, selected.release_date, selected.status
    ));
    out.push_str(&format!(
        "Changes: {} features, {} improvements, {} fixes, {} ships ({} total)\n",
        selected.stats.features,
        selected.stats.improvements,
        selected.stats.fixes,
        selected.stats.ships,
        selected.change_count()
    ));

    for category in &selected.categories {
        out.push_str(&format!("\n{} ({})\n", category.name, category.items.len()));
        for item in &category.items {
            out.push_str(&format!("  - {item}\n"));
        }
    }

    out.push_str("\nRelease history:\n");
    for patch in store.patches() {
        out.push_str(&format!(
            "  {:<10} {:<14} {:<8} {:<6} {} changes\n",
            patch.version,
            patch.release_date,
            patch.status,
            ReleaseKind::classify(&patch.version).label(),
            patch.change_count()
        ));
    }

    out
}

/// Serialize the normalized store as pretty JSON.
///
/// # Errors
///
/// Fails only if serialization itself fails, which the model's derives
/// rule out in practice.
pub fn json_report(store: &PatchStore) -> serde_json::Result<String> {
    serde_json::to_string_pretty(store.patches())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, PatchStats, StoreOptions};

    fn store() -> PatchStore {
        let patches = vec![
            Patch {
                patch_id: "4.0.2".to_string(),
                version: "4.0.2".to_string(),
                release_date: "Feb 14, 2026".to_string(),
                release_date_iso: None,
                build_channel: "LIVE".to_string(),
                status: "Current".to_string(),
                categories: vec![Category {
                    name: "Features".to_string(),
                    items: vec!["Jump drive".to_string()],
                }],
                stats: PatchStats {
                    features: 1,
                    ..PatchStats::default()
                },
            },
            Patch {
                patch_id: "4.0.1".to_string(),
                version: "4.0.1".to_string(),
                release_date: "Jan 3, 2026".to_string(),
                release_date_iso: None,
                build_channel: "LIVE".to_string(),
                status: "Archived".to_string(),
                categories: vec![],
                stats: PatchStats::default(),
            },
        ];
        PatchStore::build(patches, StoreOptions::current()).expect("store")
    }

    #[test]
    fn test_summary_contains_header_and_history() {
        let store = store();
        let text = summary_report(&store, store.newest());
        assert!(text.contains("Patch 4.0.2 (LIVE)"));
        assert!(text.contains("Jump drive"));
        assert!(text.contains("4.0.1"));
        assert!(text.contains("Minor"));
    }

    #[test]
    fn test_json_report_is_array_of_patches() {
        let store = store();
        let json = json_report(&store).expect("serializes");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parses");
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[0]["version"], "4.0.2");
    }
}
