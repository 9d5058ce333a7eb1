// SPDX-License-Identifier: MIT OR Apache-2.0

//! Relocation plan loading for gallerist
//!
//! The source-to-destination mapping is inert data, not logic: it lives in
//! `reorganize.toml` next to the archive and is edited without touching the
//! move code.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the plan file expected at the archive root.
pub const PLAN_FILE_NAME: &str = "reorganize.toml";

/// One relocation rule: a single file's source, destination directory, and
/// optional new filename. Paths are relative to the archive root.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RelocationInstruction {
    /// File to move, relative to the root. Must exist at move time.
    pub src: String,
    /// Destination directory, relative to the root. Created if missing.
    pub dest: String,
    /// New filename at the destination. When set, an existing file at the
    /// target is overwritten; when unset, collisions get a numeric suffix.
    #[serde(default)]
    pub rename: Option<String>,
}

/// The full relocation plan, a `[[move]]` table per instruction.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Plan {
    #[serde(default, rename = "move")]
    pub moves: Vec<RelocationInstruction>,
}

impl Plan {
    /// Load the plan from `reorganize.toml` in the given root.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(PLAN_FILE_NAME);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }
}

/// Resolve the archive root once at startup. Both subcommands operate on the
/// directory they are invoked from.
pub fn resolve_root() -> Result<PathBuf> {
    std::env::current_dir().context("failed to resolve current directory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_moves_with_and_without_rename() {
        let plan: Plan = toml::from_str(
            r#"
            [[move]]
            src = "x/y.JPG"
            dest = "z"

            [[move]]
            src = "a/shortcut_1.pdf"
            dest = "guides"
            rename = "shortcut_1_tools.pdf"
            "#,
        )
        .unwrap();

        assert_eq!(plan.moves.len(), 2);
        assert_eq!(plan.moves[0].src, "x/y.JPG");
        assert_eq!(plan.moves[0].rename, None);
        assert_eq!(
            plan.moves[1].rename.as_deref(),
            Some("shortcut_1_tools.pdf")
        );
    }

    #[test]
    fn empty_plan_is_valid() {
        let plan: Plan = toml::from_str("").unwrap();
        assert!(plan.moves.is_empty());
    }
}
