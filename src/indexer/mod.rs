// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexer module - walks the archive and rebuilds the gallery manifest.

pub mod manifest;
pub mod scanner;

use anyhow::{Context, Result};
use std::path::Path;

use manifest::{GalleryManifest, MANIFEST_FILE_NAME};

/// Full manifest rebuild: scan, sort, overwrite `gallery.json`.
pub fn run(root: &Path) -> Result<()> {
    let items = scanner::collect(root);
    let manifest = GalleryManifest::new(items);
    manifest::write_manifest(root, &manifest)
        .with_context(|| format!("failed to write {MANIFEST_FILE_NAME}"))?;
    println!("Wrote {} items to {}", manifest.count, MANIFEST_FILE_NAME);
    Ok(())
}
