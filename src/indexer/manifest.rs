// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gallery manifest model and serialization.
//!
//! The manifest is rebuilt from scratch on every run and fully replaces any
//! previous `gallery.json`. Key order follows struct field order; pretty
//! printing gives 2-space indentation with non-ASCII emitted literally, which
//! is what the gallery viewer expects byte for byte.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Name of the manifest file written at the archive root.
pub const MANIFEST_FILE_NAME: &str = "gallery.json";

/// One indexed file. `path` and `dir` are relative to the root with forward
/// slashes; `dir` is empty for files directly at the root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryItem {
    pub path: String,
    pub name: String,
    pub dir: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub ext: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryManifest {
    pub generated: bool,
    pub count: usize,
    pub items: Vec<GalleryItem>,
}

impl GalleryManifest {
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self {
            generated: true,
            count: items.len(),
            items,
        }
    }
}

/// Serialize the manifest and overwrite `<root>/gallery.json`. Failure here
/// is fatal to the run.
pub fn write_manifest(root: &Path, manifest: &GalleryManifest) -> Result<()> {
    let content = serde_json::to_string_pretty(manifest)?;
    atomic_write_bytes(&root.join(MANIFEST_FILE_NAME), content.as_bytes())
}

/// Write via a temp file in the same directory plus rename, so a crashed run
/// never leaves a truncated manifest behind.
fn atomic_write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    let Some(parent) = path.parent() else {
        anyhow::bail!("cannot atomically write {} without parent", path.display());
    };

    let nonce = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_nanos())
        .unwrap_or(0);
    let tmp_name = format!(
        ".{}.tmp-{}-{}",
        path.file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("gallerist"),
        std::process::id(),
        nonce
    );
    let tmp_path = parent.join(tmp_name);

    {
        let mut file = File::create(&tmp_path)
            .with_context(|| format!("failed to create {}", tmp_path.display()))?;
        file.write_all(bytes)
            .with_context(|| format!("failed to write {}", tmp_path.display()))?;
        file.sync_all()
            .with_context(|| format!("failed to sync {}", tmp_path.display()))?;
    }

    // fs::rename replaces an existing file on every supported platform.
    std::fs::rename(&tmp_path, path)
        .with_context(|| format!("failed to replace {}", path.display()))?;

    Ok(())
}
