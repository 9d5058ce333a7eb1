// SPDX-License-Identifier: MIT OR Apache-2.0

//! Path predicates deciding which files belong in the gallery manifest.
//!
//! Each rule is a standalone function over a forward-slash relative path so
//! the traversal code can compose them and tests can hit them in isolation.

use std::path::Path;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "svg"];
const DOCUMENT_EXTENSIONS: &[&str] = &["pdf"];

/// Directory reserved for the gallery viewer's static resources.
pub const ASSETS_DIR: &str = "assets";

/// Root-level files that must never appear as gallery entries: the manifest
/// itself, the relocation plan, and the viewer's pages.
pub const RESERVED_FILES: &[&str] = &[
    "gallery.json",
    "reorganize.toml",
    "README.md",
    "index.html",
];

/// What a manifest entry points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Pdf,
}

impl FileKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Image => "image",
            FileKind::Pdf => "pdf",
        }
    }
}

/// Classify a file extension (without the leading dot), case-insensitively.
/// Returns `None` for anything that is neither an image nor a document.
pub fn classify_extension(ext: &str) -> Option<FileKind> {
    let lower = ext.to_ascii_lowercase();
    if IMAGE_EXTENSIONS.iter().any(|e| *e == lower) {
        Some(FileKind::Image)
    } else if DOCUMENT_EXTENSIONS.iter().any(|e| *e == lower) {
        Some(FileKind::Pdf)
    } else {
        None
    }
}

/// True when any segment of a relative path starts with `.` (hidden-file
/// convention). Evaluated per segment, not just the leaf.
pub fn has_hidden_segment(rel: &str) -> bool {
    rel.split('/').any(|segment| segment.starts_with('.'))
}

/// True for paths the manifest must never list: anything under the assets
/// directory, plus the fixed root-level reserved files.
pub fn is_reserved(rel: &str) -> bool {
    if rel.starts_with(&format!("{ASSETS_DIR}/")) {
        return true;
    }
    RESERVED_FILES.iter().any(|name| *name == rel)
}

/// Relative path of `abs` under `root`, normalized to forward slashes.
/// Returns `None` for the root itself or paths outside it.
pub fn relative_path(root: &Path, abs: &Path) -> Option<String> {
    let rel = abs.strip_prefix(root).ok()?;
    let path = rel.to_string_lossy().replace('\\', "/");
    if path.is_empty() {
        None
    } else {
        Some(path)
    }
}
