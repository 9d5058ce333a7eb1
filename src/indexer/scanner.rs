// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recursive archive walk producing gallery items.

use std::path::Path;
use tracing::warn;
use walkdir::WalkDir;

use crate::filters;
use crate::indexer::manifest::GalleryItem;

/// Walk the root and collect every gallery-eligible file, sorted by
/// `(dir, name)` so the manifest is reproducible regardless of filesystem
/// iteration order.
pub fn collect(root: &Path) -> Vec<GalleryItem> {
    let mut items = Vec::new();

    // Hidden directories are pruned here so the walk never descends into
    // them; hidden files fall out of the same check.
    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        entry.depth() == 0 || !entry.file_name().to_string_lossy().starts_with('.')
    });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping unreadable path: {err}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(rel) = filters::relative_path(root, entry.path()) else {
            continue;
        };
        if filters::has_hidden_segment(&rel) || filters::is_reserved(&rel) {
            continue;
        }
        let Some(ext) = entry.path().extension().and_then(|e| e.to_str()) else {
            continue;
        };
        let Some(kind) = filters::classify_extension(ext) else {
            continue;
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        let dir = match rel.rfind('/') {
            Some(idx) => rel[..idx].to_string(),
            None => String::new(),
        };
        items.push(GalleryItem {
            path: rel,
            name,
            dir,
            kind: kind.as_str().to_string(),
            ext: format!(".{}", ext.to_ascii_lowercase()),
        });
    }

    items.sort_by(|a, b| {
        (a.dir.as_str(), a.name.as_str()).cmp(&(b.dir.as_str(), b.name.as_str()))
    });
    items
}
