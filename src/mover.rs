// SPDX-License-Identifier: MIT OR Apache-2.0

//! Applies the relocation plan: moves files into the target taxonomy,
//! creating destination directories and avoiding overwrites via numeric
//! suffixing.

use colored::Colorize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::{Plan, RelocationInstruction};
use crate::errors::MoveError;
use crate::filters;

/// One successful relocation, both paths relative to the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Moved {
    pub from: String,
    pub to: String,
}

/// One failed instruction and why it failed.
#[derive(Debug)]
pub struct MoveFailure {
    pub src: String,
    pub error: MoveError,
}

/// Outcome of a full plan run. Every instruction lands in exactly one of the
/// two lists.
#[derive(Debug, Default)]
pub struct MoveReport {
    pub moved: Vec<Moved>,
    pub errors: Vec<MoveFailure>,
}

/// Load the plan from the root and apply it, printing the summary.
pub fn run(root: &Path) -> anyhow::Result<()> {
    let plan = Plan::load(root)?;
    debug!(instructions = plan.moves.len(), "loaded relocation plan");
    let report = apply(root, &plan.moves);
    print_summary(&report);
    Ok(())
}

/// Apply every instruction in list order. A failure is recorded against its
/// instruction and never stops the rest of the batch.
pub fn apply(root: &Path, instructions: &[RelocationInstruction]) -> MoveReport {
    // Create all destination directories up front so collision probing for
    // one instruction is independent of another's directory-creation order.
    // A failure here surfaces per-item when the affected move is attempted.
    let dest_dirs: BTreeSet<&str> = instructions.iter().map(|i| i.dest.as_str()).collect();
    for dir in dest_dirs {
        if let Err(err) = std::fs::create_dir_all(root.join(dir)) {
            debug!("could not pre-create {dir}: {err}");
        }
    }

    let mut report = MoveReport::default();
    for instruction in instructions {
        match move_file(root, instruction) {
            Ok(moved) => report.moved.push(moved),
            Err(error) => report.errors.push(MoveFailure {
                src: instruction.src.clone(),
                error,
            }),
        }
    }
    report
}

/// Execute a single instruction: ensure the destination directory, pick the
/// final filename, and move the file.
fn move_file(root: &Path, instruction: &RelocationInstruction) -> Result<Moved, MoveError> {
    let src_abs = root.join(&instruction.src);
    let dest_dir_abs = root.join(&instruction.dest);

    std::fs::create_dir_all(&dest_dir_abs)
        .map_err(|err| MoveError::io(format!("failed to create {}", instruction.dest), err))?;

    if !src_abs.exists() {
        return Err(MoveError::NotFound(instruction.src.clone()));
    }

    let base_name = match &instruction.rename {
        Some(name) => name.clone(),
        None => match src_abs.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => return Err(MoveError::NotFound(instruction.src.clone())),
        },
    };

    // No explicit rename: a colliding destination gets a numeric suffix.
    // With an explicit rename the caller curated the target, overwrite it.
    let mut dest_abs = dest_dir_abs.join(&base_name);
    if dest_abs.exists() && instruction.rename.is_none() {
        dest_abs = disambiguate(&dest_dir_abs, &base_name);
    }

    move_path(&src_abs, &dest_abs)
        .map_err(|err| MoveError::io(format!("failed to move {}", instruction.src), err))?;

    let to = filters::relative_path(root, &dest_abs).unwrap_or(base_name);
    debug!(from = %instruction.src, to = %to, "moved");
    Ok(Moved {
        from: instruction.src.clone(),
        to,
    })
}

/// First free `stem_N.ext` variant of `base_name` in `dir`, counting up
/// from `_2`. The extension is preserved.
fn disambiguate(dir: &Path, base_name: &str) -> PathBuf {
    let (stem, ext) = split_name(base_name);
    let mut counter: u32 = 2;
    loop {
        let candidate = dir.join(format!("{stem}_{counter}{ext}"));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

/// Split a filename into stem and extension (including the dot). A leading
/// dot is part of the stem, so hidden-style names keep their full name.
fn split_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name.split_at(idx),
        _ => (name, ""),
    }
}

/// Move a file, falling back to copy-then-delete when rename fails (e.g.
/// the destination is on a different filesystem).
fn move_path(src: &Path, dest: &Path) -> std::io::Result<()> {
    match std::fs::rename(src, dest) {
        Ok(()) => Ok(()),
        Err(rename_err) => {
            if src.is_file() {
                std::fs::copy(src, dest)?;
                std::fs::remove_file(src)?;
                Ok(())
            } else {
                Err(rename_err)
            }
        }
    }
}

fn print_summary(report: &MoveReport) {
    println!("Moved files:");
    for item in &report.moved {
        println!("  {} -> {}", item.from, item.to);
    }
    if !report.errors.is_empty() {
        println!();
        println!("{}", "Errors:".red().bold());
        for failure in &report.errors {
            println!("  {} :: {}", failure.src, failure.error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn instruction(src: &str, dest: &str, rename: Option<&str>) -> RelocationInstruction {
        RelocationInstruction {
            src: src.to_string(),
            dest: dest.to_string(),
            rename: rename.map(str::to_string),
        }
    }

    fn write_file(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(path, content).expect("write file");
    }

    #[test]
    fn moves_file_and_creates_destination_directories() {
        let dir = TempDir::new().expect("tempdir");
        write_file(dir.path(), "x/y.JPG", "photo");

        let report = apply(dir.path(), &[instruction("x/y.JPG", "z/deep/nested", None)]);

        assert_eq!(report.moved.len(), 1);
        assert!(report.errors.is_empty());
        assert_eq!(report.moved[0].to, "z/deep/nested/y.JPG");
        assert!(dir.path().join("z/deep/nested/y.JPG").exists());
        assert!(!dir.path().join("x/y.JPG").exists());
    }

    #[test]
    fn collision_without_rename_appends_numeric_suffix() {
        let dir = TempDir::new().expect("tempdir");
        write_file(dir.path(), "x/y.JPG", "incoming");
        write_file(dir.path(), "z/y.JPG", "existing");

        let report = apply(dir.path(), &[instruction("x/y.JPG", "z", None)]);

        assert_eq!(report.moved[0].to, "z/y_2.JPG");
        assert_eq!(
            std::fs::read_to_string(dir.path().join("z/y.JPG")).unwrap(),
            "existing"
        );
        assert_eq!(
            std::fs::read_to_string(dir.path().join("z/y_2.JPG")).unwrap(),
            "incoming"
        );
    }

    #[test]
    fn suffix_counter_keeps_incrementing() {
        let dir = TempDir::new().expect("tempdir");
        write_file(dir.path(), "a/pic.png", "third");
        write_file(dir.path(), "z/pic.png", "first");
        write_file(dir.path(), "z/pic_2.png", "second");

        let report = apply(dir.path(), &[instruction("a/pic.png", "z", None)]);

        assert_eq!(report.moved[0].to, "z/pic_3.png");
    }

    #[test]
    fn explicit_rename_overwrites_existing_target() {
        let dir = TempDir::new().expect("tempdir");
        write_file(dir.path(), "a/doc.pdf", "new contents");
        write_file(dir.path(), "z/final.pdf", "old contents");

        let report = apply(dir.path(), &[instruction("a/doc.pdf", "z", Some("final.pdf"))]);

        assert_eq!(report.moved[0].to, "z/final.pdf");
        assert!(!dir.path().join("z/final_2.pdf").exists());
        assert_eq!(
            std::fs::read_to_string(dir.path().join("z/final.pdf")).unwrap(),
            "new contents"
        );
    }

    #[test]
    fn missing_source_is_recorded_and_batch_continues() {
        let dir = TempDir::new().expect("tempdir");
        write_file(dir.path(), "b/ok.jpg", "fine");

        let plan = vec![
            instruction("a/gone.jpg", "z", None),
            instruction("b/ok.jpg", "z", None),
        ];
        let report = apply(dir.path(), &plan);

        assert_eq!(report.moved.len() + report.errors.len(), plan.len());
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].src, "a/gone.jpg");
        assert!(matches!(report.errors[0].error, MoveError::NotFound(_)));
        assert!(dir.path().join("z/ok.jpg").exists());
    }

    #[test]
    fn existing_destination_directory_is_not_an_error() {
        let dir = TempDir::new().expect("tempdir");
        write_file(dir.path(), "a/one.gif", "1");
        write_file(dir.path(), "a/two.gif", "2");

        let plan = vec![
            instruction("a/one.gif", "z", None),
            instruction("a/two.gif", "z", None),
        ];
        let report = apply(dir.path(), &plan);

        assert!(report.errors.is_empty());
        assert_eq!(report.moved.len(), 2);
    }

    #[test]
    fn split_name_keeps_leading_dot_in_stem() {
        assert_eq!(split_name("photo.JPG"), ("photo", ".JPG"));
        assert_eq!(split_name("archive.tar.gz"), ("archive.tar", ".gz"));
        assert_eq!(split_name("noext"), ("noext", ""));
        assert_eq!(split_name(".bashrc"), (".bashrc", ""));
    }
}
