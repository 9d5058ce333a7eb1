// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-item error taxonomy for the mover.
//!
//! A failed instruction never aborts the batch; its error is recorded and
//! surfaced in the printed summary instead.

use thiserror::Error;

/// Why a single relocation instruction failed.
#[derive(Debug, Error)]
pub enum MoveError {
    /// The configured source path does not exist at move time.
    #[error("Source not found: {0}")]
    NotFound(String),

    /// OS-level failure during directory creation or the move itself.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl MoveError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        MoveError::Io {
            context: context.into(),
            source,
        }
    }
}
