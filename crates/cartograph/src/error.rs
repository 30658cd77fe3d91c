//! Error types for Cartograph operations.
//!
//! This module provides the main error type [`CartographError`] which wraps
//! the conditions that can end a report run.

use std::{io, ops::Range};

use thiserror::Error;

use cartograph_core::ModelError;

/// The main error type for Cartograph operations.
///
/// # Diagnostic Variants
///
/// The `Snapshot` variant keeps the offending source text and the byte span
/// reported by the deserializer so callers can render a source snippet.
#[derive(Debug, Error)]
pub enum CartographError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Collation data unavailable: {0}")]
    Collation(String),

    #[error("{message}")]
    Snapshot {
        message: String,
        span: Option<Range<usize>>,
        src: String,
    },

    /// A generator refused to produce output. Nothing was written.
    #[error("Generator `{generator}` aborted: {reason}")]
    Aborted {
        generator: &'static str,
        reason: String,
    },
}

impl CartographError {
    /// Create a new `Snapshot` error with the associated source text.
    pub fn new_snapshot_error(
        message: impl Into<String>,
        span: Option<Range<usize>>,
        src: impl Into<String>,
    ) -> Self {
        Self::Snapshot {
            message: message.into(),
            span,
            src: src.into(),
        }
    }

    /// Create a new `Aborted` error for `generator`.
    pub fn aborted(generator: &'static str, reason: impl Into<String>) -> Self {
        Self::Aborted {
            generator,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this error is a generator abort.
    pub fn is_abort(&self) -> bool {
        matches!(self, Self::Aborted { .. })
    }
}
