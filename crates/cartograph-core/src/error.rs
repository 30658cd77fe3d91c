//! Errors raised while assembling a model.

use thiserror::Error;

/// Error building a [`Model`](crate::graph::Model).
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("element `{0}` is defined more than once")]
    DuplicateElement(String),

    #[error("element identifier must not be empty")]
    EmptyIdentifier,
}
