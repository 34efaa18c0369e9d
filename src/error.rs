//! Error type shared by construction and the run loop.

use std::io;

use thiserror::Error;

/// Errors raised while building a node tree or running an [`crate::App`].
#[derive(Debug, Error)]
pub enum Error {
    /// `run` was called before a root node was configured.
    #[error("no root node configured")]
    NoRoot,

    /// A press or select action was attached to a widget without a focus coordinate.
    #[error("a focus coordinate is needed to handle {action} actions")]
    Unfocusable { action: &'static str },

    /// A width specifier string did not match `<n>-%` or `<n>-char`.
    #[error("invalid width specifier: {0:?}")]
    InvalidWidth(String),

    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
