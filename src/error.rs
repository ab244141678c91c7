// src/error.rs
//! Application error types with structured error handling.
//!
//! Every failure mode that can surface to the user has its own variant, so
//! the command boundary can emit a single descriptive line without losing
//! the underlying cause.

use crate::input::{InputKind, Source};
use std::path::PathBuf;
use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing name for source '{0}'")]
    MissingName(Source),

    #[error("Unsupported source '{src}' for input type '{kind}'")]
    UnsupportedCombination { src: Source, kind: InputKind },

    #[error("Invalid argument index '{0}'")]
    InvalidArgIndex(String),

    #[error("Argument index {0} is out of range")]
    ArgIndexOutOfRange(usize),

    #[error("Environment variable '{0}' is not set")]
    EnvVarNotSet(String),

    #[error("Invalid signal number '{0}'")]
    InvalidSignalNumber(String),

    #[error("Signal wait failed: {0}")]
    Signal(String),

    #[error("Must provide `name` for {0} output")]
    MissingOutputName(&'static str),

    #[error("Output file exists: {}. Use --force to overwrite.", .0.display())]
    OutputFileExists(PathBuf),

    #[error("Clipboard access not installed: {0}")]
    ClipboardUnavailable(String),

    #[error("Error interacting with clipboard: {0}")]
    Clipboard(String),

    #[error("Input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path error: {0}")]
    PathError(String),
}

impl From<arboard::Error> for AppError {
    fn from(err: arboard::Error) -> Self {
        match err {
            arboard::Error::ClipboardNotSupported => {
                AppError::ClipboardUnavailable(err.to_string())
            }
            other => AppError::Clipboard(other.to_string()),
        }
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;
