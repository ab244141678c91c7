// src/lib.rs
//! plumb library — wires single-argument transformations into flexible I/O.
//!
//! A transformation is any `FnOnce(Value) -> Result<Value, AppError>`. The
//! library resolves its input from a chosen source (argument, environment
//! variable, file, stdin, clipboard, OS signal) in a chosen representation,
//! and delivers the result to a chosen destination (environment variable,
//! file, stdout, clipboard).
//!
//! # Public API
//!
//! - **Command wrapper** — [`run`], [`execute`], [`execute_with`]
//! - **Configuration** — [`CommandLineInput`], [`IoConfig`]
//! - **Input resolution** — [`InputResolver`], [`Source`], [`InputKind`], [`Value`]
//! - **Output delivery** — [`write_output`], [`resolve_output_path`], [`OutputDest`]
//! - **Leaf services** — [`read_clipboard`], [`write_clipboard`],
//!   [`wait_for_signal`], [`TempStore`]
//! - **Error handling** — [`AppError`]
//!
//! ```no_run
//! use plumb::{AppError, Value};
//!
//! fn shout(value: Value) -> Result<Value, AppError> {
//!     match value {
//!         Value::Text(s) => Ok(Value::Text(s.to_uppercase())),
//!         other => Ok(other),
//!     }
//! }
//!
//! fn main() {
//!     if let Err(err) = plumb::run(shout) {
//!         eprintln!("Error: {}", err);
//!         std::process::exit(1);
//!     }
//! }
//! ```

mod clipboard;
mod command;
mod config;
mod error;
mod input;
mod output;
mod signal;
mod tempfiles;

// --- Command wrapper ---
pub use crate::command::{execute, execute_with, run};

// --- Configuration ---
pub use crate::config::{CommandLineInput, IoConfig};

// --- Error handling ---
pub use crate::error::AppError;

// --- Input resolution ---
pub use crate::input::{InputKind, InputResolver, Source, Value};

// --- Output delivery ---
pub use crate::output::{
    extract_text, resolve_output_path, write_output, write_to_file, OutputDest,
};

// --- Leaf services ---
pub use crate::clipboard::{read_clipboard, write_clipboard};
pub use crate::signal::{signal_name, wait_for_signal};
pub use crate::tempfiles::TempStore;
