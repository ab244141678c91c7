// src/output/mod.rs
//! Output handling: serialize a value to text and deliver it.
//!
//! Path calculations (including the overwrite guard) live in `paths`; the
//! actual I/O happens in `writer`.

mod paths;
mod types;
mod writer;

pub use paths::{absolutize, resolve_output_path};
pub use types::OutputDest;
pub use writer::{extract_text, guard_output_path, write_output, write_to_file};
