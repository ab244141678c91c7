// src/output/writer.rs
//! Serializes a resolved value to text and delivers it.
//!
//! Every destination receives text: byte buffers are decoded as UTF-8,
//! paths are read back, and streams are drained to completion first.

use super::paths::resolve_output_path;
use super::types::OutputDest;
use crate::clipboard::write_clipboard;
use crate::error::AppError;
use crate::input::Value;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Normalizes any supported value to owned text.
pub fn extract_text(value: Value) -> Result<String, AppError> {
    match value {
        Value::Text(s) => Ok(s),
        Value::Bytes(b) => Ok(String::from_utf8(b)?),
        Value::Path(p) => Ok(fs::read_to_string(p)?),
        Value::TextStream(mut reader) => {
            let mut buf = String::new();
            reader.read_to_string(&mut buf)?;
            Ok(buf)
        }
        Value::ByteStream(mut reader) => {
            let mut buf = Vec::new();
            reader.read_to_end(&mut buf)?;
            Ok(String::from_utf8(buf)?)
        }
    }
}

/// Delivers `value` to `dest`.
///
/// The `-` sentinel for a file name redirects to stdout, matching the
/// conventional CLI meaning of a dash-valued path.
pub fn write_output(value: Value, dest: OutputDest, name: Option<&str>) -> Result<(), AppError> {
    let text = extract_text(value)?;
    log::debug!(
        "Writing {} characters to destination '{}' (name: {:?})",
        text.len(),
        dest,
        name
    );

    match dest {
        OutputDest::Env => {
            let name = require_name(name, "env var")?;
            std::env::set_var(name, &text);
            log::info!("Set environment variable '{}'", name);
            Ok(())
        }
        OutputDest::File => {
            let name = require_name(name, "file")?;
            if name == "-" {
                print_to_stdout(&text)
            } else {
                fs::write(name, &text)?;
                log::info!("Wrote file: {}", name);
                Ok(())
            }
        }
        OutputDest::Pipe => print_to_stdout(&text),
        OutputDest::Clipboard => write_clipboard(&text),
    }
}

/// Applies the overwrite guard when the destination is a concrete file.
///
/// Returns the guarded absolute path for a concrete file destination and
/// `None` for every other case (non-file destinations, the `-` sentinel),
/// which keep their original name. The path stays a `PathBuf` end to end so
/// non-UTF-8 paths survive the guard unchanged.
pub fn guard_output_path(
    dest: OutputDest,
    name: Option<&str>,
    force: bool,
) -> Result<Option<PathBuf>, AppError> {
    if dest == OutputDest::File && name.is_some_and(|n| n != "-") {
        return resolve_output_path(name, force).map(Some);
    }
    Ok(None)
}

/// Delivers `value` to a file at a known-good path.
pub fn write_to_file(value: Value, path: &Path) -> Result<(), AppError> {
    let text = extract_text(value)?;
    fs::write(path, &text)?;
    log::info!("Wrote file: {}", path.display());
    Ok(())
}

fn require_name<'a>(name: Option<&'a str>, what: &'static str) -> Result<&'a str, AppError> {
    match name {
        Some(n) if !n.is_empty() => Ok(n),
        _ => Err(AppError::MissingOutputName(what)),
    }
}

fn print_to_stdout(content: &str) -> Result<(), AppError> {
    let mut stdout = std::io::stdout();
    stdout.write_all(content.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
