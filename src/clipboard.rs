// src/clipboard.rs
//! Platform-specific clipboard operations.
//!
//! arboard is tried first on every platform; when it cannot reach a
//! clipboard (headless session, missing display server) the platform's own
//! command-line tools are used as a fallback.

use crate::error::AppError;
use std::io::Write;
use std::process::{Command, Stdio};

/// Reads the system clipboard as text.
pub fn read_clipboard() -> Result<String, AppError> {
    match try_arboard_read() {
        Ok(text) => {
            log::debug!("Read {} characters from clipboard via arboard", text.len());
            return Ok(text);
        }
        Err(e) => {
            log::debug!("Arboard read failed: {}, trying platform command", e);
        }
    }

    let text = paste_with_platform_command()?;
    log::debug!(
        "Read {} characters from clipboard via platform command",
        text.len()
    );
    Ok(text)
}

/// Copies `content` to the system clipboard.
pub fn write_clipboard(content: &str) -> Result<(), AppError> {
    log::debug!("Copying {} characters to clipboard", content.len());

    match try_arboard_write(content) {
        Ok(()) => {
            log::info!("Content copied to clipboard using arboard");
            return Ok(());
        }
        Err(e) => {
            log::debug!("Arboard write failed: {}, trying platform command", e);
        }
    }

    copy_with_platform_command(content)?;
    log::info!("Content copied to clipboard using platform command");
    Ok(())
}

fn try_arboard_read() -> Result<String, AppError> {
    let mut clipboard = arboard::Clipboard::new()?;
    Ok(clipboard.get_text()?)
}

fn try_arboard_write(content: &str) -> Result<(), AppError> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(content)?;
    Ok(())
}

/// Runs a clipboard tool, feeding `input` to its stdin when given, and
/// returns the tool's stdout.
fn run_clipboard_tool(
    program: &str,
    args: &[&str],
    input: Option<&str>,
) -> Result<String, AppError> {
    log::debug!("Running clipboard tool: {}", program);

    let mut child = Command::new(program)
        .args(args)
        .stdin(if input.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| AppError::ClipboardUnavailable(format!("failed to spawn {}: {}", program, e)))?;

    if let Some(content) = input {
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(content.as_bytes())
                .map_err(|e| AppError::Clipboard(format!("failed to write to {}: {}", program, e)))?;
        }
    }

    let output = child
        .wait_with_output()
        .map_err(|e| AppError::Clipboard(format!("failed to wait for {}: {}", program, e)))?;

    if output.status.success() {
        String::from_utf8(output.stdout).map_err(AppError::from)
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(AppError::Clipboard(format!("{} failed: {}", program, stderr)))
    }
}

#[cfg(target_os = "linux")]
fn is_wayland() -> bool {
    std::env::var("WAYLAND_DISPLAY").is_ok()
        || std::env::var("XDG_SESSION_TYPE").is_ok_and(|s| s == "wayland")
}

#[cfg(target_os = "linux")]
fn copy_with_platform_command(content: &str) -> Result<(), AppError> {
    if is_wayland() {
        run_clipboard_tool("wl-copy", &[], Some(content)).map(|_| ())
    } else {
        run_clipboard_tool("xclip", &["-selection", "clipboard"], Some(content)).map(|_| ())
    }
}

#[cfg(target_os = "linux")]
fn paste_with_platform_command() -> Result<String, AppError> {
    if is_wayland() {
        run_clipboard_tool("wl-paste", &["--no-newline"], None)
    } else {
        run_clipboard_tool("xclip", &["-selection", "clipboard", "-o"], None)
    }
}

#[cfg(target_os = "macos")]
fn copy_with_platform_command(content: &str) -> Result<(), AppError> {
    run_clipboard_tool("pbcopy", &[], Some(content)).map(|_| ())
}

#[cfg(target_os = "macos")]
fn paste_with_platform_command() -> Result<String, AppError> {
    run_clipboard_tool("pbpaste", &[], None)
}

#[cfg(target_os = "windows")]
fn copy_with_platform_command(content: &str) -> Result<(), AppError> {
    run_clipboard_tool("clip", &[], Some(content)).map(|_| ())
}

#[cfg(target_os = "windows")]
fn paste_with_platform_command() -> Result<String, AppError> {
    run_clipboard_tool("powershell", &["-NoProfile", "-Command", "Get-Clipboard"], None)
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn copy_with_platform_command(_content: &str) -> Result<(), AppError> {
    Err(AppError::ClipboardUnavailable(
        "clipboard not supported on this platform".to_string(),
    ))
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn paste_with_platform_command() -> Result<String, AppError> {
    Err(AppError::ClipboardUnavailable(
        "clipboard not supported on this platform".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ignore] // Requires clipboard access
    fn clipboard_round_trip() {
        write_clipboard("Hello, clipboard!").unwrap();
        assert_eq!(read_clipboard().unwrap(), "Hello, clipboard!");
    }
}
