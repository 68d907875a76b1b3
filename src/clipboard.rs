//! Cross-platform clipboard helper.
//!
//! The primary path is the `arboard` crate. When `arboard` cannot even
//! initialize (headless session, no display server) we fall back to piping
//! the text into the platform's copy command. A write failure on an
//! initialized clipboard is reported as-is, without trying the fallback.

use std::io::Write;
use std::process::{Command, Stdio};

use thiserror::Error;

/// Clipboard failure taxonomy. An initialization failure of the primary
/// clipboard is recovered internally by the command fallback and never
/// surfaces on its own; these variants are what callers can see.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard set: {0}")]
    Set(String),

    #[error("fallback copy ({command}): {message}")]
    Fallback { command: String, message: String },

    #[error("nothing to copy; generate a script first")]
    NothingToCopy,
}

/// Copy `s` to the system clipboard.
///
/// Callers should treat errors as non-fatal where the copy is a convenience
/// (the CLI prints a warning on failure after `generate --clipboard`).
pub fn copy_to_clipboard(s: &str) -> Result<(), ClipboardError> {
    match arboard::Clipboard::new() {
        Ok(mut ctx) => ctx
            .set_text(s.to_owned())
            .map_err(|e| ClipboardError::Set(e.to_string())),
        // Primary primitive unavailable: try the platform copy command.
        Err(_) => fallback_copy(s),
    }
}

/// Guarded copy used by the `copy` action: blank text is rejected before
/// any clipboard primitive is touched.
pub fn copy_output(text: &str) -> Result<(), ClipboardError> {
    if text.trim().is_empty() {
        return Err(ClipboardError::NothingToCopy);
    }
    copy_to_clipboard(text)
}

/// Pipe `s` into the platform's copy command.
///
/// The child is reaped on every path, including when writing to its stdin
/// fails, so no zombie process is left behind.
fn fallback_copy(s: &str) -> Result<(), ClipboardError> {
    let (command, args) = platform_copy_command();
    let fail = |message: String| ClipboardError::Fallback {
        command: command.to_string(),
        message,
    };

    let mut child = Command::new(command)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| fail(e.to_string()))?;

    let write_result = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(s.as_bytes()),
        None => Ok(()),
    };
    // stdin is closed by the drop above; always wait for the child.
    let status = child.wait().map_err(|e| fail(e.to_string()))?;

    write_result.map_err(|e| fail(e.to_string()))?;
    if status.success() {
        Ok(())
    } else {
        Err(fail(format!("exited with {status}")))
    }
}

#[cfg(target_os = "linux")]
fn platform_copy_command() -> (&'static str, &'static [&'static str]) {
    if std::env::var_os("WAYLAND_DISPLAY").is_some() {
        ("wl-copy", &[])
    } else {
        ("xclip", &["-selection", "clipboard"])
    }
}

#[cfg(target_os = "macos")]
fn platform_copy_command() -> (&'static str, &'static [&'static str]) {
    ("pbcopy", &[])
}

#[cfg(target_os = "windows")]
fn platform_copy_command() -> (&'static str, &'static [&'static str]) {
    ("clip", &[])
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn platform_copy_command() -> (&'static str, &'static [&'static str]) {
    ("xclip", &["-selection", "clipboard"])
}
