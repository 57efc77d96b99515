use crate::error::{LocdexError, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// Programs tried in order to reach the system clipboard.
#[cfg(target_os = "macos")]
const CLIPBOARD_PROGRAMS: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(target_os = "linux")]
const CLIPBOARD_PROGRAMS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

#[cfg(target_os = "windows")]
const CLIPBOARD_PROGRAMS: &[(&str, &[&str])] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
const CLIPBOARD_PROGRAMS: &[(&str, &[&str])] = &[];

/// Copy `text` to the system clipboard using the first program that starts.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut last_err = None;

    for (program, args) in CLIPBOARD_PROGRAMS {
        match pipe_to(program, args, text) {
            Ok(()) => {
                tracing::debug!(program, bytes = text.len(), "copied to clipboard");
                return Ok(());
            }
            Err(e) => {
                tracing::debug!(program, error = %e, "clipboard program failed");
                last_err = Some(e);
            }
        }
    }

    Err(last_err.unwrap_or_else(|| {
        LocdexError::Api("Clipboard not supported on this platform".to_string())
    }))
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| LocdexError::Api(format!("Failed to spawn {}: {}", program, e)))?;

    // stdin is dropped at the end of the match so the program sees EOF.
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };

    // Reap the child even when the write failed.
    let status = child
        .wait()
        .map_err(|e| LocdexError::Api(format!("Failed to wait for {}: {}", program, e)))?;
    written.map_err(|e| LocdexError::Api(format!("Failed to write to {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(LocdexError::Api(format!("{} exited with error", program)))
    }
}
