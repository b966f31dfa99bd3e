//! Clipboard and paste-keystroke injection.
//!
//! On macOS the text is piped into `pbcopy` and a Cmd+V keystroke is sent via
//! `osascript`, so the transcription lands in the currently focused input
//! field. Other platforms set the clipboard with `arboard`; no keystroke is
//! simulated there and the user pastes manually.

use crate::error::{Result, TalkToMeError};

/// Puts `text` into the system clipboard and, when `paste` is set, simulates
/// the platform paste keystroke. Returns whether the keystroke was actually
/// sent, so the caller can report "inserted" vs "copied only".
pub async fn insert_text(text: &str, paste: bool) -> Result<bool> {
    set_clipboard(text).await?;
    tracing::info!("Copied {} characters to clipboard", text.len());

    if paste {
        press_paste().await
    } else {
        Ok(false)
    }
}

#[cfg(target_os = "macos")]
async fn set_clipboard(text: &str) -> Result<()> {
    use std::process::Stdio;
    use tokio::io::AsyncWriteExt;

    let mut child = tokio::process::Command::new("pbcopy")
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| TalkToMeError::InjectionError(format!("Failed to launch pbcopy: {}", e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .await
            .map_err(|e| TalkToMeError::InjectionError(format!("pbcopy write failed: {}", e)))?;
        // stdin must close for pbcopy to commit the clipboard
        drop(stdin);
    }

    let status = child
        .wait()
        .await
        .map_err(|e| TalkToMeError::InjectionError(format!("pbcopy failed: {}", e)))?;

    if !status.success() {
        return Err(TalkToMeError::InjectionError(format!(
            "pbcopy exited with {}",
            status
        )));
    }

    Ok(())
}

#[cfg(not(target_os = "macos"))]
async fn set_clipboard(text: &str) -> Result<()> {
    let text = text.to_string();

    tokio::task::spawn_blocking(move || {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| {
            TalkToMeError::InjectionError(format!("Failed to access clipboard: {}", e))
        })?;
        clipboard
            .set_text(text)
            .map_err(|e| TalkToMeError::InjectionError(format!("Failed to set clipboard: {}", e)))
    })
    .await
    .map_err(|e| TalkToMeError::InjectionError(format!("Clipboard task failed: {}", e)))?
}

#[cfg(target_os = "macos")]
async fn press_paste() -> Result<bool> {
    const PASTE_SCRIPT: &str =
        r#"tell application "System Events" to keystroke "v" using command down"#;

    let status = tokio::process::Command::new("osascript")
        .arg("-e")
        .arg(PASTE_SCRIPT)
        .status()
        .await
        .map_err(|e| TalkToMeError::InjectionError(format!("Failed to launch osascript: {}", e)))?;

    if !status.success() {
        return Err(TalkToMeError::InjectionError(format!(
            "osascript exited with {}",
            status
        )));
    }

    Ok(true)
}

#[cfg(not(target_os = "macos"))]
async fn press_paste() -> Result<bool> {
    // Keystroke simulation needs platform-specific system libraries; the
    // clipboard still holds the text for a manual Ctrl+V.
    tracing::info!("Paste keystroke not simulated on this platform");
    Ok(false)
}
