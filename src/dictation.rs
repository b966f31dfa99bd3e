//! The single dictation operation: record, transcribe, inject.

use crate::config::Config;
use crate::error::{Result, TalkToMeError};
use crate::inject;
use crate::recorder;
use crate::transcription::{TranscriptionRequest, WhisperClient};
use std::sync::mpsc::Sender;

/// UI-facing lifecycle of a dictation attempt. Processing always returns to
/// Idle, whether it ends in success or error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictationState {
    Idle,
    Recording,
    Processing,
}

/// Events emitted by a running dictation task.
#[derive(Debug, Clone)]
pub enum DictationEvent {
    RecordingStarted,
    ProcessingStarted,
    Finished { text: String, pasted: bool },
    Failed { message: String },
}

/// Runs one full dictation. All failure kinds funnel into a single `Failed`
/// event; the temporary recording is deleted on every exit path by the
/// recorder guard.
pub async fn run(config: Config, events: Sender<DictationEvent>) {
    match run_inner(&config, events.clone()).await {
        Ok((text, pasted)) => {
            events.send(DictationEvent::Finished { text, pasted }).ok();
        }
        Err(e) => {
            tracing::error!("Dictation failed: {}", e);
            events
                .send(DictationEvent::Failed {
                    message: e.to_string(),
                })
                .ok();
        }
    }
}

async fn run_inner(config: &Config, events: Sender<DictationEvent>) -> Result<(String, bool)> {
    events.send(DictationEvent::RecordingStarted).ok();

    let recording = recorder::record(&config.recorder).await?;

    events.send(DictationEvent::ProcessingStarted).ok();

    // Fail fast: without a credential the API must never be called.
    let api_key = ensure_api_key(&config.whisper.api_key)?;

    let client = WhisperClient::new(api_key.to_string());
    let request = TranscriptionRequest::new(recording.path().to_path_buf())
        .with_model(config.whisper.model.clone());
    let response = client.transcribe(request).await?;

    let pasted = inject::insert_text(&response.text, config.ui.paste_on_success).await?;

    // `recording` drops here, deleting the temp file.
    Ok((response.text, pasted))
}

/// Checks the configured credential before any network call is attempted.
pub fn ensure_api_key(api_key: &str) -> Result<&str> {
    if api_key.trim().is_empty() {
        Err(TalkToMeError::MissingApiKey)
    } else {
        Ok(api_key)
    }
}
