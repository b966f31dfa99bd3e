//! External-process audio recording.
//!
//! Recording is delegated to a command-line recorder (sox's `rec` by default)
//! rather than captured in-process. The child is raced against a wall-clock
//! deadline and killed when it expires; the deadline is the authoritative
//! duration bound even if the recorder ignores its own trim argument.

use crate::config::RecorderConfig;
use crate::error::{Result, TalkToMeError};
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::process::{Child, Command};

/// Fixed output name in the OS temp directory. No collision handling:
/// overlapping invocations are unsupported.
pub const RECORDING_FILE_NAME: &str = "talk-to-me-recording.wav";

pub fn recording_path() -> PathBuf {
    std::env::temp_dir().join(RECORDING_FILE_NAME)
}

/// Scoped owner of the temporary recording file. Dropping the guard deletes
/// the file, so every exit path (normal, deadline, error) cleans up.
pub struct TempRecording {
    path: PathBuf,
}

impl TempRecording {
    /// Takes ownership of `path`, removing any stale file left behind by a
    /// previous run.
    pub fn claim(path: PathBuf) -> Self {
        if path.exists() {
            if let Err(e) = std::fs::remove_file(&path) {
                tracing::warn!("Failed to remove stale recording {:?}: {}", path, e);
            }
        }
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempRecording {
    fn drop(&mut self) {
        if self.path.exists() {
            if let Err(e) = std::fs::remove_file(&self.path) {
                tracing::warn!("Failed to delete recording {:?}: {}", self.path, e);
            } else {
                tracing::debug!("Deleted recording {:?}", self.path);
            }
        }
    }
}

/// Records a clip of at most `max_duration_secs` to the temp path and returns
/// the guard owning the file.
pub async fn record(config: &RecorderConfig) -> Result<TempRecording> {
    let recording = TempRecording::claim(recording_path());
    let args = recorder_args(config, recording.path());

    tracing::info!("Launching recorder: {} {}", config.command, args.join(" "));

    let child = Command::new(&config.command)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| {
            TalkToMeError::RecorderError(format!("Failed to launch '{}': {}", config.command, e))
        })?;

    let status = wait_with_deadline(child, Duration::from_secs(config.max_duration_secs)).await?;

    match status {
        Some(status) if status.success() => {
            tracing::info!("Recorder finished before the deadline");
        }
        Some(status) => {
            if !recording.path().exists() {
                return Err(TalkToMeError::RecorderError(format!(
                    "Recorder exited with {} and produced no audio",
                    status
                )));
            }
            tracing::warn!("Recorder exited with {}, keeping partial audio", status);
        }
        None => {
            tracing::info!("Recording deadline reached, recorder stopped");
        }
    }

    if !recording.path().exists() {
        return Err(TalkToMeError::RecorderError(
            "Recorder produced no audio file".to_string(),
        ));
    }

    Ok(recording)
}

/// Waits for the child, killing it when the deadline expires. Returns the
/// exit status, or `None` if the process had to be killed.
pub async fn wait_with_deadline(mut child: Child, deadline: Duration) -> Result<Option<ExitStatus>> {
    match tokio::time::timeout(deadline, child.wait()).await {
        Ok(status) => Ok(Some(status?)),
        Err(_) => {
            child.kill().await.map_err(|e| {
                TalkToMeError::RecorderError(format!("Failed to stop recorder: {}", e))
            })?;
            child.wait().await?;
            Ok(None)
        }
    }
}

/// Builds the sox-style argument list: sample rate, channel count, bit depth,
/// output path, and a trim window capping the capture length.
fn recorder_args(config: &RecorderConfig, output: &Path) -> Vec<String> {
    vec![
        "-r".to_string(),
        config.sample_rate.to_string(),
        "-c".to_string(),
        config.channels.to_string(),
        "-b".to_string(),
        config.bit_depth.to_string(),
        output.display().to_string(),
        "trim".to_string(),
        "0".to_string(),
        config.max_duration_secs.to_string(),
    ]
}
