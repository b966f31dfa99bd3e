use crate::error::{Result, TalkToMeError};
use crate::transcription::types::{TranscriptionRequest, TranscriptionResponse};
use std::path::Path;

/// The transcription API rejects uploads above this size.
const MAX_UPLOAD_MB: f64 = 25.0;

#[derive(Clone)]
pub struct WhisperClient {
    api_key: String,
    client: reqwest::Client,
    base_url: String,
}

impl WhisperClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            client: reqwest::Client::new(),
            base_url: "https://api.openai.com/v1".to_string(),
        }
    }

    /// Points the client at a different API root (local servers, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub async fn transcribe(&self, request: TranscriptionRequest) -> Result<TranscriptionResponse> {
        self.validate_file_size(&request.file_path)?;

        let form = self.build_multipart_form(&request).await?;

        tracing::info!("Sending transcription request to {}", self.base_url);

        let response = self
            .client
            .post(format!("{}/audio/transcriptions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("API error {}: {}", status, body);
            return Err(TalkToMeError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let result: TranscriptionResponse = serde_json::from_str(&body)?;
        tracing::info!("Transcription successful: {} characters", result.text.len());
        Ok(result)
    }

    fn validate_file_size(&self, path: &Path) -> Result<()> {
        let size_mb = file_size_mb(path)?;

        if size_mb > MAX_UPLOAD_MB {
            tracing::error!("File too large: {:.2} MB", size_mb);
            return Err(TalkToMeError::FileSizeError { size: size_mb });
        }

        tracing::debug!("File size: {:.2} MB", size_mb);
        Ok(())
    }

    async fn build_multipart_form(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<reqwest::multipart::Form> {
        let file_bytes = tokio::fs::read(&request.file_path).await?;
        let file_name = request
            .file_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio.wav")
            .to_string();

        let file_part = reqwest::multipart::Part::bytes(file_bytes)
            .file_name(file_name)
            .mime_str("audio/wav")?;

        let mut form = reqwest::multipart::Form::new()
            .part("file", file_part)
            .text("model", request.model.clone());

        if let Some(lang) = &request.language {
            form = form.text("language", lang.clone());
        }
        if let Some(prompt) = &request.prompt {
            form = form.text("prompt", prompt.clone());
        }
        if let Some(format) = &request.response_format {
            form = form.text("response_format", format.clone());
        }

        Ok(form)
    }
}

pub fn file_size_mb(path: &Path) -> Result<f64> {
    let metadata = std::fs::metadata(path)?;
    Ok(metadata.len() as f64 / (1024.0 * 1024.0))
}
