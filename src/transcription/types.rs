use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    pub file_path: PathBuf,
    pub model: String,
    pub language: Option<String>,
    pub prompt: Option<String>,
    pub response_format: Option<String>,
}

impl TranscriptionRequest {
    pub fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            model: "whisper-1".to_string(),
            language: None,
            prompt: None,
            response_format: Some("json".to_string()),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionResponse {
    pub text: String,

    #[serde(default)]
    pub duration: Option<f64>,

    #[serde(default)]
    pub language: Option<String>,
}
