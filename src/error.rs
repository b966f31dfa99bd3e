use thiserror::Error;

#[derive(Error, Debug)]
pub enum TalkToMeError {
    #[error("API key not set. Please set it in Settings.")]
    MissingApiKey,

    #[error("Recorder error: {0}")]
    RecorderError(String),

    #[error("Transcription API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("File too large: {size:.2} MB (limit: 25 MB)")]
    FileSizeError { size: f64 },

    #[error("Text injection error: {0}")]
    InjectionError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerError(#[from] toml::ser::Error),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, TalkToMeError>;
