use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    pub whisper: WhisperConfig,
    pub recorder: RecorderConfig,
    pub ui: UiConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::default_path();

        if !path.exists() {
            tracing::info!("Config file not found, creating default at {:?}", path);
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::info!("Config loaded from {:?}", path);
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::default_path();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        tracing::info!("Config saved to {:?}", path);
        Ok(())
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("talk-to-me")
            .join("config.toml")
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WhisperConfig {
    pub api_key: String,
    pub model: String,
}

impl Default for WhisperConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "whisper-1".to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecorderConfig {
    /// External recorder executable (sox's `rec` by default).
    pub command: String,
    pub sample_rate: u32,
    pub channels: u16,
    pub bit_depth: u16,
    /// Hard cap on recording length; the deadline kill is authoritative
    /// even if the recorder ignores its own trim argument.
    pub max_duration_secs: u64,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            command: "rec".to_string(),
            sample_rate: 16000,
            channels: 1,
            bit_depth: 16,
            max_duration_secs: 10,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UiConfig {
    pub theme: String,
    /// When false, the transcription is only copied to the clipboard.
    pub paste_on_success: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "Dark".to_string(),
            paste_on_success: true,
        }
    }
}
