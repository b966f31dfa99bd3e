pub mod app;
pub mod config;
pub mod dictation;
pub mod error;
pub mod inject;
pub mod notifications;
pub mod recorder;
pub mod transcription;
pub mod ui;

pub use error::{Result, TalkToMeError};
