pub mod client;
pub mod types;

pub use client::WhisperClient;
pub use types::{TranscriptionRequest, TranscriptionResponse};
