use std::sync::mpsc;
use talk_to_me::config::Config;
use talk_to_me::dictation::{self, DictationEvent};
use talk_to_me::error::TalkToMeError;
use talk_to_me::recorder;

#[test]
fn test_missing_credential_is_rejected_before_any_network_call() {
    // The credential gate sits in front of client construction, so an empty
    // key can never reach the API.
    let err = dictation::ensure_api_key("").unwrap_err();
    assert!(matches!(err, TalkToMeError::MissingApiKey));
    assert!(err.to_string().contains("API key not set"));
}

#[tokio::test]
async fn test_failed_recorder_funnels_into_failed_event() {
    let mut config = Config::default();
    config.recorder.command = "talk-to-me-no-such-recorder".to_string();
    config.whisper.api_key = "sk-test".to_string();

    let (tx, rx) = mpsc::channel();
    dictation::run(config, tx).await;

    let events: Vec<DictationEvent> = rx.try_iter().collect();

    assert!(matches!(events.first(), Some(DictationEvent::RecordingStarted)));
    match events.last() {
        Some(DictationEvent::Failed { message }) => {
            assert!(message.contains("Recorder error"));
        }
        other => panic!("expected Failed event, got {:?}", other),
    }

    // Recording never reached processing
    assert!(!events
        .iter()
        .any(|e| matches!(e, DictationEvent::ProcessingStarted)));

    // Cleanup invariant: no temp file after the invocation
    assert!(!recorder::recording_path().exists());
}
