use std::io::Write;
use std::net::SocketAddr;
use talk_to_me::error::TalkToMeError;
use talk_to_me::transcription::client::file_size_mb;
use talk_to_me::transcription::{TranscriptionRequest, WhisperClient};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

#[test]
fn test_request_defaults() {
    let request = TranscriptionRequest::new("/tmp/recording.wav".into());

    assert_eq!(request.model, "whisper-1");
    assert_eq!(request.language, None);
    assert_eq!(request.prompt, None);
    assert_eq!(request.response_format.as_deref(), Some("json"));
}

#[test]
fn test_request_builders() {
    let request = TranscriptionRequest::new("/tmp/recording.wav".into())
        .with_model("whisper-large-v3")
        .with_language("en")
        .with_prompt("Dictated note");

    assert_eq!(request.model, "whisper-large-v3");
    assert_eq!(request.language.as_deref(), Some("en"));
    assert_eq!(request.prompt.as_deref(), Some("Dictated note"));
}

#[test]
fn test_file_size_mb() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&vec![0u8; 1024 * 1024]).unwrap();
    file.flush().unwrap();

    let size = file_size_mb(file.path()).unwrap();
    assert!((size - 1.0).abs() < 0.01);
}

#[test]
fn test_file_size_mb_missing_file() {
    assert!(file_size_mb(std::path::Path::new("/no/such/recording.wav")).is_err());
}

/// One-shot HTTP server: accepts a single connection, drains the upload,
/// answers with the canned response, then closes.
async fn serve_once(status_line: &'static str, body: &'static str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        read_request(&mut stream).await;

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();
    });

    addr
}

/// Reads headers plus the Content-Length body so the client finishes its
/// multipart upload before the response goes out.
async fn read_request(stream: &mut TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 8192];

    let header_end = loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
    let content_length: usize = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0);

    let mut body_read = buf.len() - header_end;
    while body_read < content_length {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            return;
        }
        body_read += n;
    }
}

fn temp_wav() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"RIFF\x00\x00\x00\x00WAVE").unwrap();
    file.flush().unwrap();
    file
}

#[tokio::test]
async fn test_transcribe_returns_api_text_unmodified() {
    // Leading/trailing whitespace and non-ASCII must survive untouched.
    let addr = serve_once("200 OK", r#"{"text":"  Guten Tag, wörld!  "}"#).await;

    let file = temp_wav();
    let client =
        WhisperClient::new("sk-test".to_string()).with_base_url(format!("http://{}", addr));
    let request = TranscriptionRequest::new(file.path().to_path_buf());

    let response = client.transcribe(request).await.unwrap();
    assert_eq!(response.text, "  Guten Tag, wörld!  ");
    assert_eq!(response.duration, None);
    assert_eq!(response.language, None);
}

#[tokio::test]
async fn test_transcribe_maps_error_status_and_body() {
    let addr = serve_once("401 Unauthorized", r#"{"error":"invalid_api_key"}"#).await;

    let file = temp_wav();
    let client =
        WhisperClient::new("sk-bad".to_string()).with_base_url(format!("http://{}", addr));
    let request = TranscriptionRequest::new(file.path().to_path_buf());

    match client.transcribe(request).await {
        Err(TalkToMeError::ApiError { status, message }) => {
            assert_eq!(status, 401);
            assert!(message.contains("invalid_api_key"));
        }
        other => panic!("expected ApiError, got {:?}", other.map(|r| r.text)),
    }
}

#[tokio::test]
async fn test_transcribe_rejects_malformed_response_body() {
    let addr = serve_once("200 OK", "not json").await;

    let file = temp_wav();
    let client =
        WhisperClient::new("sk-test".to_string()).with_base_url(format!("http://{}", addr));
    let request = TranscriptionRequest::new(file.path().to_path_buf());

    match client.transcribe(request).await {
        Err(TalkToMeError::JsonError(_)) => {}
        other => panic!("expected JsonError, got {:?}", other.map(|r| r.text)),
    }
}
