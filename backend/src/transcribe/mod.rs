//! Whisper API client for audio transcription.
//!
//! Sends the uploaded audio to an OpenAI-compatible `audio/transcriptions`
//! endpoint as multipart form data with bearer authentication.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use audioscribe::transcribe::TranscriberClient;
//!
//! let client = TranscriberClient::from_env()?;
//! let text = client.transcribe("speech.mp3", audio_bytes).await?;
//! ```

use serde::Deserialize;
use std::env;
use std::path::Path;

use crate::error::{TranscribeError, TranscribeResult};
use crate::validation::{file_extension, mime_for_extension};

/// Default transcription model.
const DEFAULT_MODEL: &str = "whisper-1";

/// Default OpenAI-compatible transcriptions endpoint.
const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/audio/transcriptions";

/// Whisper API response body (`response_format=json`).
#[derive(Debug, Deserialize)]
struct TranscriptionPayload {
    text: String,
}

/// Whisper API client.
#[derive(Clone)]
pub struct TranscriberClient {
    api_key: String,
    model: String,
    endpoint: String,
}

impl TranscriberClient {
    /// Create a new client with an explicit API key.
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Create a client from the OPENAI_API_KEY environment variable.
    pub fn from_env() -> TranscribeResult<Self> {
        // Try loading .env file
        let _ = dotenvy::dotenv();

        let api_key = env::var("OPENAI_API_KEY").map_err(|_| TranscribeError::MissingApiKey)?;
        Ok(Self::new(api_key))
    }

    /// Set the model to use.
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Point the client at a different OpenAI-compatible endpoint.
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }

    /// Model the client will request.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Transcribe raw audio bytes uploaded under `file_name`.
    ///
    /// The filename determines the MIME type of the multipart `file` part.
    /// No retries: every failure is terminal for the current attempt.
    pub async fn transcribe(&self, file_name: &str, audio: Vec<u8>) -> TranscribeResult<String> {
        let mime = file_extension(file_name)
            .as_deref()
            .map(mime_for_extension)
            .unwrap_or("application/octet-stream");

        let file_part = reqwest::multipart::Part::bytes(audio)
            .file_name(file_name.to_string())
            .mime_str(mime)
            .map_err(|e| TranscribeError::Request(format!("Failed to build file part: {e}")))?;

        let form = reqwest::multipart::Form::new()
            .part("file", file_part)
            .text("model", self.model.clone())
            .text("response_format", "json");

        let client = reqwest::Client::new();
        let response = client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscribeError::Request(describe_transport_error(&e)))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(TranscribeError::Api {
                status,
                message: describe_api_status(status, &body),
            });
        }

        let payload: TranscriptionPayload = response
            .json()
            .await
            .map_err(|e| TranscribeError::InvalidResponse(e.to_string()))?;

        Ok(payload.text.trim().to_string())
    }

    /// Read a local file and transcribe it (CLI path).
    pub async fn transcribe_file(&self, path: &Path) -> TranscribeResult<String> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio")
            .to_string();
        let audio = tokio::fs::read(path).await?;
        self.transcribe(&file_name, audio).await
    }
}

/// Human-readable message for transport-level failures.
fn describe_transport_error(e: &reqwest::Error) -> String {
    if e.is_connect() {
        "Failed to connect to the transcription API. Check your internet connection.".to_string()
    } else if e.is_timeout() {
        "Request to the transcription API timed out.".to_string()
    } else {
        format!("Transcription API network error: {e}")
    }
}

/// Map upstream HTTP status codes to the messages surfaced to users.
pub fn describe_api_status(status: u16, body: &str) -> String {
    match status {
        401 => "Invalid OpenAI API key. Please check your API key.".to_string(),
        429 => "Rate limit exceeded. Please try again later.".to_string(),
        500 | 502 | 503 | 504 => {
            "The transcription service is experiencing issues. Please try again later.".to_string()
        }
        _ => format!("OpenAI API error (status {status}): {body}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_deserialization() {
        let json = r#"{"text": "  hello world \n"}"#;
        let payload: TranscriptionPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.text.trim(), "hello world");
    }

    #[test]
    fn test_client_defaults() {
        let client = TranscriberClient::new("sk-test".into());
        assert_eq!(client.model(), "whisper-1");
        assert_eq!(client.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_client_builders() {
        let client = TranscriberClient::new("sk-test".into())
            .with_model("whisper-large-v3")
            .with_endpoint("http://localhost:8000/v1/audio/transcriptions");
        assert_eq!(client.model(), "whisper-large-v3");
        assert!(client.endpoint.starts_with("http://localhost:8000"));
    }

    #[test]
    fn test_describe_api_status() {
        assert!(describe_api_status(401, "").contains("API key"));
        assert!(describe_api_status(429, "").contains("Rate limit"));
        assert!(describe_api_status(503, "").contains("try again later"));
        let other = describe_api_status(418, "teapot");
        assert!(other.contains("418"));
        assert!(other.contains("teapot"));
    }
}
