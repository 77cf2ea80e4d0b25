//! REST API types for frontend integration.
//!
//! The widget expects exactly one of two JSON shapes from `/upload`:
//! `{"transcription": "...", "filename": "..."}` on success, or
//! `{"error": "..."}` on any failure.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Response sent to the widget after a successful transcription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionResponse {
    /// Transcribed text, verbatim from the Whisper API.
    pub transcription: String,

    /// Sanitized name of the uploaded file.
    pub filename: String,
}

/// Create an error response body.
pub fn error_response(error: &str) -> Value {
    json!({ "error": error })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_serialization() {
        let response = TranscriptionResponse {
            transcription: "hello world".into(),
            filename: "speech.wav".into(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["transcription"], "hello world");
        assert_eq!(value["filename"], "speech.wav");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_error_response_shape() {
        let value = error_response("bad audio");
        assert_eq!(value["error"], "bad audio");
        assert!(value.get("transcription").is_none());
    }
}
