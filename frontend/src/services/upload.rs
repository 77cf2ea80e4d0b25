//! HTTP service for uploading audio files to the transcription endpoint.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::UPLOAD_ENDPOINT;
use crate::types::{UploadOutcome, WidgetError, WidgetResult};

/// Upload an audio file as the `file` field of a multipart form.
///
/// The JSON body is decoded even on non-2xx responses, since the server
/// reports validation and transcription failures as `{"error": ...}` with a
/// 4xx status. Any transport or decoding failure collapses into
/// [`WidgetError::Network`], keeping the underlying detail for logging.
pub async fn upload_audio(file: &File) -> WidgetResult<UploadOutcome> {
    let form_data = FormData::new()
        .map_err(|e| WidgetError::Network(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob("file", file)
        .map_err(|e| WidgetError::Network(format!("Failed to append file: {:?}", e)))?;

    let request = Request::post(UPLOAD_ENDPOINT)
        .body(form_data)
        .map_err(|e| WidgetError::Network(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| WidgetError::Network(format!("HTTP request failed: {}", e)))?;

    response
        .json::<UploadOutcome>()
        .await
        .map_err(|e| WidgetError::Network(format!("Failed to decode response: {}", e)))
}

#[cfg(test)]
mod tests {
    use crate::types::UploadOutcome;

    #[test]
    fn test_success_payload_deserialization() {
        let json = r#"{
            "transcription": "hello world",
            "filename": "speech.wav"
        }"#;

        let outcome: UploadOutcome = serde_json::from_str(json).unwrap();
        assert_eq!(outcome.transcription.as_deref(), Some("hello world"));
        assert_eq!(outcome.filename.as_deref(), Some("speech.wav"));
        assert!(outcome.error.is_none());
    }

    #[test]
    fn test_error_payload_deserialization() {
        let json = r#"{"error": "Invalid file type"}"#;

        let outcome: UploadOutcome = serde_json::from_str(json).unwrap();
        assert!(outcome.transcription.is_none());
        assert_eq!(outcome.error.as_deref(), Some("Invalid file type"));
    }

    #[test]
    fn test_empty_payload_deserialization() {
        // Undefined server behavior tolerated at the decoding layer; the
        // resolution into an explicit error happens in UploadOutcome.
        let outcome: UploadOutcome = serde_json::from_str("{}").unwrap();
        assert!(outcome.into_result().is_err());
    }
}
