//! Error types for the Audioscribe transcription service.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`UploadError`] - upload acceptance failures
//! - [`TranscribeError`] - Whisper API client failures
//! - [`ServerError`] - top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Upload Errors
// =============================================================================

/// Errors while accepting an uploaded file.
///
/// The `Display` strings double as the `error` field of the JSON
/// response the widget shows to the user.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Multipart body carried no `file` field.
    #[error("No file part")]
    MissingFile,

    /// The `file` field had an empty filename.
    #[error("No selected file")]
    EmptyFilename,

    /// Extension outside the accepted audio formats.
    #[error("Invalid file type")]
    InvalidFormat,

    /// Larger than the 25MB Whisper API limit.
    #[error("File too large ({0} bytes, maximum is 25MB)")]
    TooLarge(u64),

    /// Malformed multipart body.
    #[error("Multipart error: {0}")]
    Multipart(String),
}

// =============================================================================
// Transcription Client Errors
// =============================================================================

/// Errors from the Whisper API client.
#[derive(Debug, Error)]
pub enum TranscribeError {
    /// Missing API key.
    #[error("OPENAI_API_KEY environment variable is required")]
    MissingApiKey,

    /// Failed to read the audio file.
    #[error("Failed to read audio file: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport failure before a response arrived.
    #[error("{0}")]
    Request(String),

    /// The API answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The API answered 2xx but the body was not the expected JSON.
    #[error("Failed to parse transcription response: {0}")]
    InvalidResponse(String),
}

// =============================================================================
// Server Errors (top-level)
// =============================================================================

/// Top-level server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Upload acceptance error.
    #[error("{0}")]
    Upload(#[from] UploadError),

    /// Transcription error.
    #[error("Error processing file: {0}")]
    Transcribe(#[from] TranscribeError),

    /// Server internal error.
    #[error("Internal server error: {0}")]
    Internal(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for upload acceptance.
pub type UploadResult<T> = Result<T, UploadError>;

/// Result type for transcription operations.
pub type TranscribeResult<T> = Result<T, TranscribeError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // UploadError -> ServerError
        let upload_err = UploadError::MissingFile;
        let server_err: ServerError = upload_err.into();
        assert_eq!(server_err.to_string(), "No file part");

        // TranscribeError -> ServerError
        let transcribe_err = TranscribeError::MissingApiKey;
        let server_err: ServerError = transcribe_err.into();
        assert!(server_err.to_string().starts_with("Error processing file:"));
        assert!(server_err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_upload_error_messages_match_api_contract() {
        assert_eq!(UploadError::MissingFile.to_string(), "No file part");
        assert_eq!(UploadError::EmptyFilename.to_string(), "No selected file");
        assert_eq!(UploadError::InvalidFormat.to_string(), "Invalid file type");
    }

    #[test]
    fn test_too_large_reports_size() {
        let err = UploadError::TooLarge(30 * 1024 * 1024);
        let msg = err.to_string();
        assert!(msg.contains("31457280"));
        assert!(msg.contains("25MB"));
    }

    #[test]
    fn test_api_error_display_is_message_only() {
        let err = TranscribeError::Api {
            status: 429,
            message: "Rate limit exceeded. Please try again later.".into(),
        };
        assert_eq!(err.to_string(), "Rate limit exceeded. Please try again later.");
    }
}
