//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **UI State** - which section of the widget is visible
//! - **API Types** - upload endpoint payload
//! - **Error Types** - frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// UI State
// =============================================================================

/// Widget UI state.
///
/// Exactly one of the progress, result and error sections is visible at a
/// time; deriving visibility from this enum makes the exclusivity structural.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum UiState {
    /// Nothing in flight, no outcome shown.
    #[default]
    Idle,
    /// Request in flight; the progress section is visible.
    Uploading,
    /// Transcription received; the result section is visible.
    Success(String),
    /// Terminal failure; the error section is visible.
    Error(String),
}

impl UiState {
    pub fn is_uploading(&self) -> bool {
        matches!(self, UiState::Uploading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, UiState::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, UiState::Error(_))
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Payload of the upload endpoint.
///
/// The server sends exactly one of `transcription` or `error`; both fields
/// are optional here so that either shape decodes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UploadOutcome {
    #[serde(default)]
    pub transcription: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    /// Echoed filename; informational only.
    #[serde(default)]
    pub filename: Option<String>,
}

impl UploadOutcome {
    /// Resolve the payload into a transcription or an error message.
    ///
    /// `error` wins when both fields are present; a payload with neither is
    /// reported as a server error rather than shown as an empty result.
    pub fn into_result(self) -> WidgetResult<String> {
        if let Some(message) = self.error {
            return Err(WidgetError::Server(message));
        }
        match self.transcription {
            Some(text) => Ok(text),
            None => Err(WidgetError::Server(
                "The server returned an empty response".to_string(),
            )),
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend widget errors.
///
/// The `Display` strings are what the error section shows; transport and
/// clipboard details are kept in the variants for diagnostic logging only.
#[derive(Clone, Debug, PartialEq)]
pub enum WidgetError {
    /// Extension outside the accepted audio formats.
    InvalidFormat,
    /// File exceeds the 25MB limit.
    FileTooLarge,
    /// The server reported a failure (`error` field in the payload).
    Server(String),
    /// The request never produced a decodable payload.
    Network(String),
    /// Both clipboard paths failed.
    Clipboard(String),
}

impl fmt::Display for WidgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetError::InvalidFormat => {
                write!(f, "Please select a valid audio file (WAV, MP3, M4A, FLAC, OGG, AAC)")
            }
            WidgetError::FileTooLarge => write!(f, "File size must be less than 25MB"),
            WidgetError::Server(msg) => write!(f, "{}", msg),
            WidgetError::Network(_) => write!(f, "Network error. Please try again."),
            WidgetError::Clipboard(_) => write!(f, "Failed to copy text"),
        }
    }
}

impl std::error::Error for WidgetError {}

/// Result type alias for widget operations.
pub type WidgetResult<T> = Result<T, WidgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_transcription() {
        let outcome = UploadOutcome {
            transcription: Some("hello world".into()),
            error: None,
            filename: Some("speech.wav".into()),
        };
        assert_eq!(outcome.into_result().unwrap(), "hello world");
    }

    #[test]
    fn test_outcome_error() {
        let outcome = UploadOutcome {
            transcription: None,
            error: Some("bad audio".into()),
            filename: None,
        };
        let err = outcome.into_result().unwrap_err();
        assert_eq!(err.to_string(), "bad audio");
    }

    #[test]
    fn test_outcome_error_wins_over_transcription() {
        let outcome = UploadOutcome {
            transcription: Some("hello".into()),
            error: Some("bad audio".into()),
            filename: None,
        };
        assert!(matches!(outcome.into_result(), Err(WidgetError::Server(_))));
    }

    #[test]
    fn test_outcome_neither_field() {
        let outcome = UploadOutcome {
            transcription: None,
            error: None,
            filename: None,
        };
        let err = outcome.into_result().unwrap_err();
        assert!(err.to_string().contains("empty response"));
    }

    #[test]
    fn test_network_error_hides_detail() {
        let err = WidgetError::Network("connection reset by peer".into());
        assert_eq!(err.to_string(), "Network error. Please try again.");
    }

    #[test]
    fn test_ui_state_predicates() {
        assert!(UiState::Uploading.is_uploading());
        assert!(UiState::Success("x".into()).is_success());
        assert!(UiState::Error("x".into()).is_error());
        assert!(!UiState::Idle.is_uploading());
        assert_eq!(UiState::default(), UiState::Idle);
    }
}
