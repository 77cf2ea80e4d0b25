//! # Audioscribe - audio upload transcription service
//!
//! Audioscribe accepts an audio file from the web widget, validates it, and
//! turns it into text via an OpenAI-compatible Whisper API.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌──────────────┐
//! │ Audio File  │────▶│  Validation │────▶│ Whisper API │────▶│ Transcription│
//! │ (multipart) │     │ (ext, size) │     │ (multipart) │     │    (JSON)    │
//! └─────────────┘     └─────────────┘     └─────────────┘     └──────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use audioscribe::TranscriberClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = TranscriberClient::from_env().unwrap();
//!     let text = client.transcribe_file("speech.mp3".as_ref()).await.unwrap();
//!     println!("{}", text);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`validation`] - Upload acceptance rules (extensions, size, filenames)
//! - [`transcribe`] - Whisper API client
//! - [`api`] - HTTP API server

// Core modules
pub mod error;

// Upload acceptance
pub mod validation;

// Whisper API client
pub mod transcribe;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    ServerError,
    ServerResult,
    TranscribeError,
    TranscribeResult,
    UploadError,
    UploadResult,
};

// =============================================================================
// Re-exports - Validation
// =============================================================================

pub use validation::{
    file_extension,
    is_allowed_file,
    mime_for_extension,
    sanitize_filename,
    validate_upload,
    ALLOWED_EXTENSIONS,
    MAX_UPLOAD_BYTES,
};

// =============================================================================
// Re-exports - Transcription Client
// =============================================================================

pub use transcribe::{describe_api_status, TranscriberClient};

// =============================================================================
// Re-exports - API
// =============================================================================

pub use api::types::{error_response, TranscriptionResponse};

// Server
pub mod server {
    pub use crate::api::server::start_server;
}
