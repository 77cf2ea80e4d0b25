//! REST API layer: HTTP server and response types.

pub mod server;
pub mod types;

pub use server::start_server;
pub use types::{error_response, TranscriptionResponse};
