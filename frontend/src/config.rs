//! Application configuration.
//!
//! Centralized constants for the upload widget. The acceptance rules mirror
//! the server's (`audioscribe-backend`); the client-side check is advisory
//! and exists to fail fast before any bytes leave the browser.

/// Upload endpoint, relative to the page origin (the backend serves both).
pub const UPLOAD_ENDPOINT: &str = "/upload";

/// Accepted audio extensions, lowercase.
pub const ALLOWED_EXTENSIONS: &[&str] = &["wav", "mp3", "m4a", "flac", "ogg", "aac"];

/// Maximum file size for upload (in bytes).
///
/// 25 MiB, the Whisper API limit.
pub const MAX_FILE_SIZE: u64 = 25 * 1024 * 1024;

/// Tick period of the simulated-progress timer, in milliseconds.
pub const PROGRESS_TICK_MS: u64 = 200;

/// Largest per-tick progress increment; each tick adds a uniform
/// random amount in `[0, PROGRESS_STEP_MAX)`.
pub const PROGRESS_STEP_MAX: f64 = 15.0;

/// The simulated percentage holds here until the response arrives.
pub const PROGRESS_CEILING: f64 = 90.0;

/// Pause between snapping the bar to 100% and revealing the outcome.
pub const RESPONSE_SETTLE_MS: u32 = 500;

/// How long the copy button shows its "Copied!" confirmation.
pub const COPY_FEEDBACK_MS: u64 = 2000;

/// How long the drop zone shows the selected file name.
pub const PREVIEW_REVERT_MS: u64 = 3000;
