//! UI Components for the Audioscribe widget.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - drop zone, validation, upload cycle
//! - [`ProgressSection`] - simulated progress bar with phase label
//! - [`ResultSection`] - transcription display with copy action
//! - [`ErrorSection`] - error message display

mod error;
mod footer;
mod hero;
mod progress;
mod result;
mod upload;

pub use error::*;
pub use footer::*;
pub use hero::*;
pub use progress::*;
pub use result::*;
pub use upload::*;
