//! Audioscribe - Frontend Rust/Leptos Application
//!
//! A WebAssembly widget for uploading audio files and displaying their
//! transcriptions.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (drop zone + hidden file input)          │
//! │  └── ProgressSection | ResultSection | ErrorSection         │
//! │      (at most one visible, driven by UiState)               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (UiState, UploadOutcome, WidgetError)
//! - [`components`] - UI components (Upload, Progress, Result, Error)
//! - [`services`] - Browser services (upload, clipboard)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod services;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{UiState, UploadOutcome, WidgetError, WidgetResult};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🎙️ Audioscribe - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Audioscribe - Audio Transcription"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Global state for the widget
    let (state, set_state) = create_signal(UiState::Idle);
    let (progress, set_progress) = create_signal(0.0_f64);

    let transcription = Signal::derive(move || match state.get() {
        UiState::Success(text) => text,
        _ => String::new(),
    });
    let error_message = Signal::derive(move || match state.get() {
        UiState::Error(message) => message,
        _ => String::new(),
    });

    view! {
        <div class="container">
            <Hero/>

            <UploadSection set_state=set_state set_progress=set_progress/>

            // At most one of the three sections below is visible at a time.
            <Show
                when=move || state.get().is_uploading()
                fallback=|| view! { }
            >
                <ProgressSection progress=progress/>
            </Show>

            <Show
                when=move || state.get().is_success()
                fallback=|| view! { }
            >
                <ResultSection transcription=transcription set_state=set_state/>
            </Show>

            <Show
                when=move || state.get().is_error()
                fallback=|| view! { }
            >
                <ErrorSection message=error_message/>
            </Show>
        </div>

        <Footer/>
    }
}
