//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Audioscribe · Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-note">"Supported formats: WAV, MP3, M4A, FLAC, OGG, AAC (max 25MB)"</div>
        </footer>
    }
}
