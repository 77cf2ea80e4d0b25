//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Audioscribe"</h1>
            <p class="subtitle">
                "Drop an audio file and get its transcription back in seconds. "
                "Powered by the Whisper API."
            </p>
        </div>
    }
}
