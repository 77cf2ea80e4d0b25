//! Transcription result display with copy-to-clipboard.

use std::time::Duration;

use leptos::*;

use crate::config::COPY_FEEDBACK_MS;
use crate::services::copy_text;
use crate::types::{UiState, WidgetError};

#[component]
pub fn ResultSection(
    transcription: Signal<String>,
    set_state: WriteSignal<UiState>,
) -> impl IntoView {
    let (copied, set_copied) = create_signal(false);

    let on_copy = move |_| {
        let text = transcription.get_untracked();
        spawn_local(async move {
            match copy_text(&text).await {
                Ok(()) => {
                    set_copied.set(true);
                    set_timeout(
                        move || set_copied.set(false),
                        Duration::from_millis(COPY_FEEDBACK_MS),
                    );
                }
                Err(e) => {
                    if let WidgetError::Clipboard(ref detail) = e {
                        log::error!("Copy failed: {}", detail);
                    }
                    set_state.set(UiState::Error(e.to_string()));
                }
            }
        });
    };

    view! {
        <div class="result-section" id="resultSection">
            <h3>"Transcription"</h3>
            <p class="transcription-text" id="transcriptionText">{transcription}</p>
            <button
                class="copy-btn"
                id="copyBtn"
                class:copied=move || copied.get()
                on:click=on_copy
            >
                {move || if copied.get() { "✔ Copied!" } else { "📋 Copy to clipboard" }}
            </button>
        </div>
    }
}
