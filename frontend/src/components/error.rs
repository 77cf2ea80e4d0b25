//! Error message display.

use leptos::*;

#[component]
pub fn ErrorSection(message: Signal<String>) -> impl IntoView {
    view! {
        <div class="error-section" id="errorSection">
            <div class="error-icon">"⚠️"</div>
            <p class="error-text" id="errorText">{message}</p>
        </div>
    }
}
