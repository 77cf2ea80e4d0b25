//! Audio upload component with drag & drop support.
//!
//! Owns the drop zone, file validation, and the upload cycle with its
//! simulated-progress timer.

use std::time::Duration;

use leptos::leptos_dom::helpers::IntervalHandle;
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::config::{
    ALLOWED_EXTENSIONS, MAX_FILE_SIZE, PREVIEW_REVERT_MS, PROGRESS_STEP_MAX, PROGRESS_TICK_MS,
    RESPONSE_SETTLE_MS,
};
use crate::services::upload_audio;
use crate::types::{UiState, WidgetError, WidgetResult};

use super::progress::advance;

#[component]
pub fn UploadSection(
    set_state: WriteSignal<UiState>,
    set_progress: WriteSignal<f64>,
) -> impl IntoView {
    let (dragover, set_dragover) = create_signal(false);
    let (preview_name, set_preview_name) = create_signal(None::<String>);

    // Handle of the simulated-progress interval; cleared on response arrival
    // and on teardown so no tick can fire after the cycle ends.
    let progress_timer: StoredValue<Option<IntervalHandle>> = store_value(None);

    on_cleanup(move || clear_progress_timer(progress_timer));

    let on_picked = move |file: File| {
        // The transient name preview runs regardless of validation outcome.
        show_selected_preview(&file.name(), set_preview_name);
        handle_file(file, set_state, set_progress, progress_timer);
    };

    let on_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_picked(file);
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_dragover.set(false);
        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            if let Some(file) = files.get(0) {
                on_picked(file);
            }
        }
    };

    // Clicking anywhere in the zone forwards to the hidden file input
    let trigger_file_input = move |_| {
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(input) = document.get_element_by_id("fileInput") {
                    if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
                        html_input.click();
                    }
                }
            }
        }
    };

    view! {
        <div
            class="upload-area"
            id="uploadArea"
            class:dragover=move || dragover.get()
            on:click=trigger_file_input
            on:dragover=move |ev: DragEvent| {
                ev.prevent_default();
                set_dragover.set(true);
            }
            on:dragleave=move |ev: DragEvent| {
                ev.prevent_default();
                set_dragover.set(false);
            }
            on:drop=on_drop
        >
            <div class="upload-content">
                <Show
                    when=move || preview_name.get().is_some()
                    fallback=|| view! {
                        <div class="upload-icon">"🎵"</div>
                        <h3>"Drop your audio file here"</h3>
                        <p>"or click to browse"</p>
                        <p class="upload-hint">"WAV, MP3, M4A, FLAC, OGG, AAC · up to 25MB"</p>
                    }
                >
                    <div class="upload-icon">"🎵"</div>
                    <h3>{move || format!("Selected: {}", preview_name.get().unwrap_or_default())}</h3>
                    <p>"Processing..."</p>
                </Show>
            </div>

            <input
                type="file"
                id="fileInput"
                accept=".wav,.mp3,.m4a,.flac,.ogg,.aac"
                style="display:none"
                on:change=on_change
            />
        </div>
    }
}

/// Swap the drop-zone content for a short "Selected: <name>" confirmation.
fn show_selected_preview(name: &str, set_preview_name: WriteSignal<Option<String>>) {
    set_preview_name.set(Some(name.to_string()));
    set_timeout(
        move || set_preview_name.set(None),
        Duration::from_millis(PREVIEW_REVERT_MS),
    );
}

/// Validate the selection and start the upload, or surface the validation error.
fn handle_file(
    file: File,
    set_state: WriteSignal<UiState>,
    set_progress: WriteSignal<f64>,
    progress_timer: StoredValue<Option<IntervalHandle>>,
) {
    if let Err(e) = validate_file(&file.name(), file.size() as u64) {
        set_state.set(UiState::Error(e.to_string()));
        return;
    }
    upload_file(file, set_state, set_progress, progress_timer);
}

/// Run one upload cycle: progress animation, POST, settle delay, final state.
fn upload_file(
    file: File,
    set_state: WriteSignal<UiState>,
    set_progress: WriteSignal<f64>,
    progress_timer: StoredValue<Option<IntervalHandle>>,
) {
    set_progress.set(0.0);
    set_state.set(UiState::Uploading);

    // A fresh cycle replaces any timer a previous one left behind.
    clear_progress_timer(progress_timer);
    let handle = set_interval_with_handle(
        move || set_progress.update(|p| *p = advance(*p, random_step())),
        Duration::from_millis(PROGRESS_TICK_MS),
    )
    .map_err(|e| log::error!("failed to start progress timer: {:?}", e))
    .ok();
    progress_timer.set_value(handle);

    spawn_local(async move {
        let outcome = upload_audio(&file).await;

        // The timer stops before the bar is forced to 100, so no tick can
        // land after the response.
        clear_progress_timer(progress_timer);

        match outcome {
            Ok(payload) => {
                set_progress.set(100.0);
                gloo_timers::future::TimeoutFuture::new(RESPONSE_SETTLE_MS).await;
                match payload.into_result() {
                    Ok(text) => set_state.set(UiState::Success(text)),
                    Err(e) => set_state.set(UiState::Error(e.to_string())),
                }
            }
            Err(e) => {
                if let WidgetError::Network(ref detail) = e {
                    log::error!("Upload failed: {}", detail);
                }
                set_state.set(UiState::Error(e.to_string()));
            }
        }
    });
}

fn clear_progress_timer(progress_timer: StoredValue<Option<IntervalHandle>>) {
    if let Some(handle) = progress_timer.try_update_value(|h| h.take()).flatten() {
        handle.clear();
    }
}

/// Uniform random progress increment in `[0, PROGRESS_STEP_MAX)`.
fn random_step() -> f64 {
    rand::random::<f64>() * PROGRESS_STEP_MAX
}

/// Lowercased suffix after the last `.`, if any.
fn file_extension(name: &str) -> Option<String> {
    name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase())
}

/// Client-side acceptance check. Format first, then size, matching the
/// server's rules.
pub fn validate_file(name: &str, size: u64) -> WidgetResult<()> {
    match file_extension(name) {
        Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => {}
        _ => return Err(WidgetError::InvalidFormat),
    }
    if size > MAX_FILE_SIZE {
        return Err(WidgetError::FileTooLarge);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_all_supported_extensions() {
        for name in ["a.wav", "a.mp3", "a.m4a", "a.flac", "a.ogg", "a.aac"] {
            assert!(validate_file(name, 1024).is_ok(), "{name} should pass");
        }
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert!(validate_file("Voice Memo.MP3", 1024).is_ok());
        assert!(validate_file("clip.WaV", 1024).is_ok());
    }

    #[test]
    fn test_rejects_unsupported_extensions() {
        for name in ["doc.pdf", "video.mp4", "noextension", "trailing."] {
            assert_eq!(
                validate_file(name, 1024).unwrap_err(),
                WidgetError::InvalidFormat,
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_oversize_files() {
        assert!(validate_file("a.wav", MAX_FILE_SIZE).is_ok());
        assert_eq!(
            validate_file("a.wav", MAX_FILE_SIZE + 1).unwrap_err(),
            WidgetError::FileTooLarge
        );
    }

    #[test]
    fn test_format_checked_before_size() {
        // Wrong extension on an oversize file reports the format error.
        assert_eq!(
            validate_file("huge.pdf", MAX_FILE_SIZE + 1).unwrap_err(),
            WidgetError::InvalidFormat
        );
    }

    #[test]
    fn test_random_step_range() {
        for _ in 0..100 {
            let step = random_step();
            assert!((0.0..PROGRESS_STEP_MAX).contains(&step));
        }
    }
}
