//! Simulated upload progress bar.
//!
//! The percentage is decorative: it is advanced by a timer, not by transfer
//! telemetry, and holds at a ceiling until the server responds.

use leptos::*;

use crate::config::PROGRESS_CEILING;

#[component]
pub fn ProgressSection(progress: ReadSignal<f64>) -> impl IntoView {
    view! {
        <div class="progress-section" id="progressSection">
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    id="progressFill"
                    style:width=move || format!("{}%", progress.get())
                ></div>
            </div>
            <p class="progress-text" id="progressText">
                {move || phase_label(progress.get())}
            </p>
        </div>
    }
}

/// Textual phase shown under the bar.
pub fn phase_label(percentage: f64) -> &'static str {
    if percentage < 30.0 {
        "Uploading file..."
    } else if percentage < 70.0 {
        "Processing audio..."
    } else {
        "Transcribing..."
    }
}

/// Advance the simulated percentage, holding at the ceiling until the
/// response snaps it to 100.
pub fn advance(current: f64, step: f64) -> f64 {
    (current + step).min(PROGRESS_CEILING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_label_thresholds() {
        assert_eq!(phase_label(0.0), "Uploading file...");
        assert_eq!(phase_label(29.9), "Uploading file...");
        assert_eq!(phase_label(30.0), "Processing audio...");
        assert_eq!(phase_label(69.9), "Processing audio...");
        assert_eq!(phase_label(70.0), "Transcribing...");
        assert_eq!(phase_label(100.0), "Transcribing...");
    }

    #[test]
    fn test_advance_clamps_at_ceiling() {
        assert_eq!(advance(85.0, 10.0), PROGRESS_CEILING);
        assert_eq!(advance(90.0, 14.9), PROGRESS_CEILING);
    }

    #[test]
    fn test_advance_is_monotonic() {
        let mut current = 0.0;
        for _ in 0..100 {
            let next = advance(current, 7.5);
            assert!(next >= current);
            current = next;
        }
        assert_eq!(current, PROGRESS_CEILING);
    }
}
