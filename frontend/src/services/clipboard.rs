//! Copy-to-clipboard with a legacy fallback.
//!
//! Primary path is the asynchronous `navigator.clipboard` API; when it is
//! unavailable (insecure context, older browser) or the write is rejected,
//! an off-screen `<textarea>` plus `document.execCommand("copy")` takes over.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement};

use crate::types::{WidgetError, WidgetResult};

/// Copy `text` to the system clipboard.
pub async fn copy_text(text: &str) -> WidgetResult<()> {
    if let Some(clipboard) = async_clipboard() {
        if JsFuture::from(clipboard.write_text(text)).await.is_ok() {
            return Ok(());
        }
        log::debug!("navigator.clipboard write rejected, falling back to execCommand");
    }
    fallback_copy(text)
}

/// The async clipboard, if the browser exposes one.
fn async_clipboard() -> Option<web_sys::Clipboard> {
    let clipboard = web_sys::window()?.navigator().clipboard();
    // Undefined on insecure contexts
    if JsValue::from(clipboard.clone()).is_undefined() {
        None
    } else {
        Some(clipboard)
    }
}

/// Legacy path: select the text inside a hidden textarea and issue the
/// synchronous copy command.
fn fallback_copy(text: &str) -> WidgetResult<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| WidgetError::Clipboard("no document".to_string()))?;

    let textarea: HtmlTextAreaElement = document
        .create_element("textarea")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| WidgetError::Clipboard("textarea cast failed".to_string()))?;
    textarea.set_value(text);

    // Off-screen, without scrolling the page
    let style = textarea.style();
    let _ = style.set_property("position", "fixed");
    let _ = style.set_property("left", "-9999px");
    let _ = style.set_property("top", "-9999px");

    let body = document
        .body()
        .ok_or_else(|| WidgetError::Clipboard("no body".to_string()))?;
    body.append_child(&textarea).map_err(js_err)?;

    let _ = textarea.focus();
    textarea.select();

    let copied = document
        .dyn_ref::<HtmlDocument>()
        .and_then(|d| d.exec_command("copy").ok())
        .unwrap_or(false);

    textarea.remove();

    if copied {
        Ok(())
    } else {
        Err(WidgetError::Clipboard("execCommand rejected".to_string()))
    }
}

fn js_err(e: JsValue) -> WidgetError {
    WidgetError::Clipboard(format!("{:?}", e))
}
