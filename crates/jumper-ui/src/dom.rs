//! Thin wrappers over browser APIs used by the components.

use wasm_bindgen::{JsCast, JsValue};

/// Smoothly scroll the window back to the top.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Open `url` in a new tab without giving it access to this window.
pub fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) =
        window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
    {
        log::warn!("failed to open {url}: {err:?}");
    }
}

/// Write `text` to the clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let clipboard = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))?;
    let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))?
        .dyn_into::<js_sys::Function>()?;
    write_text.call1(&clipboard, &JsValue::from_str(text))?;
    Ok(())
}

/// Horizontal position of the first touch point.
///
/// Falls back to `changedTouches` so it also works on `touchend`.
pub fn touch_x(event: &web_sys::TouchEvent) -> Option<f64> {
    event
        .touches()
        .get(0)
        .or_else(|| event.changed_touches().get(0))
        .map(|touch| f64::from(touch.client_x()))
}
