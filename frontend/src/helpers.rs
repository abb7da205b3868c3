//! Small browser utilities shared by the pages.
//!
//! - **API calls**: `get_json` / `post_json` wrap `gloo_net` and turn transport,
//!   status and decoding failures into a readable `String`.
//! - **User Feedback**: `show_toast` displays a temporary notification.
//! - **Form reading**: `selected_values` collects the selected options of a
//!   `<select multiple>`.

use gloo_net::http::Request;
use num_format::{Locale, ToFormattedString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlOptionElement, HtmlSelectElement};

/// Fetches `url` and decodes the JSON body.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let resp = Request::get(url).send().await.map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("{} answered {}", url, resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Posts `body` as JSON to `url` and decodes the JSON answer.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, String> {
    let resp = Request::post(url)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("{} answered {}", url, resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Displays a temporary notification message at the bottom of the screen.
///
/// The toast removes itself after three seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Logs a failed request to the console and tells the user about it.
pub fn report_failure(context: &str, error: &str) {
    gloo_console::error!(format!("{}: {}", context, error));
    show_toast(&format!("{} failed", context));
}

/// Integer with thousands separators, e.g. `292,364`.
pub fn format_count(n: usize) -> String {
    n.to_formatted_string(&Locale::en)
}

/// Values of every selected `<option>` in a multi-select.
pub fn selected_values(select: &HtmlSelectElement) -> Vec<String> {
    let options = select.selected_options();
    (0..options.length())
        .filter_map(|i| options.item(i))
        .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
        .map(|opt| opt.value())
        .collect()
}
