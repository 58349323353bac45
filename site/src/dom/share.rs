//! Share button fallback chain against the real browser APIs.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlDocument, HtmlTextAreaElement};

use crate::share::{ShareData, ShareError, ShareStep, ShareSupport};

pub(super) fn start(document: &Document) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let navigator = window.navigator();
    let support = ShareSupport {
        native: method(&navigator, "share").is_some(),
        clipboard: js_sys::Reflect::get(&navigator, &"clipboard".into())
            .is_ok_and(|c| !c.is_undefined() && !c.is_null()),
    };
    let text = document
        .query_selector("meta[name=\"description\"]")
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
        .unwrap_or_default();
    let data = ShareData { title: document.title(), text, url: window.location().href().unwrap_or_default() };

    let first = support.start(data);
    let document = document.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let mut step = first;
        loop {
            step = match step {
                ShareStep::Native(data) => {
                    let url = data.url.clone();
                    let result = native_share(&data).await;
                    support.after_native(url, result)
                }
                ShareStep::Clipboard(url) => {
                    let result = clipboard_write(&url).await;
                    support.after_clipboard(url, result)
                }
                ShareStep::TextareaCopy(url) => {
                    let copied = textarea_copy(&document, &url);
                    support.after_textarea_copy(url, copied)
                }
                ShareStep::Done(notice) => {
                    if let Some(notice) = notice {
                        let _ = window.alert_with_message(&notice.message());
                    }
                    return;
                }
            };
        }
    });
}

fn method(target: &JsValue, name: &str) -> Option<js_sys::Function> {
    js_sys::Reflect::get(target, &name.into()).ok()?.dyn_into::<js_sys::Function>().ok()
}

fn share_error(err: &JsValue) -> ShareError {
    let field = |name: &str| {
        js_sys::Reflect::get(err, &name.into())
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default()
    };
    ShareError::from_dom(&field("name"), &field("message"))
}

async fn call_promise(this: &JsValue, name: &str, arg: &JsValue) -> Result<(), ShareError> {
    let Some(f) = method(this, name) else {
        return Err(ShareError::Failed(format!("{name} unavailable")));
    };
    let promise = f
        .call1(this, arg)
        .map_err(|e| share_error(&e))?
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| ShareError::Failed(format!("{name} returned no promise")))?;
    JsFuture::from(promise).await.map(|_| ()).map_err(|e| share_error(&e))
}

async fn native_share(data: &ShareData) -> Result<(), ShareError> {
    let Some(window) = web_sys::window() else {
        return Err(ShareError::Failed("no window".to_owned()));
    };
    let payload = js_sys::Object::new();
    for (key, value) in [("title", &data.title), ("text", &data.text), ("url", &data.url)] {
        let _ = js_sys::Reflect::set(&payload, &key.into(), &value.into());
    }
    call_promise(&window.navigator(), "share", &payload).await
}

async fn clipboard_write(url: &str) -> Result<(), ShareError> {
    let Some(window) = web_sys::window() else {
        return Err(ShareError::Failed("no window".to_owned()));
    };
    let clipboard = js_sys::Reflect::get(&window.navigator(), &"clipboard".into()).map_err(|e| share_error(&e))?;
    call_promise(&clipboard, "writeText", &url.into()).await
}

/// Copy through a hidden `<textarea>` and `execCommand("copy")`.
fn textarea_copy(document: &Document, url: &str) -> bool {
    let Some(body) = document.body() else {
        return false;
    };
    let Some(textarea) = document
        .create_element("textarea")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok())
    else {
        return false;
    };
    textarea.set_value(url);
    let style = textarea.style();
    let _ = style.set_property("position", "fixed");
    let _ = style.set_property("opacity", "0");
    if body.append_child(&textarea).is_err() {
        return false;
    }
    textarea.select();
    let copied = document
        .dyn_ref::<HtmlDocument>()
        .is_some_and(|doc| doc.exec_command("copy").unwrap_or(false));
    textarea.remove();
    copied
}
