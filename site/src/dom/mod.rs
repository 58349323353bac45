//! Browser binding: wires the plain-Rust cores to the live document.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only compiled with the `hydrate` feature. [`start`] runs once when the WASM
//! module loads and sets up the three independent components: consent, i18n,
//! and page interactions. Each keeps its core behind `Rc<RefCell<..>>` shared
//! with the event closures it registers; closures are leaked with `forget`
//! since they live as long as the page.
//!
//! ERROR HANDLING
//! ==============
//! `web-sys` calls fail with opaque `JsValue`s. They are logged and the
//! affected feature degrades; nothing here panics.

mod consent;
mod i18n;
mod page;
mod share;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget};

use crate::analytics::{Analytics, GtagAnalytics, default_denied_command};
use crate::config::SiteConfig;

/// Id of the optional JSON config override block.
const CONFIG_SCRIPT_ID: &str = "site-config";

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let Some(document) = document() else {
        log::error!("no document; site runtime not started");
        return;
    };
    let config = load_config(&document);

    if !gtag_default_issued() {
        GtagAnalytics.command(&default_denied_command());
    }

    consent::install(&document, config.clone());
    i18n::install(&document, config.clone());
    page::install(&document, config);
}

fn load_config(document: &Document) -> SiteConfig {
    let Some(raw) = document.get_element_by_id(CONFIG_SCRIPT_ID).and_then(|el| el.text_content()) else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            log::error!("ignoring #{CONFIG_SCRIPT_ID}: {e}");
            SiteConfig::default()
        }
    }
}

/// Pages that set their own default consent push it onto `dataLayer` before
/// this module loads.
fn gtag_default_issued() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Ok(layer) = js_sys::Reflect::get(&window, &"dataLayer".into()) else {
        return false;
    };
    let Some(layer) = layer.dyn_ref::<js_sys::Array>() else {
        return false;
    };
    layer.iter().any(|entry| {
        let Some(args) = entry.dyn_ref::<js_sys::Object>() else {
            return false;
        };
        let first = js_sys::Reflect::get(args, &0.into()).ok().and_then(|v| v.as_string());
        let second = js_sys::Reflect::get(args, &1.into()).ok().and_then(|v| v.as_string());
        first.as_deref() == Some("consent") && second.as_deref() == Some("default")
    })
}

pub(crate) fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Register `handler` for `kind` events on `target` for the page's lifetime.
pub(crate) fn listen(target: &EventTarget, kind: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref()) {
        log::warn!("failed to listen for {kind}: {e:?}");
    }
    cb.forget();
}

/// Every element matching `selector`, in document order.
pub(crate) fn query_all(root: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        log::warn!("bad selector {selector}");
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Expose `f` as `window[name]` for page scripts and the console.
pub(crate) fn expose_global(name: &str, f: impl FnMut() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    if let Err(e) = js_sys::Reflect::set(&window, &name.into(), cb.as_ref().unchecked_ref()) {
        log::warn!("failed to expose window.{name}: {e:?}");
    }
    cb.forget();
}

/// Run `f` now if the DOM is parsed, otherwise on `DOMContentLoaded`.
pub(crate) fn when_ready(document: &Document, f: impl FnOnce() + 'static) {
    if document.ready_state() != web_sys::DocumentReadyState::Loading {
        f();
        return;
    }
    let mut f = Some(f);
    listen(document, "DOMContentLoaded", move |_| {
        if let Some(f) = f.take() {
            f();
        }
    });
}
