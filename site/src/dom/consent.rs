//! Consent modal mounting and the consent console helpers.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::{expose_global, listen, when_ready};
use crate::analytics::GtagAnalytics;
use crate::components::consent_modal::{ACCEPT_BUTTON_ID, ConsentModal, OVERLAY_CLASS, REJECT_BUTTON_ID};
use crate::config::SiteConfig;
use crate::consent::{ConsentChoice, ConsentDecision, ConsentManager};
use crate::i18n::STATUS_ELEMENT_ID;
use crate::storage::LocalStore;

type Manager = Rc<RefCell<ConsentManager<LocalStore, GtagAnalytics>>>;

pub(super) fn install(document: &Document, config: SiteConfig) {
    let manager: Manager = Rc::new(RefCell::new(ConsentManager::new(LocalStore, GtagAnalytics, config)));
    expose_helpers(&manager);

    let document_for_init = document.clone();
    when_ready(document, move || {
        let decision = manager.borrow_mut().init();
        match decision {
            ConsentDecision::Applied(choice) => log::debug!("stored consent {choice} applied"),
            ConsentDecision::ShowModal => show_modal(&document_for_init, &manager),
        }
    });
}

fn show_modal(document: &Document, manager: &Manager) {
    let Some(body) = document.body() else {
        retry_on_load(document, manager);
        return;
    };
    let handle = leptos::mount::mount_to(body.clone(), || view! { <ConsentModal/> });
    set_body_overflow(&body, Some("hidden"));

    let overlay = document
        .query_selector(&format!(".{OVERLAY_CLASS}"))
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let mounted = Rc::new(RefCell::new(Some(handle)));

    for (id, choice) in [(ACCEPT_BUTTON_ID, ConsentChoice::Granted), (REJECT_BUTTON_ID, ConsentChoice::Denied)] {
        let Some(button) = document.get_element_by_id(id) else {
            log::error!("consent modal rendered without #{id}");
            continue;
        };
        let manager = Rc::clone(manager);
        let mounted = Rc::clone(&mounted);
        let overlay = overlay.clone();
        let body = body.clone();
        listen(&button, "click", move |_| {
            if mounted.borrow().is_none() {
                return;
            }
            let fade = manager.borrow_mut().choose(choice);
            if let Some(overlay) = overlay.as_ref() {
                let style = overlay.style();
                let _ = style.set_property("transition", &format!("opacity {}s ease-out", fade.as_secs_f32()));
                let _ = style.set_property("opacity", "0");
            }
            let handle = mounted.borrow_mut().take();
            let body = body.clone();
            let millis = u32::try_from(fade.as_millis()).unwrap_or(u32::MAX);
            Timeout::new(millis, move || {
                drop(handle);
                set_body_overflow(&body, None);
            })
            .forget();
        });
    }
}

/// `<body>` can still be missing right after `DOMContentLoaded` when the
/// document is assembled by script; try once more on `load`.
fn retry_on_load(document: &Document, manager: &Manager) {
    let Some(window) = web_sys::window() else {
        log::error!("consent modal needs <body>");
        return;
    };
    log::debug!("consent modal waiting for <body>");
    let document = document.clone();
    let mut manager = Some(Rc::clone(manager));
    listen(&window, "load", move |_| {
        let Some(manager) = manager.take() else {
            return;
        };
        if document.body().is_some() {
            show_modal(&document, &manager);
        } else {
            log::error!("consent modal needs <body>");
        }
    });
}

fn set_body_overflow(body: &HtmlElement, value: Option<&str>) {
    let style = body.style();
    let result = match value {
        Some(value) => style.set_property("overflow", value),
        None => style.remove_property("overflow").map(|_| ()),
    };
    if let Err(e) = result {
        log::warn!("failed to set body overflow: {e:?}");
    }
}

fn expose_helpers(manager: &Manager) {
    let for_reset = Rc::clone(manager);
    expose_global("resetCookieConsent", move || {
        if let Err(e) = for_reset.borrow_mut().reset() {
            log::error!("consent reset incomplete: {e}");
        }
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                log::error!("reload failed: {e:?}");
            }
        }
    });

    let for_status = Rc::clone(manager);
    expose_global("showConsentStatus", move || {
        let status = for_status.borrow().status();
        log::info!("{status}");
        if let Some(el) = super::document().and_then(|d| d.get_element_by_id(STATUS_ELEMENT_ID)) {
            el.set_text_content(Some(&status.to_string()));
        }
    });
}
