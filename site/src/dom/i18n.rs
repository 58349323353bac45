//! Dictionary fetching and `[data-i18n]` application.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlSelectElement};

use super::{listen, query_all, when_ready};
use crate::config::SiteConfig;
use crate::i18n::{
    Dictionary, FETCH_FAILURE_NOTICE, I18n, I18nError, LANG_SELECT_ID, LoadOutcome, LoadTicket, STATUS_ELEMENT_ID,
    TranslationTarget, apply_translations,
};
use crate::storage::LocalStore;

type Loader = Rc<RefCell<I18n<LocalStore>>>;

/// A `[data-i18n]` element.
struct ElementTarget(Element);

impl TranslationTarget for ElementTarget {
    fn key(&self) -> Option<String> {
        self.0.get_attribute("data-i18n")
    }

    fn renders_html(&self) -> bool {
        self.0.has_attribute("data-i18n-html")
    }

    fn target_attribute(&self) -> Option<String> {
        self.0.get_attribute("data-i18n-attr").filter(|name| !name.is_empty())
    }

    fn set_text(&mut self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_html(&mut self, html: &str) {
        self.0.set_inner_html(html);
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        if let Err(e) = self.0.set_attribute(name, value) {
            log::warn!("failed to set {name}: {e:?}");
        }
    }
}

pub(super) fn install(document: &Document, config: SiteConfig) {
    let pathname = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    let loader: Loader = Rc::new(RefCell::new(I18n::new(LocalStore, config, pathname)));
    expose_api(&loader);

    let document_for_init = document.clone();
    when_ready(document, move || {
        if let Some(select) = document_for_init.get_element_by_id(LANG_SELECT_ID) {
            let loader = Rc::clone(&loader);
            listen(&select.clone(), "change", move |_| {
                if let Some(select) = select.dyn_ref::<HtmlSelectElement>() {
                    change_language(&loader, &select.value());
                }
            });
        }
        let ticket = loader.borrow_mut().begin_initial_load();
        spawn_load(loader, ticket);
    });
}

fn change_language(loader: &Loader, code: &str) {
    let ticket = loader.borrow_mut().set_language(code);
    match ticket {
        Ok(ticket) => spawn_load(Rc::clone(loader), ticket),
        Err(e) => log::warn!("{e}"),
    }
}

fn spawn_load(loader: Loader, ticket: LoadTicket) {
    wasm_bindgen_futures::spawn_local(async move {
        let result = fetch_dictionary(&ticket.url).await;
        let outcome = loader.borrow().complete(ticket, result);
        let Some(document) = super::document() else {
            return;
        };
        match outcome {
            LoadOutcome::Apply { lang, dict } => {
                let mut targets: Vec<ElementTarget> =
                    query_all(&document, "[data-i18n]").into_iter().map(ElementTarget).collect();
                let applied = apply_translations(&dict, targets.iter_mut());
                log::debug!("applied {applied} {lang} translations");
                if let Some(select) = document
                    .get_element_by_id(LANG_SELECT_ID)
                    .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
                {
                    select.set_value(lang.code());
                }
            }
            LoadOutcome::Stale => {}
            LoadOutcome::Failed(_) => {
                if let Some(status) = document.get_element_by_id(STATUS_ELEMENT_ID) {
                    status.set_text_content(Some(FETCH_FAILURE_NOTICE));
                }
            }
        }
    });
}

async fn fetch_dictionary(url: &str) -> Result<Dictionary, I18nError> {
    let fetch_error = |reason: String| I18nError::Fetch { url: url.to_owned(), reason };
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| fetch_error(e.to_string()))?;
    if !resp.ok() {
        return Err(I18nError::Status { url: url.to_owned(), status: resp.status() });
    }
    let body = resp.text().await.map_err(|e| fetch_error(e.to_string()))?;
    Dictionary::from_json(url, &body)
}

/// `window.SiteI18n = { setLanguage(code), getLanguage() }`.
fn expose_api(loader: &Loader) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let api = js_sys::Object::new();

    let for_set = Rc::clone(loader);
    let set = Closure::wrap(Box::new(move |code: String| change_language(&for_set, &code)) as Box<dyn FnMut(String)>);
    let for_get = Rc::clone(loader);
    let get = Closure::wrap(
        Box::new(move || for_get.borrow().current_language().code().to_owned()) as Box<dyn FnMut() -> String>
    );

    let installed = js_sys::Reflect::set(&api, &"setLanguage".into(), set.as_ref().unchecked_ref())
        .and_then(|_| js_sys::Reflect::set(&api, &"getLanguage".into(), get.as_ref().unchecked_ref()))
        .and_then(|_| js_sys::Reflect::set(&window, &"SiteI18n".into(), &api));
    if let Err(e) = installed {
        log::warn!("failed to expose SiteI18n: {e:?}");
    }
    set.forget();
    get.forget();
}
