//! Page interaction binding: DOM events into [`PageCore`], actions back out.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, IntersectionObserver,
    IntersectionObserverEntry, KeyboardEvent, MediaQueryListEvent, Node, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

use super::{expose_global, listen, query_all, when_ready};
use crate::cards::RecipeCard;
use crate::components::pagination_bar::PaginationBar;
use crate::config::SiteConfig;
use crate::contact::{SENDING_LABEL, SUCCESS_STATUS_CLASS};
use crate::debounce::{Debouncer, GlooTimers};
use crate::engine::{Action, ListId, PageCore, PageSetup, UiEvent};
use crate::pagination::PageControl;
use crate::sitemap::{SITE_PAGES, generate_sitemap};
use crate::storage::LocalStore;
use crate::video::VideoEmbed;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
const FEATURED_CARDS: &str = "#featured-recipes .recipe-card";
const RECIPE_CARDS: &str = "#recipes-container .recipe-card";

struct PageBinding {
    core: RefCell<PageCore<LocalStore>>,
    document: Document,
    featured: Vec<HtmlElement>,
    recipes: Vec<HtmlElement>,
    /// Mounted `PaginationBar`; dropping it unmounts the controls.
    pagination_view: RefCell<Option<Box<dyn Any>>>,
    /// Submit button label to restore after sending.
    submit_label: RefCell<Option<String>>,
}

pub(super) fn install(document: &Document, config: SiteConfig) {
    let document = document.clone();
    when_ready(&document.clone(), move || {
        let search_delay = config.search_debounce();
        let binding = Rc::new(PageBinding::new(document, config));
        binding.wire(search_delay);
        let actions = binding.core.borrow_mut().init();
        binding.perform(actions);
        lazy_images(&binding.document);
        expose_sitemap();
        log::info!("Wulkan Kibo: welcome! Thanks for checking out the code.");
        log::info!("This site is open source under the MIT License.");
    });
}

fn read_cards(document: &Document, selector: &str) -> (Vec<HtmlElement>, Vec<RecipeCard>) {
    query_all(document, selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| {
            let attr = |name: &str| el.get_attribute(name).unwrap_or_default();
            let card = RecipeCard::new(attr("data-title"), attr("data-tags"), attr("data-ingredients"));
            (el, card)
        })
        .unzip()
}

fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
        .is_some_and(|mq| mq.matches())
}

fn set_display(el: &HtmlElement, value: Option<&str>) {
    let style = el.style();
    let result = match value {
        Some(value) => style.set_property("display", value),
        None => style.remove_property("display").map(|_| ()),
    };
    if let Err(e) = result {
        log::warn!("failed to set display: {e:?}");
    }
}

fn scroll_to(el: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

fn event_node(ev: &web_sys::Event) -> Option<Node> {
    ev.target().and_then(|t| t.dyn_into::<Node>().ok())
}

impl PageBinding {
    fn new(document: Document, config: SiteConfig) -> Self {
        let (featured, featured_cards) = read_cards(&document, FEATURED_CARDS);
        let (recipes, recipe_cards) = read_cards(&document, RECIPE_CARDS);
        let setup = PageSetup {
            system_prefers_dark: system_prefers_dark(),
            featured: featured_cards,
            recipes: recipe_cards,
            has_pagination: document.get_element_by_id("pagination").is_some(),
        };
        Self {
            core: RefCell::new(PageCore::new(LocalStore, config, setup)),
            document,
            featured,
            recipes,
            pagination_view: RefCell::new(None),
            submit_label: RefCell::new(None),
        }
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn select(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn html_by_id(&self, id: &str) -> Option<HtmlElement> {
        self.by_id(id).and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    fn dispatch(self: &Rc<Self>, event: UiEvent) {
        let actions = self.core.borrow_mut().handle(event);
        self.perform(actions);
    }

    // =========================================================================
    // Event wiring
    // =========================================================================

    fn wire(self: &Rc<Self>, search_delay: Duration) {
        self.wire_theme();
        self.wire_nav();
        self.wire_search("home-search", ListId::Featured, search_delay);
        self.wire_search("recipe-search", ListId::Recipes, search_delay);
        self.wire_filters();
        self.wire_pagination();
        self.wire_video();
        self.wire_share();
        self.wire_contact();
        self.wire_anchors();

        if let Some(window) = web_sys::window() {
            let this = Rc::clone(self);
            listen(&window, "beforeprint", move |_| this.dispatch(UiEvent::BeforePrint));
        }
    }

    fn wire_theme(self: &Rc<Self>) {
        if let Some(toggle) = self.select(".theme-toggle") {
            let this = Rc::clone(self);
            listen(&toggle, "click", move |_| this.dispatch(UiEvent::ThemeToggled));
        }
        let media = web_sys::window().and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten());
        if let Some(media) = media {
            let this = Rc::clone(self);
            listen(&media, "change", move |ev| {
                if let Some(ev) = ev.dyn_ref::<MediaQueryListEvent>() {
                    this.dispatch(UiEvent::SystemThemeChanged { prefers_dark: ev.matches() });
                }
            });
        }
    }

    fn wire_nav(self: &Rc<Self>) {
        let (Some(toggle), Some(menu)) = (self.select(".nav-toggle"), self.select(".nav-menu")) else {
            return;
        };
        let this = Rc::clone(self);
        listen(&toggle, "click", move |_| this.dispatch(UiEvent::NavToggled));

        let this = Rc::clone(self);
        listen(&self.document, "click", move |ev| {
            let target = event_node(&ev);
            let inside_nav = toggle.contains(target.as_ref()) || menu.contains(target.as_ref());
            this.dispatch(UiEvent::DocumentClicked { inside_nav });
        });
    }

    fn wire_search(self: &Rc<Self>, input_id: &str, list: ListId, delay: Duration) {
        let Some(input) = self.by_id(input_id) else {
            return;
        };
        let this = Rc::clone(self);
        let mut debouncer = Debouncer::new(GlooTimers, delay, move |term: String| {
            this.dispatch(UiEvent::Search { list, term });
        });
        listen(&input, "input", move |ev| {
            let value = ev
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                .map(|input| input.value())
                .unwrap_or_default();
            debouncer.schedule(value);
        });
    }

    fn wire_filters(self: &Rc<Self>) {
        if self.by_id("recipes-container").is_none() {
            return;
        }
        for tag in query_all(&self.document, ".filter-tag") {
            let this = Rc::clone(self);
            let value = tag.get_attribute("data-filter").unwrap_or_default();
            listen(&tag, "click", move |_| this.dispatch(UiEvent::FilterSelected(value.clone())));
        }
    }

    fn wire_pagination(self: &Rc<Self>) {
        let Some(container) = self.by_id("pagination") else {
            return;
        };
        let this = Rc::clone(self);
        listen(&container, "click", move |ev| {
            let button = ev
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest("button[data-page]").ok().flatten());
            let Some(button) = button else {
                return;
            };
            if button.has_attribute("disabled") {
                return;
            }
            if let Some(page) = button.get_attribute("data-page").and_then(|p| p.parse::<usize>().ok()) {
                this.dispatch(UiEvent::PageSelected(page));
            }
        });
    }

    fn wire_video(self: &Rc<Self>) {
        for trigger in query_all(&self.document, "[data-video]") {
            let this = Rc::clone(self);
            let id = trigger.get_attribute("data-video").unwrap_or_default();
            listen(&trigger, "click", move |ev| {
                ev.prevent_default();
                this.dispatch(UiEvent::VideoRequested(id.clone()));
            });
        }
        for selector in ["#video-modal .modal-overlay", "#video-modal .modal-close"] {
            if let Some(el) = self.select(selector) {
                let this = Rc::clone(self);
                listen(&el, "click", move |_| this.dispatch(UiEvent::VideoDismissed));
            }
        }
        let this = Rc::clone(self);
        listen(&self.document, "keydown", move |ev| {
            if let Some(ev) = ev.dyn_ref::<KeyboardEvent>() {
                this.dispatch(UiEvent::KeyPressed(ev.key()));
            }
        });
    }

    fn wire_share(self: &Rc<Self>) {
        for button in query_all(&self.document, "[data-share=\"native\"]") {
            let this = Rc::clone(self);
            listen(&button, "click", move |_| this.dispatch(UiEvent::ShareRequested));
        }
    }

    fn wire_contact(self: &Rc<Self>) {
        let Some(form) = self.by_id("contact-form") else {
            return;
        };
        let this = Rc::clone(self);
        listen(&form, "submit", move |ev| {
            ev.prevent_default();
            this.dispatch(UiEvent::ContactSubmitted);
        });
    }

    fn wire_anchors(self: &Rc<Self>) {
        for anchor in query_all(&self.document, "a[href^=\"#\"]") {
            let this = Rc::clone(self);
            listen(&anchor.clone(), "click", move |ev| {
                let Some(href) = anchor.get_attribute("href") else {
                    return;
                };
                if href.len() > 1 && this.select(&href).is_some() {
                    ev.prevent_default();
                    this.dispatch(UiEvent::AnchorClicked(href));
                }
            });
        }
    }

    // =========================================================================
    // Action execution
    // =========================================================================

    fn perform(self: &Rc<Self>, actions: Vec<Action>) {
        for action in actions {
            self.perform_one(action);
        }
    }

    fn perform_one(self: &Rc<Self>, action: Action) {
        match action {
            Action::SetTheme(theme) => {
                if let Some(root) = self.document.document_element() {
                    let _ = root.set_attribute("data-theme", theme.as_str());
                }
            }
            Action::SetNavOpen(open) => {
                if let Some(menu) = self.select(".nav-menu") {
                    let _ = menu.class_list().toggle_with_force("active", open);
                }
                if let Some(toggle) = self.select(".nav-toggle") {
                    let _ = toggle.set_attribute("aria-expanded", if open { "true" } else { "false" });
                }
            }
            Action::SetCardDisplay { list, visible } => {
                let cards = match list {
                    ListId::Featured => &self.featured,
                    ListId::Recipes => &self.recipes,
                };
                for (card, show) in cards.iter().zip(visible) {
                    set_display(card, if show { None } else { Some("none") });
                }
            }
            Action::SetResultsCount(count) => {
                if let Some(el) = self.select("#results-count .count") {
                    el.set_text_content(Some(&count.to_string()));
                }
            }
            Action::SetNoResults(show) => {
                if let Some(el) = self.html_by_id("no-results") {
                    set_display(&el, Some(if show { "block" } else { "none" }));
                }
            }
            Action::SetActiveFilter(value) => {
                for tag in query_all(&self.document, ".filter-tag") {
                    let active = tag.get_attribute("data-filter").as_deref() == Some(value.as_str());
                    let _ = tag.class_list().toggle_with_force("active", active);
                }
            }
            Action::RenderPagination(controls) => self.render_pagination(controls),
            Action::ScrollListIntoView => {
                if let Some(list) = self.by_id("recipes-container") {
                    scroll_to(&list);
                }
            }
            Action::OpenVideo(embed) => self.open_video(&embed),
            Action::CloseVideo => {
                if let Some(modal) = self.by_id("video-modal") {
                    let _ = modal.class_list().remove_1("active");
                    let _ = modal.set_attribute("aria-hidden", "true");
                }
                if let Some(container) = self.by_id("video-container") {
                    container.set_inner_html("");
                }
            }
            Action::SetScrollLocked(locked) => {
                if let Some(body) = self.document.body() {
                    let style = body.style();
                    let _ = if locked {
                        style.set_property("overflow", "hidden")
                    } else {
                        style.remove_property("overflow").map(|_| ())
                    };
                }
            }
            Action::StartShare => super::share::start(&self.document),
            Action::SetContactSending(sending) => self.set_contact_sending(sending),
            Action::ShowFormStatus(message) => {
                if let Some(status) = self.html_by_id("form-status") {
                    status.set_text_content(Some(&message));
                    status.set_class_name(SUCCESS_STATUS_CLASS);
                    set_display(&status, Some("block"));
                }
            }
            Action::ResetContactForm => {
                if let Some(form) = self.by_id("contact-form").and_then(|el| el.dyn_into::<HtmlFormElement>().ok()) {
                    form.reset();
                }
            }
            Action::HideFormStatus => {
                if let Some(status) = self.html_by_id("form-status") {
                    set_display(&status, Some("none"));
                }
            }
            Action::Defer { delay_ms, event } => {
                let this = Rc::clone(self);
                Timeout::new(delay_ms, move || this.dispatch(event)).forget();
            }
            Action::ScrollToAnchor(href) => {
                if let Some(target) = self.select(&href) {
                    scroll_to(&target);
                    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
                        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&href));
                    }
                }
            }
            Action::ExpandDetails => {
                for details in query_all(&self.document, "details") {
                    let _ = details.set_attribute("open", "");
                }
            }
        }
    }

    fn render_pagination(&self, controls: Vec<PageControl>) {
        drop(self.pagination_view.borrow_mut().take());
        if controls.is_empty() {
            return;
        }
        let Some(container) = self.html_by_id("pagination") else {
            return;
        };
        let handle = leptos::mount::mount_to(container, move || view! { <PaginationBar controls=controls/> });
        *self.pagination_view.borrow_mut() = Some(Box::new(handle));
    }

    fn open_video(&self, embed: &VideoEmbed) {
        let (Some(modal), Some(container)) = (self.by_id("video-modal"), self.by_id("video-container")) else {
            return;
        };
        let Ok(iframe) = self.document.create_element("iframe") else {
            return;
        };
        let width = embed.width.to_string();
        let height = embed.height.to_string();
        let mut attrs = vec![
            ("width", width.as_str()),
            ("height", height.as_str()),
            ("src", embed.src.as_str()),
            ("title", embed.title),
            ("frameborder", "0"),
            ("allow", embed.allow),
        ];
        if embed.allow_fullscreen {
            attrs.push(("allowfullscreen", ""));
        }
        if embed.lazy {
            attrs.push(("loading", "lazy"));
        }
        for (name, value) in attrs {
            let _ = iframe.set_attribute(name, value);
        }
        container.set_inner_html("");
        if let Err(e) = container.append_child(&iframe) {
            log::error!("failed to embed video: {e:?}");
            return;
        }
        let _ = modal.class_list().add_1("active");
        let _ = modal.set_attribute("aria-hidden", "false");
        if let Some(close) = self
            .select("#video-modal .modal-close")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let _ = close.focus();
        }
    }

    fn set_contact_sending(&self, sending: bool) {
        let Some(button) = self
            .select("#contact-form button[type=\"submit\"]")
            .and_then(|el| el.dyn_into::<web_sys::HtmlButtonElement>().ok())
        else {
            return;
        };
        if sending {
            *self.submit_label.borrow_mut() = button.text_content();
            button.set_text_content(Some(SENDING_LABEL));
        } else if let Some(label) = self.submit_label.borrow_mut().take() {
            button.set_text_content(Some(&label));
        }
        button.set_disabled(sending);
    }
}

/// Swap `img[data-src]` into `src` once each image nears the viewport.
fn lazy_images(document: &Document) {
    let supported = web_sys::window()
        .is_some_and(|w| js_sys::Reflect::has(&w, &"IntersectionObserver".into()).unwrap_or(false));
    if !supported {
        return;
    }
    let cb = Closure::wrap(Box::new(|entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            let img = entry.target();
            if let Some(src) = img.get_attribute("data-src") {
                let _ = img.set_attribute("src", &src);
                let _ = img.remove_attribute("data-src");
            }
            observer.unobserve(&img);
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);
    match IntersectionObserver::new(cb.as_ref().unchecked_ref()) {
        Ok(observer) => {
            for img in query_all(document, "img[data-src]") {
                observer.observe(&img);
            }
        }
        Err(e) => log::warn!("lazy images disabled: {e:?}"),
    }
    cb.forget();
}

/// `window.generateSitemap()` for console use during development.
fn expose_sitemap() {
    expose_global("generateSitemap", || {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        let iso = String::from(js_sys::Date::new_0().to_iso_string());
        let lastmod = iso.split('T').next().unwrap_or_default();
        let sitemap = generate_sitemap(&origin, SITE_PAGES, lastmod);
        log::info!("Generated Sitemap:\n{sitemap}");
    });
}
