//! Page interaction core: UI events in, DOM actions out.
//!
//! ARCHITECTURE
//! ============
//! [`PageCore`] owns every piece of page state (theme, nav menu, card lists,
//! pager, video modal, contact form) and never touches the DOM. The browser
//! binding translates DOM events into [`UiEvent`]s, calls
//! [`PageCore::handle`], and performs the returned [`Action`]s in order.
//! Timed follow-ups come back as [`Action::Defer`], which the binding turns
//! into a timer that re-enters `handle` with the carried event.
//!
//! Search input is debounced before it reaches the core, so
//! [`UiEvent::Search`] always means "filter now".

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::cards::{CardList, RecipeCard, TagFilter};
use crate::config::SiteConfig;
use crate::contact::{ContactForm, SUCCESS_MESSAGE};
use crate::nav::NavMenu;
use crate::pagination::{PageControl, Pager};
use crate::storage::KeyValueStore;
use crate::theme::{Theme, ThemeController};
use crate::video::{VideoEmbed, VideoModal};

/// Which card container an event or action refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListId {
    /// `#featured-recipes` on the home page.
    Featured,
    /// `#recipes-container` on the recipes page.
    Recipes,
}

/// Input events, already stripped of DOM details.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    ThemeToggled,
    SystemThemeChanged { prefers_dark: bool },
    NavToggled,
    DocumentClicked { inside_nav: bool },
    Search { list: ListId, term: String },
    FilterSelected(String),
    PageSelected(usize),
    VideoRequested(String),
    /// Close button or overlay click.
    VideoDismissed,
    KeyPressed(String),
    ShareRequested,
    ContactSubmitted,
    ContactSent,
    FormStatusExpired(u64),
    AnchorClicked(String),
    BeforePrint,
}

/// DOM mutations for the browser binding to perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    SetTheme(Theme),
    SetNavOpen(bool),
    /// Show (`true`) or hide each card of `list`, in document order.
    SetCardDisplay { list: ListId, visible: Vec<bool> },
    SetResultsCount(usize),
    SetNoResults(bool),
    SetActiveFilter(String),
    RenderPagination(Vec<PageControl>),
    ScrollListIntoView,
    OpenVideo(VideoEmbed),
    CloseVideo,
    SetScrollLocked(bool),
    StartShare,
    SetContactSending(bool),
    /// Success message for `#form-status`.
    ShowFormStatus(String),
    ResetContactForm,
    HideFormStatus,
    Defer { delay_ms: u32, event: UiEvent },
    ScrollToAnchor(String),
    ExpandDetails,
}

/// What the binding found on the page at startup.
#[derive(Clone, Debug, Default)]
pub struct PageSetup {
    pub system_prefers_dark: bool,
    pub featured: Vec<RecipeCard>,
    pub recipes: Vec<RecipeCard>,
    /// Whether the page has a `#pagination` container.
    pub has_pagination: bool,
}

pub struct PageCore<S> {
    config: SiteConfig,
    theme: ThemeController<S>,
    nav: NavMenu,
    featured: CardList,
    recipes: CardList,
    pager: Option<Pager>,
    video: VideoModal,
    contact: ContactForm,
}

impl<S: KeyValueStore> PageCore<S> {
    pub fn new(store: S, config: SiteConfig, setup: PageSetup) -> Self {
        let theme = ThemeController::new(store, config.keys.theme.clone(), setup.system_prefers_dark);
        let recipes = CardList::new(setup.recipes);
        let pager = Some(Pager::new(config.page_size))
            .filter(|pager| setup.has_pagination && pager.applies_to(&recipes));
        Self {
            config,
            theme,
            nav: NavMenu::default(),
            featured: CardList::new(setup.featured),
            recipes,
            pager,
            video: VideoModal::default(),
            contact: ContactForm::default(),
        }
    }

    /// Actions that bring a freshly loaded page in line with the core.
    pub fn init(&mut self) -> Vec<Action> {
        let mut actions = vec![Action::SetTheme(self.theme.current())];
        if let Some(pager) = self.pager.as_mut() {
            pager.go_to(1, &self.recipes);
            actions.push(Action::SetCardDisplay { list: ListId::Recipes, visible: pager.display_flags(&self.recipes) });
            actions.push(Action::RenderPagination(pager.controls(&self.recipes)));
        }
        actions
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    #[must_use]
    pub fn list(&self, list: ListId) -> &CardList {
        match list {
            ListId::Featured => &self.featured,
            ListId::Recipes => &self.recipes,
        }
    }

    #[must_use]
    pub fn pager(&self) -> Option<&Pager> {
        self.pager.as_ref()
    }

    #[must_use]
    pub fn video_open(&self) -> bool {
        self.video.is_open()
    }

    pub fn handle(&mut self, event: UiEvent) -> Vec<Action> {
        match event {
            UiEvent::ThemeToggled => vec![Action::SetTheme(self.theme.toggle())],
            UiEvent::SystemThemeChanged { prefers_dark } => {
                self.theme.system_changed(prefers_dark).map(Action::SetTheme).into_iter().collect()
            }
            UiEvent::NavToggled => vec![Action::SetNavOpen(self.nav.toggle())],
            UiEvent::DocumentClicked { inside_nav } => {
                if self.nav.document_clicked(inside_nav) {
                    vec![Action::SetNavOpen(false)]
                } else {
                    Vec::new()
                }
            }
            UiEvent::Search { list, term } => self.search(list, &term),
            UiEvent::FilterSelected(value) => self.filter(value),
            UiEvent::PageSelected(page) => self.show_page(page),
            UiEvent::VideoRequested(id) => match self.video.open(&id) {
                Some(embed) => vec![Action::OpenVideo(embed), Action::SetScrollLocked(true)],
                None => Vec::new(),
            },
            UiEvent::VideoDismissed => {
                let closed = self.video.close();
                Self::video_closed(closed)
            }
            UiEvent::KeyPressed(key) => {
                let closed = self.video.key_pressed(&key);
                Self::video_closed(closed)
            }
            UiEvent::ShareRequested => vec![Action::StartShare],
            UiEvent::ContactSubmitted => self.contact_submitted(),
            UiEvent::ContactSent => self.contact_sent(),
            UiEvent::FormStatusExpired(seq) => {
                if self.contact.status_expired(seq) {
                    vec![Action::HideFormStatus]
                } else {
                    Vec::new()
                }
            }
            UiEvent::AnchorClicked(href) => {
                if href.len() > 1 && href.starts_with('#') {
                    vec![Action::ScrollToAnchor(href)]
                } else {
                    Vec::new()
                }
            }
            UiEvent::BeforePrint => vec![Action::ExpandDetails],
        }
    }

    fn search(&mut self, list: ListId, term: &str) -> Vec<Action> {
        match list {
            ListId::Featured => {
                let count = self.featured.search(term);
                vec![
                    Action::SetCardDisplay { list, visible: self.featured.display_flags() },
                    Action::SetResultsCount(count),
                ]
            }
            ListId::Recipes => {
                let count = self.recipes.search(term);
                self.recipes_changed(count)
            }
        }
    }

    fn filter(&mut self, value: String) -> Vec<Action> {
        let count = self.recipes.filter(&TagFilter::parse(&value));
        let mut actions = vec![Action::SetActiveFilter(value)];
        actions.extend(self.recipes_changed(count));
        actions
    }

    /// Display, counter, and pagination after the recipe list was re-matched.
    fn recipes_changed(&mut self, count: usize) -> Vec<Action> {
        let mut actions = Vec::with_capacity(4);
        match self.pager.as_mut() {
            Some(pager) => {
                pager.go_to(1, &self.recipes);
                actions.push(Action::SetCardDisplay { list: ListId::Recipes, visible: pager.display_flags(&self.recipes) });
                actions.push(Action::RenderPagination(pager.controls(&self.recipes)));
            }
            None => {
                actions.push(Action::SetCardDisplay { list: ListId::Recipes, visible: self.recipes.display_flags() });
            }
        }
        actions.push(Action::SetResultsCount(count));
        actions.push(Action::SetNoResults(count == 0));
        actions
    }

    fn show_page(&mut self, page: usize) -> Vec<Action> {
        let Some(pager) = self.pager.as_mut() else {
            return Vec::new();
        };
        pager.go_to(page, &self.recipes);
        vec![
            Action::SetCardDisplay { list: ListId::Recipes, visible: pager.display_flags(&self.recipes) },
            Action::RenderPagination(pager.controls(&self.recipes)),
            Action::ScrollListIntoView,
        ]
    }

    fn video_closed(closed: bool) -> Vec<Action> {
        if closed { vec![Action::CloseVideo, Action::SetScrollLocked(false)] } else { Vec::new() }
    }

    fn contact_submitted(&mut self) -> Vec<Action> {
        if !self.contact.submit() {
            return Vec::new();
        }
        vec![
            Action::SetContactSending(true),
            Action::Defer { delay_ms: self.config.contact_send_ms, event: UiEvent::ContactSent },
        ]
    }

    fn contact_sent(&mut self) -> Vec<Action> {
        let Some(seq) = self.contact.sent() else {
            return Vec::new();
        };
        vec![
            Action::ShowFormStatus(SUCCESS_MESSAGE.to_owned()),
            Action::ResetContactForm,
            Action::SetContactSending(false),
            Action::Defer { delay_ms: self.config.form_status_ttl_ms, event: UiEvent::FormStatusExpired(seq) },
        ]
    }
}
