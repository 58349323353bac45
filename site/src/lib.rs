//! # site
//!
//! Browser runtime for the Wulkan Kibo static site. Compiled to WebAssembly
//! with the `hydrate` feature and loaded by every page.
//!
//! Every behavior is split into a plain-Rust core that can be tested on the
//! host and a thin `web-sys` binding in [`dom`] that only exists in the
//! browser build. The three components share nothing but storage and the
//! document:
//!
//! | Module | Role |
//! |--------|------|
//! | [`consent`] | Cookie consent state machine and persistence |
//! | [`analytics`] | `gtag` consent commands and the analytics stub seam |
//! | [`i18n`] | Language preference, dictionary lookup, translation targets |
//! | [`engine`] | Page interactions: UI events in, DOM actions out |
//! | [`cards`] | Recipe card search and tag filtering |
//! | [`pagination`] | Page windows and numbered page controls |
//! | [`theme`] | Light/dark preference resolution |
//! | [`nav`] | Mobile navigation menu |
//! | [`video`] | Video modal state and embed descriptor |
//! | [`share`] | Native share and copy-link fallback chain |
//! | [`contact`] | Contact form submission stub |
//! | [`sitemap`] | Sitemap XML and recipe JSON-LD helpers |
//! | [`debounce`] | Cancel-on-reschedule timer rate limiter |
//! | [`storage`] | Key/value storage seam (`localStorage` or memory) |
//! | [`config`] | Injected site configuration |

pub mod analytics;
pub mod cards;
pub mod config;
pub mod consent;
pub mod contact;
pub mod debounce;
pub mod engine;
pub mod i18n;
pub mod nav;
pub mod pagination;
pub mod share;
pub mod sitemap;
pub mod storage;
pub mod theme;
pub mod video;

pub mod components;

#[cfg(feature = "hydrate")]
pub mod dom;
