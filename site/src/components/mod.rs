//! Leptos views mounted by the browser binding.
//!
//! Components are presentational: they render markup with the ids and
//! `data-*` attributes the binding listens on, and hold no page state.

pub mod consent_modal;
pub mod pagination_bar;
