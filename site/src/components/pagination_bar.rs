//! Numbered page controls for `#pagination`.

#[cfg(test)]
#[path = "pagination_bar_test.rs"]
mod pagination_bar_test;

use leptos::prelude::*;

use crate::pagination::PageControl;

/// Visible text of a control.
pub fn control_label(control: &PageControl) -> String {
    match control {
        PageControl::Prev { .. } => "‹ Prev".to_owned(),
        PageControl::Page { number, .. } => number.to_string(),
        PageControl::Ellipsis => "...".to_owned(),
        PageControl::Next { .. } => "Next ›".to_owned(),
    }
}

/// Screen-reader label of a clickable control.
pub fn control_aria_label(control: &PageControl) -> Option<String> {
    match control {
        PageControl::Prev { .. } => Some("Previous page".to_owned()),
        PageControl::Page { number, .. } => Some(format!("Page {number}")),
        PageControl::Ellipsis => None,
        PageControl::Next { .. } => Some("Next page".to_owned()),
    }
}

/// Buttons carry `data-page`; clicks are delegated to the container.
#[component]
pub fn PaginationBar(controls: Vec<PageControl>) -> impl IntoView {
    controls
        .into_iter()
        .map(|control| {
            let label = control_label(&control);
            match control {
                PageControl::Ellipsis => view! { <span>{label}</span> }.into_any(),
                PageControl::Page { number, active } => view! {
                    <button
                        class=if active { "active" } else { "" }
                        data-page=number.to_string()
                        aria-label=control_aria_label(&control)
                        aria-current=active.then_some("page")
                    >
                        {label}
                    </button>
                }
                .into_any(),
                PageControl::Prev { target, disabled } | PageControl::Next { target, disabled } => view! {
                    <button disabled=disabled data-page=target.to_string() aria-label=control_aria_label(&control)>
                        {label}
                    </button>
                }
                .into_any(),
            }
        })
        .collect_view()
}
