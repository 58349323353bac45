//! Client-side pagination over matched recipe cards.
//!
//! Pages are 1-based and cut from the cards the last search/filter kept;
//! cards hidden by search never take up a slot. Numbered controls always show
//! the first and last page plus current±1, with an ellipsis at current±2.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use crate::cards::CardList;

/// One rendered pagination control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageControl {
    Prev { target: usize, disabled: bool },
    Page { number: usize, active: bool },
    Ellipsis,
    Next { target: usize, disabled: bool },
}

impl PageControl {
    /// Page this control navigates to when clickable.
    #[must_use]
    pub fn target(&self) -> Option<usize> {
        match self {
            Self::Prev { target, disabled } | Self::Next { target, disabled } => (!disabled).then_some(*target),
            Self::Page { number, .. } => Some(*number),
            Self::Ellipsis => None,
        }
    }
}

/// Number of pages needed for `matched` cards.
#[must_use]
pub fn page_count(matched: usize, page_size: usize) -> usize {
    matched.div_ceil(page_size.max(1))
}

/// Controls for `current` of `total` pages; empty when there is at most one page.
#[must_use]
pub fn controls(current: usize, total: usize) -> Vec<PageControl> {
    if total <= 1 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(total.min(9) + 2);
    out.push(PageControl::Prev { target: current.saturating_sub(1), disabled: current == 1 });
    for i in 1..=total {
        if i == 1 || i == total || (i + 1 >= current && i <= current + 1) {
            out.push(PageControl::Page { number: i, active: i == current });
        } else if i + 2 == current || i == current + 2 {
            out.push(PageControl::Ellipsis);
        }
    }
    out.push(PageControl::Next { target: current + 1, disabled: current == total });
    out
}

/// Current page for one card list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    current: usize,
}

impl Pager {
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self { page_size: page_size.max(1), current: 1 }
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Whether a list this long needs pagination at all.
    #[must_use]
    pub fn applies_to(&self, list: &CardList) -> bool {
        list.len() > self.page_size
    }

    #[must_use]
    pub fn total_pages(&self, list: &CardList) -> usize {
        page_count(list.matched_count(), self.page_size)
    }

    /// Move to `page`, clamped into range. Returns the page actually shown.
    pub fn go_to(&mut self, page: usize, list: &CardList) -> usize {
        let total = self.total_pages(list).max(1);
        self.current = page.clamp(1, total);
        self.current
    }

    /// Card indices shown on the current page.
    #[must_use]
    pub fn window(&self, list: &CardList) -> Vec<usize> {
        let start = (self.current - 1) * self.page_size;
        list.matched_indices()
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect()
    }

    /// Per-card display flags: matched and on the current page.
    #[must_use]
    pub fn display_flags(&self, list: &CardList) -> Vec<bool> {
        let mut flags = vec![false; list.len()];
        for i in self.window(list) {
            flags[i] = true;
        }
        flags
    }

    #[must_use]
    pub fn controls(&self, list: &CardList) -> Vec<PageControl> {
        controls(self.current, self.total_pages(list))
    }
}
