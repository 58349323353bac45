//! Mobile navigation menu state.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Open/closed state of the `.nav-menu` behind the `.nav-toggle` button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A document click. Clicks outside both the toggle and the menu close it.
    /// Returns `true` when the state changed.
    pub fn document_clicked(&mut self, inside_nav: bool) -> bool {
        if inside_nav || !self.open {
            return false;
        }
        self.open = false;
        true
    }
}
