//! Local UI chrome state (theme, mobile sidebar).
//!
//! DESIGN
//! ======
//! Keeps presentation toggles out of the session store so layout controls
//! can change without touching authentication state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    /// Sidebar drawer visibility on narrow screens.
    pub sidebar_open: bool,
}

impl UiState {
    #[must_use]
    pub fn with_dark_mode(dark_mode: bool) -> Self {
        Self { dark_mode, ..Self::default() }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Navigating closes the drawer.
    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }
}
