//! Local UI chrome state (theme, mobile menu).
//!
//! DESIGN
//! ======
//! Only two values ever change after the page loads: the theme preference
//! and whether the mobile navigation menu is open. Both live here so the
//! renderer stays a pure function of this struct plus static content.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::content::NavLink;
use crate::util::theme::ThemePreference;

/// Visibility of the mobile navigation dropdown. Never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// UI state for theme and menu.
///
/// Provided as `RwSignal<UiState>` via context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: ThemePreference,
    pub menu: MenuState,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
    }

    pub fn set_theme(&mut self, theme: ThemePreference) {
        self.theme = theme;
    }

    /// Activate `link`: close the menu and return the anchor id to scroll to.
    pub fn navigate(&mut self, link: &NavLink) -> Option<&'static str> {
        self.menu.close();
        link.anchor_id()
    }
}
