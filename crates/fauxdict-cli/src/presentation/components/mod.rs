//! Stateful TUI components.
//!
//! A component owns UI-only state (selection, viewport, text input) and
//! turns key presses into [`Action`]s that the handler applies to the
//! session. It never mutates domain state itself.

mod browser;

pub use browser::{BrowserComponent, ENTRY_ROWS, ROW_SCROLL_UNITS, SENTINEL_MARGIN};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleTheme,
    RandomEntry,
    ScrollToTop,
    SearchChanged(String),
}
