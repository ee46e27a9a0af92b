//! Plain-text views for console output. Each ViewModel renders itself
//! through `Display`; the TUI widgets live under [`tui`].

mod entry;
mod source;
mod theme;
pub mod tui;
