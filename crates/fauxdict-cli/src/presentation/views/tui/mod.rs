//! TUI views: thin ratatui widgets over [`ScreenViewModel`].
//!
//! Views take a reference to the ViewModel and a [`Palette`]. Selection and
//! viewport state arrive from the component as widget state.
//!
//! [`ScreenViewModel`]: crate::presentation::view_models::ScreenViewModel

pub mod entry_list;
pub mod search_bar;
pub mod status_bar;

pub use entry_list::EntryListView;
pub use search_bar::SearchBarView;
pub use status_bar::StatusBarView;

use fauxdict_types::Theme;
use ratatui::style::{Color, Style};

use crate::presentation::view_models::StatusLevel;

/// Colors for one theme. Applied to every widget so the whole screen flips at once.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub muted: Color,
    pub accent: Color,
    pub selection: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                fg: Color::Black,
                bg: Color::White,
                muted: Color::DarkGray,
                accent: Color::Blue,
                selection: Color::Gray,
            },
            Theme::Dark => Self {
                fg: Color::White,
                bg: Color::Black,
                muted: Color::Gray,
                accent: Color::Cyan,
                selection: Color::DarkGray,
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }
}

pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
    }
}
