//! Terminal driver for the interactive browser.
//!
//! Owns the terminal and the [`BrowserComponent`]. The handler drives the
//! loop: it hands over a fresh [`ScreenViewModel`] per frame and gets back
//! the [`Action`] produced by the next key press, if any.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::presentation::components::{Action, BrowserComponent};
use crate::presentation::view_models::ScreenViewModel;
use crate::presentation::views::tui::Palette;

/// Best-effort terminal reset for paths that cannot report errors.
fn leave_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Run `setup`; if it fails, run `restore` before passing the error on.
fn restore_on_error<T>(setup: impl FnOnce() -> Result<T>, restore: impl FnOnce()) -> Result<T> {
    setup().inspect_err(|_| restore())
}

pub struct TuiRenderer {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    browser: BrowserComponent,
}

impl TuiRenderer {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        restore_on_error(Self::enter, leave_terminal)
    }

    fn enter() -> Result<Self> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            leave_terminal();
            std::process::exit(0);
        })?;

        Ok(Self {
            terminal,
            browser: BrowserComponent::new(),
        })
    }

    pub fn browser(&self) -> &BrowserComponent {
        &self.browser
    }

    pub fn browser_mut(&mut self) -> &mut BrowserComponent {
        &mut self.browser
    }

    pub fn draw(&mut self, screen: &ScreenViewModel) -> Result<()> {
        let palette = Palette::for_theme(screen.theme);
        let browser = &mut self.browser;
        self.terminal.draw(|f| browser.render(f, screen, palette))?;
        Ok(())
    }

    /// Wait up to `timeout` for a key and route it to the browser.
    pub fn poll_action(
        &mut self,
        screen: &ScreenViewModel,
        timeout: Duration,
    ) -> Result<Option<Action>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(self.browser.handle_input(key, screen)),
            _ => Ok(None),
        }
    }

    pub fn restore(mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}
