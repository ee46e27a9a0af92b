// NOTE: fauxdict layering
//
// types    -> plain data (Entry, SourceList, Preference)
// engine   -> the view model: fallback loading, cyclic pagination, filtering, UI state
// runtime  -> config, fetchers, preference file, event-driven session
// cli      -> argument parsing, handlers and presentation (console + TUI)
//
// Handlers never touch ratatui or println directly; they build ViewModels
// through presenters and hand them to a renderer.

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{Cli, Commands, LogLevel, OutputFormat, ThemeCommand};
pub use commands::run;
