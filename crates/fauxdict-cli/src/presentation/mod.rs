//! # Presentation Layer
//!
//! MVVM adapted for a terminal app with two outputs.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                                  ==(Text)==> [ View ] (Display)
//!
//! [ Handler ] --> [ Presenter ] --> [ ScreenViewModel ] --> [ TuiRenderer ]
//!                                                                |
//!                                          User Input --> [ BrowserComponent ] --> [ tui views ]
//! ```
//!
//! ## Rules
//!
//! - `view_models/` hold raw data and implement `Serialize`. JSON output is an
//!   API, so no pre-formatted strings live there.
//! - `presenters/` are pure functions from engine state to ViewModels. They
//!   decide when a guidance tip is shown.
//! - `views/` own layout, color and formatting (`Display` or ratatui `Widget`).
//! - `components/` keep TUI-only state (selection, viewport offset, search
//!   input) and turn keys into [`components::Action`]s. Domain state stays in
//!   the engine's `Coordinator`.
//! - `renderers/` drive output and route input; they make no decisions.

pub mod components;
pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};
