use fauxdict_types::Theme;
use serde::Serialize;

use super::entry::EntryViewModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    /// Waiting for the source list
    Connecting,
    Loading,
    Idle,
    Exhausted,
}

/// Snapshot of the browser for one frame
#[derive(Debug, Serialize)]
pub struct ScreenViewModel {
    pub entries: Vec<EntryViewModel>,
    pub total_loaded: usize,
    pub search_term: String,
    pub theme: Theme,
    pub status: LoadStatus,
    pub page_count: u64,
    pub fallback: bool,
    pub show_back_to_top: bool,
}
