use fauxdict_engine::{Coordinator, Phase};

use crate::presentation::view_models::{EntryViewModel, LoadStatus, ScreenViewModel};

/// Snapshot the coordinator for one frame.
///
/// Takes `&mut` only because the filtered view is memoized.
pub fn present_screen(coordinator: &mut Coordinator, source_pending: bool) -> ScreenViewModel {
    let status = if source_pending {
        LoadStatus::Connecting
    } else {
        match coordinator.phase() {
            Phase::Loading => LoadStatus::Loading,
            Phase::Idle => LoadStatus::Idle,
            Phase::Exhausted => LoadStatus::Exhausted,
        }
    };

    let fallback = coordinator
        .source()
        .is_some_and(|s| s.origin().is_fallback());
    let total_loaded = coordinator.entries().len();
    let page_count = coordinator.pagination().page_count;
    let show_back_to_top = coordinator.past_threshold();
    let theme = coordinator.theme();
    let search_term = coordinator.search_term().to_string();

    let entries = coordinator
        .visible_entries()
        .into_iter()
        .map(|e| EntryViewModel {
            id: e.id.get(),
            text: e.text.clone(),
        })
        .collect();

    ScreenViewModel {
        entries,
        total_loaded,
        search_term,
        theme,
        status,
        page_count,
        fallback,
        show_back_to_top,
    }
}
