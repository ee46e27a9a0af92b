use fauxdict_types::{Entry, PaginationState};

use crate::args::hints::{cmd, fmt};
use crate::presentation::view_models::{
    CommandResultViewModel, EntryListViewModel, EntryViewModel, Guidance, RandomEntryViewModel,
    StatusBadge,
};

fn entry_view(entry: &Entry) -> EntryViewModel {
    EntryViewModel {
        id: entry.id.get(),
        text: entry.text.clone(),
    }
}

fn non_empty(term: &str) -> Option<String> {
    (!term.is_empty()).then(|| term.to_string())
}

pub fn present_entry_list(
    visible: &[&Entry],
    total_loaded: usize,
    search_term: &str,
    pagination: PaginationState,
    fallback: bool,
) -> CommandResultViewModel<EntryListViewModel> {
    let content = EntryListViewModel {
        entries: visible.iter().map(|e| entry_view(e)).collect(),
        total_loaded,
        search_term: non_empty(search_term),
        pagination,
        fallback,
    };

    let mut result = CommandResultViewModel::new(content);

    if fallback {
        result = result
            .with_badge(StatusBadge::warning("Word list unavailable, showing built-in entries"))
            .with_suggestion(Guidance::new("See why the source failed").with_command(cmd::SOURCE));
    } else if visible.is_empty() && !search_term.is_empty() {
        result = result.with_badge(StatusBadge::info(format!(
            "No entries match \"{}\"",
            search_term
        )));
    }

    if visible.is_empty() && !search_term.is_empty() && pagination.continuation {
        result = result.with_suggestion(
            Guidance::new("Load more pages to widen the search")
                .with_command(fmt::list_pages(pagination.page_count + 1)),
        );
    }

    result
}

pub fn present_random_entry(
    picked: Option<&Entry>,
    candidates: usize,
    search_term: &str,
) -> CommandResultViewModel<RandomEntryViewModel> {
    let content = RandomEntryViewModel {
        entry: picked.map(entry_view),
        candidates,
        search_term: non_empty(search_term),
    };

    let mut result = CommandResultViewModel::new(content);
    if picked.is_none() {
        result = result
            .with_badge(StatusBadge::info("Nothing to pick from"))
            .with_suggestion(Guidance::new("Check what is loaded").with_command(cmd::LIST));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_search_suggests_more_pages() {
        let state = PaginationState {
            page_count: 2,
            continuation: true,
            loading: false,
        };
        let result = present_entry_list(&[], 20, "zzz", state, false);

        assert_eq!(result.content.search_term.as_deref(), Some("zzz"));
        assert_eq!(
            result.suggestions[0].command.as_deref(),
            Some("fauxdict list --pages 3")
        );
    }

    #[test]
    fn test_fallback_gets_warning_badge() {
        let entry = Entry::new(0u64, "x");
        let result = present_entry_list(&[&entry], 1, "", PaginationState::default(), true);

        assert!(result.content.fallback);
        assert!(result.badge.is_some());
        assert!(result.content.search_term.is_none());
    }

    #[test]
    fn test_random_with_nothing_visible() {
        let result = present_random_entry(None, 0, "nope");
        assert!(result.content.entry.is_none());
        assert_eq!(result.suggestions.len(), 1);
    }
}
