//! UI state coordinator.
//!
//! Owns every piece of browser state (entries, search term, theme, scroll
//! position) so the presentation layer only reads snapshots and forwards
//! user signals. No operation here fails; rejected requests are no-ops.

use fauxdict_types::{Entry, EntryId, PaginationState, Preference, SourceList, Theme};
use rand::Rng;

use crate::Result;
use crate::filter::FilterView;
use crate::pagination::{BatchTicket, Paginator, Phase};

/// Scroll offset above which the "back to top" affordance is shown
pub const DEFAULT_SCROLL_THRESHOLD: u64 = 500;

/// Durable home of the dark mode flag.
pub trait PreferenceStore {
    /// Read the stored preference. Missing or unreadable values yield the default.
    fn load(&self) -> Preference;

    fn save(&mut self, preference: Preference) -> Result<()>;
}

pub struct Coordinator {
    paginator: Paginator,
    filter: FilterView,
    preference: Preference,
    store: Box<dyn PreferenceStore + Send>,
    scroll_offset: u64,
    scroll_threshold: u64,
    focus_request: Option<EntryId>,
    scroll_to_top_requested: bool,
}

impl Coordinator {
    /// Reads the preference from `store` once; later changes are written back on toggle.
    pub fn new(store: Box<dyn PreferenceStore + Send>) -> Self {
        let preference = store.load();
        tracing::debug!(dark_mode = preference.dark_mode, "preference loaded");
        Self {
            paginator: Paginator::new(),
            filter: FilterView::new(),
            preference,
            store,
            scroll_offset: 0,
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            focus_request: None,
            scroll_to_top_requested: false,
        }
    }

    pub fn with_scroll_threshold(mut self, threshold: u64) -> Self {
        self.scroll_threshold = threshold;
        self
    }

    // --- pagination ---

    pub fn attach_source(&mut self, source: SourceList) -> Option<BatchTicket> {
        self.paginator.attach_source(source)
    }

    pub fn request_more(&mut self) -> Option<BatchTicket> {
        self.paginator.request_more()
    }

    /// The end of the rendered list became visible.
    pub fn on_sentinel_visible(&mut self) -> Option<BatchTicket> {
        match self.paginator.phase() {
            Phase::Idle => self.paginator.request_more(),
            Phase::Loading | Phase::Exhausted => None,
        }
    }

    /// Returns how many entries were appended.
    pub fn complete_batch(&mut self, ticket: BatchTicket) -> usize {
        self.paginator.complete_batch(ticket).len()
    }

    pub fn pagination(&self) -> PaginationState {
        self.paginator.state()
    }

    pub fn phase(&self) -> Phase {
        self.paginator.phase()
    }

    pub fn is_loading(&self) -> bool {
        self.paginator.phase() == Phase::Loading
    }

    pub fn entries(&self) -> &[Entry] {
        self.paginator.entries()
    }

    pub fn source(&self) -> Option<&SourceList> {
        self.paginator.source()
    }

    // --- search ---

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.set_term(term);
    }

    pub fn search_term(&self) -> &str {
        self.filter.term()
    }

    pub fn visible_entries(&mut self) -> Vec<&Entry> {
        self.filter.visible(self.paginator.entries())
    }

    pub fn visible_count(&mut self) -> usize {
        self.filter.indices(self.paginator.entries()).len()
    }

    // --- theme ---

    pub fn preference(&self) -> Preference {
        self.preference
    }

    pub fn theme(&self) -> Theme {
        self.preference.theme()
    }

    /// Flip dark mode and persist it. A failed write is logged; the new
    /// value stays in effect for this session.
    pub fn toggle_theme(&mut self) -> Preference {
        self.preference = self.preference.toggled();
        if let Err(err) = self.store.save(self.preference) {
            tracing::warn!(error = %err, "preference not persisted");
        }
        self.preference
    }

    // --- navigation ---

    /// Pick one visible entry uniformly at random and ask the view to show it.
    pub fn pick_random_visible<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<EntryId> {
        let indices = self.filter.indices(self.paginator.entries());
        if indices.is_empty() {
            return None;
        }

        let position = indices[rng.random_range(0..indices.len())];
        let id = self.paginator.entries()[position].id;
        self.focus_request = Some(id);
        Some(id)
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
        self.scroll_to_top_requested = true;
    }

    pub fn on_scroll(&mut self, offset: u64) {
        self.scroll_offset = offset;
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn past_threshold(&self) -> bool {
        self.scroll_offset > self.scroll_threshold
    }

    pub fn take_focus_request(&mut self) -> Option<EntryId> {
        self.focus_request.take()
    }

    pub fn take_scroll_to_top(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_top_requested)
    }
}
