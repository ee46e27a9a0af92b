use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    widgets::ListState,
};

use super::Action;
use crate::presentation::view_models::ScreenViewModel;
use crate::presentation::views::tui::{EntryListView, Palette, SearchBarView, StatusBarView};

/// Terminal rows taken by one entry (headword line + definition line)
pub const ENTRY_ROWS: usize = 2;

/// Scroll units per terminal row. Scroll offsets are reported in these units
/// so thresholds read like the pixel distances of a graphical list.
pub const ROW_SCROLL_UNITS: u64 = 16;

/// The end-of-list row counts as visible this many rows before it is on screen
pub const SENTINEL_MARGIN: usize = 3;

const LIST_BORDER_ROWS: u16 = 2;

pub struct BrowserComponent {
    list_state: ListState,
    search_input: String,
    editing: bool,
    /// Inner height of the list area at the last render
    viewport_rows: usize,
}

impl Default for BrowserComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserComponent {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
            search_input: String::new(),
            editing: false,
            viewport_rows: 0,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn handle_input(&mut self, key: KeyEvent, model: &ScreenViewModel) -> Option<Action> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Action::Quit);
        }

        if self.editing {
            return self.handle_search_key(key);
        }

        let len = model.entries.len();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            KeyCode::Char('r') => Some(Action::RandomEntry),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::ScrollToTop),
            KeyCode::Char('/') => {
                self.editing = true;
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(1, len);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection(-1, len);
                None
            }
            KeyCode::PageDown => {
                self.move_selection(self.page_entries() as isize, len);
                None
            }
            KeyCode::PageUp => {
                self.move_selection(-(self.page_entries() as isize), len);
                None
            }
            _ => None,
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.editing = false;
                None
            }
            KeyCode::Backspace => {
                self.search_input.pop()?;
                Some(Action::SearchChanged(self.search_input.clone()))
            }
            KeyCode::Char(c) => {
                self.search_input.push(c);
                Some(Action::SearchChanged(self.search_input.clone()))
            }
            _ => None,
        }
    }

    fn page_entries(&self) -> usize {
        (self.viewport_rows / ENTRY_ROWS).max(1)
    }

    fn move_selection(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1);
        self.list_state.select(Some(next as usize));
    }

    /// Select the entry with `id` so the next render scrolls it into view.
    pub fn focus_on(&mut self, id: u64, model: &ScreenViewModel) {
        if let Some(position) = model.entries.iter().position(|e| e.id == id) {
            self.list_state.select(Some(position));
        }
    }

    pub fn scroll_to_top(&mut self) {
        *self.list_state.offset_mut() = 0;
        self.list_state.select(None);
    }

    /// Offset of the list viewport in [`ROW_SCROLL_UNITS`], as of the last render
    pub fn scroll_offset(&self) -> u64 {
        (self.list_state.offset() * ENTRY_ROWS) as u64 * ROW_SCROLL_UNITS
    }

    /// Whether the end-of-list row is on screen or within [`SENTINEL_MARGIN`] rows of it.
    pub fn sentinel_visible(&self, model: &ScreenViewModel) -> bool {
        if self.viewport_rows == 0 {
            return false;
        }
        let entries_below_top = model.entries.len().saturating_sub(self.list_state.offset());
        let rows_above_sentinel = entries_below_top * ENTRY_ROWS;
        rows_above_sentinel < self.viewport_rows + SENTINEL_MARGIN
    }

    pub fn render(&mut self, f: &mut Frame, model: &ScreenViewModel, palette: Palette) {
        let [search_area, list_area, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(f.area());

        // The model may have shrunk (new search term) since the selection was made.
        let len = model.entries.len();
        match self.list_state.selected() {
            Some(_) if len == 0 => self.list_state.select(None),
            Some(selected) if selected >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }

        self.viewport_rows = list_area.height.saturating_sub(LIST_BORDER_ROWS) as usize;

        f.render_widget(
            SearchBarView::new(&self.search_input, self.editing, palette),
            search_area,
        );
        f.render_stateful_widget(
            EntryListView::new(model, palette),
            list_area,
            &mut self.list_state,
        );
        f.render_widget(StatusBarView::new(model, palette), status_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{EntryViewModel, LoadStatus};
    use fauxdict_types::Theme;

    fn screen(len: u64) -> ScreenViewModel {
        ScreenViewModel {
            entries: (0..len)
                .map(|id| EntryViewModel {
                    id,
                    text: format!("Word{} (n.): meaning", id),
                })
                .collect(),
            total_loaded: len as usize,
            search_term: String::new(),
            theme: Theme::Light,
            status: LoadStatus::Idle,
            page_count: len / 10,
            fallback: false,
            show_back_to_top: false,
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_keys_map_to_actions() {
        let model = screen(10);
        let mut browser = BrowserComponent::new();

        let cases = [
            (KeyCode::Char('t'), Action::ToggleTheme),
            (KeyCode::Char('r'), Action::RandomEntry),
            (KeyCode::Home, Action::ScrollToTop),
            (KeyCode::Char('q'), Action::Quit),
        ];
        for (code, action) in cases {
            assert_eq!(browser.handle_input(press(code), &model), Some(action));
        }
    }

    #[test]
    fn test_search_editing_emits_terms() {
        let model = screen(10);
        let mut browser = BrowserComponent::new();

        assert_eq!(browser.handle_input(press(KeyCode::Char('/')), &model), None);
        assert!(browser.is_editing());
        assert_eq!(
            browser.handle_input(press(KeyCode::Char('q')), &model),
            Some(Action::SearchChanged("q".to_string()))
        );
        assert_eq!(
            browser.handle_input(press(KeyCode::Backspace), &model),
            Some(Action::SearchChanged(String::new()))
        );
        assert_eq!(browser.handle_input(press(KeyCode::Backspace), &model), None);

        assert_eq!(browser.handle_input(press(KeyCode::Esc), &model), None);
        assert!(!browser.is_editing());
    }

    #[test]
    fn test_selection_is_clamped() {
        let model = screen(3);
        let mut browser = BrowserComponent::new();
        for _ in 0..5 {
            browser.handle_input(press(KeyCode::Down), &model);
        }
        assert_eq!(browser.selected(), Some(2));

        browser.focus_on(1, &model);
        assert_eq!(browser.selected(), Some(1));
    }

    #[test]
    fn test_sentinel_needs_a_rendered_viewport() {
        let model = screen(10);
        let mut browser = BrowserComponent::new();
        assert!(!browser.sentinel_visible(&model));

        browser.viewport_rows = 40;
        assert!(browser.sentinel_visible(&model));

        browser.viewport_rows = 10;
        assert!(!browser.sentinel_visible(&model));
    }
}
