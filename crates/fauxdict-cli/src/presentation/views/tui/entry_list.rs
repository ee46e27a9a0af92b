use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget},
};

use super::Palette;
use crate::presentation::formatters::split_headword;
use crate::presentation::view_models::{LoadStatus, ScreenViewModel};

/// Visible entries, two rows each, followed by the end-of-list row.
pub struct EntryListView<'a> {
    model: &'a ScreenViewModel,
    palette: Palette,
}

impl<'a> EntryListView<'a> {
    pub fn new(model: &'a ScreenViewModel, palette: Palette) -> Self {
        Self { model, palette }
    }

    fn footer_text(&self) -> &'static str {
        match self.model.status {
            LoadStatus::Connecting => "Fetching the word list…",
            LoadStatus::Loading => "Loading more words…",
            LoadStatus::Idle => "",
            LoadStatus::Exhausted => "— end of dictionary —",
        }
    }
}

impl StatefulWidget for EntryListView<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ListState) {
        let palette = self.palette;

        let mut items: Vec<ListItem> = self
            .model
            .entries
            .iter()
            .map(|entry| {
                let (head, definition) = split_headword(&entry.text);
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(
                            head.to_string(),
                            Style::default()
                                .fg(palette.accent)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!("  #{}", entry.id),
                            Style::default().fg(palette.muted),
                        ),
                    ]),
                    Line::from(Span::styled(
                        format!("  {}", definition),
                        Style::default().fg(palette.fg),
                    )),
                ])
            })
            .collect();

        if self.model.entries.is_empty() && !self.model.search_term.is_empty() {
            items.push(ListItem::new(Line::from(Span::styled(
                format!("No loaded entries contain \"{}\"", self.model.search_term),
                Style::default().fg(palette.muted),
            ))));
        }

        // Sentinel row; its visibility is what asks for the next batch.
        items.push(ListItem::new(Line::from(Span::styled(
            self.footer_text(),
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::ITALIC),
        ))));

        let title = if self.model.search_term.is_empty() {
            " fauxdict ".to_string()
        } else {
            format!(
                " fauxdict · {} of {} ",
                self.model.entries.len(),
                self.model.total_loaded
            )
        };

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(Style::default().fg(palette.muted)),
            )
            .style(palette.base())
            .highlight_style(Style::default().bg(palette.selection))
            .highlight_symbol("▌ ");

        StatefulWidget::render(list, area, buf, state);
    }
}
