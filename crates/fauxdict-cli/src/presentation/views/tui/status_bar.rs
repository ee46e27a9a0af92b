//! Bottom bar: counts, load status and key help.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{Palette, status_level_to_color};
use crate::presentation::view_models::{LoadStatus, ScreenViewModel, StatusLevel};

pub struct StatusBarView<'a> {
    model: &'a ScreenViewModel,
    palette: Palette,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a ScreenViewModel, palette: Palette) -> Self {
        Self { model, palette }
    }

    fn status(&self) -> (StatusLevel, &'static str) {
        if self.model.fallback {
            return (StatusLevel::Warning, "built-in words");
        }
        match self.model.status {
            LoadStatus::Connecting | LoadStatus::Loading => (StatusLevel::Info, "loading"),
            LoadStatus::Idle => (StatusLevel::Success, "ready"),
            LoadStatus::Exhausted => (StatusLevel::Info, "the end"),
        }
    }
}

impl Widget for StatusBarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = self.palette;
        let key = Style::default().fg(palette.accent);
        let halves = [Constraint::Percentage(45), Constraint::Percentage(55)];
        let chunks = Layout::horizontal(halves).split(area);

        let (level, label) = self.status();
        let status_line = Line::from(vec![
            Span::styled(
                format!(" {} entries ", self.model.total_loaded),
                Style::default().fg(palette.fg),
            ),
            Span::raw("| "),
            Span::styled(
                format!("page {} ", self.model.page_count),
                Style::default().fg(palette.fg),
            ),
            Span::raw("| "),
            Span::styled(label, Style::default().fg(status_level_to_color(level))),
        ]);
        Paragraph::new(status_line)
            .style(palette.base())
            .render(chunks[0], buf);

        let mut help = vec![
            Span::styled("[/]", key),
            Span::raw("search "),
            Span::styled("[r]", key),
            Span::raw("andom "),
            Span::styled("[t]", key),
            Span::raw("heme "),
        ];
        if self.model.show_back_to_top {
            help.push(Span::styled("[g]", key));
            help.push(Span::raw("↑top "));
        }
        help.push(Span::styled("[q]", key));
        help.push(Span::raw("uit"));

        Paragraph::new(Line::from(help))
            .style(palette.base())
            .right_aligned()
            .render(chunks[1], buf);
    }
}
