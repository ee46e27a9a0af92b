use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::Palette;

pub struct SearchBarView<'a> {
    input: &'a str,
    editing: bool,
    palette: Palette,
}

impl<'a> SearchBarView<'a> {
    pub fn new(input: &'a str, editing: bool, palette: Palette) -> Self {
        Self {
            input,
            editing,
            palette,
        }
    }
}

impl Widget for SearchBarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = self.palette;
        let border = if self.editing {
            palette.accent
        } else {
            palette.muted
        };

        let line = if self.input.is_empty() && !self.editing {
            Line::from(Span::styled(
                "press / to search",
                Style::default().fg(palette.muted),
            ))
        } else {
            let cursor = if self.editing { "▏" } else { "" };
            Line::from(vec![
                Span::styled(self.input, Style::default().fg(palette.fg)),
                Span::styled(cursor, Style::default().fg(palette.accent)),
            ])
        };

        Paragraph::new(line)
            .style(palette.base())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" search ")
                    .border_style(Style::default().fg(border)),
            )
            .render(area, buf);
    }
}
