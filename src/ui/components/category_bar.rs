use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::nav::machine::CategoryMarker;
use crate::ui::theme::Theme;

pub struct CategoryBar<'a> {
    markers: &'a [CategoryMarker],
    cursor: usize,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> CategoryBar<'a> {
    pub fn new(markers: &'a [CategoryMarker], cursor: usize, focused: bool, theme: &'a Theme) -> Self {
        Self {
            markers,
            cursor,
            focused,
            theme,
        }
    }
}

impl Widget for CategoryBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Categories ")
            .border_style(Style::default().fg(if self.focused {
                colors.border_focused()
            } else {
                colors.border()
            }))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans: Vec<Span> = Vec::new();
        for (i, marker) in self.markers.iter().enumerate() {
            let mut style = if marker.active {
                Style::default()
                    .fg(colors.active_fg())
                    .bg(colors.active_bg())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.fg())
            };
            if self.focused && i == self.cursor {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            spans.push(Span::styled(format!(" [{}] {} ", i + 1, marker.name), style));
            spans.push(Span::raw(" "));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
