use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::nav::catalog::SubcategoryKind;
use crate::nav::machine::SubcategoryEntry;
use crate::ui::theme::Theme;

pub struct SubcategoryList<'a> {
    entries: &'a [SubcategoryEntry],
    cursor: usize,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> SubcategoryList<'a> {
    pub fn new(entries: &'a [SubcategoryEntry], cursor: usize, focused: bool, theme: &'a Theme) -> Self {
        Self {
            entries,
            cursor,
            focused,
            theme,
        }
    }
}

impl Widget for SubcategoryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Topics ")
            .border_style(Style::default().fg(if self.focused {
                colors.border_focused()
            } else {
                colors.border()
            }))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let indicator = if self.focused && i == self.cursor { ">" } else { " " };
                let style = if entry.active {
                    Style::default()
                        .fg(colors.active_fg())
                        .bg(colors.active_bg())
                        .add_modifier(Modifier::BOLD)
                } else if entry.kind == SubcategoryKind::Placeholder {
                    Style::default().fg(colors.dim())
                } else {
                    Style::default().fg(colors.fg())
                };
                Line::from(vec![
                    Span::styled(indicator, Style::default().fg(colors.accent())),
                    Span::styled(format!(" {} ", entry.name), style),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
