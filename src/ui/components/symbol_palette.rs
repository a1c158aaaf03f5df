use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::input::symbols::SymbolButton;
use crate::ui::theme::Theme;

pub struct SymbolPalette<'a> {
    buttons: &'a [SymbolButton],
    cursor: usize,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> SymbolPalette<'a> {
    pub fn new(buttons: &'a [SymbolButton], cursor: usize, focused: bool, theme: &'a Theme) -> Self {
        Self {
            buttons,
            cursor,
            focused,
            theme,
        }
    }
}

/// Button caption, e.g. `∀ Alt+A` or just `↔`.
pub fn button_caption(button: &SymbolButton) -> String {
    match button.shortcut {
        Some(key) => format!("{} Alt+{}", button.symbol, key.to_ascii_uppercase()),
        None => button.symbol.clone(),
    }
}

impl Widget for SymbolPalette<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Symbols ")
            .border_style(Style::default().fg(if self.focused {
                colors.border_focused()
            } else {
                colors.border()
            }))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans: Vec<Span> = Vec::new();
        for (i, button) in self.buttons.iter().enumerate() {
            let style = if self.focused && i == self.cursor {
                Style::default()
                    .fg(colors.active_fg())
                    .bg(colors.active_bg())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.fg()).bg(colors.header_bg())
            };
            spans.push(Span::styled(format!(" {} ", button_caption(button)), style));
            spans.push(Span::raw(" "));
        }

        Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
