use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget, Wrap};

use crate::app::{Notice, NoticeKind};
use crate::ui::layout::centered_rect;
use crate::ui::theme::Theme;

/// Modal popup drawn over everything else until dismissed.
pub struct NoticePopup<'a> {
    notice: &'a Notice,
    theme: &'a Theme,
}

impl<'a> NoticePopup<'a> {
    pub fn new(notice: &'a Notice, theme: &'a Theme) -> Self {
        Self { notice, theme }
    }
}

impl Widget for NoticePopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let popup = centered_rect(40, 25, area);
        Clear.render(popup, buf);

        let accent = match self.notice.kind {
            NoticeKind::Info => colors.accent(),
            NoticeKind::ComingSoon => colors.warning(),
        };

        let block = Block::bordered()
            .title(format!(" {} ", self.notice.title))
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(popup);
        block.render(popup, buf);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.notice.message.as_str(),
                Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled("[Enter] OK", Style::default().fg(colors.dim()))),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
