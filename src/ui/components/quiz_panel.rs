use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::input::field::LineInput;
use crate::quiz::PromptDeck;
use crate::ui::theme::Theme;

pub struct QuizPanel<'a> {
    title: &'a str,
    deck: &'a PromptDeck,
    answer: &'a LineInput,
    theme: &'a Theme,
}

impl<'a> QuizPanel<'a> {
    pub fn new(title: &'a str, deck: &'a PromptDeck, answer: &'a LineInput, theme: &'a Theme) -> Self {
        Self {
            title,
            deck,
            answer,
            theme,
        }
    }

    fn answer_line(&self) -> Line<'a> {
        let colors = &self.theme.colors;
        let parts = self.answer.render_parts();
        let mut spans = vec![Span::styled(parts.before, Style::default().fg(colors.fg()))];
        if !parts.selected.is_empty() {
            spans.push(Span::styled(
                parts.selected,
                Style::default().fg(colors.fg()).bg(colors.selection_bg()),
            ));
        }
        if self.answer.is_focused() && parts.selected.is_empty() {
            let cursor_style = Style::default().fg(colors.cursor_fg()).bg(colors.cursor_bg());
            let ch = parts.cursor.map_or_else(|| " ".to_string(), |c| c.to_string());
            spans.push(Span::styled(ch, cursor_style));
        } else if let Some(ch) = parts.cursor {
            spans.push(Span::styled(ch.to_string(), Style::default().fg(colors.fg())));
        }
        spans.push(Span::styled(parts.after, Style::default().fg(colors.fg())));
        Line::from(spans)
    }
}

impl Widget for QuizPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(format!(" {} ", self.title))
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(inner);

        let Some(prompt) = self.deck.current() else {
            return;
        };

        let header = vec![
            Line::from(Span::styled(
                format!("Question {}/{}", self.deck.position() + 1, self.deck.len()),
                Style::default().fg(colors.dim()),
            )),
            Line::from(Span::styled(
                prompt.sentence,
                Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
            )),
        ];
        Paragraph::new(header)
            .wrap(Wrap { trim: true })
            .render(layout[0], buf);

        let answer_block = Block::bordered()
            .title(" Answer ")
            .border_style(Style::default().fg(if self.answer.is_focused() {
                colors.border_focused()
            } else {
                colors.border()
            }));
        let answer_inner = answer_block.inner(layout[1]);
        answer_block.render(layout[1], buf);
        Paragraph::new(self.answer_line()).render(answer_inner, buf);

        let hint_lines: Vec<Line> = self
            .deck
            .visible_hints()
            .iter()
            .enumerate()
            .map(|(i, hint)| {
                Line::from(Span::styled(
                    format!("Hint {}: {hint}", i + 1),
                    Style::default().fg(colors.warning()),
                ))
            })
            .collect();
        Paragraph::new(hint_lines)
            .wrap(Wrap { trim: true })
            .render(layout[2], buf);
    }
}
