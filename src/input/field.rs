use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A live text field: a string value plus a caret range.
///
/// Offsets are char (code point) indices, never byte offsets, and always
/// satisfy `0 <= start <= end <= value.chars().count()`.
pub trait TextField {
    fn value(&self) -> &str;
    fn selection(&self) -> (usize, usize);
    fn set_value(&mut self, value: String);
    fn set_selection(&mut self, start: usize, end: usize);
    fn focus(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Submit,
    Cancel,
}

/// Borrowed slices of a `LineInput` for styled rendering.
#[derive(Debug, PartialEq, Eq)]
pub struct RenderParts<'a> {
    pub before: &'a str,
    pub selected: &'a str,
    /// Char under the caret; `None` at end of text or while a selection is active.
    pub cursor: Option<char>,
    pub after: &'a str,
}

#[derive(Clone, Debug, Default)]
pub struct LineInput {
    text: String,
    /// Caret position as a char index (0 = before first char).
    cursor: usize,
    /// Other end of the selection, if one is active.
    anchor: Option<usize>,
    focused: bool,
}

impl LineInput {
    pub fn new(text: &str) -> Self {
        let cursor = text.chars().count();
        Self {
            text: text.to_string(),
            cursor,
            anchor: None,
            focused: false,
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
        self.anchor = None;
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn render_parts(&self) -> RenderParts<'_> {
        let (start, end) = self.selection();
        if start != end {
            let s = self.char_to_byte(start);
            let e = self.char_to_byte(end);
            return RenderParts {
                before: &self.text[..s],
                selected: &self.text[s..e],
                cursor: None,
                after: &self.text[e..],
            };
        }

        let byte_offset = self.char_to_byte(self.cursor);
        match self.text[byte_offset..].chars().next() {
            Some(ch) => RenderParts {
                before: &self.text[..byte_offset],
                selected: "",
                cursor: Some(ch),
                after: &self.text[byte_offset + ch.len_utf8()..],
            },
            None => RenderParts {
                before: &self.text,
                selected: "",
                cursor: None,
                after: "",
            },
        }
    }

    pub fn handle(&mut self, key: KeyEvent) -> InputResult {
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => return InputResult::Cancel,
            KeyCode::Enter => return InputResult::Submit,

            KeyCode::Left => {
                let target = self.cursor.saturating_sub(1);
                self.move_cursor(target, shift);
            }
            KeyCode::Right => {
                let target = (self.cursor + 1).min(self.len());
                self.move_cursor(target, shift);
            }
            KeyCode::Home => self.move_cursor(0, shift),
            KeyCode::End => self.move_cursor(self.len(), shift),
            KeyCode::Backspace => {
                let (start, end) = self.selection();
                if start != end {
                    self.splice(start, end, "");
                } else if self.cursor > 0 {
                    self.splice(self.cursor - 1, self.cursor, "");
                }
            }
            KeyCode::Delete => {
                let (start, end) = self.selection();
                if start != end {
                    self.splice(start, end, "");
                } else if self.cursor < self.len() {
                    self.splice(self.cursor, self.cursor + 1, "");
                }
            }
            KeyCode::Char('a') if ctrl => self.move_cursor(0, false),
            KeyCode::Char('e') if ctrl => self.move_cursor(self.len(), false),
            KeyCode::Char('u') if ctrl => self.clear(),
            KeyCode::Char('w') if ctrl => self.delete_word_back(),
            KeyCode::Char(ch) if !ctrl => {
                let (start, end) = self.selection();
                let mut buf = [0u8; 4];
                self.splice(start, end, ch.encode_utf8(&mut buf));
            }
            _ => {}
        }
        InputResult::Continue
    }

    fn move_cursor(&mut self, target: usize, extend: bool) {
        if extend {
            if self.anchor.is_none() {
                self.anchor = Some(self.cursor);
            }
        } else {
            self.anchor = None;
        }
        self.cursor = target;
        if self.anchor == Some(self.cursor) {
            self.anchor = None;
        }
    }

    /// Replace chars `start..end` with `insert`, leaving the caret after it.
    fn splice(&mut self, start: usize, end: usize, insert: &str) {
        let start_byte = self.char_to_byte(start);
        let end_byte = self.char_to_byte(end);
        self.text.replace_range(start_byte..end_byte, insert);
        self.cursor = start + insert.chars().count();
        self.anchor = None;
    }

    /// Convert char index to byte offset.
    fn char_to_byte(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(b, _)| b)
            .unwrap_or(self.text.len())
    }

    /// Delete word before cursor (unix-word-rubout: skip whitespace, then non-whitespace).
    fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let chars: Vec<char> = self.text.chars().collect();
        let mut pos = self.cursor;

        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }

        self.splice(pos, self.cursor, "");
    }
}

impl TextField for LineInput {
    fn value(&self) -> &str {
        &self.text
    }

    fn selection(&self) -> (usize, usize) {
        match self.anchor {
            Some(anchor) => (anchor.min(self.cursor), anchor.max(self.cursor)),
            None => (self.cursor, self.cursor),
        }
    }

    fn set_value(&mut self, value: String) {
        self.text = value;
        let len = self.len();
        let cursor = self.cursor.min(len);
        self.cursor = cursor;
        self.anchor = self.anchor.map(|a| a.min(len)).filter(|&a| a != cursor);
    }

    fn set_selection(&mut self, start: usize, end: usize) {
        let len = self.len();
        let end = end.min(len);
        let start = start.min(end);
        self.cursor = end;
        self.anchor = (start != end).then_some(start);
    }

    fn focus(&mut self) {
        self.focused = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn shift(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::SHIFT)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn insert_at_start_middle_end() {
        let mut input = LineInput::new("ac");
        input.handle(key(KeyCode::Char('d')));
        assert_eq!(input.value(), "acd");

        input.handle(key(KeyCode::Home));
        input.handle(key(KeyCode::Char('z')));
        assert_eq!(input.value(), "zacd");
        assert_eq!(input.cursor, 1);

        input.handle(key(KeyCode::Right));
        input.handle(key(KeyCode::Char('b')));
        assert_eq!(input.value(), "zabcd");
        assert_eq!(input.cursor, 3);
    }

    #[test]
    fn caret_counts_code_points() {
        let mut input = LineInput::new("∀x");
        assert_eq!(input.selection(), (2, 2));
        input.handle(key(KeyCode::Left));
        input.handle(key(KeyCode::Char('y')));
        assert_eq!(input.value(), "∀yx");
        assert_eq!(input.selection(), (2, 2));
    }

    #[test]
    fn backspace_at_boundaries() {
        let mut input = LineInput::new("a¬");
        input.handle(key(KeyCode::Backspace));
        assert_eq!(input.value(), "a");

        input.handle(key(KeyCode::Backspace));
        assert_eq!(input.value(), "");

        input.handle(key(KeyCode::Backspace));
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn delete_at_boundaries() {
        let mut input = LineInput::new("ab");
        input.handle(key(KeyCode::Home));
        input.handle(key(KeyCode::Delete));
        assert_eq!(input.value(), "b");
        assert_eq!(input.cursor, 0);

        input.handle(key(KeyCode::End));
        input.handle(key(KeyCode::Delete));
        assert_eq!(input.value(), "b");

        let mut empty = LineInput::new("");
        empty.handle(key(KeyCode::Delete));
        assert_eq!(empty.value(), "");
    }

    #[test]
    fn shift_arrows_extend_selection() {
        let mut input = LineInput::new("P→Q");
        input.handle(shift(KeyCode::Left));
        input.handle(shift(KeyCode::Left));
        assert_eq!(input.selection(), (1, 3));

        // Shrinking back onto the caret collapses the selection
        input.handle(shift(KeyCode::Right));
        input.handle(shift(KeyCode::Right));
        assert_eq!(input.selection(), (3, 3));
        assert!(input.anchor.is_none());
    }

    #[test]
    fn typing_replaces_selection() {
        let mut input = LineInput::new("P→Q");
        input.set_selection(1, 2);
        input.handle(key(KeyCode::Char('v')));
        assert_eq!(input.value(), "PvQ");
        assert_eq!(input.selection(), (2, 2));
    }

    #[test]
    fn backspace_removes_selection_only() {
        let mut input = LineInput::new("abcd");
        input.set_selection(1, 3);
        input.handle(key(KeyCode::Backspace));
        assert_eq!(input.value(), "ad");
        assert_eq!(input.selection(), (1, 1));
    }

    #[test]
    fn plain_arrow_drops_selection() {
        let mut input = LineInput::new("abcd");
        input.set_selection(0, 2);
        input.handle(key(KeyCode::Left));
        assert_eq!(input.selection(), (1, 1));
    }

    #[test]
    fn ctrl_w_word_delete() {
        let mut input = LineInput::new("∀x P(x)  ");
        input.handle(ctrl('w'));
        assert_eq!(input.value(), "∀x ");

        let mut input2 = LineInput::new("");
        input2.handle(ctrl('w'));
        assert_eq!(input2.value(), "");
    }

    #[test]
    fn ctrl_a_e_u() {
        let mut input = LineInput::new("test");
        input.handle(ctrl('a'));
        assert_eq!(input.cursor, 0);
        input.handle(ctrl('e'));
        assert_eq!(input.cursor, 4);
        input.handle(ctrl('u'));
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn set_selection_clamps_to_length() {
        let mut input = LineInput::new("ab");
        input.set_selection(5, 9);
        assert_eq!(input.selection(), (2, 2));
        input.set_selection(2, 1);
        assert_eq!(input.selection(), (1, 1));
    }

    #[test]
    fn set_value_clamps_caret() {
        let mut input = LineInput::new("abcdef");
        input.set_value("ab".to_string());
        assert_eq!(input.selection(), (2, 2));
    }

    #[test]
    fn render_parts_with_caret_and_selection() {
        let mut input = LineInput::new("∃xQ");
        input.set_selection(1, 1);
        assert_eq!(
            input.render_parts(),
            RenderParts { before: "∃", selected: "", cursor: Some('x'), after: "Q" }
        );

        input.set_selection(0, 2);
        assert_eq!(
            input.render_parts(),
            RenderParts { before: "", selected: "∃x", cursor: None, after: "Q" }
        );

        input.set_selection(3, 3);
        assert_eq!(
            input.render_parts(),
            RenderParts { before: "∃xQ", selected: "", cursor: None, after: "" }
        );
    }

    #[test]
    fn submit_and_cancel() {
        let mut input = LineInput::new("test");
        assert_eq!(input.handle(key(KeyCode::Enter)), InputResult::Submit);
        assert_eq!(input.handle(key(KeyCode::Esc)), InputResult::Cancel);
        assert_eq!(input.handle(key(KeyCode::Char('x'))), InputResult::Continue);
    }
}
