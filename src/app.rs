use std::collections::VecDeque;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::Config;
use crate::input::field::{InputResult, LineInput, TextField};
use crate::input::inserter::{self, KeyDisposition};
use crate::input::symbols::SymbolSet;
use crate::nav::catalog::CategoryCatalog;
use crate::nav::machine::NavigationStateMachine;
use crate::nav::state::ComingSoon;
use crate::quiz::PromptDeck;
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Categories,
    Subcategories,
    Answer,
    Palette,
}

/// Every user interaction funnels through one of these, keyed by the same
/// identifiers the widgets are rendered from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiAction {
    SelectCategory(String),
    SelectSubcategory(usize),
    InsertSymbol(String),
    DismissNotice,
    NextPrompt,
    PrevPrompt,
    RevealHint,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    ComingSoon,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: &str, message: &str) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    fn coming_soon(notice: &ComingSoon) -> Self {
        Self {
            kind: NoticeKind::ComingSoon,
            title: notice.subcategory.to_string(),
            message: "This section is coming soon!".to_string(),
        }
    }
}

pub struct App {
    pub nav: NavigationStateMachine,
    pub answer: LineInput,
    pub symbols: SymbolSet,
    pub prompts: PromptDeck,
    pub focus: Focus,
    pub category_cursor: usize,
    pub subcategory_cursor: usize,
    pub palette_cursor: usize,
    pub notices: VecDeque<Notice>,
    pub theme: &'static Theme,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, theme: &'static Theme) -> Self {
        let nav = NavigationStateMachine::new(
            CategoryCatalog::reference(),
            &config.default_category,
            config.revisit_policy,
        );
        let symbols = SymbolSet::standard().with_extras(&config.extra_symbols);
        let category_cursor = nav
            .catalog()
            .position(nav.active_category())
            .unwrap_or(0);
        let subcategory_cursor = nav.state().active_subcategory.unwrap_or(0);

        let mut app = Self {
            nav,
            answer: LineInput::default(),
            symbols,
            prompts: PromptDeck::default(),
            focus: Focus::Categories,
            category_cursor,
            subcategory_cursor,
            palette_cursor: 0,
            notices: VecDeque::new(),
            theme,
            should_quit: false,
        };
        if app.nav.content_visible() {
            app.set_focus(Focus::Answer);
        }
        app
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }

    /// The answer field only exists while the quiz content is shown.
    pub fn answer_field(&mut self) -> Option<&mut LineInput> {
        self.nav.content_visible().then_some(&mut self.answer)
    }

    pub fn set_focus(&mut self, focus: Focus) {
        let focus = match focus {
            Focus::Answer | Focus::Palette if !self.nav.content_visible() => Focus::Subcategories,
            other => other,
        };
        if focus == Focus::Answer {
            self.answer.focus();
        } else {
            self.answer.blur();
        }
        self.focus = focus;
    }

    fn focus_order(&self) -> &'static [Focus] {
        if self.nav.content_visible() {
            &[
                Focus::Categories,
                Focus::Subcategories,
                Focus::Answer,
                Focus::Palette,
            ]
        } else {
            &[Focus::Categories, Focus::Subcategories]
        }
    }

    fn cycle_focus(&mut self, forward: bool) {
        let order = self.focus_order();
        let idx = order.iter().position(|&f| f == self.focus).unwrap_or(0);
        let next = if forward {
            (idx + 1) % order.len()
        } else {
            (idx + order.len() - 1) % order.len()
        };
        self.set_focus(order[next]);
    }

    pub fn dispatch(&mut self, action: UiAction) {
        match action {
            UiAction::SelectCategory(key) => {
                if self.nav.select_category(&key).is_ok() {
                    self.category_cursor = self.nav.catalog().position(&key).unwrap_or(0);
                    self.subcategory_cursor = self.nav.state().active_subcategory.unwrap_or(0);
                    if !self.nav.content_visible() && matches!(self.focus, Focus::Answer | Focus::Palette) {
                        self.set_focus(Focus::Categories);
                    } else {
                        self.set_focus(self.focus);
                    }
                }
            }
            UiAction::SelectSubcategory(index) => {
                let category = self.nav.active_category();
                if let Ok(notice) = self.nav.select_subcategory(category, index) {
                    self.subcategory_cursor = index;
                    match notice {
                        Some(notice) => {
                            self.push_notice(Notice::coming_soon(&notice));
                            self.set_focus(Focus::Subcategories);
                        }
                        None => self.set_focus(Focus::Answer),
                    }
                }
            }
            UiAction::InsertSymbol(id) => {
                let field = self.nav.content_visible().then_some(&mut self.answer);
                if inserter::on_button_click(&self.symbols, &id, field).is_ok()
                    && self.answer.is_focused()
                {
                    self.focus = Focus::Answer;
                }
            }
            UiAction::DismissNotice => {
                self.notices.pop_front();
            }
            UiAction::NextPrompt => {
                self.prompts.next();
                self.answer.clear();
            }
            UiAction::PrevPrompt => {
                self.prompts.prev();
                self.answer.clear();
            }
            UiAction::RevealHint => {
                self.prompts.reveal_hint();
            }
            UiAction::Quit => self.should_quit = true,
        }
    }

    /// Bracketed paste lands at the caret like a multi-char symbol.
    pub fn paste(&mut self, text: &str) {
        if self.focus != Focus::Answer || self.notice().is_some() {
            return;
        }
        let line: String = text.chars().filter(|c| !c.is_control()).collect();
        inserter::insert_symbol(self.answer_field(), &line);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.dispatch(UiAction::Quit);
            return;
        }

        // Notices are modal
        if self.notice().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.dispatch(UiAction::DismissNotice);
            }
            return;
        }

        let content = self.nav.content_visible();
        match (key.code, self.focus) {
            (KeyCode::Tab, _) => self.cycle_focus(true),
            (KeyCode::BackTab, _) => self.cycle_focus(false),
            (KeyCode::F(1), _) if content => self.dispatch(UiAction::RevealHint),
            (KeyCode::PageDown, _) if content => self.dispatch(UiAction::NextPrompt),
            (KeyCode::PageUp, _) if content => self.dispatch(UiAction::PrevPrompt),
            (_, Focus::Categories) => self.handle_categories_key(key),
            (_, Focus::Subcategories) => self.handle_subcategories_key(key),
            (_, Focus::Answer) => self.handle_answer_key(key),
            (_, Focus::Palette) => self.handle_palette_key(key),
        }
    }

    fn category_key_at(&self, index: usize) -> Option<String> {
        self.nav
            .catalog()
            .categories()
            .get(index)
            .map(|def| def.key.to_string())
    }

    fn handle_digit(&mut self, ch: char) {
        let Some(n) = ch.to_digit(10).filter(|&n| n > 0) else {
            return;
        };
        if let Some(key) = self.category_key_at(n as usize - 1) {
            self.dispatch(UiAction::SelectCategory(key));
        }
    }

    fn handle_categories_key(&mut self, key: KeyEvent) {
        let count = self.nav.catalog().categories().len();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.dispatch(UiAction::Quit),
            KeyCode::Left | KeyCode::Char('h') => {
                self.category_cursor = (self.category_cursor + count - 1) % count;
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.category_cursor = (self.category_cursor + 1) % count;
            }
            KeyCode::Down | KeyCode::Char('j') => self.set_focus(Focus::Subcategories),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(key) = self.category_key_at(self.category_cursor) {
                    self.dispatch(UiAction::SelectCategory(key));
                    self.set_focus(Focus::Subcategories);
                }
            }
            KeyCode::Char(ch) => self.handle_digit(ch),
            _ => {}
        }
    }

    fn handle_subcategories_key(&mut self, key: KeyEvent) {
        let count = self.nav.subcategory_entries().len().max(1);
        match key.code {
            KeyCode::Esc => self.set_focus(Focus::Categories),
            KeyCode::Char('q') => self.dispatch(UiAction::Quit),
            KeyCode::Up | KeyCode::Char('k') => {
                self.subcategory_cursor = (self.subcategory_cursor + count - 1) % count;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.subcategory_cursor = (self.subcategory_cursor + 1) % count;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.dispatch(UiAction::SelectSubcategory(self.subcategory_cursor));
            }
            KeyCode::Char(ch) => self.handle_digit(ch),
            _ => {}
        }
    }

    fn handle_answer_key(&mut self, key: KeyEvent) {
        if let KeyCode::Char(ch) = key.code {
            let alt = key.modifiers.contains(KeyModifiers::ALT);
            let field = self.nav.content_visible().then_some(&mut self.answer);
            if inserter::dispatch_shortcut(ch, alt, field) == KeyDisposition::Handled {
                return;
            }
        }

        match self.answer.handle(key) {
            InputResult::Continue => {}
            InputResult::Submit => self.dispatch(UiAction::NextPrompt),
            InputResult::Cancel => self.set_focus(Focus::Subcategories),
        }
    }

    fn handle_palette_key(&mut self, key: KeyEvent) {
        let count = self.symbols.len().max(1);
        match key.code {
            KeyCode::Esc => self.set_focus(Focus::Answer),
            KeyCode::Left | KeyCode::Char('h') => {
                self.palette_cursor = (self.palette_cursor + count - 1) % count;
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.palette_cursor = (self.palette_cursor + 1) % count;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(button) = self.symbols.buttons().get(self.palette_cursor) {
                    let id = button.id.clone();
                    self.dispatch(UiAction::InsertSymbol(id));
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::machine::RevisitPolicy;

    fn app() -> App {
        let theme: &'static Theme = Box::leak(Box::new(Theme::default()));
        App::new(Config::default(), theme)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn alt(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::ALT)
    }

    #[test]
    fn test_startup_focuses_answer_field() {
        let app = app();
        assert_eq!(app.nav.active_category(), "predicate-logic");
        assert!(app.nav.content_visible());
        assert_eq!(app.focus, Focus::Answer);
        assert!(app.answer.is_focused());
        assert_eq!(app.category_cursor, 2);
    }

    #[test]
    fn test_startup_on_placeholder_category_focuses_categories() {
        let theme: &'static Theme = Box::leak(Box::new(Theme::default()));
        let config = Config {
            default_category: "truth-tables".to_string(),
            ..Config::default()
        };
        let app = App::new(config, theme);
        assert!(!app.nav.content_visible());
        assert_eq!(app.focus, Focus::Categories);
        assert!(!app.answer.is_focused());
    }

    #[test]
    fn test_alt_shortcuts_insert_symbols() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('P')));
        app.handle_key(alt('i'));
        app.handle_key(press(KeyCode::Char('Q')));
        assert_eq!(app.answer.value(), "P→Q");

        app.handle_key(press(KeyCode::Left));
        app.handle_key(press(KeyCode::Left));
        app.handle_key(KeyEvent::new(
            KeyCode::Char('D'),
            KeyModifiers::ALT | KeyModifiers::SHIFT,
        ));
        assert_eq!(app.answer.value(), "P∧→Q");
        assert_eq!(app.answer.selection(), (2, 2));
    }

    #[test]
    fn test_unbound_alt_key_types_normally() {
        let mut app = app();
        app.handle_key(alt('z'));
        assert_eq!(app.answer.value(), "z");
    }

    #[test]
    fn test_palette_click_inserts_and_refocuses_answer() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('x')));
        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Palette);
        assert!(!app.answer.is_focused());

        // Last standard button is the biconditional
        app.palette_cursor = 6;
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.answer.value(), "x↔");
        assert_eq!(app.focus, Focus::Answer);
        assert!(app.answer.is_focused());
    }

    #[test]
    fn test_unknown_palette_symbol_is_ignored() {
        let mut app = app();
        app.dispatch(UiAction::InsertSymbol("⊕".to_string()));
        assert_eq!(app.answer.value(), "");
    }

    #[test]
    fn test_placeholder_subcategory_raises_modal_notice() {
        let mut app = app();
        app.dispatch(UiAction::SelectSubcategory(1));
        assert!(!app.nav.content_visible());
        assert_eq!(app.notices.len(), 1);
        let notice = app.notice().unwrap();
        assert_eq!(notice.kind, NoticeKind::ComingSoon);
        assert_eq!(notice.title, "Many Place Translation");
        assert_eq!(app.focus, Focus::Subcategories);

        // Keys other than dismissal are swallowed
        app.handle_key(press(KeyCode::Down));
        assert_eq!(app.subcategory_cursor, 1);
        assert_eq!(app.notices.len(), 1);

        app.handle_key(press(KeyCode::Enter));
        assert!(app.notice().is_none());
    }

    #[test]
    fn test_category_keys_navigate() {
        let mut app = app();
        app.set_focus(Focus::Categories);
        app.handle_key(press(KeyCode::Char('1')));
        assert_eq!(app.nav.active_category(), "truth-tables");
        assert!(!app.nav.content_visible());
        assert_eq!(app.category_cursor, 0);

        app.handle_key(press(KeyCode::Right));
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.nav.active_category(), "sentential-logic");
        assert_eq!(app.focus, Focus::Subcategories);
        assert_eq!(app.nav.subcategory_entries().len(), 5);
    }

    #[test]
    fn test_leaving_functional_category_hides_answer_field() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('x')));
        app.dispatch(UiAction::SelectCategory("truth-tables".to_string()));
        assert!(app.answer_field().is_none());
        assert_ne!(app.focus, Focus::Answer);

        // Shortcuts have nowhere to land
        app.handle_key(alt('a'));
        assert_eq!(app.answer.value(), "x");
    }

    #[test]
    fn test_unknown_category_action_keeps_state() {
        let mut app = app();
        let before = app.nav.state().clone();
        app.dispatch(UiAction::SelectCategory("modal-logic".to_string()));
        assert_eq!(app.nav.state(), &before);
    }

    #[test]
    fn test_every_visit_policy_reopens_content() {
        let theme: &'static Theme = Box::leak(Box::new(Theme::default()));
        let config = Config {
            revisit_policy: RevisitPolicy::EveryVisit,
            ..Config::default()
        };
        let mut app = App::new(config, theme);
        app.dispatch(UiAction::SelectCategory("truth-tables".to_string()));
        app.dispatch(UiAction::SelectCategory("predicate-logic".to_string()));
        assert!(app.nav.content_visible());
        assert_eq!(app.subcategory_cursor, 0);
    }

    #[test]
    fn test_enter_in_answer_advances_prompt_and_clears() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('x')));
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.prompts.position(), 1);
        assert_eq!(app.answer.value(), "");
    }

    #[test]
    fn test_paste_inserts_at_caret() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('Q')));
        app.handle_key(press(KeyCode::Home));
        app.paste("∀x(P(x)\n→ ");
        assert_eq!(app.answer.value(), "∀x(P(x)→ Q");
        assert_eq!(app.answer.selection(), (9, 9));
    }

    #[test]
    fn test_tab_skips_hidden_content() {
        let mut app = app();
        app.dispatch(UiAction::SelectCategory("truth-tables".to_string()));
        app.set_focus(Focus::Categories);
        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Subcategories);
        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Categories);
    }
}
