mod app;
mod config;
mod event;
mod input;
mod logging;
mod nav;
mod quiz;
mod ui;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use app::{App, Focus, Notice};
use config::Config;
use event::{AppEvent, EventHandler};
use ui::components::category_bar::CategoryBar;
use ui::components::notice::NoticePopup;
use ui::components::quiz_panel::QuizPanel;
use ui::components::subcategory_list::SubcategoryList;
use ui::components::symbol_palette::SymbolPalette;
use ui::layout::{AppLayout, pack_hint_lines};
use ui::theme::Theme;

#[derive(Parser)]
#[command(name = "logiq", version, about = "Terminal formal-logic quiz with symbolic formula input")]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Category to open at startup (e.g. predicate-logic)")]
    category: Option<String>,

    #[arg(long, help = "Log level (trace, debug, info, warn, error)")]
    log_level: Option<String>,

    #[arg(long, help = "Log file path")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    if let Some(category) = cli.category {
        config.default_category = category;
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }

    let log_path = cli.log_file.unwrap_or_else(logging::default_log_path);
    let log_level = cli.log_level.unwrap_or_else(|| config.log_level.clone());
    if let Err(err) = logging::init(&log_path, &log_level) {
        eprintln!("Warning: logging disabled: {err:#}");
    }

    let theme = Theme::load(&config.theme).unwrap_or_else(|| {
        tracing::warn!(theme = %config.theme, "theme not found, using default");
        Theme::default()
    });
    let theme: &'static Theme = Box::leak(Box::new(theme));

    let mut app = App::new(config, theme);
    if let Some(err) = config_error {
        tracing::error!(error = %format!("{err:#}"), "failed to load config");
        app.push_notice(Notice::info(
            "Config",
            "Your config file could not be read. Using defaults.",
        ));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!(error = %format!("{err:#}"), "run loop failed");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => app.handle_key(key),
            AppEvent::Paste(text) => app.paste(&text),
            AppEvent::Resize => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    let entries = app.nav.subcategory_entries();
    let layout = AppLayout::new(area, entries.len());

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " logiq ",
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " Formal logic practice",
            Style::default().fg(colors.dim()).bg(colors.header_bg()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, layout.header);

    let markers = app.nav.category_markers();
    frame.render_widget(
        CategoryBar::new(&markers, app.category_cursor, app.focus == Focus::Categories, app.theme),
        layout.categories,
    );
    frame.render_widget(
        SubcategoryList::new(
            &entries,
            app.subcategory_cursor,
            app.focus == Focus::Subcategories,
            app.theme,
        ),
        layout.subcategories,
    );

    if app.nav.content_visible() {
        render_content(frame, app, layout.content);
    } else {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "  Pick a topic to begin.",
            Style::default().fg(colors.dim()),
        )))
        .block(Block::bordered().border_style(Style::default().fg(colors.border())));
        frame.render_widget(placeholder, layout.content);
    }

    let hints: &[&str] = match app.focus {
        Focus::Categories => &["[←→] Move", "[Enter] Open", "[1-9] Jump", "[Tab] Next", "[q] Quit"],
        Focus::Subcategories => &["[↑↓] Move", "[Enter] Select", "[Tab] Next", "[Esc] Back", "[q] Quit"],
        Focus::Answer => &[
            "[Alt+A] ∀",
            "[Alt+E] ∃",
            "[Alt+I] →",
            "[Alt+N] ¬",
            "[Alt+D] ∧",
            "[Alt+O] ∨",
            "[F1] Hint",
            "[PgUp/PgDn] Question",
            "[Tab] Symbols",
        ],
        Focus::Palette => &["[←→] Move", "[Enter] Insert", "[Esc] Answer", "[Tab] Next"],
    };
    let footer_lines: Vec<Line> = pack_hint_lines(hints, layout.footer.width as usize)
        .into_iter()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(colors.dim()))))
        .collect();
    frame.render_widget(Paragraph::new(footer_lines), layout.footer);

    if let Some(notice) = app.notice() {
        frame.render_widget(NoticePopup::new(notice, app.theme), area);
    }
}

fn render_content(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(4)])
        .split(area);

    let title = app
        .nav
        .state()
        .active_subcategory
        .and_then(|i| app.nav.subcategory_entries().get(i).map(|e| e.name))
        .unwrap_or("Quiz");
    frame.render_widget(QuizPanel::new(title, &app.prompts, &app.answer, app.theme), split[0]);
    frame.render_widget(
        SymbolPalette::new(
            app.symbols.buttons(),
            app.palette_cursor,
            app.focus == Focus::Palette,
            app.theme,
        ),
        split[1],
    );
}
