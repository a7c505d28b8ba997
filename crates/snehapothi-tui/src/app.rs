//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic.

use crate::{
    commands::execute_command,
    dashboard::Dashboard,
    event::{self, AppEvent, Direction},
    theme::Theme,
    widgets::{
        command_bar::{BarAction, CommandBar, CommandBarState},
        header::{Footer, Header},
        help::HelpPopup,
        hero::HeroCard,
        month_bar::MonthBar,
        schedule_table::{page_count, ScheduleTable, ScheduleTableState},
    },
};
use chrono::{Datelike, Local, NaiveDate};
use crossterm::{
    event::{self as ct_event, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    Frame, Terminal,
};
use snehapothi_core::EnrichedRecord;
use std::{io, time::Duration};

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub dashboard: Dashboard,
    /// Index into `dashboard.order` of the open month panel.
    pub open: usize,
    /// Whether the open panel shows its table.
    pub expanded: bool,
    pub table: ScheduleTableState,
    pub theme: Theme,
    pub show_help: bool,
    pub command_open: bool,
    pub command_bar: CommandBarState,
    /// Fixed reference date; `None` follows the local clock.
    pub today_override: Option<NaiveDate>,
    pub quit: bool,
}

impl AppState {
    pub fn new(dashboard: Dashboard, theme: Theme, today_override: Option<NaiveDate>) -> Self {
        let mut state = Self {
            dashboard,
            open: 0,
            expanded: true,
            table: ScheduleTableState::default(),
            theme,
            show_help: false,
            command_open: false,
            command_bar: CommandBarState::default(),
            today_override,
            quit: false,
        };
        state.open = state.dashboard.default_panel(state.today());
        state
    }

    /// The reference date, read from the local clock unless overridden.
    pub fn today(&self) -> NaiveDate {
        self.today_override
            .unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn open_month(&self) -> Option<&str> {
        self.dashboard.order.get(self.open).map(String::as_str)
    }

    /// Records of the open panel.
    pub fn open_rows(&self) -> &[EnrichedRecord] {
        self.open_month()
            .map(|m| self.dashboard.rows(m))
            .unwrap_or(&[])
    }

    pub fn page_size(&self) -> usize {
        self.dashboard.config.ui.page_size.max(1)
    }

    pub fn page_count(&self) -> usize {
        page_count(self.open_rows().len(), self.page_size())
    }

    /// Open panel `idx` (accordion: any other panel closes) on its first page.
    pub fn open_panel(&mut self, idx: usize) {
        if idx >= self.dashboard.order.len() {
            return;
        }
        self.open = idx;
        self.expanded = true;
        self.table.reset();
        tracing::debug!(month = ?self.open_month(), "panel opened");
    }

    pub fn next_panel(&mut self) {
        let n = self.dashboard.order.len();
        if n > 0 {
            self.open_panel((self.open + 1) % n);
        }
    }

    pub fn prev_panel(&mut self) {
        let n = self.dashboard.order.len();
        if n > 0 {
            self.open_panel((self.open + n - 1) % n);
        }
    }

    pub fn jump_to_today(&mut self) {
        let idx = self.dashboard.default_panel(self.today());
        self.open_panel(idx);
    }

    /// Apply one semantic event.
    pub fn handle(&mut self, event: AppEvent) {
        // Help popup intercepts all events; only close keys pass through.
        if self.show_help {
            if matches!(event, AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit) {
                tracing::debug!("help popup closed");
                self.show_help = false;
            }
            return;
        }

        if self.command_open {
            if event == AppEvent::Quit {
                self.quit = true;
                return;
            }
            match self.command_bar.handle(&event) {
                BarAction::Pending => {}
                BarAction::Close => self.command_open = false,
                BarAction::Run(cmd) => {
                    if let Err(msg) = execute_command(self, cmd) {
                        tracing::debug!(error = %msg, "command failed");
                        self.command_bar.error = Some(msg);
                    } else {
                        self.command_open = false;
                    }
                }
            }
            return;
        }

        match event {
            AppEvent::Quit => {
                tracing::debug!("quit");
                self.quit = true;
            }
            AppEvent::Char('?') => {
                tracing::debug!("help popup opened");
                self.show_help = true;
            }
            AppEvent::Char(':') => {
                tracing::debug!("entering command mode");
                self.command_bar.clear();
                self.command_open = true;
            }
            AppEvent::Char('t') => self.jump_to_today(),
            AppEvent::NextPanel | AppEvent::Nav(Direction::Right) => self.next_panel(),
            AppEvent::PrevPanel | AppEvent::Nav(Direction::Left) => self.prev_panel(),
            AppEvent::Enter => {
                self.expanded = !self.expanded;
                tracing::debug!(expanded = self.expanded, "panel toggled");
            }
            ev @ (AppEvent::Nav(_) | AppEvent::PageUp | AppEvent::PageDown) => {
                if self.expanded {
                    let total = self.open_rows().len();
                    let page_size = self.page_size();
                    self.table.handle(&ev, total, page_size);
                }
            }
            // Terminal resize is handled automatically by ratatui
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(dashboard: Dashboard, theme: Theme, today_override: Option<NaiveDate>) -> Self {
        App {
            state: AppState::new(dashboard, theme, today_override),
        }
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            // The poll timeout bounds how stale the day window can get.
            if ct_event::poll(Duration::from_millis(250))? {
                let raw = ct_event::read()?;
                if let Event::Key(key) = &raw {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                }
                let app_event = if self.state.command_open {
                    event::to_app_event_insert(raw)
                } else {
                    event::to_app_event(raw)
                };
                if let Some(ev) = app_event {
                    tracing::debug!(event = ?ev);
                    self.state.handle(ev);
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

pub fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let today = state.today();
    let theme = &state.theme;
    let config = &state.dashboard.config;

    // header | hero cards | month bar | table | footer
    let [header, hero, months, table, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(6),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(Header::new(&config.branding, theme), header);

    let window = state.dashboard.window(today);
    let cards = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(hero);
    for ((label, record), card) in window.slots().into_iter().zip(cards.iter()) {
        frame.render_widget(HeroCard::new(label, record, theme), *card);
    }

    let counts: Vec<(String, usize)> = state
        .dashboard
        .order
        .iter()
        .map(|m| (m.clone(), state.dashboard.rows(m).len()))
        .collect();
    frame.render_widget(MonthBar::new(&counts, state.open, state.expanded, theme), months);

    if state.expanded {
        if let Some(month) = state.open_month() {
            frame.render_widget(
                ScheduleTable::new(
                    month,
                    state.open_rows(),
                    &state.table,
                    state.page_size(),
                    theme,
                ),
                table,
            );
        }
    }

    frame.render_widget(Footer::new(&config.branding.footer, Local::now().year(), theme), footer);

    if state.show_help {
        frame.render_widget(HelpPopup::new(theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.command_open {
        let cmd_area = Rect { y: area.bottom().saturating_sub(1), height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::test_support::rows;
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;
    use snehapothi_core::{config::Config, RawRecord, Schedule};

    fn state_on(y: i32, m: u32, d: u32) -> AppState {
        let raws: Vec<RawRecord> = (1..=10)
            .map(|d| RawRecord::new(format!("{d:02}.08.2025"), Some("Aug")))
            .chain([
                RawRecord::new("02.09.2025", Some("Sep")),
                RawRecord::new("03.10.2025", Some("Oct")),
            ])
            .collect();
        let dashboard = Dashboard::new(Schedule::build(&raws, 2025).unwrap(), Config::defaults());
        AppState::new(
            dashboard,
            Theme::load_default(),
            NaiveDate::from_ymd_opt(y, m, d),
        )
    }

    #[test]
    fn opens_current_month_first() {
        assert_eq!(state_on(2025, 9, 1).open_month(), Some("September"));
        assert_eq!(state_on(2025, 1, 1).open_month(), Some("August"));
    }

    #[test]
    fn panels_wrap_around() {
        let mut s = state_on(2025, 8, 1);
        s.handle(AppEvent::PrevPanel);
        assert_eq!(s.open_month(), Some("October"));
        s.handle(AppEvent::NextPanel);
        s.handle(AppEvent::Nav(Direction::Right));
        assert_eq!(s.open_month(), Some("September"));
    }

    #[test]
    fn switching_panel_resets_table() {
        let mut s = state_on(2025, 8, 1);
        s.handle(AppEvent::PageDown);
        assert_eq!(s.table.page, 1);
        s.handle(AppEvent::NextPanel);
        assert_eq!(s.table, ScheduleTableState::default());
    }

    #[test]
    fn enter_collapses_and_blocks_table_nav() {
        let mut s = state_on(2025, 8, 1);
        s.handle(AppEvent::Enter);
        assert!(!s.expanded);
        s.handle(AppEvent::PageDown);
        assert_eq!(s.table.page, 0);
    }

    #[test]
    fn command_bar_runs_commands() {
        let mut s = state_on(2025, 8, 1);
        for c in ":month oct".chars() {
            s.handle(AppEvent::Char(c));
        }
        s.handle(AppEvent::Enter);
        assert!(!s.command_open);
        assert_eq!(s.open_month(), Some("October"));

        for c in ":theme dark".chars() {
            s.handle(AppEvent::Char(c));
        }
        s.handle(AppEvent::Enter);
        assert_eq!(s.theme.name, "dark");
    }

    #[test]
    fn failed_command_keeps_bar_open() {
        let mut s = state_on(2025, 8, 1);
        for c in ":month jan".chars() {
            s.handle(AppEvent::Char(c));
        }
        s.handle(AppEvent::Enter);
        assert!(s.command_open);
        assert!(s.command_bar.error.as_deref().unwrap().contains("January"));
    }

    #[test]
    fn page_command_is_bounded() {
        let mut s = state_on(2025, 8, 1);
        assert_eq!(execute_command(&mut s, crate::commands::Command::Page(2)), Ok(()));
        assert_eq!(s.table.page, 1);
        assert!(execute_command(&mut s, crate::commands::Command::Page(3)).is_err());
    }

    #[test]
    fn today_key_returns_to_current_month() {
        let mut s = state_on(2025, 10, 5);
        s.handle(AppEvent::NextPanel);
        assert_eq!(s.open_month(), Some("August"));
        s.handle(AppEvent::Char('t'));
        assert_eq!(s.open_month(), Some("October"));
    }

    #[test]
    fn help_swallows_other_keys() {
        let mut s = state_on(2025, 8, 1);
        s.handle(AppEvent::Char('?'));
        s.handle(AppEvent::Quit);
        assert!(!s.show_help);
        assert!(!s.quit);
        s.handle(AppEvent::Quit);
        assert!(s.quit);
    }

    #[test]
    fn draws_full_dashboard() {
        let s = state_on(2025, 8, 2);
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| draw(f, &s)).unwrap();
        let text = rows(terminal.backend().buffer()).join("\n");

        assert!(text.contains("Sneha Pothi"));
        assert!(text.contains("Saturday, 02 Aug 2025"));
        assert!(text.contains("Sunday, 03 Aug 2025"));
        assert!(text.contains("▾ August (10)"));
        assert!(text.contains("page 1/2"));
        assert!(text.contains(&format!("© {}", Local::now().year())));
    }

    #[test]
    fn footer_year_ignores_pinned_date() {
        let s = state_on(2019, 8, 2);
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| draw(f, &s)).unwrap();
        let footer = rows(terminal.backend().buffer()).pop().unwrap_or_default();

        assert!(footer.contains(&format!("© {}", Local::now().year())), "{footer}");
        assert!(!footer.contains("© 2019"));
    }
}
