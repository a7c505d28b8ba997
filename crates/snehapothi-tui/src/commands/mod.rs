// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

use crate::{app::AppState, theme::Theme};
use snehapothi_core::grouper::month_from_name;

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Close the dashboard
    Quit,
    // Toggle the help popup
    Help,
    // Switch to a built-in theme
    Theme(String),
    // Open the panel for a month (canonical name)
    Month(String),
    // Go to a 1-based page of the open table
    Page(usize),
    // Open the current month's panel
    Today,
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "today" => Ok(Command::Today),
            "theme" => {
                if rest.is_empty() {
                    Err("usage: theme <default|dark>".to_string())
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            "month" | "m" => match month_from_name(rest) {
                Some(month) => Ok(Command::Month(month.to_string())),
                None if rest.is_empty() => Err("usage: month <name>".to_string()),
                None => Err(format!("unknown month: {rest}")),
            },
            "page" | "p" => match rest.parse::<usize>() {
                Ok(n) if n >= 1 => Ok(Command::Page(n)),
                _ => Err("usage: page <n>".to_string()),
            },
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Execute a parsed [`Command`] against the application state.
///
/// Returns an error message for commands that parse but cannot apply (e.g.
/// a month with no entries).
pub fn execute_command(s: &mut AppState, cmd: Command) -> Result<(), String> {
    match cmd {
        Command::Quit => {
            s.quit = true;
        }
        Command::Help => {
            s.show_help = !s.show_help;
        }
        Command::Theme(name) => {
            s.theme = Theme::by_name(&name).ok_or_else(|| format!("unknown theme: {name}"))?;
            tracing::debug!(theme = %s.theme.name, "theme switched");
        }
        Command::Month(month) => {
            let idx = s
                .dashboard
                .order
                .iter()
                .position(|m| *m == month)
                .ok_or_else(|| format!("no entries in {month}"))?;
            s.open_panel(idx);
        }
        Command::Page(n) => {
            let total = s.page_count();
            if n > total {
                return Err(format!("only {total} page(s)"));
            }
            s.table.page = n - 1;
            s.table.cursor = 0;
        }
        Command::Today => {
            s.jump_to_today();
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
