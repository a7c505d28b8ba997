use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use snehapothi::{core::config::Config, tui::theme::Theme};

#[derive(Parser)]
#[command(name = "snehapothi", about = "Sneha Pothi — district committee schedule dashboard")]
struct Cli {
    /// Write debug logs to a file (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Debug log location.
    #[arg(long, default_value = "/tmp/snehapothi-debug.log")]
    log_file: PathBuf,

    /// Config file (default: $XDG_CONFIG_HOME/snehapothi/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the dashboard to stdout instead of starting the TUI.
    #[arg(long)]
    headless: bool,

    /// Output format for --headless.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Reference date (YYYY-MM-DD) instead of the local clock.
    #[arg(long, value_parser = parse_day)]
    today: Option<NaiveDate>,

    /// Theme name, overriding the config (default, dark).
    #[arg(long)]
    theme: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn parse_day(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{s}', expected YYYY-MM-DD"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&cli.log_file)?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!(path = %cli.log_file.display(), "snehapothi debug log started");
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "config unreadable, using defaults");
            Config::defaults()
        }),
    };

    let theme_name = cli.theme.as_deref().unwrap_or(&config.ui.theme);
    let theme = Theme::by_name(theme_name)
        .ok_or_else(|| anyhow::anyhow!("unknown theme '{theme_name}'"))?;

    let dashboard = snehapothi::load_dashboard(config)?;

    if cli.headless {
        let today = cli
            .today
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        let mut out = std::io::stdout().lock();
        match cli.format {
            Format::Text => snehapothi::tui::headless::write_text(&mut out, &dashboard, today)?,
            Format::Json => snehapothi::tui::headless::write_json(&mut out, &dashboard, today)?,
        }
        return Ok(());
    }

    snehapothi::tui::run(dashboard, theme, cli.today)
}
