//! Configuration types for snehapothi.
//!
//! [`Config::load`] reads `~/.config/snehapothi/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[schedule]
expected_year = 2025
month_order   = ["August", "September", "October", "November", "December"]

[ui]
page_size = 8
theme     = "default"

[branding]
organisation = "Indian Youth Congress • Trivandrum District"
title        = "Sneha Pothi"
meeting_time = "12:30 PM"
venue        = "RCC Thiruvananthapuram"
footer       = "Indian Youth Congress – Trivandrum District Committee"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/snehapothi/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub branding: BrandingConfig,
}

/// `[schedule]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Entries dated in any other year are flagged for review.
    #[serde(default = "default_expected_year")]
    pub expected_year: i32,
    /// Preferred month panel order. Months not listed are appended after.
    #[serde(default = "default_month_order")]
    pub month_order: Vec<String>,
}

fn default_expected_year() -> i32 { 2025 }
fn default_month_order() -> Vec<String> {
    ["August", "September", "October", "November", "December"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            expected_year: default_expected_year(),
            month_order: default_month_order(),
        }
    }
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_page_size() -> usize { 8 }
fn default_theme() -> String { "default".to_string() }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            theme: default_theme(),
        }
    }
}

/// `[branding]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct BrandingConfig {
    #[serde(default = "default_organisation")]
    pub organisation: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_meeting_time")]
    pub meeting_time: String,
    #[serde(default = "default_venue")]
    pub venue: String,
    #[serde(default = "default_footer")]
    pub footer: String,
}

fn default_organisation() -> String { "Indian Youth Congress • Trivandrum District".to_string() }
fn default_title() -> String { "Sneha Pothi".to_string() }
fn default_meeting_time() -> String { "12:30 PM".to_string() }
fn default_venue() -> String { "RCC Thiruvananthapuram".to_string() }
fn default_footer() -> String { "Indian Youth Congress – Trivandrum District Committee".to_string() }

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            organisation: default_organisation(),
            title: default_title(),
            meeting_time: default_meeting_time(),
            venue: default_venue(),
            footer: default_footer(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/snehapothi/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&config_path())
    }

    /// Same as [`Config::load`] but for an explicit file location.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, DEFAULT_CONFIG.trim_start())?;
            tracing::info!(path = %path.display(), "wrote default config");
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// `$XDG_CONFIG_HOME/snehapothi/config.toml`, falling back to `~/.config`.
pub fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("snehapothi")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load() {
        let cfg = Config::defaults();
        assert_eq!(cfg.schedule.expected_year, 2025);
        assert_eq!(cfg.schedule.month_order.first().map(String::as_str), Some("August"));
        assert_eq!(cfg.schedule.month_order.last().map(String::as_str), Some("December"));
        assert_eq!(cfg.ui.page_size, 8);
        assert_eq!(cfg.branding.title, "Sneha Pothi");
    }

    #[test]
    fn embedded_defaults_match_serde_defaults() {
        let cfg = Config::defaults();
        assert_eq!(cfg.schedule.month_order, ScheduleConfig::default().month_order);
        assert_eq!(cfg.branding.venue, BrandingConfig::default().venue);
    }
}
