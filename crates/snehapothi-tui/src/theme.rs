//! Colour theme for the snehapothi dashboard.
//!
//! Themes are defined as TOML files. Both built-in themes are embedded in the
//! binary via [`include_str!`] so the application works without any files on
//! disk. Resolve one with [`Theme::by_name`] at startup and pass the result
//! through the application as a shared reference.

use config::{Config, File, FileFormat};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");
const DARK_THEME_SRC: &str = include_str!("themes/dark.toml");

/// Names accepted by [`Theme::by_name`] and the `:theme` command.
pub const THEME_NAMES: &[&str] = &["default", "dark"];

// ---------------------------------------------------------------------------
// Raw (serde) types — mirror the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underlined: bool,
}

impl RawStyle {
    fn into_style(self) -> Style {
        let mut style = Style::default();
        if let Some(c) = self.fg.as_deref().and_then(parse_color) {
            style = style.fg(c);
        }
        if let Some(c) = self.bg.as_deref().and_then(parse_color) {
            style = style.bg(c);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.dim {
            style = style.add_modifier(Modifier::DIM);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.underlined {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct RawHeader {
    organisation: RawStyle,
    title: RawStyle,
    time_tag: RawStyle,
    venue_tag: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawHero {
    stripe_left: RawStyle,
    stripe_middle: RawStyle,
    stripe_right: RawStyle,
    label: RawStyle,
    mandalam: RawStyle,
    date: RawStyle,
    empty: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawFlags {
    suspect: RawStyle,
    tbd: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawTable {
    header: RawStyle,
    cursor: RawStyle,
    pager: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawAccordion {
    open: RawStyle,
    closed: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    unfocused: RawStyle,
    command_bar: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawFooter {
    text: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    header: RawHeader,
    hero: RawHero,
    flags: RawFlags,
    table: RawTable,
    accordion: RawAccordion,
    borders: RawBorders,
    footer: RawFooter,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Dashboard colour theme.
///
/// All styles are pre-resolved ratatui [`Style`] values, so nothing is parsed
/// at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,

    pub header_organisation: Style,
    pub header_title: Style,
    pub header_time_tag: Style,
    pub header_venue_tag: Style,

    /// The three bands of a hero card's title bar, left to right.
    pub hero_stripes: [Style; 3],
    /// Card label drawn over the stripes.
    pub hero_label: Style,
    pub hero_mandalam: Style,
    pub hero_date: Style,
    /// "No entry" placeholder.
    pub hero_empty: Style,

    pub flag_suspect: Style,
    pub flag_tbd: Style,

    pub table_header: Style,
    pub table_cursor: Style,
    pub table_pager: Style,

    pub accordion_open: Style,
    pub accordion_closed: Style,

    pub border_focused: Style,
    pub border_unfocused: Style,
    pub border_command_bar: Style,

    pub footer: Style,
}

impl Theme {
    /// Load and parse the embedded default theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed, which the theme tests rule out.
    pub fn load_default() -> Self {
        Self::from_toml_str("default", DEFAULT_THEME_SRC)
            .expect("embedded default theme must be valid TOML")
    }

    /// Load and parse the embedded dark theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_dark() -> Self {
        Self::from_toml_str("dark", DARK_THEME_SRC).expect("embedded dark theme must be valid TOML")
    }

    /// Resolve a built-in theme by name (case-insensitive). Unknown names
    /// return `None`.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "default" | "light" => Some(Self::load_default()),
            "dark" => Some(Self::load_dark()),
            _ => None,
        }
    }

    /// Parse a theme from a TOML string.
    ///
    /// Unknown keys are ignored; every section listed in the built-in themes
    /// is required.
    pub fn from_toml_str(name: &str, src: &str) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            name: name.to_string(),
            header_organisation: raw.header.organisation.into_style(),
            header_title: raw.header.title.into_style(),
            header_time_tag: raw.header.time_tag.into_style(),
            header_venue_tag: raw.header.venue_tag.into_style(),
            hero_stripes: [
                raw.hero.stripe_left.into_style(),
                raw.hero.stripe_middle.into_style(),
                raw.hero.stripe_right.into_style(),
            ],
            hero_label: raw.hero.label.into_style(),
            hero_mandalam: raw.hero.mandalam.into_style(),
            hero_date: raw.hero.date.into_style(),
            hero_empty: raw.hero.empty.into_style(),
            flag_suspect: raw.flags.suspect.into_style(),
            flag_tbd: raw.flags.tbd.into_style(),
            table_header: raw.table.header.into_style(),
            table_cursor: raw.table.cursor.into_style(),
            table_pager: raw.table.pager.into_style(),
            accordion_open: raw.accordion.open.into_style(),
            accordion_closed: raw.accordion.closed.into_style(),
            border_focused: raw.borders.focused.into_style(),
            border_unfocused: raw.borders.unfocused.into_style(),
            border_command_bar: raw.borders.command_bar.into_style(),
            footer: raw.footer.text.into_style(),
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a colour name into a ratatui [`Color`].
///
/// Accepts:
/// - Named terminal colours (case-insensitive): `red`, `dark_gray`, etc.
/// - Hex RGB: `#rrggbb`
/// - 256-colour indexed: `indexed:N`
fn parse_color(s: &str) -> Option<Color> {
    match s.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "darkgray" | "dark_grey" | "darkgrey" => Some(Color::DarkGray),
        "white" => Some(Color::White),
        s if s.starts_with('#') && s.len() == 7 => {
            let r = u8::from_str_radix(&s[1..3], 16).ok()?;
            let g = u8::from_str_radix(&s[3..5], 16).ok()?;
            let b = u8::from_str_radix(&s[5..7], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        s if s.starts_with("indexed:") => {
            let n: u8 = s["indexed:".len()..].parse().ok()?;
            Some(Color::Indexed(n))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
