//! Date parser for the `DD.MM.YYYY` texts used in the dataset.
//!
//! Parsing never fails loudly: anything that cannot be turned into a calendar
//! date yields `None`, and callers degrade to "unknown date" display.
//!
//! Calendar construction is lenient in the same way as a classic
//! `(year, month, day)` date constructor: out-of-range months carry into the
//! year and out-of-range days carry across month boundaries, so `31.09.2025`
//! becomes 1 October 2025 rather than an error. Years `0..=99` are read as
//! `1900 + year`.
//!
//! The representable range is chrono's, roughly ±262,000 years. Years beyond
//! that (`1.1.270000`) yield `None` even though a JavaScript `Date` would
//! still accept them.

use chrono::{Datelike, NaiveDate, TimeDelta};

/// Parse `DD.MM.YYYY`, tolerating whitespace anywhere in the text.
///
/// Returns `None` when there are fewer than three dot-separated parts, when a
/// part has no leading integer, or when the resulting date is outside the
/// representable calendar range. Parts after the third are ignored.
pub fn parse_dmy(text: &str) -> Option<NaiveDate> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let parts: Vec<&str> = compact.split('.').collect();
    if parts.len() < 3 {
        return None;
    }

    let day = leading_int(parts[0])?;
    let month = leading_int(parts[1])?;
    let year = leading_int(parts[2])?;

    construct(year, month.checked_sub(1)?, day)
}

/// Build a date from a year, a zero-based month and a one-based day, carrying
/// overflow in either field into the next larger unit.
fn construct(year: i64, month0: i64, day: i64) -> Option<NaiveDate> {
    let year = if (0..=99).contains(&year) { 1900 + year } else { year };

    let total_months = year.checked_mul(12)?.checked_add(month0)?;
    let y = i32::try_from(total_months.div_euclid(12)).ok()?;
    let m = u32::try_from(total_months.rem_euclid(12) + 1).ok()?;

    let first = NaiveDate::from_ymd_opt(y, m, 1)?;
    first.checked_add_signed(TimeDelta::try_days(day.checked_sub(1)?)?)
}

/// Read an optionally signed run of leading ASCII digits, ignoring whatever
/// follows (`"15th"` → 15). No digits at all → `None`.
fn leading_int(s: &str) -> Option<i64> {
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// `15/8/2025` — numeric day/month/year without zero padding.
pub fn display_numeric(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}

/// `Friday, 15 Aug 2025` — the long form used on the hero cards.
pub fn display_long(date: NaiveDate) -> String {
    date.format("%A, %d %b %Y").to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
