//! Headless report — the dashboard as plain text or JSON, for pipes and cron.
//!
//! Text output carries no ANSI escapes. Every month panel is written in
//! display order, fully expanded and unpaginated.

use std::io::{self, Write};

use chrono::{Datelike, Local, NaiveDate};
use serde_json::json;
use snehapothi_core::{
    date::{display_long, display_numeric},
    EnrichedRecord,
};

use crate::dashboard::Dashboard;

/// Write the text report for the window starting at `today`.
pub fn write_text(out: &mut impl Write, dashboard: &Dashboard, today: NaiveDate) -> io::Result<()> {
    let branding = &dashboard.config.branding;
    writeln!(out, "{}", branding.title)?;
    writeln!(out, "{}", branding.organisation)?;
    writeln!(out, "{} · {}", branding.meeting_time, branding.venue)?;
    writeln!(out)?;

    for (label, record) in dashboard.window(today).slots() {
        match record {
            Some(r) => {
                let date = r.date.map(display_long).unwrap_or_else(|| r.date_text.clone());
                writeln!(
                    out,
                    "{:<10} {:<24} {}{}",
                    label,
                    date,
                    r.mandalam_label(),
                    flags(r)
                )?;
            }
            None => writeln!(out, "{label:<10} No entry")?,
        }
    }

    writeln!(out)?;
    writeln!(out, "Full Schedule")?;
    for month in &dashboard.order {
        let rows = dashboard.rows(month);
        writeln!(out)?;
        writeln!(out, "{month} ({})", rows.len())?;
        for r in rows {
            let date = r.date.map(display_numeric).unwrap_or_else(|| r.date_text.clone());
            writeln!(
                out,
                "  {:<12} {:<4} {}{}",
                date,
                r.weekday,
                r.mandalam.as_deref().unwrap_or(""),
                flags(r)
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "© {} {}", Local::now().year(), branding.footer)?;
    Ok(())
}

/// Write the same content as one pretty-printed JSON document.
pub fn write_json(out: &mut impl Write, dashboard: &Dashboard, today: NaiveDate) -> io::Result<()> {
    let window = dashboard.window(today);
    let months: Vec<_> = dashboard
        .order
        .iter()
        .map(|m| json!({ "month": m, "records": dashboard.rows(m) }))
        .collect();
    let doc = json!({
        "reference": today,
        "window": {
            "today": window.today,
            "tomorrow": window.tomorrow,
            "day_after": window.day_after,
        },
        "months": months,
    });
    serde_json::to_writer_pretty(&mut *out, &doc)?;
    writeln!(out)
}

fn flags(r: &EnrichedRecord) -> String {
    let mut s = String::new();
    if r.tbd {
        s.push_str("  [TBD]");
    }
    if r.suspect {
        s.push_str("  [Check year]");
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use snehapothi_core::{config::Config, RawRecord, Schedule};

    fn dashboard() -> Dashboard {
        let raws = vec![
            RawRecord::new("15.08.2025", Some("Neyyattinkara")),
            RawRecord::new("15.08.2025", Some("Parassala")),
            RawRecord::new("16.08.2024", Some("Kovalam")),
            RawRecord::new("bad-date", None).with_tbd(true),
            RawRecord::new("05.01.2026", Some("District Convention")),
        ];
        Dashboard::new(Schedule::build(&raws, 2025).unwrap(), Config::defaults())
    }

    fn text(today: NaiveDate) -> String {
        let mut out = Vec::new();
        write_text(&mut out, &dashboard(), today).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_report_lists_window_and_months() {
        let out = text(NaiveDate::from_ymd_opt(2025, 8, 15).unwrap());
        assert!(out.contains("Today      Friday, 15 Aug 2025      Neyyattinkara"));
        assert!(out.contains("Tomorrow   No entry"));
        assert!(out.contains("August (3)"));
        assert!(out.contains("Parassala"));
        assert!(out.contains("Unknown (1)"));
        assert!(out.contains("bad-date"));
        assert!(out.contains("[TBD]  [Check year]"));
        assert!(!out.contains('\u{1b}'));
    }

    #[test]
    fn footer_year_follows_clock_not_reference_date() {
        let out = text(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        let footer = format!("© {} ", Local::now().year());
        assert!(out.lines().any(|l| l.starts_with(&footer)), "{out}");
    }

    #[test]
    fn unlisted_month_is_appended() {
        let out = text(NaiveDate::from_ymd_opt(2025, 8, 15).unwrap());
        let aug = out.find("August (3)").unwrap();
        let jan = out.find("January (1)").unwrap();
        let unknown = out.find("Unknown (1)").unwrap();
        assert!(aug < jan && jan < unknown);
        assert!(out.contains("District Convention  [Check year]"));
    }

    #[test]
    fn json_report_is_valid() {
        let mut out = Vec::new();
        let today = NaiveDate::from_ymd_opt(2025, 8, 14).unwrap();
        write_json(&mut out, &dashboard(), today).unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(doc["reference"], "2025-08-14");
        assert!(doc["window"]["today"].is_null());
        assert_eq!(doc["window"]["tomorrow"]["mandalam"], "Neyyattinkara");
        assert_eq!(doc["months"][0]["month"], "August");
        assert_eq!(doc["months"][0]["records"].as_array().unwrap().len(), 3);
        assert_eq!(doc["months"].as_array().unwrap().len(), 3);
    }
}
