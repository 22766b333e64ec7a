//! Calendar and clock normalization for captured phrases.
//!
//! Captures that survive parsing become ISO (`YYYY-MM-DD`, `HH:MM`);
//! anything unparsable is kept verbatim. Feed ordering later maps those
//! verbatim leftovers to "now" rather than dropping the row.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

#[allow(clippy::unwrap_used)]
static ORDINAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d{1,2})(?:st|nd|rd|th)").unwrap());

#[allow(clippy::unwrap_used)]
static CLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(\d{1,2})(?::(\d{2}))?\s*(am|pm)$").unwrap());

/// Normalize a captured date phrase to `YYYY-MM-DD`, keeping the raw text
/// when no calendar reading exists. Years are defaulted to the current one.
#[must_use]
pub fn normalize_date(raw: &str) -> String {
    normalize_date_in_year(raw, Utc::now().year())
}

fn normalize_date_in_year(raw: &str, default_year: i32) -> String {
    parse_date(raw, default_year).map_or_else(|| raw.to_string(), |d| d.format("%Y-%m-%d").to_string())
}

fn parse_date(raw: &str, default_year: i32) -> Option<NaiveDate> {
    let cleaned = ORDINAL.replace_all(raw.trim(), "$1").to_string();

    if let Ok(d) = NaiveDate::parse_from_str(&cleaned, "%Y-%m-%d") {
        return Some(d);
    }

    // "June 15" / "Jun 15" / "15 of June"
    for format in ["%B %d %Y", "%b %d %Y", "%d of %B %Y", "%d of %b %Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(&format!("{cleaned} {default_year}"), format) {
            return Some(d);
        }
    }

    parse_numeric(&cleaned, default_year)
}

/// Day-first numeric dates: D/M, D/M/YY, D/M/YYYY.
fn parse_numeric(cleaned: &str, default_year: i32) -> Option<NaiveDate> {
    let parts: Vec<&str> = cleaned.split('/').collect();
    if parts.len() != 2 && parts.len() != 3 {
        return None;
    }

    let day: u32 = parts[0].trim().parse().ok()?;
    let month: u32 = parts[1].trim().parse().ok()?;
    let year = match parts.get(2) {
        Some(y) => {
            let y: i32 = y.trim().parse().ok()?;
            if y < 100 { 2000 + y } else { y }
        }
        None => default_year,
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Convert a captured "H[:MM]am|pm" phrase to 24-hour `HH:MM`, keeping the
/// raw text when the shape is off.
#[must_use]
pub fn to_24h(raw: &str) -> String {
    let trimmed = raw.trim();
    let Some(caps) = CLOCK.captures(trimmed) else {
        return raw.to_string();
    };

    let Some(hour) = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok()) else {
        return raw.to_string();
    };
    let minutes = caps.get(2).map_or("00", |m| m.as_str());
    let meridiem = caps.get(3).map_or(String::new(), |m| m.as_str().to_lowercase());

    let hour = match (meridiem.as_str(), hour) {
        ("pm", h) if h < 12 => h + 12,
        ("am", 12) => 0,
        (_, h) => h,
    };

    format!("{hour:02}:{minutes}")
}

/// Combine ISO date and `HH:MM` time columns into a UTC instant for feed
/// ordering. `None` when either part never normalized.
#[must_use]
pub fn combine_instant(date: &str, time: &str) -> Option<DateTime<Utc>> {
    let stamp = format!("{date}T{time}");
    let naive = NaiveDateTime::parse_from_str(&stamp, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(&stamp, "%Y-%m-%dT%H:%M:%S"))
        .ok()?;

    Some(Utc.from_utc_datetime(&naive))
}

/// Parse a stored instant string (RFC 3339 or bare datetime).
#[must_use]
pub fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok()
}
