//! Tolerant calendar-date parsing for record dates.
//!
//! Spreadsheet cells come back in whatever shape the sheet stored them:
//! `2024-03-05`, `2024/3/5`, a full ISO timestamp, or a localized form.
//! Everything is reduced to a [`NaiveDate`]; strings that match nothing
//! yield `None` and are excluded from date-windowed queries.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Parse a record date into a calendar day.
///
/// # Example
///
/// ```rust
/// use boatrace_sdk::dates::parse_date;
/// assert_eq!(parse_date("2024-3-5"), parse_date("2024/03/05"));
/// assert_eq!(parse_date("not a date"), None);
/// ```
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    parse_ymd(s, '-')
        .or_else(|| parse_ymd(s, '/'))
        .or_else(|| parse_fallback(s))
}

/// `Y<sep>M<sep>D` with one- or two-digit month and day.
fn parse_ymd(s: &str, sep: char) -> Option<NaiveDate> {
    let mut parts = s.split(sep);
    let year = parts.next()?;
    let month = parts.next()?;
    let day = parts.next()?;
    if parts.next().is_some() || year.len() != 4 {
        return None;
    }
    if !(1..=2).contains(&month.len()) || !(1..=2).contains(&day.len()) {
        return None;
    }
    let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(year) || !all_digits(month) || !all_digits(day) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

fn parse_fallback(s: &str) -> Option<NaiveDate> {
    // Timestamps with an offset are moved into the local calendar day.
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y/%m/%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    for fmt in ["%Y年%m月%d日", "%m/%d/%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    None
}

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
