//! Formatting of Wikidata point-in-time values.
//!
//! Wikidata encodes times as `+1889-04-16T00:00:00Z`: an optional sign, a
//! zero-padded year, then month and day that may be `00` when the statement
//! only has year precision. Negative years are rendered with a BCE marker.

use tracing::warn;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Format a Wikidata time string as a human-readable date.
///
/// Full precision becomes `16 April 1889`; year precision (month or day
/// `00`) becomes `1889`; negative years become a year with a ` BCE` suffix.
/// Malformed input degrades to best-effort year extraction and only then
/// to `None`.
pub fn format_time(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }

    match parse(raw) {
        Some(formatted) => Some(formatted),
        None => {
            warn!(raw = %raw, "Malformed time value, extracting year only");
            extract_year(raw)
        }
    }
}

fn parse(raw: &str) -> Option<String> {
    let date_part = raw.trim_start_matches('+').split('T').next()?;

    let (is_bce, date_part) = match date_part.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, date_part),
    };

    let mut parts = date_part.split('-');
    let year: i64 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next().map_or(Ok(0), str::parse).ok()?;
    let day: u32 = parts.next().map_or(Ok(0), str::parse).ok()?;

    if year == 0 {
        return None;
    }

    // BCE dates render with year precision only.
    if is_bce {
        return Some(format!("{} BCE", year));
    }

    // Month or day 00 means the statement only carries year precision.
    if month == 0 || day == 0 {
        return Some(year.to_string());
    }

    let month_name = MONTHS.get(month as usize - 1)?;
    Some(format!("{} {} {}", day, month_name, year))
}

fn extract_year(raw: &str) -> Option<String> {
    let trimmed = raw.trim_start_matches('+');
    let (is_bce, trimmed) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let digits: String = trimmed.chars().take_while(char::is_ascii_digit).collect();
    let year: i64 = digits.parse().ok()?;
    if year == 0 {
        return None;
    }

    if is_bce {
        Some(format!("{} BCE", year))
    } else {
        Some(year.to_string())
    }
}
