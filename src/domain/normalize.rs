// src/domain/normalize.rs

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Placeholder shown for any cell that has nothing to display.
pub const EM_DASH: &str = "—";

/// Shown in place of an amount that could not be read.
pub const NOT_APPLICABLE: &str = "No aplica";

pub const CURRENCY_MARKER: &str = "S/";

/// Width of a facility code once zero-padded.
pub const CODLOCAL_WIDTH: usize = 6;

const ABSENT_SENTINELS: [&str; 5] = ["NA", "N/A", "NONE", "NULL", "NAN"];

const MONTHS: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

// Day-first is tried before month-first, so `05/08/2026` is 5 August.
const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%m/%d/%Y",
];

const DATETIME_FORMATS: [&str; 8] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// A nullable amount. `None` means "not applicable", which is not the same as zero.
pub type MonetaryAmount = Option<f64>;

/// The single "is there anything in this cell" check used by every reader of raw text.
pub fn is_absent(raw: Option<&str>) -> bool {
    match raw {
        None => true,
        Some(s) => {
            let s = s.trim();
            s.is_empty() || ABSENT_SENTINELS.iter().any(|n| s.eq_ignore_ascii_case(n))
        }
    }
}

/// Parses strings like `S/ 1,234.56`, `1,234` or `1234` into a number.
/// Anything that does not parse becomes `None`.
pub fn parse_amount(raw: Option<&str>) -> MonetaryAmount {
    if is_absent(raw) {
        return None;
    }
    let s = raw?.trim();

    let s = match s.get(..CURRENCY_MARKER.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(CURRENCY_MARKER) => &s[CURRENCY_MARKER.len()..],
        _ => s,
    };

    let cleaned: String = s
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();

    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `S/ 1,234` style rendering, rounded to whole units.
pub fn format_amount(amount: MonetaryAmount) -> String {
    match amount {
        None => NOT_APPLICABLE.to_string(),
        Some(v) => {
            let rounded = format!("{:.0}", v.abs());
            let sign = if v < 0.0 && rounded != "0" { "-" } else { "" };
            format!("{} {sign}{}", CURRENCY_MARKER, group_thousands(&rounded))
        }
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Result of reading a date cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ParsedDate {
    Absent,
    Date(NaiveDate),
    /// Present but not a date we understand; kept so it can still be shown.
    Unparsed(String),
}

pub fn parse_date(raw: Option<&str>) -> ParsedDate {
    let Some(s) = raw.filter(|s| !is_absent(Some(*s))) else {
        return ParsedDate::Absent;
    };
    let trimmed = s.trim();

    let date = DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(trimmed, f).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|f| NaiveDateTime::parse_from_str(trimmed, f).ok())
                .map(|dt| dt.date())
        });

    match date {
        Some(d) => ParsedDate::Date(d),
        None => ParsedDate::Unparsed(s.to_string()),
    }
}

pub fn format_date(date: &ParsedDate) -> String {
    match date {
        ParsedDate::Absent => EM_DASH.to_string(),
        ParsedDate::Date(d) => format_calendar_date(*d),
        ParsedDate::Unparsed(text) => text.clone(),
    }
}

/// `05 - Ago - 2026`
pub fn format_calendar_date(d: NaiveDate) -> String {
    format!("{:02} - {} - {}", d.day(), MONTHS[d.month0() as usize], d.year())
}

/// Facility codes come out of the sheet as `1234`, ` 1234 ` or `1234.0`.
/// They are always kept as zero-padded text.
pub fn normalize_codlocal(raw: &str) -> String {
    let s = raw.trim();
    let s = s.strip_suffix(".0").unwrap_or(s);
    format!("{:0>width$}", s, width = CODLOCAL_WIDTH)
}

/// Sheet flags are written as `1` / `0` (sometimes `1.0`).
pub fn parse_flag(raw: Option<&str>) -> bool {
    parse_amount(raw) == Some(1.0)
}

pub fn display_text(raw: Option<&str>) -> String {
    match raw {
        Some(s) if !is_absent(raw) => s.trim().to_string(),
        _ => EM_DASH.to_string(),
    }
}

/// Share of the programmed amount already withdrawn, in percent, within `[0, 100]`.
pub fn progress_percent(programmed: MonetaryAmount, withdrawn: MonetaryAmount) -> f64 {
    let pct = match (programmed, withdrawn) {
        (Some(p), Some(w)) if p > 0.0 => w / p * 100.0,
        _ => 0.0,
    };
    pct.clamp(0.0, 100.0)
}
