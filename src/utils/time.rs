//! Time utilities: parsing HH:MM / dates, formatting durations.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveTime};

/// Accepts "HH:MM" or "HH:MM:SS".
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

pub fn parse_date(d: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(d.to_string()))
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Minutes as "+MMm" / "-MMm" relative offset, used for lateness display.
pub fn format_offset(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "+" };
    let m = mins.abs();
    if m >= 60 {
        format!("{}{}h {:02}m", sign, m / 60, m % 60)
    } else {
        format!("{}{}m", sign, m)
    }
}
