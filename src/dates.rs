//! Parsing of month and day arguments.

use anyhow::{Result, anyhow};
use chrono::{Datelike, NaiveDate};
use shiftdraft_core::draft_key::{DraftKey, make_draft_key};

/// Parse YYYY-MM into (year, zero-based month index)
pub fn parse_month(s: &str) -> Result<(i32, u32)> {
    let date = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| anyhow!("Invalid month '{}'. Expected YYYY-MM", s))?;
    Ok((date.year(), date.month0()))
}

/// Parse YYYY-MM-DD
pub fn parse_day(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| anyhow!("Invalid date '{}'. Expected YYYY-MM-DD", s))
}

/// Draft key for an employee on a calendar date.
pub fn draft_key_for(employee_id: &str, date: NaiveDate) -> DraftKey {
    make_draft_key(employee_id, date.year(), date.month0(), date.day())
}

/// e.g. "June 2024"
pub fn month_title(year: i32, month_index: u32) -> String {
    let name = u8::try_from(month_index + 1)
        .ok()
        .and_then(|m| chrono::Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("?");
    format!("{name} {year}")
}
