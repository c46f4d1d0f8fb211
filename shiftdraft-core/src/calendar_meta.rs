//! Calendar metadata for rendering a month grid.
//!
//! Month indices are zero-based (0 = January) and weekdays count from Sunday
//! (0 = Sunday, 6 = Saturday). Day numbers produced here are the only valid
//! day components of a draft key.

use chrono::{Datelike, Months, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{DraftError, DraftResult};

pub const MINUTES_PER_DAY: i64 = 24 * 60;

const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One day of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMeta {
    /// 1-based day of month
    pub day: u32,
    /// 0 = Sunday .. 6 = Saturday
    pub weekday: u32,
    pub is_weekend: bool,
}

impl DayMeta {
    fn from_date(date: NaiveDate) -> Self {
        let weekday = date.weekday().num_days_from_sunday();
        DayMeta {
            day: date.day(),
            weekday,
            is_weekend: weekday == 0 || weekday == 6,
        }
    }

    pub fn weekday_name(&self) -> &'static str {
        weekday_name(self.weekday)
    }
}

/// All days of one month, in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthMeta {
    pub year: i32,
    /// Zero-based month index (0-11)
    pub month: u32,
    pub days_in_month: u32,
    pub days: Vec<DayMeta>,
}

impl MonthMeta {
    /// Weekday of the 1st, for offsetting the first row of a grid.
    pub fn first_weekday(&self) -> u32 {
        self.days.first().map(|d| d.weekday).unwrap_or(0)
    }
}

/// Build the day list for `(year, month0)`.
///
/// Month indices outside 0-11 roll over into neighbouring years, so
/// `month_meta(2024, 12)` describes January 2025. The returned `year` and
/// `month` are the normalized values.
pub fn month_meta(year: i32, month0: i32) -> DraftResult<MonthMeta> {
    let (year, month) = normalize_month(year, month0)?;

    let first = NaiveDate::from_ymd_opt(year, month + 1, 1)
        .ok_or(DraftError::YearOutOfRange(year as i64))?;
    let days_in_month = days_in_month(first)?;

    let days = (1..=days_in_month)
        .filter_map(|day| first.with_day(day))
        .map(DayMeta::from_date)
        .collect();

    Ok(MonthMeta {
        year,
        month,
        days_in_month,
        days,
    })
}

fn normalize_month(year: i32, month0: i32) -> DraftResult<(i32, u32)> {
    let carry = month0.div_euclid(12) as i64;
    let month = month0.rem_euclid(12) as u32;
    let year = year as i64 + carry;

    let year = i32::try_from(year).map_err(|_| DraftError::YearOutOfRange(year))?;
    Ok((year, month))
}

fn days_in_month(first: NaiveDate) -> DraftResult<u32> {
    // December always has 31 days, even in the last year chrono can represent
    if first.month() == 12 {
        return Ok(31);
    }

    let next = first
        .checked_add_months(Months::new(1))
        .ok_or(DraftError::YearOutOfRange(first.year() as i64))?;

    Ok((next - first).num_days() as u32)
}

/// Format minutes since midnight as "HH:MM", wrapping into a single day.
pub fn format_minutes_to_time(mins: i64) -> String {
    let mins = mins.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", mins / 60, mins % 60)
}

/// Parse "HH:MM" (24h) into minutes since midnight.
pub fn parse_time_to_minutes(s: &str) -> DraftResult<i64> {
    let time = NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|_| DraftError::InvalidTime(s.to_string()))?;
    Ok((time.num_seconds_from_midnight() / 60) as i64)
}

/// Short English label for a Sunday-based weekday index.
pub fn weekday_name(weekday: u32) -> &'static str {
    WEEKDAY_NAMES[(weekday % 7) as usize]
}
