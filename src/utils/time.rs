//! Time utilities: parsing HH:MM, minutes of day, formatting timeline minutes.

use crate::errors::{AppError, AppResult};
use crate::models::day::Day;
use chrono::{NaiveTime, Timelike};

pub const MINUTES_PER_DAY: i64 = 24 * 60;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// "HH:MM" → minutes since midnight (0..1439)
pub fn clock_minutes(t: &str) -> AppResult<i64> {
    let time = parse_time(t.trim()).ok_or_else(|| AppError::InvalidTime(t.to_string()))?;
    Ok(time.hour() as i64 * 60 + time.minute() as i64)
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Human label for a minute on the weekend timeline, e.g. "Субота 14:00".
/// Minutes past Sunday midnight are shown as "+N" days after Sunday.
pub fn format_timeline_minute(minute: i64) -> String {
    let day_index = minute.div_euclid(MINUTES_PER_DAY);
    let clock = format_minutes(minute.rem_euclid(MINUTES_PER_DAY));

    match Day::ALL.get(day_index as usize) {
        Some(day) => format!("{} {}", day.label(), clock),
        _ => format!("{} +{} {}", Day::Sunday.label(), day_index - 2, clock),
    }
}
