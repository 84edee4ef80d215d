//! Weekend timeline arithmetic.
//!
//! A leave window is written as a clock range ("19:30-07:30") attached to the
//! day it starts on. Placed on the timeline it becomes a half-open
//! `[start, end)` pair of minutes counted from Friday 00:00. When the end
//! clock is not after the start clock the window rolls over into the next
//! day, so "18:00-18:00" spans a full 24 hours.

use crate::errors::{AppError, AppResult};
use crate::models::day::Day;
use crate::utils::time::{self, MINUTES_PER_DAY};

pub const RANGE_SEPARATOR: char = '-';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbsoluteInterval {
    pub start: i64, // inclusive
    pub end: i64,   // exclusive
}

impl AbsoluteInterval {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    pub fn overlaps(&self, other: &AbsoluteInterval) -> bool {
        overlaps(self, other)
    }

    /// Push the end later by `minutes`, saturating on overflow.
    pub fn extend_end(self, minutes: i64) -> Self {
        Self {
            start: self.start,
            end: self.end.saturating_add(minutes),
        }
    }

    pub fn duration_minutes(&self) -> i64 {
        self.end - self.start
    }
}

pub fn parse_clock_minutes(text: &str) -> AppResult<i64> {
    time::clock_minutes(text)
}

pub fn to_absolute(day: Day, range: &str) -> AppResult<AbsoluteInterval> {
    let (start_txt, end_txt) = range
        .split_once(RANGE_SEPARATOR)
        .ok_or_else(|| AppError::InvalidTime(range.to_string()))?;

    let start_clock = parse_clock_minutes(start_txt)
        .map_err(|_| AppError::InvalidTime(range.to_string()))?;
    let end_clock =
        parse_clock_minutes(end_txt).map_err(|_| AppError::InvalidTime(range.to_string()))?;

    let day_offset = day.ordinal() * MINUTES_PER_DAY;
    let end_offset = if end_clock <= start_clock {
        day_offset + MINUTES_PER_DAY
    } else {
        day_offset
    };

    Ok(AbsoluteInterval::new(
        day_offset + start_clock,
        end_offset + end_clock,
    ))
}

pub fn overlaps(a: &AbsoluteInterval, b: &AbsoluteInterval) -> bool {
    a.start.max(b.start) < a.end.min(b.end)
}
