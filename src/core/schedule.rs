//! Consolidated leave schedule across the whole roster.

use crate::core::calculator::interval::{self, AbsoluteInterval};
use crate::core::roster::Roster;
use crate::errors::AppResult;
use crate::models::day::Day;
use std::collections::BTreeMap;

/// Cadets sharing one literal range text on one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeGroup {
    pub range: String,
    pub window: AbsoluteInterval,
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    pub day: Day,
    pub groups: Vec<RangeGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub days: Vec<DaySchedule>,
}

impl Schedule {
    /// Group every cadet's leaves by day and by exact range text.
    ///
    /// "9:00-21:00" and "09:00-21:00" stay separate groups. Groups are
    /// ordered by timeline start; equal starts keep range-text order.
    pub fn build(roster: &Roster, request_marker: &str) -> AppResult<Self> {
        let mut days = Vec::with_capacity(Day::ALL.len());

        for day in Day::ALL {
            let mut by_range: BTreeMap<&str, Vec<String>> = BTreeMap::new();

            for cadet in roster.cadets() {
                for leave in cadet.leaves.on_day(day) {
                    let label = if leave.from_request {
                        format!("{} {}", cadet.name, request_marker)
                    } else {
                        cadet.name.clone()
                    };
                    by_range.entry(leave.range.as_str()).or_default().push(label);
                }
            }

            let mut groups = by_range
                .into_iter()
                .map(|(range, labels)| -> AppResult<RangeGroup> {
                    Ok(RangeGroup {
                        range: range.to_string(),
                        window: interval::to_absolute(day, range)?,
                        labels,
                    })
                })
                .collect::<AppResult<Vec<_>>>()?;
            groups.sort_by_key(|g| g.window.start);

            days.push(DaySchedule { day, groups });
        }

        Ok(Self { days })
    }

    pub fn day(&self, day: Day) -> Option<&DaySchedule> {
        self.days.iter().find(|d| d.day == day)
    }
}
