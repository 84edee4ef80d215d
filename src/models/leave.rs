use super::day::Day;
use crate::core::calculator::interval::{self, AbsoluteInterval};
use crate::errors::AppResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveInterval {
    pub day: Day,           // day the window nominally starts on
    pub range: String,      // "HH:MM-HH:MM", kept verbatim
    pub from_request: bool, // granted by written request
}

impl LeaveInterval {
    pub fn standing(day: Day, range: &str) -> Self {
        Self {
            day,
            range: range.to_string(),
            from_request: false,
        }
    }

    pub fn requested(day: Day, range: &str) -> Self {
        Self {
            day,
            range: range.to_string(),
            from_request: true,
        }
    }

    pub fn absolute(&self) -> AppResult<AbsoluteInterval> {
        interval::to_absolute(self.day, &self.range)
    }
}
