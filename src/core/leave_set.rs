//! Per-cadet collection of leave windows.

use crate::core::calculator::interval::AbsoluteInterval;
use crate::errors::AppResult;
use crate::models::day::Day;
use crate::models::leave::LeaveInterval;
use crate::models::residence::Residence;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaveSet {
    leaves: Vec<LeaveInterval>,
}

impl LeaveSet {
    pub fn defaults(residence: Residence) -> Self {
        Self {
            leaves: residence
                .default_leaves()
                .iter()
                .map(|(day, range)| LeaveInterval::standing(*day, range))
                .collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &LeaveInterval> {
        self.leaves.iter()
    }

    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    pub fn on_day(&self, day: Day) -> impl Iterator<Item = &LeaveInterval> {
        self.leaves.iter().filter(move |l| l.day == day)
    }

    /// Drop every leave whose timeline window overlaps `exclusion`.
    ///
    /// A partially overlapping leave goes as a whole; nothing is truncated.
    /// All windows are resolved first so a malformed entry leaves the set
    /// untouched.
    pub fn remove_overlapping(&mut self, exclusion: &AbsoluteInterval) -> AppResult<usize> {
        let keep: Vec<bool> = self
            .leaves
            .iter()
            .map(|l| l.absolute().map(|abs| !abs.overlaps(exclusion)))
            .collect::<AppResult<_>>()?;

        let before = self.leaves.len();
        let mut flags = keep.into_iter();
        self.leaves.retain(|_| flags.next().unwrap_or(true));

        Ok(before - self.leaves.len())
    }

    pub fn remove_by_day(&mut self, day: Day) -> usize {
        let before = self.leaves.len();
        self.leaves.retain(|l| l.day != day);
        before - self.leaves.len()
    }

    /// Append a written-request leave. No merging with existing windows.
    pub fn add_request(&mut self, day: Day, range: &str) {
        self.leaves.push(LeaveInterval::requested(day, range));
    }
}
