//! Operations an operator can apply to a single cadet.

use crate::core::calculator::interval::{self, AbsoluteInterval};
use crate::errors::AppResult;
use crate::models::cadet::Cadet;
use crate::models::day::Day;
use crate::utils::time::{MINUTES_PER_DAY, format_timeline_minute};
use tracing::debug;

const DUTY_RANGE: &str = "14:00-18:00";
const FULL_DAY_RANGE: &str = "18:00-18:00";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Наряд: 14:00 on `day` through 18:00 the day after.
    Duty { day: Day },
    /// ЧП: 18:00 on `day` through 18:00 the day after.
    Incident { day: Day },
    /// БР: 18:00 on `day` for `days` whole days.
    Confinement { day: Day, days: i64 },
    /// Рапорт: extra leave window.
    AddRequest { day: Day, range: String },
    RevokeSunday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionOutcome {
    pub removed: usize,
    pub added: usize,
}

impl Action {
    pub fn confinement(day: Day, days: i64) -> Self {
        Action::Confinement {
            day,
            days: days.max(1),
        }
    }

    /// Timeline window this action takes leave away from, if any.
    pub fn exclusion(&self) -> AppResult<Option<AbsoluteInterval>> {
        let window = match self {
            Action::Duty { day } => {
                interval::to_absolute(*day, DUTY_RANGE)?.extend_end(MINUTES_PER_DAY)
            }
            Action::Incident { day } => interval::to_absolute(*day, FULL_DAY_RANGE)?,
            Action::Confinement { day, days } => {
                let extra_days = (*days).max(1) - 1;
                interval::to_absolute(*day, FULL_DAY_RANGE)?
                    .extend_end(extra_days.saturating_mul(MINUTES_PER_DAY))
            }
            Action::AddRequest { .. } | Action::RevokeSunday => return Ok(None),
        };
        Ok(Some(window))
    }
}

pub struct ActionLogic;

impl ActionLogic {
    pub fn apply(cadet: &mut Cadet, action: &Action) -> AppResult<ActionOutcome> {
        let outcome = match action {
            Action::AddRequest { day, range } => {
                // stored verbatim, but it must place on the timeline
                interval::to_absolute(*day, range)?;
                cadet.leaves.add_request(*day, range);
                ActionOutcome {
                    removed: 0,
                    added: 1,
                }
            }
            Action::RevokeSunday => ActionOutcome {
                removed: cadet.leaves.remove_by_day(Day::Sunday),
                added: 0,
            },
            _ => {
                let Some(window) = action.exclusion()? else {
                    return Ok(ActionOutcome::default());
                };
                debug!(
                    cadet = %cadet.name,
                    from = %format_timeline_minute(window.start),
                    to = %format_timeline_minute(window.end),
                    "excluding leave window"
                );
                ActionOutcome {
                    removed: cadet.leaves.remove_overlapping(&window)?,
                    added: 0,
                }
            }
        };

        debug!(
            cadet = %cadet.name,
            ?action,
            removed = outcome.removed,
            added = outcome.added,
            "action applied"
        );
        Ok(outcome)
    }
}
