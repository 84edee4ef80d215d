use crate::config::Config;
use crate::core::roster::Roster;
use crate::core::schedule::Schedule;
use crate::errors::AppResult;
use crate::ui::{messages, schedule};

/// Print the schedule the roster starts with, before any action.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let roster = match Roster::load(&cfg.roster_file, &cfg.commuter_marker) {
        Ok(r) => r,
        Err(e) if e.is_roster_missing() => {
            messages::error(&e);
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let plan = Schedule::build(&roster, &cfg.request_marker)?;
    print!("{}", schedule::render(&plan, &cfg.group_name));
    Ok(())
}
