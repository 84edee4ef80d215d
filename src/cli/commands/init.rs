use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
pub fn handle() -> AppResult<()> {
    let path = Config::init()?;
    let cfg = Config::load()?;

    success(format!("Config file: {}", path.display()));
    info(format!("Roster file: {}", cfg.roster_file));
    Ok(())
}
