use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::admin::AdminLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        if !*yes
            && !ask_confirmation("Delete ALL attendees, checked in or not? This action is irreversible.")
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let removed = AdminLogic::clear(&mut pool)?;

        success(format!("All attendees cleared ({} removed).", removed));
    }

    Ok(())
}
