use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::filter::RosterFilter;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        checked_in,
        pending,
        force,
    } = cmd
    {
        let filter = match (*checked_in, *pending) {
            (true, _) => RosterFilter::CheckedIn,
            (_, true) => RosterFilter::NotCheckedIn,
            _ => RosterFilter::All,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        ExportLogic::export(&mut pool, *format, file, filter, *force)?;
    }
    Ok(())
}
