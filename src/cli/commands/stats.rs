use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::admin::AdminLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET};
use crate::utils::formatting::percent;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { json } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let stats = AdminLogic::stats(&mut pool)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
            return Ok(());
        }

        header("Attendees");
        println!("{}• Total:{}       {}", CYAN, RESET, stats.total);
        println!(
            "{}• Checked in:{}  {}{}{} ({})",
            CYAN,
            RESET,
            GREEN,
            stats.checked_in,
            RESET,
            percent(stats.percent_checked_in())
        );
        println!(
            "{}• Remaining:{}   {}{}{}",
            CYAN,
            RESET,
            GREY,
            stats.remaining(),
            RESET
        );
    }

    Ok(())
}
