use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::search::SearchLogic;
use crate::db::SEARCH_LIMIT;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::card;
use crate::ui::messages::info;
use crate::utils::table::attendees_table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Search { query, json } => {
            let mut pool = DbPool::new(&cfg.database)?;
            let found = SearchLogic::search(&mut pool, query)?;

            if *json {
                println!("{}", serde_json::to_string_pretty(&found)?);
            } else if found.is_empty() {
                info(format!("No attendees match '{}'.", query.trim()));
            } else {
                print!("{}", attendees_table(&found));
                if found.len() == SEARCH_LIMIT {
                    info(format!(
                        "Showing the first {} matches, refine the search.",
                        SEARCH_LIMIT
                    ));
                }
            }
        }

        Commands::Show { id, json } => {
            let mut pool = DbPool::new(&cfg.database)?;
            let attendee = SearchLogic::show(&mut pool, *id)?;

            if *json {
                println!("{}", serde_json::to_string_pretty(&attendee)?);
            } else {
                card::print(&attendee);
            }
        }

        _ => {}
    }

    Ok(())
}
