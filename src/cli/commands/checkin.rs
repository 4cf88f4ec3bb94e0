use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::checkin::CheckInLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::outcome::{CheckInOutcome, UndoOutcome};
use crate::ui::card;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::CheckIn { id, json } => {
            let mut pool = DbPool::new(&cfg.database)?;
            let outcome = CheckInLogic::check_in(&mut pool, *id)?;

            if *json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                match &outcome {
                    CheckInOutcome::CheckedIn(a) => {
                        success(format!("Welcome, {}! You are checked in.", a.first_name))
                    }
                    // ristampa badge: non è un errore
                    CheckInOutcome::AlreadyCheckedIn(a) => warning(format!(
                        "This person has already checked in ({}).",
                        a.checked_in_at_str()
                    )),
                    CheckInOutcome::NotFound => {}
                }
                if let Some(a) = outcome.attendee() {
                    card::print(a);
                }
            }

            if outcome == CheckInOutcome::NotFound {
                return Err(AppError::AttendeeNotFound(*id));
            }
        }

        Commands::Undo { id, json } => {
            let mut pool = DbPool::new(&cfg.database)?;
            let outcome = CheckInLogic::undo(&mut pool, *id)?;

            if *json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            }

            match &outcome {
                UndoOutcome::Undone(a) => {
                    if !*json {
                        success(format!("Check-in undone for {}.", a.full_name()));
                    }
                }
                UndoOutcome::NotCheckedIn(_) => return Err(AppError::NotCheckedIn(*id)),
                UndoOutcome::NotFound => return Err(AppError::AttendeeNotFound(*id)),
            }
        }

        _ => {}
    }

    Ok(())
}
