use crate::db::migrate::schema_version;
use crate::db::pool::DbPool;
use crate::db::queries::{activity_bounds, count_attendees};
use crate::errors::AppResult;
use crate::models::filter::RosterFilter;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);
    println!(
        "{}• Schema version:{} {}",
        CYAN,
        RESET,
        schema_version(&pool.conn)?
    );

    //
    // 2) ROSTER
    //
    let total = count_attendees(&pool.conn, RosterFilter::All)?;
    let checked_in = count_attendees(&pool.conn, RosterFilter::CheckedIn)?;
    println!(
        "{}• Attendees:{} {}{}{} ({} checked in)",
        CYAN, RESET, GREEN, total, RESET, checked_in
    );

    //
    // 3) ACTIVITY
    //
    let (first_import, last_checkin) = activity_bounds(&pool.conn)?;
    let dash = || format!("{GREY}--{RESET}");

    println!("{}• Activity:{}", CYAN, RESET);
    println!("    first import:   {}", first_import.unwrap_or_else(dash));
    println!("    last check-in:  {}", last_checkin.unwrap_or_else(dash));

    println!();
    Ok(())
}
