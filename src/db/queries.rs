use crate::db::store::SEARCH_LIMIT;
use crate::errors::{AppError, AppResult};
use crate::models::attendee::{Attendee, AttendeeRow};
use crate::models::filter::RosterFilter;
use chrono::{DateTime, Local};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_ATTENDEE: &str = "SELECT id, first_name, last_name, meal_preference, checked_in, checked_in_at, created_at
     FROM attendees";

/// `fold` is registered on every connection by `DbPool`.
const ORDER_BY_NAME: &str = "ORDER BY fold(last_name), fold(first_name), id ASC";

fn parse_timestamp(idx: usize, raw: &str) -> Result<DateTime<Local>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Local))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                idx,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidTimestamp(raw.to_string())),
            )
        })
}

pub fn map_row(row: &Row) -> Result<Attendee> {
    let checked_in_at: Option<String> = row.get("checked_in_at")?;
    let created_at: String = row.get("created_at")?;

    Ok(Attendee {
        id: row.get("id")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        meal_preference: row.get("meal_preference")?,
        checked_in: row.get::<_, i32>("checked_in")? == 1,
        checked_in_at: checked_in_at
            .as_deref()
            .map(|s| parse_timestamp(5, s))
            .transpose()?,
        created_at: parse_timestamp(6, &created_at)?,
    })
}

/// Escape `%`, `_` and `\` so user input is matched literally by LIKE.
pub fn like_pattern(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len() + 2);
    escaped.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

fn with_filter(base: &str, filter: RosterFilter) -> String {
    match filter.sql_condition() {
        Some(cond) => format!("{base} WHERE {cond}"),
        None => base.to_string(),
    }
}

pub fn insert_attendee(conn: &Connection, row: &AttendeeRow) -> AppResult<i64> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO attendees (first_name, last_name, meal_preference, created_at)
         VALUES (?1, ?2, ?3, ?4)",
    )?;
    stmt.execute(params![
        row.first_name,
        row.last_name,
        row.meal_preference,
        now
    ])?;

    Ok(conn.last_insert_rowid())
}

pub fn find_attendee(conn: &Connection, id: i64) -> AppResult<Option<Attendee>> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_ATTENDEE} WHERE id = ?1"))?;
    let found = stmt.query_row([id], map_row).optional()?;
    Ok(found)
}

/// Case-insensitive substring match on first or last name.
/// Both sides go through `fold`, LIKE alone folds ASCII letters only.
pub fn search_attendees(conn: &Connection, query: &str) -> AppResult<Vec<Attendee>> {
    let pattern = like_pattern(query);

    let mut stmt = conn.prepare_cached(&format!(
        r"{SELECT_ATTENDEE}
         WHERE fold(first_name) LIKE fold(?1) ESCAPE '\'
            OR fold(last_name) LIKE fold(?1) ESCAPE '\'
         {ORDER_BY_NAME}
         LIMIT ?2"
    ))?;

    let rows = stmt.query_map(params![pattern, SEARCH_LIMIT as i64], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Flip the check-in flag, but only if the row is currently in the opposite
/// state. Returns the number of rows changed (0 or 1).
pub fn update_checked_in(
    conn: &Connection,
    id: i64,
    checked_in: bool,
    at: Option<DateTime<Local>>,
) -> AppResult<usize> {
    // checked_in_at segue sempre il flag
    let at = if checked_in {
        Some(at.unwrap_or_else(Local::now).to_rfc3339())
    } else {
        None
    };

    let affected = conn.execute(
        "UPDATE attendees
            SET checked_in = ?2, checked_in_at = ?3
          WHERE id = ?1 AND checked_in = ?4",
        params![id, checked_in as i32, at, (!checked_in) as i32],
    )?;

    Ok(affected)
}

pub fn count_attendees(conn: &Connection, filter: RosterFilter) -> AppResult<i64> {
    let sql = with_filter("SELECT COUNT(*) FROM attendees", filter);
    let count = conn.query_row(&sql, [], |row| row.get(0))?;
    Ok(count)
}

pub fn list_attendees(conn: &Connection, filter: RosterFilter) -> AppResult<Vec<Attendee>> {
    let sql = format!("{} {ORDER_BY_NAME}", with_filter(SELECT_ATTENDEE, filter));
    let mut stmt = conn.prepare(&sql)?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn delete_all_attendees(conn: &Connection) -> AppResult<usize> {
    let deleted = conn.execute("DELETE FROM attendees", [])?;
    Ok(deleted)
}

/// Earliest `created_at` and latest `checked_in_at`, for `db --info`.
pub fn activity_bounds(conn: &Connection) -> AppResult<(Option<String>, Option<String>)> {
    let bounds = conn.query_row(
        "SELECT MIN(created_at), MAX(checked_in_at) FROM attendees",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    Ok(bounds)
}
