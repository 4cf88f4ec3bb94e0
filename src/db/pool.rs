//! SQLite connection handle (lightweight for CLI usage).
//!
//! Every command opens its own `DbPool` and drops it when done: there is no
//! process-wide connection.

use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;
use rusqlite::functions::FunctionFlags;
use std::path::Path;
use std::time::Duration;

/// Upper bound on waiting for another process holding the write lock.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) the database file and bring the schema up to date.
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        Self::prepare(conn)
    }

    /// Private in-memory database, used by tests and dry runs.
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::prepare(conn)
    }

    fn prepare(conn: Connection) -> AppResult<Self> {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        register_functions(&conn)?;
        run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }
}

/// Unicode lower-casing, so searches match "élise" against "Élise".
/// SQLite's own LIKE/NOCASE only fold ASCII.
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

/// `fold(text)`: NULL stays NULL.
fn register_functions(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        "fold",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let value = ctx.get::<Option<String>>(0)?;
            Ok(value.map(|v| fold_case(&v)))
        },
    )
}
