//! Schema migrations, tracked through `PRAGMA user_version`.

use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, Result};
use tracing::{debug, info, warn};

/// Schema version written by the last entry of `MIGRATIONS`.
pub const SCHEMA_VERSION: i64 = 1;

type Migration = fn(&Connection) -> Result<()>;

/// Ordered list: entry N upgrades the schema from version N to N + 1.
const MIGRATIONS: &[(&str, Migration)] = &[("create attendees table", create_attendees_table)];

const ATTENDEES_DDL: &str = r#"
    CREATE TABLE attendees (
        id               INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name       TEXT NOT NULL CHECK (length(first_name) > 0),
        last_name        TEXT NOT NULL CHECK (length(last_name) > 0),
        meal_preference  TEXT NOT NULL DEFAULT '',
        checked_in       INTEGER NOT NULL DEFAULT 0 CHECK (checked_in IN (0, 1)),
        checked_in_at    TEXT,                 -- RFC 3339, NULL unless checked in
        created_at       TEXT NOT NULL,        -- RFC 3339
        CHECK ((checked_in = 1) = (checked_in_at IS NOT NULL))
    );

    CREATE INDEX IF NOT EXISTS idx_attendees_last_first ON attendees(last_name, first_name);
    CREATE INDEX IF NOT EXISTS idx_attendees_checked_in ON attendees(checked_in);
"#;

pub fn schema_version(conn: &Connection) -> Result<i64> {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
}

/// Check if the `attendees` table exists.
fn attendees_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='attendees'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Version 0 → 1.
///
/// A fresh file just gets the table. A file written by the older kiosk
/// (same table name, no version, `CURRENT_TIMESTAMP` dates) is rebuilt and
/// its timestamps converted to RFC 3339.
fn create_attendees_table(conn: &Connection) -> Result<()> {
    if !attendees_table_exists(conn)? {
        return conn.execute_batch(ATTENDEES_DDL);
    }

    info!("Converting legacy attendees table");

    conn.execute_batch("ALTER TABLE attendees RENAME TO attendees_old;")?;
    let legacy_rows: i64 =
        conn.query_row("SELECT COUNT(*) FROM attendees_old", [], |row| row.get(0))?;

    conn.execute_batch(ATTENDEES_DDL)?;
    conn.execute_batch(
        r#"
        INSERT INTO attendees (id, first_name, last_name, meal_preference, checked_in, checked_in_at, created_at)
        SELECT
            id,
            first_name,
            last_name,
            COALESCE(meal_preference, ''),
            CASE WHEN checked_in THEN 1 ELSE 0 END,
            CASE WHEN checked_in
                 THEN strftime('%Y-%m-%dT%H:%M:%SZ', COALESCE(checked_in_at, created_at, 'now'))
                 ELSE NULL END,
            strftime('%Y-%m-%dT%H:%M:%SZ', COALESCE(created_at, 'now'))
        FROM attendees_old
        WHERE length(trim(first_name)) > 0 AND length(trim(last_name)) > 0;
        "#,
    )?;

    let copied: i64 = conn.query_row("SELECT COUNT(*) FROM attendees", [], |row| row.get(0))?;
    if copied < legacy_rows {
        warn!(
            dropped = legacy_rows - copied,
            "Legacy rows without a first or last name were not converted"
        );
    }

    conn.execute_batch("DROP TABLE attendees_old;")?;

    Ok(())
}

/// Apply every migration newer than the file's `user_version`.
/// Each step runs in its own transaction together with the version bump.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let current = schema_version(conn)?;

    if current > SCHEMA_VERSION {
        return Err(AppError::Migration(format!(
            "database schema version {} is newer than supported version {}",
            current, SCHEMA_VERSION
        )));
    }

    for (idx, (name, migration)) in MIGRATIONS.iter().enumerate().skip(current as usize) {
        let target = idx as i64 + 1;
        debug!(version = target, name, "Applying migration");

        conn.execute_batch("BEGIN;")?;
        let applied = migration(conn)
            .and_then(|_| conn.execute_batch(&format!("PRAGMA user_version = {target};")));

        match applied {
            Ok(()) => conn.execute_batch("COMMIT;")?,
            Err(e) => {
                // rollback best-effort, l'errore originale è quello che conta
                let _ = conn.execute_batch("ROLLBACK;");
                return Err(AppError::Migration(format!("{name}: {e}")));
            }
        }
    }

    Ok(())
}
