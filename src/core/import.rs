use crate::db::store::AttendeeStore;
use crate::errors::AppResult;
use crate::importer::{self, ParseResult};
use serde::Serialize;
use tracing::{info, warn};

/// What an import did: validation summary plus insert tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub success: bool,
    pub inserted: usize,
    pub failed_inserts: usize,
    pub total_rows: usize,
    pub valid_rows: usize,
    pub errors: Vec<String>,
}

impl ImportReport {
    fn rejected(parsed: ParseResult) -> Self {
        Self {
            success: false,
            inserted: 0,
            failed_inserts: 0,
            total_rows: parsed.total_rows,
            valid_rows: parsed.valid_rows,
            errors: parsed.errors,
        }
    }
}

pub struct ImportLogic;

impl ImportLogic {
    /// Parse the roster and insert every valid row.
    ///
    /// Nothing is inserted when no row validates. Each insert is its own
    /// statement: a failing row is logged and counted, the rest still go in.
    /// Existing attendees are not deduplicated.
    pub fn import<S: AttendeeStore>(store: &mut S, raw: &[u8]) -> AppResult<ImportReport> {
        let parsed = importer::parse_bytes(raw);

        if !parsed.success {
            warn!(
                total = parsed.total_rows,
                errors = parsed.errors.len(),
                "Import rejected: no valid rows"
            );
            return Ok(ImportReport::rejected(parsed));
        }

        let mut inserted = 0;
        let mut failed_inserts = 0;

        for row in &parsed.attendees {
            match store.insert(row) {
                Ok(_) => inserted += 1,
                Err(e) => {
                    failed_inserts += 1;
                    warn!(
                        first_name = %row.first_name,
                        last_name = %row.last_name,
                        error = %e,
                        "Error inserting attendee"
                    );
                }
            }
        }

        info!(
            inserted,
            failed_inserts,
            rejected = parsed.errors.len(),
            "Roster imported"
        );

        Ok(ImportReport {
            success: true,
            inserted,
            failed_inserts,
            total_rows: parsed.total_rows,
            valid_rows: parsed.valid_rows,
            errors: parsed.errors,
        })
    }
}
