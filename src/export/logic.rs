// src/export/logic.rs

use crate::db::store::AttendeeStore;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::AttendeeExport;
use crate::models::filter::RosterFilter;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use tracing::debug;

/// Logica di alto livello per l'export del roster.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the roster (or the part selected by `filter`) to `file`.
    ///
    /// An existing file is only replaced with `force` or after confirmation.
    /// Returns the number of attendees written.
    pub fn export<S: AttendeeStore>(
        store: &mut S,
        format: ExportFormat,
        file: &str,
        filter: RosterFilter,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        ensure_writable(&path, force)?;

        let rows: Vec<AttendeeExport> = store
            .list(filter)?
            .iter()
            .map(AttendeeExport::from)
            .collect();

        if rows.is_empty() {
            warning(format!("No {} to export.", filter.label()));
            return Ok(0);
        }

        debug!(format = format.as_str(), count = rows.len(), "Exporting roster");

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        Ok(rows.len())
    }
}
