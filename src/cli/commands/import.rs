use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::{ImportLogic, ImportReport};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{details, error, success, warning};
use crate::utils::path::expand_tilde;
use std::fs;
use std::io::{self, Read};

/// Errors listed when the whole file is rejected.
const REJECTED_PREVIEW: usize = 10;

fn read_input(file: &str) -> AppResult<Vec<u8>> {
    if file == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        return Ok(buf);
    }
    Ok(fs::read(expand_tilde(file))?)
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, json } = cmd {
        let raw = read_input(file)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let report = ImportLogic::import(&mut pool, &raw)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_report(&report, cfg.error_preview);
        }

        if !report.success {
            return Err(AppError::ImportRejected(format!(
                "no valid rows in {}",
                file
            )));
        }
    }

    Ok(())
}

fn print_report(report: &ImportReport, preview: usize) {
    if !report.success {
        error(format!(
            "Failed to parse CSV ({} rows read, none valid)",
            report.total_rows
        ));
        details(&report.errors, REJECTED_PREVIEW);
        return;
    }

    success(format!(
        "Successfully imported {} attendees ({} of {} rows valid)",
        report.inserted, report.valid_rows, report.total_rows
    ));

    if report.failed_inserts > 0 {
        warning(format!(
            "{} valid rows could not be saved (see log)",
            report.failed_inserts
        ));
    }

    if !report.errors.is_empty() {
        warning(format!("{} rows had errors", report.errors.len()));
        details(&report.errors, preview);
    }
}
