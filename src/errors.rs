//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.
//!
//! CSV validation problems are NOT errors: they are collected row by row
//! inside `importer::ParseResult`.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Invalid timestamp stored in database: {0}")]
    InvalidTimestamp(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("Attendee not found: #{0}")]
    AttendeeNotFound(i64),

    #[error("Attendee #{0} is not checked in")]
    NotCheckedIn(i64),

    // ---------------------------
    // Import errors
    // ---------------------------
    #[error("Import rejected: {0}")]
    ImportRejected(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),

    // ---------------------------
    // Serialization / export errors
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
