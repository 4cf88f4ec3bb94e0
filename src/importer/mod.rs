//! Roster CSV importer.
//!
//! Turns raw CSV text into validated attendee rows plus one human-readable
//! error per rejected row. Pure: nothing here touches the database.

mod headers;
mod tokenizer;
mod validation;

pub use headers::{FIRST_NAME, LAST_NAME, MEAL_PREFERENCE, is_canonical, normalize_header};
pub use tokenizer::{non_blank_lines, split_line};
pub use validation::{clean_value, validate_row};

use crate::models::attendee::AttendeeRow;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Normalized column name → raw cell value, for a single data row.
pub type ParsedRow = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    /// true iff at least one row validated
    pub success: bool,
    pub attendees: Vec<AttendeeRow>,
    pub errors: Vec<String>,
    pub total_rows: usize,
    pub valid_rows: usize,
}

impl ParseResult {
    /// The "could not read the text at all" result.
    pub fn failure(detail: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            attendees: Vec::new(),
            errors: vec![format!("Failed to parse CSV: {detail}")],
            total_rows: 0,
            valid_rows: 0,
        }
    }
}

/// Parse raw bytes (e.g. an uploaded file). Invalid UTF-8 is the only
/// condition that aborts the whole parse.
pub fn parse_bytes(raw: &[u8]) -> ParseResult {
    match std::str::from_utf8(raw) {
        Ok(text) => parse(text),
        Err(e) => ParseResult::failure(format!("input is not valid UTF-8 ({e})")),
    }
}

/// Parse roster text. The first non-blank line is the header.
pub fn parse(text: &str) -> ParseResult {
    let rows = parse_rows(text);

    let mut attendees = Vec::new();
    let mut errors = Vec::new();

    for (i, row) in rows.iter().enumerate() {
        // +2: header line + 1-based numbering
        let row_num = i + 2;

        match validate_row(row) {
            Ok(attendee) => attendees.push(attendee),
            Err(issues) => errors.push(format!("Row {}: {}", row_num, issues.join(", "))),
        }
    }

    debug!(
        total = rows.len(),
        valid = attendees.len(),
        rejected = errors.len(),
        "CSV parsed"
    );

    ParseResult {
        success: !attendees.is_empty(),
        valid_rows: attendees.len(),
        total_rows: rows.len(),
        attendees,
        errors,
    }
}

/// Split text into header-keyed rows, before any cleaning or validation.
pub fn parse_rows(text: &str) -> Vec<ParsedRow> {
    let lines = non_blank_lines(text);

    let Some((header_line, data_lines)) = lines.split_first() else {
        return Vec::new();
    };

    let headers: Vec<String> = split_line(header_line)
        .iter()
        .map(|h| normalize_header(h))
        .collect();

    let ignored: Vec<&String> = headers.iter().filter(|h| !is_canonical(h)).collect();
    if !ignored.is_empty() {
        debug!(?ignored, "Ignoring unrecognized CSV columns");
    }

    data_lines
        .iter()
        .map(|line| {
            let values = split_line(line);
            headers
                .iter()
                .enumerate()
                .map(|(idx, header)| {
                    let value = values.get(idx).cloned().unwrap_or_default();
                    (header.clone(), value)
                })
                .collect()
        })
        .collect()
}
