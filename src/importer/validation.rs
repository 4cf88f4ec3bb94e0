//! Row cleaning and validation.

use super::ParsedRow;
use super::headers::{FIRST_NAME, LAST_NAME, MEAL_PREFERENCE};
use crate::models::attendee::AttendeeRow;

/// Characters spreadsheet exports like to leave around names.
const INVISIBLE: [char; 3] = ['\u{feff}', '\u{200b}', '\u{00a0}'];

pub(crate) fn strip_invisible(value: &str) -> String {
    value.chars().filter(|c| !INVISIBLE.contains(c)).collect()
}

/// Remove BOM / zero-width / no-break-space characters, then trim.
pub fn clean_value(value: &str) -> String {
    strip_invisible(value).trim().to_string()
}

fn cleaned(row: &ParsedRow, field: &str) -> String {
    row.get(field).map(|v| clean_value(v)).unwrap_or_default()
}

/// Validate one parsed row.
///
/// On failure returns every reason found, in field order
/// (e.g. `["First name is required", "Last name is required"]`).
pub fn validate_row(row: &ParsedRow) -> Result<AttendeeRow, Vec<&'static str>> {
    let first_name = cleaned(row, FIRST_NAME);
    let last_name = cleaned(row, LAST_NAME);
    let meal_preference = cleaned(row, MEAL_PREFERENCE);

    let mut issues = Vec::new();
    if first_name.is_empty() {
        issues.push("First name is required");
    }
    if last_name.is_empty() {
        issues.push("Last name is required");
    }

    if !issues.is_empty() {
        return Err(issues);
    }

    Ok(AttendeeRow {
        first_name,
        last_name,
        meal_preference,
    })
}
