use chrono::{DateTime, Local};
use serde::Serialize;

/// A persisted attendee, one row of the `attendees` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attendee {
    pub id: i64,                                // ⇔ attendees.id (assigned by SQLite)
    pub first_name: String,                     // ⇔ attendees.first_name
    pub last_name: String,                      // ⇔ attendees.last_name
    pub meal_preference: String,                // ⇔ attendees.meal_preference (default '')
    pub checked_in: bool,                       // ⇔ attendees.checked_in (0/1)
    pub checked_in_at: Option<DateTime<Local>>, // ⇔ attendees.checked_in_at (RFC 3339 or NULL)
    pub created_at: DateTime<Local>,            // ⇔ attendees.created_at (RFC 3339)
}

impl Attendee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Checked-in time formatted for terminal output, `--` when absent.
    pub fn checked_in_at_str(&self) -> String {
        self.checked_in_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "--".to_string())
    }

    pub fn meal_str(&self) -> &str {
        if self.meal_preference.is_empty() {
            "-"
        } else {
            &self.meal_preference
        }
    }
}

/// A validated import row, ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendeeRow {
    pub first_name: String,
    pub last_name: String,
    pub meal_preference: String,
}

impl AttendeeRow {
    pub fn new(first_name: &str, last_name: &str, meal_preference: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            meal_preference: meal_preference.to_string(),
        }
    }
}
