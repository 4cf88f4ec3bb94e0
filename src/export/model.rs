// src/export/model.rs

use crate::models::attendee::Attendee;
use serde::Serialize;

/// Struttura “piatta” per l'export del roster.
/// Timestamps are RFC 3339 strings, empty when absent, so CSV and JSON agree.
#[derive(Serialize, Clone, Debug)]
pub struct AttendeeExport {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub meal_preference: String,
    pub checked_in: bool,
    pub checked_in_at: String,
    pub created_at: String,
}

impl From<&Attendee> for AttendeeExport {
    fn from(a: &Attendee) -> Self {
        Self {
            id: a.id,
            first_name: a.first_name.clone(),
            last_name: a.last_name.clone(),
            meal_preference: a.meal_preference.clone(),
            checked_in: a.checked_in,
            checked_in_at: a
                .checked_in_at
                .map(|t| t.to_rfc3339())
                .unwrap_or_default(),
            created_at: a.created_at.to_rfc3339(),
        }
    }
}
