use super::attendee::Attendee;
use serde::Serialize;

/// Result of a check-in attempt.
///
/// `AlreadyCheckedIn` is a normal outcome (badge reprint), not an error:
/// it carries the record as stored, `checked_in_at` untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "attendee", rename_all = "snake_case")]
pub enum CheckInOutcome {
    CheckedIn(Attendee),
    AlreadyCheckedIn(Attendee),
    NotFound,
}

impl CheckInOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CheckInOutcome::CheckedIn(_))
    }

    pub fn attendee(&self) -> Option<&Attendee> {
        match self {
            CheckInOutcome::CheckedIn(a) | CheckInOutcome::AlreadyCheckedIn(a) => Some(a),
            CheckInOutcome::NotFound => None,
        }
    }
}

/// Result of an undo attempt. Only `Undone` is a success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "attendee", rename_all = "snake_case")]
pub enum UndoOutcome {
    Undone(Attendee),
    NotCheckedIn(Attendee),
    NotFound,
}

impl UndoOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, UndoOutcome::Undone(_))
    }
}
