//! Check-in state machine: `NotCheckedIn` ⇄ `CheckedIn`.
//!
//! Both transitions go through one conditional update; the follow-up read
//! only decides how to report a zero-row update.

use crate::db::store::AttendeeStore;
use crate::errors::AppResult;
use crate::models::outcome::{CheckInOutcome, UndoOutcome};
use chrono::Local;
use tracing::{debug, info};

pub struct CheckInLogic;

impl CheckInLogic {
    /// Mark an attendee as arrived.
    ///
    /// A second attempt on the same id returns `AlreadyCheckedIn` with the
    /// stored record and leaves `checked_in_at` as it was.
    pub fn check_in<S: AttendeeStore>(store: &mut S, id: i64) -> AppResult<CheckInOutcome> {
        let affected = store.set_checked_in(id, true, Some(Local::now()))?;

        // Riletto dopo l'update: serve comunque per mostrare il badge
        let current = store.find_by_id(id)?;

        let outcome = match (affected, current) {
            (_, None) => CheckInOutcome::NotFound,
            (0, Some(attendee)) => CheckInOutcome::AlreadyCheckedIn(attendee),
            (_, Some(attendee)) => CheckInOutcome::CheckedIn(attendee),
        };

        match &outcome {
            CheckInOutcome::CheckedIn(a) => info!(id, name = %a.full_name(), "Attendee checked in"),
            CheckInOutcome::AlreadyCheckedIn(_) => debug!(id, "Attendee already checked in"),
            CheckInOutcome::NotFound => debug!(id, "Check-in on unknown attendee"),
        }

        Ok(outcome)
    }

    /// Revert a check-in, clearing `checked_in_at`.
    ///
    /// Fails (non-`Undone` outcome) when the id does not exist or the
    /// attendee is not checked in.
    pub fn undo<S: AttendeeStore>(store: &mut S, id: i64) -> AppResult<UndoOutcome> {
        let affected = store.set_checked_in(id, false, None)?;
        let current = store.find_by_id(id)?;

        let outcome = match (affected, current) {
            (_, None) => UndoOutcome::NotFound,
            (0, Some(attendee)) => UndoOutcome::NotCheckedIn(attendee),
            (_, Some(attendee)) => UndoOutcome::Undone(attendee),
        };

        if outcome.is_success() {
            info!(id, "Check-in undone");
        } else {
            debug!(id, ?outcome, "Undo had nothing to revert");
        }

        Ok(outcome)
    }
}
