use crate::db::store::AttendeeStore;
use crate::errors::{AppError, AppResult};
use crate::models::attendee::Attendee;

pub struct SearchLogic;

impl SearchLogic {
    /// Name search for the kiosk. A blank query returns nothing without
    /// touching the store.
    pub fn search<S: AttendeeStore>(store: &mut S, query: &str) -> AppResult<Vec<Attendee>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        store.search(query)
    }

    pub fn show<S: AttendeeStore>(store: &mut S, id: i64) -> AppResult<Attendee> {
        store.find_by_id(id)?.ok_or(AppError::AttendeeNotFound(id))
    }
}
