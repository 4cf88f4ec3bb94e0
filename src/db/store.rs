//! Storage contract used by the kiosk logic, and its SQLite implementation.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::attendee::{Attendee, AttendeeRow};
use crate::models::filter::RosterFilter;
use chrono::{DateTime, Local};

/// Maximum number of results returned by a name search.
pub const SEARCH_LIMIT: usize = 50;

/// Everything the import and check-in logic needs from persistence.
///
/// `set_checked_in` must be conditional: it only touches a row that is
/// currently in the opposite state, and reports how many rows it changed.
/// That single statement is what keeps two racing check-ins from both
/// succeeding.
pub trait AttendeeStore {
    fn insert(&mut self, row: &AttendeeRow) -> AppResult<i64>;

    fn find_by_id(&mut self, id: i64) -> AppResult<Option<Attendee>>;

    /// Case-insensitive match on first or last name, ordered by last then
    /// first name, at most `SEARCH_LIMIT` rows.
    fn search(&mut self, query: &str) -> AppResult<Vec<Attendee>>;

    fn set_checked_in(
        &mut self,
        id: i64,
        checked_in: bool,
        at: Option<DateTime<Local>>,
    ) -> AppResult<usize>;

    fn count(&mut self, filter: RosterFilter) -> AppResult<i64>;

    fn list(&mut self, filter: RosterFilter) -> AppResult<Vec<Attendee>>;

    fn delete_all(&mut self) -> AppResult<usize>;
}

impl AttendeeStore for DbPool {
    fn insert(&mut self, row: &AttendeeRow) -> AppResult<i64> {
        queries::insert_attendee(&self.conn, row)
    }

    fn find_by_id(&mut self, id: i64) -> AppResult<Option<Attendee>> {
        queries::find_attendee(&self.conn, id)
    }

    fn search(&mut self, query: &str) -> AppResult<Vec<Attendee>> {
        queries::search_attendees(&self.conn, query)
    }

    fn set_checked_in(
        &mut self,
        id: i64,
        checked_in: bool,
        at: Option<DateTime<Local>>,
    ) -> AppResult<usize> {
        queries::update_checked_in(&self.conn, id, checked_in, at)
    }

    fn count(&mut self, filter: RosterFilter) -> AppResult<i64> {
        queries::count_attendees(&self.conn, filter)
    }

    fn list(&mut self, filter: RosterFilter) -> AppResult<Vec<Attendee>> {
        queries::list_attendees(&self.conn, filter)
    }

    fn delete_all(&mut self) -> AppResult<usize> {
        queries::delete_all_attendees(&self.conn)
    }
}
