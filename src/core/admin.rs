use crate::db::store::AttendeeStore;
use crate::errors::AppResult;
use crate::models::filter::RosterFilter;
use crate::models::stats::Stats;
use tracing::info;

pub struct AdminLogic;

impl AdminLogic {
    pub fn stats<S: AttendeeStore>(store: &mut S) -> AppResult<Stats> {
        Ok(Stats {
            total: store.count(RosterFilter::All)?,
            checked_in: store.count(RosterFilter::CheckedIn)?,
        })
    }

    /// Remove every attendee, checked in or not. Returns how many were removed.
    pub fn clear<S: AttendeeStore>(store: &mut S) -> AppResult<usize> {
        let removed = store.delete_all()?;
        info!(removed, "Roster cleared");
        Ok(removed)
    }
}
