/// Which part of the roster a count or listing applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RosterFilter {
    #[default]
    All,
    CheckedIn,
    NotCheckedIn,
}

impl RosterFilter {
    /// SQL condition to append after `WHERE`, `None` for the whole table.
    pub fn sql_condition(&self) -> Option<&'static str> {
        match self {
            RosterFilter::All => None,
            RosterFilter::CheckedIn => Some("checked_in = 1"),
            RosterFilter::NotCheckedIn => Some("checked_in = 0"),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RosterFilter::All => "all attendees",
            RosterFilter::CheckedIn => "checked-in attendees",
            RosterFilter::NotCheckedIn => "attendees not yet checked in",
        }
    }
}
