use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: i64,
    pub checked_in: i64,
}

impl Stats {
    pub fn remaining(&self) -> i64 {
        (self.total - self.checked_in).max(0)
    }

    /// Percentage of the roster already checked in (0 on an empty roster).
    pub fn percent_checked_in(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.checked_in as f64 * 100.0 / self.total as f64
        }
    }
}
