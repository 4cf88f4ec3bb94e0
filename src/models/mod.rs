pub mod attendee;
pub mod filter;
pub mod outcome;
pub mod stats;
