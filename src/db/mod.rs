pub mod migrate;
pub mod pool;
pub mod queries;
pub mod stats;
pub mod store;

pub use pool::DbPool;
pub use store::{AttendeeStore, SEARCH_LIMIT};
