pub mod admin;
pub mod checkin;
pub mod config;
pub mod import;
pub mod search;
