pub mod checkin;
pub mod clear;
pub mod config;
pub mod db;
pub mod export;
pub mod import;
pub mod init;
pub mod search;
pub mod stats;
