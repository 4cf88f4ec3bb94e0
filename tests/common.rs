#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rcheckin::db::pool::DbPool;
use rcheckin::db::store::AttendeeStore;
use rcheckin::models::attendee::AttendeeRow;
use std::env;
use std::fs;
use std::path::PathBuf;

/// rcheckin binary with HOME pointed at a scratch dir, so tests never read
/// or write the real configuration.
pub fn rci() -> Command {
    let home = test_home();
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rcheckin");
    cmd.env("HOME", &home).env_remove("RUST_LOG");
    cmd
}

/// Scratch HOME shared by every CLI test
pub fn test_home() -> PathBuf {
    env::temp_dir().join("rcheckin_test_home")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rcheckin.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Write a CSV fixture into the temp dir and return its path
pub fn write_csv(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_roster.csv", name));
    fs::write(&path, content).expect("write csv fixture");
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub const ROSTER: &str = "first_name,last_name,meal\n\
Ada,Lovelace,Vegan\n\
Charles,Babbage,\n\
Grace,Hopper,Halal\n";

/// Initialize DB and import the small roster above
pub fn init_db_with_roster(db_path: &str, name: &str) {
    rci()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    let csv = write_csv(name, ROSTER);
    rci()
        .args(["--db", db_path, "import", &csv])
        .assert()
        .success();
}

/// In-memory store seeded with the given (first, last, meal) rows; returns their ids
pub fn memory_store(rows: &[(&str, &str, &str)]) -> (DbPool, Vec<i64>) {
    let mut pool = DbPool::in_memory().expect("open in-memory db");
    let ids = rows
        .iter()
        .map(|(f, l, m)| pool.insert(&AttendeeRow::new(f, l, m)).expect("insert"))
        .collect();
    (pool, ids)
}
