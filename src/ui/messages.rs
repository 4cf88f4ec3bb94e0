//! Colored one-line status messages for the terminal.

use crate::utils::colors::{BLUE, BOLD, GREEN, RED, RESET, YELLOW};
use std::fmt;

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", RED, BOLD, ICON_ERR, RESET, msg);
}

/// Section header, e.g. above a stats block.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}=== {} ==={}", BLUE, BOLD, msg, RESET);
}

/// Print a bulleted list of details under a status line, at most `limit`.
pub fn details<T: fmt::Display>(items: &[T], limit: usize) {
    for item in items.iter().take(limit) {
        println!("   • {}", item);
    }
    if items.len() > limit {
        println!("   … and {} more", items.len() - limit);
    }
}
