//! Attendee card shown after a lookup or a check-in.

use crate::models::attendee::Attendee;
use crate::utils::colors::{BOLD, GREEN, GREY, RESET, YELLOW};
use unicode_width::UnicodeWidthStr;

pub fn render(a: &Attendee) -> String {
    let name = a.full_name();
    let width = UnicodeWidthStr::width(name.as_str()).max(24) + 4;
    let line = "─".repeat(width);

    let status = if a.checked_in {
        format!("{GREEN}checked in {}{RESET}", a.checked_in_at_str())
    } else {
        format!("{GREY}not checked in{RESET}")
    };

    format!(
        "┌{line}┐\n  {BOLD}{name}{RESET}\n  meal: {YELLOW}{}{RESET}\n  #{}  {status}\n└{line}┘",
        a.meal_str(),
        a.id,
    )
}

pub fn print(a: &Attendee) {
    println!("{}", render(a));
}
