//! Formatting utilities used for CLI outputs.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Pad to a display width, so accented or wide names keep columns aligned.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// Cut a value to `max` display columns, ending with `…` when shortened.
pub fn truncate(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let cw = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + cw + 1 > max {
            break;
        }
        out.push(c);
        used += cw;
    }
    out.push('…');
    out
}

pub fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}
