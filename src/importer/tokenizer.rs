//! Line and field splitting for roster CSV text.
//!
//! Quotes never span lines: the text is split into lines first, then each
//! line is tokenized on its own.

/// Split raw text into its non-blank lines (`\n` or `\r\n` separated).
pub fn non_blank_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !is_blank(line))
        .collect()
}

/// A line counts as blank when it only holds whitespace or a byte-order mark.
fn is_blank(line: &str) -> bool {
    line.chars().all(|c| c.is_whitespace() || c == '\u{feff}')
}

/// Split one CSV line into trimmed fields.
///
/// - `,` separates fields outside quotes
/// - `"` outside quotes opens a quoted section, even mid-field
/// - `""` inside quotes is a literal quote, a lone `"` closes the section
/// - an unterminated quoted section runs to the end of the line
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    current.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                _ => current.push(c),
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => {
                    fields.push(current.trim().to_string());
                    current.clear();
                }
                _ => current.push(c),
            }
        }
    }

    fields.push(current.trim().to_string());
    fields
}
