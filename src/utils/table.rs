//! Table rendering utilities for CLI outputs.

use crate::models::attendee::Attendee;
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::formatting::{pad_right, truncate};

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad_right(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&pad_right(&truncate(cell, col.width), col.width));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

/// Search results / roster listing.
pub fn attendees_table(attendees: &[Attendee]) -> String {
    let mut table = Table::new(vec![
        Column::new("ID", 6),
        Column::new("LAST NAME", 20),
        Column::new("FIRST NAME", 18),
        Column::new("MEAL", 16),
        Column::new("CHECKED IN", 16),
    ]);

    for a in attendees {
        table.add_row(vec![
            a.id.to_string(),
            a.last_name.clone(),
            a.first_name.clone(),
            a.meal_str().to_string(),
            a.checked_in_at_str(),
        ]);
    }

    // colori applicati riga per riga dopo il padding (non alterano la larghezza)
    let rendered = table.render();
    let mut lines = rendered.lines();
    let mut out = String::new();
    if let Some(head) = lines.next() {
        out.push_str(head);
        out.push('\n');
    }
    for (line, a) in lines.zip(attendees) {
        out.push_str(color_for_status(a.checked_in));
        out.push_str(line);
        out.push_str(RESET);
        out.push('\n');
    }
    out
}
