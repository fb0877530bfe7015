//! Table Model
//!
//! Turns columns and records into header and cell text. Both the browser
//! table and the CLI render from this.

use crate::record::{cell_text, Record};
use crate::section::Column;

/// Rendered table: one header per column, one row per record
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableView {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    /// Build the view. Rows keep the backend order.
    pub fn build(columns: &[Column], records: &[Record]) -> Self {
        let headers = columns.iter().map(|c| c.label).collect();
        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|c| cell_text(record, c.key, c.format))
                    .collect()
            })
            .collect();

        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Plain-text rendering with padded columns
    pub fn to_text(&self) -> String {
        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(h.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = format_line(self.headers.iter().copied(), &widths);
        out.push('\n');
        let rule_len = widths.iter().sum::<usize>() + widths.len().saturating_sub(1) * 3;
        out.push_str(&"-".repeat(rule_len));
        out.push('\n');

        for row in &self.rows {
            out.push_str(&format_line(row.iter().map(String::as_str), &widths));
            out.push('\n');
        }

        out
    }
}

fn format_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}
