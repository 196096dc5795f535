// ABOUTME: Markdown table tokenizer for generated plan documents
// ABOUTME: Turns pipe-delimited lines into ordered rows, skipping separators and prose
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;

/// Rows recovered from a plan document, in document order
///
/// The first row is treated as the header. Rows may be ragged; empty cells
/// are kept as empty strings so the Day column keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlanTable {
    rows: Vec<Vec<String>>,
}

impl PlanTable {
    /// All rows, header included
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// The first accepted row
    #[must_use]
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Rows after the header
    #[must_use]
    pub fn body(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or_default()
    }

    /// Number of rows, header included
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the document contained no table lines
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Longest cell per column, counted in Unicode scalar values
    #[must_use]
    pub fn column_char_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();
        for row in &self.rows {
            for (col, cell) in row.iter().enumerate() {
                let chars = cell.chars().count();
                match widths.get_mut(col) {
                    Some(width) => *width = (*width).max(chars),
                    None => widths.push(chars),
                }
            }
        }
        widths
    }
}

/// Extract table rows from free text
///
/// Lines without a pipe are prose and are skipped, as is any line containing
/// `-|-`. Directly under the header, lines whose cells are only dashes (with
/// optional alignment colons) are separators too; further down such a line is
/// data. Every other line becomes one row. Lines are trimmed before their
/// outer pipes are stripped, so indented rows split like flush ones.
#[must_use]
pub fn parse_table(text: &str) -> PlanTable {
    let mut rows: Vec<Vec<String>> = Vec::new();
    for line in text.split('\n') {
        if !line.contains('|') || line.contains("-|-") {
            continue;
        }
        if rows.len() == 1 && is_alignment_row(line) {
            continue;
        }
        rows.push(split_cells(line));
    }
    PlanTable { rows }
}

fn strip_outer_pipes(line: &str) -> &str {
    let line = line.trim();
    let line = line.strip_prefix('|').unwrap_or(line);
    line.strip_suffix('|').unwrap_or(line)
}

fn split_cells(line: &str) -> Vec<String> {
    strip_outer_pipes(line)
        .split('|')
        .map(|cell| cell.trim().to_owned())
        .collect()
}

fn is_alignment_row(line: &str) -> bool {
    strip_outer_pipes(line).split('|').all(is_dash_run)
}

/// `---`, `:---`, `---:` or `:---:`
fn is_dash_run(cell: &str) -> bool {
    let cell = cell.trim();
    let cell = cell.strip_prefix(':').unwrap_or(cell);
    let cell = cell.strip_suffix(':').unwrap_or(cell);
    !cell.is_empty() && cell.chars().all(|c| c == '-')
}
