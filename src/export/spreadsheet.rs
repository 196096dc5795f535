// ABOUTME: In-memory XLSX writer for parsed plan tables
// ABOUTME: Styles the header row, wraps body cells, and auto-sizes columns up to a cap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitplan_core::constants::export;
use fitplan_core::errors::{AppError, AppResult};
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, XlsxError};

use super::table::PlanTable;

fn export_error(stage: &str, error: XlsxError) -> AppError {
    AppError::export_failed(format!("Failed to {stage}: {error}")).with_source(error)
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_background_color(Color::RGB(export::HEADER_BACKGROUND_RGB))
        .set_border(FormatBorder::Thin)
}

fn body_format() -> Format {
    Format::new()
        .set_border(FormatBorder::Thin)
        .set_text_wrap()
}

/// Width for a column whose longest cell has `chars` characters
#[must_use]
pub fn column_width(chars: usize) -> usize {
    (chars + export::COLUMN_WIDTH_PADDING).min(export::MAX_COLUMN_WIDTH)
}

/// Serialize a table as a single-sheet workbook
///
/// # Errors
///
/// Returns `EXPORT_FAILED` when the sheet name is rejected, the table
/// exceeds the worksheet limits, or the workbook cannot be serialized.
/// Nothing is returned on failure.
pub fn write_spreadsheet(table: &PlanTable, sheet_name: &str) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet_name)
        .map_err(|e| export_error("name worksheet", e))?;

    let header = header_format();
    let body = body_format();

    for (row_index, row) in table.rows().iter().enumerate() {
        let row_num = u32::try_from(row_index)
            .map_err(|_| AppError::export_failed("Table has too many rows"))?;
        let format = if row_index == 0 { &header } else { &body };

        for (col_index, cell) in row.iter().enumerate() {
            let col_num = u16::try_from(col_index)
                .map_err(|_| AppError::export_failed("Table has too many columns"))?;
            worksheet
                .write_string_with_format(row_num, col_num, cell, format)
                .map_err(|e| export_error("write cell", e))?;
        }
    }

    for (col_index, chars) in table.column_char_widths().into_iter().enumerate() {
        let col_num = u16::try_from(col_index)
            .map_err(|_| AppError::export_failed("Table has too many columns"))?;
        worksheet
            .set_column_width(col_num, column_width(chars) as f64)
            .map_err(|e| export_error("size column", e))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| export_error("serialize workbook", e))
}
