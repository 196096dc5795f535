// ABOUTME: Spreadsheet export of generated plans
// ABOUTME: Parses a plan document into rows and serves it as an XLSX attachment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Export
//!
//! Artifacts are built on demand from the current document and never touch
//! the filesystem.

/// XLSX serialization
pub mod spreadsheet;
/// Markdown table tokenizer
pub mod table;

pub use spreadsheet::{column_width, write_spreadsheet};
pub use table::{parse_table, PlanTable};

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use fitplan_core::constants::export;
use fitplan_core::errors::AppResult;

use crate::planner::PlanKind;

/// A downloadable workbook
#[derive(Debug, Clone)]
pub struct SpreadsheetArtifact {
    /// Attachment file name
    pub file_name: &'static str,
    /// Content type
    pub mime_type: &'static str,
    /// Serialized workbook
    pub bytes: Vec<u8>,
    /// Rows written, header included
    pub rows: usize,
}

impl SpreadsheetArtifact {
    /// Convert a plan document into its workbook
    ///
    /// # Errors
    ///
    /// Returns `EXPORT_FAILED` if the workbook cannot be produced
    pub fn from_plan(kind: PlanKind, document: &str) -> AppResult<Self> {
        let table = parse_table(document);
        let bytes = write_spreadsheet(&table, kind.sheet_name())?;
        Ok(Self {
            file_name: kind.file_name(),
            mime_type: export::XLSX_MIME_TYPE,
            bytes,
            rows: table.len(),
        })
    }

    fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.file_name)
    }
}

impl IntoResponse for SpreadsheetArtifact {
    fn into_response(self) -> Response {
        let disposition = HeaderValue::from_str(&self.content_disposition())
            .unwrap_or_else(|_| HeaderValue::from_static("attachment"));
        (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, HeaderValue::from_static(self.mime_type)),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            self.bytes,
        )
            .into_response()
    }
}
