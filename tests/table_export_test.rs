// ABOUTME: Integration tests for plan table parsing and XLSX export
// ABOUTME: Reads generated workbooks back with calamine to check cells and sheet names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};
use common::{TWO_ROW_DIET_PLAN, WORKOUT_PLAN};
use fitplan_server::errors::ErrorCode;
use fitplan_server::export::{column_width, parse_table, write_spreadsheet, SpreadsheetArtifact};
use fitplan_server::planner::PlanKind;

fn open(bytes: Vec<u8>) -> Xlsx<Cursor<Vec<u8>>> {
    Xlsx::new(Cursor::new(bytes)).unwrap()
}

#[test]
fn test_diet_plan_round_trips_through_workbook() {
    let artifact = SpreadsheetArtifact::from_plan(PlanKind::Diet, TWO_ROW_DIET_PLAN).unwrap();
    assert_eq!(artifact.file_name, "diet_plan.xlsx");
    assert_eq!(artifact.rows, 3);

    let mut workbook = open(artifact.bytes);
    assert_eq!(workbook.sheet_names(), vec!["Diet Plan".to_owned()]);

    let range = workbook.worksheet_range("Diet Plan").unwrap();
    assert_eq!(range.get_size(), (3, 6));
    assert_eq!(
        range.get_value((0, 2)),
        Some(&Data::String("Description".to_owned()))
    );
    assert_eq!(
        range.get_value((1, 2)),
        Some(&Data::String("Poha with peanuts (1 bowl)".to_owned()))
    );
    // the Day cell of a follow-on meal stays blank
    let day = range.get_value((2, 0)).map(ToString::to_string);
    assert_eq!(day.unwrap_or_default(), "");
    assert_eq!(
        range.get_value((2, 3)),
        Some(&Data::String("600".to_owned()))
    );
}

#[test]
fn test_workout_plan_uses_workout_sheet() {
    let artifact = SpreadsheetArtifact::from_plan(PlanKind::Workout, WORKOUT_PLAN).unwrap();
    assert_eq!(artifact.file_name, "workout_plan.xlsx");

    let mut workbook = open(artifact.bytes);
    let range = workbook.worksheet_range("Workout Plan").unwrap();
    assert_eq!(range.get_size(), (3, 5));
    assert_eq!(
        range.get_value((0, 4)),
        Some(&Data::String("Video Link".to_owned()))
    );
}

#[test]
fn test_prose_only_document_exports_empty_sheet() {
    let table = parse_table("Sorry, I could not produce a plan today.");
    assert!(table.is_empty());

    let bytes = write_spreadsheet(&table, "Diet Plan").unwrap();
    let mut workbook = open(bytes);
    let range = workbook.worksheet_range("Diet Plan").unwrap();
    assert!(range.is_empty());
}

#[test]
fn test_ragged_rows_are_kept() {
    let table = parse_table("| Day | Exercise | Reps |\n|---|---|---|\n| 1 | Squats |\n| | Lunges | 3x10 | extra |");
    assert_eq!(table.len(), 3);
    assert_eq!(table.body()[0], vec!["1", "Squats"]);
    assert_eq!(table.body()[1], vec!["", "Lunges", "3x10", "extra"]);

    let mut workbook = open(write_spreadsheet(&table, "Workout Plan").unwrap());
    let range = workbook.worksheet_range("Workout Plan").unwrap();
    assert_eq!(range.get_size(), (3, 4));
}

#[test]
fn test_indented_table_lines_parse_like_flush_ones() {
    // surrounding whitespace is trimmed before the outer pipes are stripped
    let table = parse_table("  | Day | Meal |\n  |-----|------|\n\t| 1 | Breakfast |  ");
    assert_eq!(table.len(), 2);
    assert_eq!(table.header().unwrap(), ["Day", "Meal"]);
    assert_eq!(table.body()[0], vec!["1", "Breakfast"]);
}

#[test]
fn test_placeholder_rows_after_separator_are_exported() {
    let document = "| Day | Exercise | Duration/Reps |\n|---|---|---|\n| 7 | Rest | - |\n| - | - | - |";
    let table = parse_table(document);
    assert_eq!(table.len(), 3);

    let mut workbook = open(write_spreadsheet(&table, "Workout Plan").unwrap());
    let range = workbook.worksheet_range("Workout Plan").unwrap();
    assert_eq!(range.get_size(), (3, 3));
    assert_eq!(range.get_value((2, 1)), Some(&Data::String("-".to_owned())));
}

#[test]
fn test_column_widths_follow_longest_cell() {
    let table = parse_table(TWO_ROW_DIET_PLAN);
    let widths = table.column_char_widths();
    // "Breakfast" is the longest Meal cell
    assert_eq!(widths[1], 9);
    assert_eq!(column_width(widths[1]), 11);
    // the recipe URLs are longer than the cap
    assert!(widths[5] > 48);
    assert_eq!(column_width(widths[5]), 50);
}

#[test]
fn test_rejected_sheet_name_is_export_failure() {
    let table = parse_table(WORKOUT_PLAN);
    let error = write_spreadsheet(&table, "Plan [draft]").err().unwrap();
    assert_eq!(error.code, ErrorCode::ExportFailed);
    assert_eq!(error.http_status(), 500);
}
