//! Unit tests for the export grids.

use rustzones::export::{
    build_hr_sheet, build_pace_sheet, build_workbook, export_filename, Cell, RowKind,
};
use rustzones::zones::{calculate, ZoneInput};

use chrono::NaiveDate;

#[test]
fn test_grids_are_rectangular() {
    let calculation = calculate(&ZoneInput::new("4:30", "160", "190")).unwrap();

    for sheet in build_workbook(&calculation) {
        let width = sheet.width();
        assert!(sheet.rows.iter().all(|row| row.len() == width), "{}", sheet.name);
        assert_eq!(sheet.rows.len(), sheet.row_kinds.len());
    }
}

#[test]
fn test_pace_sheet_rows() {
    let calculation = calculate(&ZoneInput::new("4:30", "160", "190")).unwrap();
    let sheet = build_pace_sheet("4:30", &calculation.pace_zones);

    assert_eq!(
        sheet.cell(0, 0),
        Some(&Cell::text("Zonas de Entrenamiento por Pace"))
    );
    assert_eq!(sheet.cell(1, 0), Some(&Cell::text("Threshold Pace (min/km)")));
    assert_eq!(sheet.row_kinds[2], RowKind::Blank);

    // Z4 row
    assert_eq!(sheet.cell(7, 0), Some(&Cell::text("Z4")));
    assert_eq!(sheet.cell(7, 1), Some(&Cell::text("Umbral")));
    assert_eq!(sheet.cell(7, 2), Some(&Cell::text("94.4% - 100%")));
    assert_eq!(sheet.cell(7, 3), Some(&Cell::text("4:46 - 4:30")));
    assert_eq!(sheet.row_kinds[7], RowKind::Zone(4));
}

#[test]
fn test_hr_sheet_rows() {
    let calculation = calculate(&ZoneInput::new("4:30", "180", "185")).unwrap();
    let sheet = build_hr_sheet(180.0, 185.0, &calculation.hr_zones);

    assert_eq!(sheet.cell(4, 3), Some(&Cell::text("HR Min (bpm)")));
    // Z7 row: max clamped to max HR
    assert_eq!(sheet.cell(11, 0), Some(&Cell::text("Z7")));
    assert_eq!(sheet.cell(11, 2), Some(&Cell::text("111.6% - Max HR")));
    assert_eq!(sheet.cell(11, 4), Some(&Cell::Number(185.0)));
}

#[test]
fn test_export_filename_uses_iso_date() {
    let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
    assert_eq!(export_filename(date), "zonas_entrenamiento_2025-12-31.xlsx");
}
