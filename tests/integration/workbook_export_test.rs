//! Integration tests for exporting a calculation to an XLSX file.

use chrono::NaiveDate;
use rustzones::export::{export_to_dir, write_workbook, ExportError, SheetData};
use rustzones::zones::{calculate, ZoneInput};
use tempfile::tempdir;

fn export_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 14).unwrap()
}

#[test]
fn test_export_writes_named_file() {
    let dir = tempdir().unwrap();
    let calculation = calculate(&ZoneInput::new("4:30", "160", "190")).unwrap();

    let path = export_to_dir(dir.path(), &calculation, export_date()).unwrap();

    assert_eq!(path, dir.path().join("zonas_entrenamiento_2025-06-14.xlsx"));
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_export_creates_missing_directory() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("exports").join("zones");
    let calculation = calculate(&ZoneInput::new("5:15", "150", "180")).unwrap();

    let path = export_to_dir(&target, &calculation, export_date()).unwrap();
    assert!(path.starts_with(&target));
    assert!(path.exists());
}

#[test]
fn test_export_overwrites_same_day_file() {
    let dir = tempdir().unwrap();
    let first = calculate(&ZoneInput::new("4:30", "160", "190")).unwrap();
    let second = calculate(&ZoneInput::new("6:00", "140", "175")).unwrap();

    let a = export_to_dir(dir.path(), &first, export_date()).unwrap();
    let b = export_to_dir(dir.path(), &second, export_date()).unwrap();

    assert_eq!(a, b);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_export_into_file_path_fails() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("not_a_dir");
    std::fs::write(&blocker, b"x").unwrap();
    let calculation = calculate(&ZoneInput::new("4:30", "160", "190")).unwrap();

    let result = export_to_dir(&blocker, &calculation, export_date());
    assert!(matches!(result, Err(ExportError::Io(_))));
}

#[test]
fn test_writer_failure_is_reported() {
    let sheet = SheetData::new("", vec![10.0]);
    assert!(matches!(
        write_workbook(&[sheet]),
        Err(ExportError::Unavailable(_))
    ));
}
