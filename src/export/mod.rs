//! Spreadsheet export of computed zones.

pub mod sheet;
pub mod types;
pub mod xlsx;

pub use sheet::{build_hr_sheet, build_pace_sheet, build_workbook};
pub use types::{Cell, ExportError, RowKind, SheetData};
pub use xlsx::{export_filename, export_to_dir, write_workbook};
