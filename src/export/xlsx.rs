//! XLSX workbook export.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rust_xlsxwriter::{Format, FormatBorder, Workbook, Worksheet};
use tracing::info;

use crate::zones::tables::zone_color;
use crate::zones::ZoneCalculation;

use super::sheet::build_workbook;
use super::types::{Cell, ExportError, RowKind, SheetData};

/// Reusable cell formats.
struct SheetFormats {
    title: Format,
    header: Format,
    text: Format,
}

impl SheetFormats {
    fn new() -> Self {
        Self {
            title: Format::new().set_bold().set_font_size(14),
            header: Format::new()
                .set_bold()
                .set_background_color(0x4472C4)
                .set_font_color(0xFFFFFF)
                .set_border(FormatBorder::Thin),
            text: Format::new(),
        }
    }

    fn for_row(&self, kind: RowKind) -> &Format {
        match kind {
            RowKind::Title => &self.title,
            RowKind::Header => &self.header,
            RowKind::Info | RowKind::Blank | RowKind::Zone(_) => &self.text,
        }
    }
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    format: &Format,
) -> Result<(), ExportError> {
    match cell {
        Cell::Text(text) => {
            worksheet.write_string_with_format(row, col, text, format)?;
        }
        Cell::Number(value) => {
            worksheet.write_number_with_format(row, col, *value, format)?;
        }
        Cell::Empty => {}
    }
    Ok(())
}

fn add_sheet(
    workbook: &mut Workbook,
    sheet: &SheetData,
    formats: &SheetFormats,
) -> Result<(), ExportError> {
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&sheet.name)?;

    for (col, width) in sheet.column_widths.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }

    for (row_idx, (cells, kind)) in sheet.rows.iter().zip(&sheet.row_kinds).enumerate() {
        let row = row_idx as u32;
        for (col, cell) in cells.iter().enumerate() {
            // Zone label cells carry the zone color
            let zone_format = match (kind, col) {
                (RowKind::Zone(number), 0) => Some(
                    Format::new()
                        .set_bold()
                        .set_background_color(zone_color(*number).to_hex()),
                ),
                _ => None,
            };
            let format = zone_format.as_ref().unwrap_or(formats.for_row(*kind));
            write_cell(worksheet, row, col as u16, cell, format)?;
        }
    }

    Ok(())
}

/// Serialize sheets into XLSX bytes.
pub fn write_workbook(sheets: &[SheetData]) -> Result<Vec<u8>, ExportError> {
    if sheets.is_empty() {
        return Err(ExportError::NoData);
    }

    let mut workbook = Workbook::new();
    let formats = SheetFormats::new();

    for sheet in sheets {
        add_sheet(&mut workbook, sheet, &formats)?;
    }

    Ok(workbook.save_to_buffer()?)
}

/// File name for an export made on the given date.
pub fn export_filename(date: NaiveDate) -> String {
    format!("zonas_entrenamiento_{}.xlsx", date.format("%Y-%m-%d"))
}

/// Export a calculation as a workbook file in `dir`.
///
/// Returns the path of the written file.
pub fn export_to_dir(
    dir: &Path,
    calculation: &ZoneCalculation,
    date: NaiveDate,
) -> Result<PathBuf, ExportError> {
    if calculation.pace_zones.is_empty() && calculation.hr_zones.is_empty() {
        return Err(ExportError::NoData);
    }

    let bytes = write_workbook(&build_workbook(calculation))?;

    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_filename(date));
    std::fs::write(&path, bytes)?;

    info!("Exported training zones to {}", path.display());
    Ok(path)
}
