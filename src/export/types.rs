//! Types for spreadsheet export.

use thiserror::Error;

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<u32> for Cell {
    fn from(value: u32) -> Self {
        Cell::Number(value as f64)
    }
}

/// Role of a row, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Title,
    Info,
    Blank,
    Header,
    /// A zone row, with its zone number
    Zone(u8),
}

/// A named, rectangular grid of cells destined for one worksheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetData {
    /// Worksheet name
    pub name: String,
    /// Column widths in characters; also fixes the grid width
    pub column_widths: Vec<f64>,
    /// Rows, each exactly `column_widths.len()` cells
    pub rows: Vec<Vec<Cell>>,
    /// Role of each row
    pub row_kinds: Vec<RowKind>,
}

impl SheetData {
    pub fn new(name: impl Into<String>, column_widths: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            column_widths,
            rows: Vec::new(),
            row_kinds: Vec::new(),
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.column_widths.len()
    }

    /// Append a row, padding it with empty cells to the sheet width.
    /// Cells beyond the width are dropped.
    pub fn push_row(&mut self, kind: RowKind, cells: Vec<Cell>) {
        let width = self.width();
        let mut row = cells;
        row.truncate(width);
        row.resize(width, Cell::Empty);
        self.rows.push(row);
        self.row_kinds.push(kind);
    }

    /// Get a cell by (row, column).
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }
}

/// Export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Nothing has been calculated yet
    #[error("No hay zonas calculadas para exportar")]
    NoData,

    /// The spreadsheet writer could not produce the workbook
    #[error("No se pudo generar el archivo Excel: {0}")]
    Unavailable(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rust_xlsxwriter::XlsxError> for ExportError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        ExportError::Unavailable(e.to_string())
    }
}
