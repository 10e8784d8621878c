//! RustZones - Training Zone Calculator
//!
//! Computes pace and heart rate training zones from a threshold pace and
//! threshold/max heart rate, renders them as a report, and exports them to
//! an Excel workbook.

pub mod export;
pub mod report;
pub mod storage;
pub mod ui;
pub mod zones;

// Re-export commonly used types
pub use export::{export_to_dir, ExportError};
pub use report::{build_report, ZoneReport};
pub use storage::config::AppConfig;
pub use zones::{calculate, CalculationError, ZoneCalculation, ZoneInput};
