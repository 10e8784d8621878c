//! Report module for displaying computed zones.

pub mod formatter;
pub mod html;

pub use formatter::{
    build_report, hr_range, hr_table, pace_range, pace_table, ReportRow, ReportTable, ZoneReport,
};
pub use html::render_html;
