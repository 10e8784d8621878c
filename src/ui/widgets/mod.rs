//! Reusable UI widgets.

pub mod zone_table;

pub use zone_table::ZoneTable;
