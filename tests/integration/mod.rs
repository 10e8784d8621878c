//! Integration test modules.

mod workbook_export_test;
