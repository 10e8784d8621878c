//! Unit test modules.

mod export_test;
mod pace_test;
mod report_test;
mod zones_test;
