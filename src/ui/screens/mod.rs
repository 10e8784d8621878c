//! UI screens for the application.

pub mod calculator;

pub use calculator::{CalculatorAction, CalculatorScreen};
