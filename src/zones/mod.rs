//! Training zone tables and calculations.

pub mod calculator;
pub mod pace;
pub mod tables;
pub mod validation;

pub use calculator::{
    calculate, calculate_hr_zones, calculate_pace_zones, HrZone, PaceZone, ZoneCalculation,
};
pub use pace::{pace_to_seconds, seconds_to_pace, PaceError};
pub use tables::{ZoneDefinition, HR_ZONES, PACE_ZONES, ZONE_COUNT};
pub use validation::{validate, CalculationError, Thresholds, ZoneInput};
