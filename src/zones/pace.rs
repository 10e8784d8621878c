//! Pace parsing and formatting ("mm:ss" per kilometer).

use thiserror::Error;

/// Pace input errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaceError {
    /// No pace was entered
    #[error("Por favor ingrese el Threshold Pace")]
    Missing,

    /// Input is not a valid "mm:ss" pace
    #[error("Formato de Pace inválido. Use mm:ss")]
    InvalidFormat(String),
}

/// Parse a "mm:ss" pace into total seconds.
///
/// Exactly two colon-separated non-negative integers are required, and the
/// seconds part must be below 60.
pub fn pace_to_seconds(text: &str) -> Result<u32, PaceError> {
    let trimmed = text.trim();
    let invalid = || PaceError::InvalidFormat(trimmed.to_string());

    let parts: Vec<&str> = trimmed.split(':').collect();
    if parts.len() != 2 {
        return Err(invalid());
    }

    let minutes: u32 = parts[0].parse().map_err(|_| invalid())?;
    let seconds: u32 = parts[1].parse().map_err(|_| invalid())?;

    if seconds >= 60 {
        return Err(invalid());
    }

    minutes
        .checked_mul(60)
        .and_then(|m| m.checked_add(seconds))
        .ok_or_else(invalid)
}

/// Format a number of seconds as "M:SS".
///
/// Fractional seconds are floored, so 286.02 s formats as "4:46".
pub fn seconds_to_pace(total_seconds: f64) -> String {
    let total = if total_seconds.is_finite() {
        total_seconds.max(0.0).floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}
