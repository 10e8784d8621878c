//! Raw form input validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::pace::{pace_to_seconds, PaceError};

/// Raw threshold values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneInput {
    /// Threshold pace, "mm:ss" per km
    pub threshold_pace: String,
    /// Threshold heart rate, bpm
    pub threshold_hr: String,
    /// Maximum heart rate, bpm
    pub max_hr: String,
}

impl ZoneInput {
    pub fn new(
        threshold_pace: impl Into<String>,
        threshold_hr: impl Into<String>,
        max_hr: impl Into<String>,
    ) -> Self {
        Self {
            threshold_pace: threshold_pace.into(),
            threshold_hr: threshold_hr.into(),
            max_hr: max_hr.into(),
        }
    }
}

/// Validated thresholds, the anchor for every zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Thresholds {
    /// Threshold pace as entered (trimmed)
    pub threshold_pace: String,
    /// Threshold pace in seconds per km
    pub threshold_pace_seconds: u32,
    /// Threshold heart rate in bpm
    pub threshold_hr: f64,
    /// Maximum heart rate in bpm
    pub max_hr: f64,
}

/// Errors that abort a zone calculation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    #[error(transparent)]
    InvalidPaceFormat(#[from] PaceError),

    #[error("Por favor ingrese un Threshold HR válido")]
    InvalidThresholdHr,

    #[error("Por favor ingrese un Max HR válido")]
    InvalidMaxHr,

    #[error("El Threshold HR no puede ser mayor que Max HR")]
    ThresholdExceedsMax { threshold_hr: f64, max_hr: f64 },
}

/// Parse a heart rate field. Must be a finite number above zero.
pub(crate) fn parse_bpm(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|bpm| bpm.is_finite() && *bpm > 0.0)
}

/// Validate raw input into thresholds.
///
/// Checks run in a fixed order (pace present, threshold HR, max HR,
/// threshold <= max, pace format) and the first failure is returned.
pub fn validate(input: &ZoneInput) -> Result<Thresholds, CalculationError> {
    let threshold_pace = input.threshold_pace.trim();
    if threshold_pace.is_empty() {
        return Err(PaceError::Missing.into());
    }

    let threshold_hr = parse_bpm(&input.threshold_hr).ok_or(CalculationError::InvalidThresholdHr)?;
    let max_hr = parse_bpm(&input.max_hr).ok_or(CalculationError::InvalidMaxHr)?;

    if threshold_hr > max_hr {
        return Err(CalculationError::ThresholdExceedsMax {
            threshold_hr,
            max_hr,
        });
    }

    let threshold_pace_seconds = pace_to_seconds(threshold_pace)?;
    if threshold_pace_seconds == 0 {
        return Err(PaceError::InvalidFormat(threshold_pace.to_string()).into());
    }

    Ok(Thresholds {
        threshold_pace: threshold_pace.to_string(),
        threshold_pace_seconds,
        threshold_hr,
        max_hr,
    })
}
