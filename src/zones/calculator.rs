//! Zone calculation from threshold pace and heart rate.
//!
//! Every static zone band is expanded into concrete bounds. Pace is inversely
//! related to intensity: a higher percentage gives a faster (lower) pace.

use serde::Serialize;
use tracing::{debug, info, warn};

use super::pace::seconds_to_pace;
use super::tables::{ZoneDefinition, HR_ZONES, PACE_ZONES};
use super::validation::{validate, CalculationError, Thresholds, ZoneInput};

/// Sentinel shown for a pace bound that does not exist.
pub const UNBOUNDED: &str = "∞";

/// A pace zone with concrete bounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaceZone {
    /// Static zone band
    pub definition: ZoneDefinition,
    /// Fast end of the zone ("M:SS"), pace at the upper percentage.
    /// None for the open-ended sprint zone, whose range is rendered from
    /// `max_pace` as "< {max_pace}".
    pub min_pace: Option<String>,
    /// Slow end of the zone ("M:SS"), pace at the lower percentage.
    /// None for the recovery zone, which has no slow limit.
    pub max_pace: Option<String>,
    /// Band label, e.g. "77.5% - 87.7%"
    pub percentage: String,
}

impl PaceZone {
    /// Slow end of the zone, or "∞" when unbounded.
    pub fn max_pace_label(&self) -> &str {
        self.max_pace.as_deref().unwrap_or(UNBOUNDED)
    }
}

/// A heart rate zone with concrete bounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HrZone {
    /// Static zone band
    pub definition: ZoneDefinition,
    /// Lower bound in bpm
    pub min_bpm: u32,
    /// Upper bound in bpm, never above max HR
    pub max_bpm: u32,
    /// Band label, e.g. "101% - 103.4%"
    pub percentage: String,
}

/// Result of one calculation: validated thresholds plus both zone sets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneCalculation {
    pub thresholds: Thresholds,
    pub pace_zones: Vec<PaceZone>,
    pub hr_zones: Vec<HrZone>,
}

/// Format a percentage using its shortest form (100, 77.5).
pub fn format_percent(percent: f64) -> String {
    format!("{}", percent)
}

/// Pace in seconds at a given percentage of threshold intensity.
fn pace_at_percent(threshold_pace_seconds: f64, percent: f64) -> f64 {
    threshold_pace_seconds / (percent / 100.0)
}

fn pace_zone(zone: &ZoneDefinition, threshold_pace_seconds: f64) -> PaceZone {
    let min_pace = zone
        .max_percent
        .map(|max| seconds_to_pace(pace_at_percent(threshold_pace_seconds, max)));

    let max_pace = if zone.is_open_below() {
        None
    } else {
        Some(seconds_to_pace(pace_at_percent(
            threshold_pace_seconds,
            zone.min_percent,
        )))
    };

    let percentage = match zone.max_percent {
        Some(max) => format!("{}% - {}%", format_percent(zone.min_percent), format_percent(max)),
        None => format!("{}% - {}", format_percent(zone.min_percent), UNBOUNDED),
    };

    PaceZone {
        definition: *zone,
        min_pace,
        max_pace,
        percentage,
    }
}

/// Calculate the 7 pace zones for a threshold pace in seconds per km.
pub fn calculate_pace_zones(threshold_pace_seconds: u32) -> Vec<PaceZone> {
    let threshold = threshold_pace_seconds as f64;
    let zones: Vec<PaceZone> = PACE_ZONES.iter().map(|z| pace_zone(z, threshold)).collect();

    for zone in &zones {
        debug!(
            zone = zone.definition.number,
            min_pace = ?zone.min_pace,
            max_pace = ?zone.max_pace,
            "pace zone"
        );
    }

    zones
}

fn hr_zone(zone: &ZoneDefinition, threshold_hr: f64, max_hr: f64) -> HrZone {
    let raw_min = zone.min_percent / 100.0 * threshold_hr;
    let raw_max = match zone.max_percent {
        Some(max) => max / 100.0 * threshold_hr,
        None => max_hr,
    };

    let min_bpm = raw_min.round().max(0.0) as u32;
    // Never recommend a ceiling above the athlete's max
    let max_bpm = raw_max.round().min(max_hr.floor()).max(0.0) as u32;

    if min_bpm > max_bpm {
        warn!(
            zone = zone.number,
            min_bpm, max_bpm, "heart rate zone starts above max HR"
        );
    }

    let percentage = match zone.max_percent {
        Some(max) => format!("{}% - {}%", format_percent(zone.min_percent), format_percent(max)),
        None => format!("{}% - Max HR", format_percent(zone.min_percent)),
    };

    HrZone {
        definition: *zone,
        min_bpm,
        max_bpm,
        percentage,
    }
}

/// Calculate the 7 heart rate zones from threshold and max heart rate.
pub fn calculate_hr_zones(threshold_hr: f64, max_hr: f64) -> Vec<HrZone> {
    let zones: Vec<HrZone> = HR_ZONES
        .iter()
        .map(|z| hr_zone(z, threshold_hr, max_hr))
        .collect();

    for zone in &zones {
        debug!(
            zone = zone.definition.number,
            min_bpm = zone.min_bpm,
            max_bpm = zone.max_bpm,
            "hr zone"
        );
    }

    zones
}

/// Validate raw input and compute both zone sets.
pub fn calculate(input: &ZoneInput) -> Result<ZoneCalculation, CalculationError> {
    let thresholds = validate(input)?;

    info!(
        threshold_pace = %thresholds.threshold_pace,
        threshold_hr = thresholds.threshold_hr,
        max_hr = thresholds.max_hr,
        "Calculating training zones"
    );

    let pace_zones = calculate_pace_zones(thresholds.threshold_pace_seconds);
    let hr_zones = calculate_hr_zones(thresholds.threshold_hr, thresholds.max_hr);

    Ok(ZoneCalculation {
        thresholds,
        pace_zones,
        hr_zones,
    })
}
