//! Human-readable zone ranges and report tables.

use serde::Serialize;

use crate::zones::{HrZone, PaceZone, ZoneCalculation};

/// Format the pace range of a zone, slow to fast.
pub fn pace_range(zone: &PaceZone) -> String {
    match (&zone.min_pace, &zone.max_pace) {
        // Sprint: anything faster than the zone entry pace
        (None, _) => format!("< {}", zone.max_pace_label()),
        // Recovery: the fast limit and anything slower
        (Some(fast), None) => format!("{} y más lento", fast),
        (Some(fast), Some(slow)) => format!("{} - {}", slow, fast),
    }
}

/// Format the heart rate range of a zone.
pub fn hr_range(zone: &HrZone) -> String {
    format!("{} - {}", zone.min_bpm, zone.max_bpm)
}

/// One rendered zone row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// Zone number (1-7)
    pub zone: u8,
    /// Zone label ("Z1")
    pub label: String,
    /// Zone description
    pub description: String,
    /// Percentage band
    pub percentage: String,
    /// Formatted range
    pub range: String,
}

/// A titled table of zone rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportTable {
    pub title: String,
    pub headers: [String; 4],
    pub rows: Vec<ReportRow>,
}

impl ReportTable {
    fn new(title: &str, range_header: &str) -> Self {
        Self {
            title: title.to_string(),
            headers: [
                "Zona".to_string(),
                "Nombre".to_string(),
                "Rango (%)".to_string(),
                range_header.to_string(),
            ],
            rows: Vec::new(),
        }
    }
}

/// The full zone report: one table per discipline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneReport {
    pub title: String,
    pub pace: ReportTable,
    pub heart_rate: ReportTable,
}

pub const REPORT_TITLE: &str = "Reporte de Zonas de Entrenamiento";

/// Build the pace table rows.
pub fn pace_table(zones: &[PaceZone]) -> ReportTable {
    let mut table = ReportTable::new("Zonas por Pace", "Pace (min/km)");
    table.rows = zones
        .iter()
        .map(|zone| ReportRow {
            zone: zone.definition.number,
            label: zone.definition.label(),
            description: zone.definition.description.to_string(),
            percentage: zone.percentage.clone(),
            range: pace_range(zone),
        })
        .collect();
    table
}

/// Build the heart rate table rows.
pub fn hr_table(zones: &[HrZone]) -> ReportTable {
    let mut table = ReportTable::new("Zonas por Frecuencia Cardíaca", "HR (bpm)");
    table.rows = zones
        .iter()
        .map(|zone| ReportRow {
            zone: zone.definition.number,
            label: zone.definition.label(),
            description: zone.definition.description.to_string(),
            percentage: zone.percentage.clone(),
            range: hr_range(zone),
        })
        .collect();
    table
}

/// Build the report for a calculation.
pub fn build_report(calculation: &ZoneCalculation) -> ZoneReport {
    ZoneReport {
        title: REPORT_TITLE.to_string(),
        pace: pace_table(&calculation.pace_zones),
        heart_rate: hr_table(&calculation.hr_zones),
    }
}
