//! Cell grids for the zone workbook.

use crate::report::pace_range;
use crate::zones::{HrZone, PaceZone, ZoneCalculation};

use super::types::{RowKind, SheetData};

pub const PACE_SHEET_NAME: &str = "Zonas Pace";
pub const HR_SHEET_NAME: &str = "Zonas HR";

/// Build the pace worksheet grid.
pub fn build_pace_sheet(threshold_pace: &str, zones: &[PaceZone]) -> SheetData {
    let mut sheet = SheetData::new(PACE_SHEET_NAME, vec![10.0, 20.0, 20.0, 25.0]);

    sheet.push_row(RowKind::Title, vec!["Zonas de Entrenamiento por Pace".into()]);
    sheet.push_row(
        RowKind::Info,
        vec!["Threshold Pace (min/km)".into(), threshold_pace.into()],
    );
    sheet.push_row(RowKind::Blank, Vec::new());
    sheet.push_row(
        RowKind::Header,
        vec![
            "Zona".into(),
            "Nombre".into(),
            "Rango (%)".into(),
            "Rango Pace (min/km)".into(),
        ],
    );

    for zone in zones {
        sheet.push_row(
            RowKind::Zone(zone.definition.number),
            vec![
                zone.definition.label().into(),
                zone.definition.description.into(),
                zone.percentage.clone().into(),
                pace_range(zone).into(),
            ],
        );
    }

    sheet
}

/// Build the heart rate worksheet grid.
pub fn build_hr_sheet(threshold_hr: f64, max_hr: f64, zones: &[HrZone]) -> SheetData {
    let mut sheet = SheetData::new(HR_SHEET_NAME, vec![10.0, 20.0, 20.0, 15.0, 15.0]);

    sheet.push_row(
        RowKind::Title,
        vec!["Zonas de Entrenamiento por Frecuencia Cardíaca".into()],
    );
    sheet.push_row(
        RowKind::Info,
        vec!["Threshold HR (bpm)".into(), threshold_hr.into()],
    );
    sheet.push_row(RowKind::Info, vec!["Max HR (bpm)".into(), max_hr.into()]);
    sheet.push_row(RowKind::Blank, Vec::new());
    sheet.push_row(
        RowKind::Header,
        vec![
            "Zona".into(),
            "Nombre".into(),
            "Rango (%)".into(),
            "HR Min (bpm)".into(),
            "HR Max (bpm)".into(),
        ],
    );

    for zone in zones {
        sheet.push_row(
            RowKind::Zone(zone.definition.number),
            vec![
                zone.definition.label().into(),
                zone.definition.description.into(),
                zone.percentage.clone().into(),
                zone.min_bpm.into(),
                zone.max_bpm.into(),
            ],
        );
    }

    sheet
}

/// Build both worksheets for a calculation, pace first.
pub fn build_workbook(calculation: &ZoneCalculation) -> Vec<SheetData> {
    let thresholds = &calculation.thresholds;
    vec![
        build_pace_sheet(&thresholds.threshold_pace, &calculation.pace_zones),
        build_hr_sheet(
            thresholds.threshold_hr,
            thresholds.max_hr,
            &calculation.hr_zones,
        ),
    ]
}
