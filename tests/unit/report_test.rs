//! Unit tests for the zone report.

use rustzones::report::{build_report, hr_range, pace_range, render_html};
use rustzones::zones::{calculate, calculate_pace_zones, ZoneInput};

#[test]
fn test_report_sections() {
    let calculation = calculate(&ZoneInput::new("5:00", "150", "185")).unwrap();
    let report = build_report(&calculation);

    assert_eq!(report.title, "Reporte de Zonas de Entrenamiento");
    assert_eq!(report.pace.title, "Zonas por Pace");
    assert_eq!(report.heart_rate.title, "Zonas por Frecuencia Cardíaca");
    assert_eq!(report.pace.headers, ["Zona", "Nombre", "Rango (%)", "Pace (min/km)"]);
    assert_eq!(report.heart_rate.headers[3], "HR (bpm)");

    let labels: Vec<&str> = report.pace.rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["Z1", "Z2", "Z3", "Z4", "Z5", "Z6", "Z7"]);
}

#[test]
fn test_pace_range_shapes() {
    let zones = calculate_pace_zones(300);

    // 300 / 0.775 = 387.1s
    assert_eq!(pace_range(&zones[0]), "6:27 y más lento");
    // 300 / 0.944 = 317.8s, 300 / 1.0 = 300s
    assert_eq!(pace_range(&zones[3]), "5:17 - 5:00");
    // 300 / 1.125 = 266.7s
    assert_eq!(pace_range(&zones[6]), "< 4:26");
}

#[test]
fn test_report_rows_match_zones() {
    let calculation = calculate(&ZoneInput::new("4:30", "160", "190")).unwrap();
    let report = build_report(&calculation);

    for (row, zone) in report.heart_rate.rows.iter().zip(&calculation.hr_zones) {
        assert_eq!(row.range, hr_range(zone));
        assert_eq!(row.percentage, zone.percentage);
    }
    assert_eq!(report.heart_rate.rows[0].range, "0 - 126");
    assert_eq!(report.pace.rows[6].percentage, "112.5% - ∞");
}

#[test]
fn test_html_contains_both_tables() {
    let calculation = calculate(&ZoneInput::new("4:30", "160", "190")).unwrap();
    let html = render_html(&build_report(&calculation));

    assert!(html.contains("<h3>Zonas por Pace</h3>"));
    assert!(html.contains("<h3>Zonas por Frecuencia Cardíaca</h3>"));
    assert!(html.contains("<td>Recuperación</td>"));
    assert!(html.contains("<td>5:48 y más lento</td>"));
    assert!(html.contains("<td>111.6% - Max HR</td>"));
}
