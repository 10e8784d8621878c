//! Unit tests for zone calculations.

use rustzones::zones::{
    calculate, calculate_hr_zones, calculate_pace_zones, CalculationError, PaceError, ZoneInput,
    HR_ZONES, PACE_ZONES,
};

#[test]
fn test_pace_zones_from_threshold_270() {
    let zones = calculate_pace_zones(270);
    assert_eq!(zones.len(), 7);

    // Z1: 0-77.5% = 5:48 and slower
    assert_eq!(zones[0].min_pace.as_deref(), Some("5:48"));
    assert_eq!(zones[0].max_pace_label(), "∞");

    // Z2: 77.5-87.7% = 5:48-5:07
    assert_eq!(zones[1].max_pace.as_deref(), Some("5:48"));
    assert_eq!(zones[1].min_pace.as_deref(), Some("5:07"));

    // Z4: 94.4-100% = 4:46-4:30 (threshold)
    assert_eq!(zones[3].max_pace.as_deref(), Some("4:46"));
    assert_eq!(zones[3].min_pace.as_deref(), Some("4:30"));

    // Z7: >112.5% = faster than 4:00
    assert_eq!(zones[6].max_pace.as_deref(), Some("4:00"));
    assert_eq!(zones[6].min_pace, None);
}

#[test]
fn test_pace_zones_preserve_order() {
    for threshold in [180, 240, 270, 330, 420] {
        let zones = calculate_pace_zones(threshold);
        assert_eq!(zones.len(), PACE_ZONES.len());
        for (zone, definition) in zones.iter().zip(PACE_ZONES.iter()) {
            assert_eq!(&zone.definition, definition);
        }
    }
}

#[test]
fn test_hr_zones_from_threshold_160() {
    let zones = calculate_hr_zones(160.0, 190.0);
    assert_eq!(zones.len(), 7);

    // Z2: 80-90% = 128-144 bpm
    assert_eq!(zones[1].min_bpm, 128);
    assert_eq!(zones[1].max_bpm, 144);

    // Z4: 99-100% = 158-160 bpm
    assert_eq!(zones[3].min_bpm, 158);
    assert_eq!(zones[3].max_bpm, 160);

    // Z5: 101-103.4% = 162-165 bpm
    assert_eq!(zones[4].min_bpm, 162);
    assert_eq!(zones[4].max_bpm, 165);

    // Z7: 111.6% to max
    assert_eq!(zones[6].max_bpm, 190);
}

#[test]
fn test_hr_zones_preserve_order() {
    let zones = calculate_hr_zones(150.0, 200.0);
    for (zone, definition) in zones.iter().zip(HR_ZONES.iter()) {
        assert_eq!(&zone.definition, definition);
    }
}

#[test]
fn test_hr_max_never_exceeded() {
    for max_hr in [150.0, 170.0, 185.0, 199.5, 220.0] {
        for threshold_hr in [100.0, 140.0, 150.0] {
            let zones = calculate_hr_zones(threshold_hr, max_hr);
            for zone in &zones {
                assert!(
                    zone.max_bpm as f64 <= max_hr,
                    "zone {} max {} exceeds {}",
                    zone.definition.number,
                    zone.max_bpm,
                    max_hr
                );
            }
        }
    }
}

#[test]
fn test_hr_clamp_binding_at_top_zone() {
    let zones = calculate_hr_zones(180.0, 185.0);
    assert_eq!(zones[6].max_bpm, 185);
}

#[test]
fn test_min_bpm_can_pass_max_when_threshold_is_close_to_max() {
    // Lower bounds are not clamped: with threshold 180 and max 185, the
    // sprint zone starts at round(1.116 * 180) = 201 bpm
    let zones = calculate_hr_zones(180.0, 185.0);
    assert_eq!(zones[6].min_bpm, 201);
    assert_eq!(zones[6].max_bpm, 185);

    // With threshold well below max every zone stays ordered
    let zones = calculate_hr_zones(160.0, 190.0);
    assert!(zones.iter().all(|z| z.min_bpm <= z.max_bpm));
}

#[test]
fn test_calculate_end_to_end() {
    let calculation = calculate(&ZoneInput::new("4:30", "160", "190")).unwrap();

    assert_eq!(calculation.thresholds.threshold_pace, "4:30");
    assert_eq!(calculation.pace_zones[3].min_pace.as_deref(), Some("4:30"));
    assert_eq!(calculation.hr_zones[4].min_bpm, 162);
}

#[test]
fn test_calculate_errors() {
    let err = calculate(&ZoneInput::new("", "160", "190")).unwrap_err();
    assert_eq!(err, CalculationError::InvalidPaceFormat(PaceError::Missing));
    assert_eq!(err.to_string(), "Por favor ingrese el Threshold Pace");

    let err = calculate(&ZoneInput::new("4:30", "x", "190")).unwrap_err();
    assert_eq!(err.to_string(), "Por favor ingrese un Threshold HR válido");

    let err = calculate(&ZoneInput::new("4:30", "160", "0")).unwrap_err();
    assert_eq!(err.to_string(), "Por favor ingrese un Max HR válido");

    let err = calculate(&ZoneInput::new("4:30", "195", "190")).unwrap_err();
    assert_eq!(err.to_string(), "El Threshold HR no puede ser mayor que Max HR");

    let err = calculate(&ZoneInput::new("4:75", "160", "190")).unwrap_err();
    assert_eq!(err.to_string(), "Formato de Pace inválido. Use mm:ss");
}
