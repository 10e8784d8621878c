//! Unit tests for pace parsing and formatting.

use rustzones::zones::{pace_to_seconds, seconds_to_pace, PaceError};

#[test]
fn test_pace_round_trip() {
    for minutes in 0..15u32 {
        for seconds in [0u32, 1, 9, 10, 30, 59] {
            let pace = format!("{}:{:02}", minutes, seconds);
            let total = pace_to_seconds(&pace).unwrap();
            assert_eq!(total, minutes * 60 + seconds);
            assert_eq!(seconds_to_pace(total as f64), pace);
        }
    }
}

#[test]
fn test_pace_rejects_malformed() {
    for input in ["5", "5:60", "5:-1", "abc:12", "4:3x", "4::30", "4:30:00", "4,30"] {
        assert_eq!(
            pace_to_seconds(input),
            Err(PaceError::InvalidFormat(input.to_string())),
            "{input:?}"
        );
    }
}

#[test]
fn test_padded_minutes_accepted() {
    assert_eq!(pace_to_seconds("05:07"), Ok(307));
    assert_eq!(seconds_to_pace(307.0), "5:07");
}

#[test]
fn test_seconds_to_pace_floors_fractions() {
    // 270 / 0.944
    assert_eq!(seconds_to_pace(286.016_949), "4:46");
    assert_eq!(seconds_to_pace(299.999), "4:59");
    assert_eq!(seconds_to_pace(3600.0), "60:00");
}
