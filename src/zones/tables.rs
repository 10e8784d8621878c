//! Static pace and heart rate zone definitions.
//!
//! Both disciplines use a 7-zone model anchored at threshold (100%). Zone 1
//! has no lower bound (0%) and zone 7 has no upper bound.

use serde::Serialize;

/// RGB color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to an RGB triple.
    pub fn to_rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert to a 0xRRGGBB integer (spreadsheet cell colors).
    pub fn to_hex(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

/// A static zone band relative to threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoneDefinition {
    /// Zone number (1-7), ascending by intensity
    pub number: u8,
    /// Zone name
    pub name: &'static str,
    /// Localized display label
    pub description: &'static str,
    /// Inclusive lower bound, percent of threshold (0 for zone 1)
    pub min_percent: f64,
    /// Inclusive upper bound, percent of threshold (None = no upper limit)
    pub max_percent: Option<f64>,
}

impl ZoneDefinition {
    const fn new(
        number: u8,
        name: &'static str,
        description: &'static str,
        min_percent: f64,
        max_percent: Option<f64>,
    ) -> Self {
        Self {
            number,
            name,
            description,
            min_percent,
            max_percent,
        }
    }

    /// Zone label as shown in reports ("Z1".."Z7").
    pub fn label(&self) -> String {
        format!("Z{}", self.number)
    }

    /// Whether the zone has no lower bound (the slowest zone).
    pub fn is_open_below(&self) -> bool {
        self.min_percent == 0.0
    }

    /// Whether the zone has no upper bound (the fastest zone).
    pub fn is_open_above(&self) -> bool {
        self.max_percent.is_none()
    }

    /// Display color for this zone.
    pub fn color(&self) -> Color {
        zone_color(self.number)
    }
}

/// Number of zones per discipline.
pub const ZONE_COUNT: usize = 7;

/// Pace zones, percent of threshold pace speed.
pub const PACE_ZONES: [ZoneDefinition; ZONE_COUNT] = [
    ZoneDefinition::new(1, "Recovery", "Recuperación", 0.0, Some(77.5)),
    ZoneDefinition::new(2, "Aerobic", "Aeróbico", 77.5, Some(87.7)),
    ZoneDefinition::new(3, "Tempo", "Tempo", 87.8, Some(94.3)),
    ZoneDefinition::new(4, "Umbral", "Umbral", 94.4, Some(100.0)),
    ZoneDefinition::new(5, "Vo2 Max", "Vo2 Máximo", 100.1, Some(103.4)),
    ZoneDefinition::new(6, "Aerobic Capacity", "Capacidad Aeróbica", 103.5, Some(111.5)),
    ZoneDefinition::new(7, "Sprint", "Sprint", 112.5, None),
];

/// Heart rate zones, percent of threshold heart rate.
pub const HR_ZONES: [ZoneDefinition; ZONE_COUNT] = [
    ZoneDefinition::new(1, "Recovery", "Recuperación", 0.0, Some(79.0)),
    ZoneDefinition::new(2, "Aerobic", "Aeróbico", 80.0, Some(90.0)),
    ZoneDefinition::new(3, "Tempo", "Tempo", 91.0, Some(98.0)),
    ZoneDefinition::new(4, "Umbral", "Umbral", 99.0, Some(100.0)),
    ZoneDefinition::new(5, "Vo2 Max", "Vo2 Máximo", 101.0, Some(103.4)),
    ZoneDefinition::new(6, "Aerobic Capacity", "Capacidad Aeróbica", 103.5, Some(111.5)),
    ZoneDefinition::new(7, "Sprint", "Sprint", 111.6, None),
];

/// Zone colors, Z1 (easy) to Z7 (sprint).
pub const ZONE_COLORS: [Color; ZONE_COUNT] = [
    Color::new(128, 128, 128), // Z1: Gray (Recovery)
    Color::new(0, 128, 255),   // Z2: Blue (Aerobic)
    Color::new(0, 200, 100),   // Z3: Green (Tempo)
    Color::new(255, 200, 0),   // Z4: Yellow (Threshold)
    Color::new(255, 128, 0),   // Z5: Orange (VO2max)
    Color::new(255, 50, 50),   // Z6: Red (Aerobic Capacity)
    Color::new(180, 0, 180),   // Z7: Purple (Sprint)
];

/// Color for a zone number (1-7). Out of range numbers map to gray.
pub fn zone_color(number: u8) -> Color {
    match number {
        1..=7 => ZONE_COLORS[(number - 1) as usize],
        _ => ZONE_COLORS[0],
    }
}
