//! Zoom and styling lookups for cluster markers.
//!
//! Note the tiers differ: [`cluster_zoom`] tops out above 25 members while
//! [`ClusterColor`] tops out above 10.

use serde::{Deserialize, Serialize};

/// Zoom level to animate to when a marker with `count` members is activated.
///
/// | count  | zoom |
/// |--------|------|
/// | 1      | 15   |
/// | 2–5    | 14   |
/// | 6–10   | 13   |
/// | 11–25  | 12   |
/// | > 25   | 11   |
pub fn cluster_zoom(count: usize) -> u8 {
    match count {
        0..=1 => 15,
        2..=5 => 14,
        6..=10 => 13,
        11..=25 => 12,
        _ => 11,
    }
}

/// Recommended clustering radius in kilometers for a map zoom level.
///
/// Fractional zoom levels are accepted.
pub fn clustering_distance(zoom: f64) -> f64 {
    if zoom >= 15.0 {
        0.1
    } else if zoom >= 13.0 {
        0.25
    } else if zoom >= 11.0 {
        0.5
    } else if zoom >= 9.0 {
        1.0
    } else {
        2.0
    }
}

/// Marker color tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusterColor {
    /// A single event.
    Single,
    /// 2–5 events.
    Small,
    /// 6–10 events.
    Medium,
    /// More than 10 events.
    Large,
}

impl ClusterColor {
    /// Tier for a marker with `count` members.
    pub fn for_count(count: usize) -> Self {
        match count {
            0..=1 => Self::Single,
            2..=5 => Self::Small,
            6..=10 => Self::Medium,
            _ => Self::Large,
        }
    }

    /// CSS hex color for the tier.
    pub fn hex(self) -> &'static str {
        match self {
            Self::Single => "#3b82f6",
            Self::Small => "#10b981",
            Self::Medium => "#f59e0b",
            Self::Large => "#ef4444",
        }
    }
}

/// Hex color for a marker with `count` members.
pub fn cluster_color(count: usize) -> &'static str {
    ClusterColor::for_count(count).hex()
}
