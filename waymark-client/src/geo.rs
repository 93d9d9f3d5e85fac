//! Geographic value types used by static map requests.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate pair.
///
/// Serializes on the wire as `"{latitude},{longitude}"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// A pin placed on the rendered map.
///
/// A marker with an icon reference is eligible for custom-icon rendering,
/// where it gets its own repeated `markers=` query parameter instead of being
/// pipe-joined with the other pins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub coordinate: Coordinate,

    /// URL or asset reference for a custom pin image. `None` renders the
    /// service's default pin.
    #[serde(default)]
    pub icon: Option<String>,
}

impl Marker {
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            icon: None,
        }
    }

    pub fn with_icon(coordinate: Coordinate, icon: impl Into<String>) -> Self {
        Self {
            coordinate,
            icon: Some(icon.into()),
        }
    }
}
