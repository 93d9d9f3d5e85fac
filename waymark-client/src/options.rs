//! Options types for static map requests.

use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

/// Default render width in pixels
pub(crate) const DEFAULT_WIDTH: u32 = 600;

/// Default render height in pixels
pub(crate) const DEFAULT_HEIGHT: u32 = 400;

/// Visual theme of the rendered tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapType {
    #[default]
    Roadmap,
    Satellite,
    Hybrid,
    Terrain,
}

impl MapType {
    /// Wire name of the style, as the service's `maptype` parameter expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            MapType::Roadmap => "roadmap",
            MapType::Satellite => "satellite",
            MapType::Hybrid => "hybrid",
            MapType::Terrain => "terrain",
        }
    }
}

/// Rendering options accepted by every request
#[derive(Debug, Clone)]
pub struct MapOptions {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Visual theme (roadmap, satellite, hybrid, terrain)
    pub map_type: MapType,
    /// Opaque style directive in the service's styling mini-language,
    /// passed through verbatim
    pub style: Option<String>,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            map_type: MapType::default(),
            style: None,
        }
    }
}

/// Options for marker requests
#[derive(Debug, Clone)]
pub struct MarkersOptions {
    pub width: u32,
    pub height: u32,
    pub map_type: MapType,
    pub style: Option<String>,
    /// Explicit viewport centre. Leave unset to let the service frame the
    /// markers itself.
    pub center: Option<Coordinate>,
    /// Emit one repeated `markers=` parameter per pin so each can carry its
    /// own icon reference.
    pub use_custom_icons: bool,
}

impl Default for MarkersOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            map_type: MapType::default(),
            style: None,
            center: None,
            use_custom_icons: false,
        }
    }
}

/// Options for path requests
#[derive(Debug, Clone)]
pub struct PathOptions {
    pub width: u32,
    pub height: u32,
    pub map_type: MapType,
    pub style: Option<String>,
    /// Explicit viewport centre. Leave unset to let the service frame the
    /// path itself.
    pub center: Option<Coordinate>,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            map_type: MapType::default(),
            style: None,
            center: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_type_names_are_total() {
        assert_eq!(MapType::Roadmap.as_str(), "roadmap");
        assert_eq!(MapType::Satellite.as_str(), "satellite");
        assert_eq!(MapType::Hybrid.as_str(), "hybrid");
        assert_eq!(MapType::Terrain.as_str(), "terrain");
    }

    #[test]
    fn test_default_render_size() {
        let options = MapOptions::default();
        assert_eq!((options.width, options.height), (600, 400));
        assert_eq!(options.map_type, MapType::Roadmap);
        assert_eq!(options.style, None);
    }
}
