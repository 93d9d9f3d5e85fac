//! Request-shape classification.
//!
//! Every public build operation funnels its inputs into a [`RequestSpec`],
//! which is classified once into a [`RequestShape`] and then dispatched by
//! exhaustive match. Keeping the classification separate from serialization
//! makes the mode priority order auditable on its own.

use crate::geo::{Coordinate, Marker};
use crate::options::MapType;

/// Raw inputs of a single build call, after entry-point defaults have been
/// applied. Constructed fresh per call; nothing is persisted.
#[derive(Debug, Clone)]
pub struct RequestSpec<'a> {
    /// Path vertices. Only a sequence of two or more renders as a path.
    pub points: &'a [Coordinate],
    pub markers: &'a [Marker],
    pub center: Option<Coordinate>,
    pub zoom: Option<i32>,
    pub width: u32,
    pub height: u32,
    pub map_type: MapType,
    pub use_custom_icons: bool,
    /// Opaque style directive; empty is treated the same as unset.
    pub style: Option<&'a str>,
}

/// The emission mode a request resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestShape {
    /// Two or more path points, no markers.
    PathOnly,
    /// Two or more path points plus at least one marker.
    PathAndMarkers,
    /// No markers and no usable path; renders a centred viewport.
    CenterOnly,
    /// At least one marker, no usable path.
    MarkersOnly,
}

impl RequestSpec<'_> {
    /// Classify this request. A path needs at least two points to count;
    /// degenerate geometry falls through to the next shape rather than
    /// failing, so existing callers keep their request form.
    pub fn shape(&self) -> RequestShape {
        let has_path = self.points.len() >= 2;
        match (has_path, self.markers.is_empty()) {
            (true, true) => RequestShape::PathOnly,
            (true, false) => RequestShape::PathAndMarkers,
            (false, true) => RequestShape::CenterOnly,
            (false, false) => RequestShape::MarkersOnly,
        }
    }

    /// Style directive, with the empty string normalized away.
    pub(crate) fn effective_style(&self) -> Option<&str> {
        self.style.filter(|s| !s.is_empty())
    }
}
