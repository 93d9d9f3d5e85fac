//! Serializable request forms.
//!
//! Services that accept map requests over the wire (chat tools, job queues,
//! HTTP APIs) need a tagged representation of "which build operation, with
//! which inputs". Each variant maps onto one public operation of
//! [`StaticMapClient`].

use serde::{Deserialize, Serialize};

use crate::client::StaticMapClient;
use crate::error::StaticMapError;
use crate::geo::{Coordinate, Marker};
use crate::options::{MapOptions, MapType, MarkersOptions, PathOptions};

/// One static map request, ready to (de)serialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MapImageRequest {
    /// A region centred on a coordinate
    Centered {
        center: Coordinate,
        #[serde(default)]
        zoom: Option<i32>,
        #[serde(default)]
        map_type: MapType,
        #[serde(default)]
        style: Option<String>,
    },

    /// A set of pins
    Markers {
        markers: Vec<Marker>,
        #[serde(default)]
        center: Option<Coordinate>,
        #[serde(default)]
        use_custom_icons: bool,
        #[serde(default)]
        map_type: MapType,
        #[serde(default)]
        style: Option<String>,
    },

    /// A set of pins, with a zoom to fall back on when the set is empty
    MarkersWithZoom {
        markers: Vec<Marker>,
        zoom: i32,
        #[serde(default)]
        center: Option<Coordinate>,
        #[serde(default)]
        use_custom_icons: bool,
        #[serde(default)]
        map_type: MapType,
        #[serde(default)]
        style: Option<String>,
    },

    /// A connected path
    Path {
        points: Vec<Coordinate>,
        #[serde(default)]
        center: Option<Coordinate>,
        #[serde(default)]
        map_type: MapType,
        #[serde(default)]
        style: Option<String>,
    },

    /// A path plus pins
    PathWithMarkers {
        points: Vec<Coordinate>,
        markers: Vec<Marker>,
        #[serde(default)]
        center: Option<Coordinate>,
        #[serde(default)]
        use_custom_icons: bool,
        #[serde(default)]
        map_type: MapType,
        #[serde(default)]
        style: Option<String>,
    },
}

impl MapImageRequest {
    /// Build the request URL against the given client.
    pub fn build(&self, client: &StaticMapClient) -> Result<String, StaticMapError> {
        match self {
            MapImageRequest::Centered {
                center,
                zoom,
                map_type,
                style,
            } => {
                let options = MapOptions {
                    map_type: *map_type,
                    style: style.clone(),
                    ..Default::default()
                };
                client.centered_url(*center, *zoom, &options)
            }

            MapImageRequest::Markers {
                markers,
                center,
                use_custom_icons,
                map_type,
                style,
            } => {
                let options = MarkersOptions {
                    map_type: *map_type,
                    style: style.clone(),
                    center: *center,
                    use_custom_icons: *use_custom_icons,
                    ..Default::default()
                };
                client.markers_url(markers, &options)
            }

            MapImageRequest::MarkersWithZoom {
                markers,
                zoom,
                center,
                use_custom_icons,
                map_type,
                style,
            } => {
                let options = MarkersOptions {
                    map_type: *map_type,
                    style: style.clone(),
                    center: *center,
                    use_custom_icons: *use_custom_icons,
                    ..Default::default()
                };
                client.markers_with_zoom_url(markers, *zoom, &options)
            }

            MapImageRequest::Path {
                points,
                center,
                map_type,
                style,
            } => {
                let options = PathOptions {
                    map_type: *map_type,
                    style: style.clone(),
                    center: *center,
                    ..Default::default()
                };
                client.path_url(points, &options)
            }

            MapImageRequest::PathWithMarkers {
                points,
                markers,
                center,
                use_custom_icons,
                map_type,
                style,
            } => {
                let options = MarkersOptions {
                    map_type: *map_type,
                    style: style.clone(),
                    center: *center,
                    use_custom_icons: *use_custom_icons,
                    ..Default::default()
                };
                client.path_with_markers_url(points, markers, &options)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_deserialization() {
        let request: MapImageRequest = serde_json::from_str(
            r#"{
                "type": "centered",
                "center": {"latitude": 40.5, "longitude": -73.9},
                "zoom": 12
            }"#,
        )
        .unwrap();

        let client = StaticMapClient::new("test-key");
        let url = request.build(&client).unwrap();
        assert!(url.contains("center=40.5,-73.9"));
        assert!(url.contains("zoom=12"));
        assert!(url.contains("maptype=roadmap"));
    }

    #[test]
    fn test_request_matches_direct_client_call() {
        let markers = vec![
            Marker::new(Coordinate::new(1.0, 1.0)),
            Marker::with_icon(Coordinate::new(2.0, 2.0), "pin-blue"),
        ];
        let request = MapImageRequest::Markers {
            markers: markers.clone(),
            center: None,
            use_custom_icons: true,
            map_type: MapType::Satellite,
            style: None,
        };

        let client = StaticMapClient::new("test-key");
        let direct = client
            .markers_url(
                &markers,
                &MarkersOptions {
                    map_type: MapType::Satellite,
                    use_custom_icons: true,
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(request.build(&client).unwrap(), direct);
    }

    #[test]
    fn test_roundtrip() {
        let request = MapImageRequest::PathWithMarkers {
            points: vec![Coordinate::new(1.0, 1.0), Coordinate::new(2.0, 2.0)],
            markers: vec![Marker::new(Coordinate::new(3.0, 3.0))],
            center: Some(Coordinate::new(2.0, 2.0)),
            use_custom_icons: false,
            map_type: MapType::Terrain,
            style: Some("feature:poi|visibility:off".to_string()),
        };

        let json = serde_json::to_string(&request).unwrap();
        let back: MapImageRequest = serde_json::from_str(&json).unwrap();
        let client = StaticMapClient::new("test-key");
        assert_eq!(request.build(&client).unwrap(), back.build(&client).unwrap());
    }
}
