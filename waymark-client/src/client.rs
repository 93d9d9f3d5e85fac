//! Static map URL builder implementation.

use crate::config::MapServiceConfig;
use crate::error::StaticMapError;
use crate::geo::{Coordinate, Marker};
use crate::live_view::LiveMapView;
use crate::options::{MapOptions, MarkersOptions, PathOptions};
use crate::shape::{RequestShape, RequestSpec};

/// Default base URL for the static map rendering service
pub(crate) const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";

/// Fixed request path of the rendering endpoint
const STATIC_MAP_PATH: &str = "/maps/api/staticmap";

/// Viewport centre used when a request carries no path, no markers, and no
/// explicit centre. The service always needs a renderable viewport.
const FALLBACK_CENTER: Coordinate = Coordinate::new(39.8283, -98.5795);

/// Zoom applied by the centered entry point when the caller passes none
const DEFAULT_ZOOM: i32 = 4;

/// Static map URL builder.
///
/// Holds the service endpoint and the caller's API credential. The key is
/// embedded in every produced URL and must stay out of log output, so the
/// type deliberately has no `Debug` impl.
#[derive(Clone)]
pub struct StaticMapClient {
    base_url: String,
    api_key: String,
}

impl StaticMapClient {
    /// Create a client against the service's fixed endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Create a client against an alternate host, e.g. a test double.
    pub fn with_base_url(base_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(config: &MapServiceConfig) -> Self {
        Self::with_base_url(&config.base_url, &config.api_key)
    }

    /// URL for a region centred at `center`.
    ///
    /// A `zoom` of `None` falls back to the module default.
    pub fn centered_url(
        &self,
        center: Coordinate,
        zoom: Option<i32>,
        options: &MapOptions,
    ) -> Result<String, StaticMapError> {
        self.assemble(&RequestSpec {
            points: &[],
            markers: &[],
            center: Some(center),
            zoom: Some(zoom.unwrap_or(DEFAULT_ZOOM)),
            width: options.width,
            height: options.height,
            map_type: options.map_type,
            use_custom_icons: false,
            style: options.style.as_deref(),
        })
    }

    /// URL rendering the given markers.
    pub fn markers_url(
        &self,
        markers: &[Marker],
        options: &MarkersOptions,
    ) -> Result<String, StaticMapError> {
        self.assemble(&RequestSpec {
            points: &[],
            markers,
            center: options.center,
            zoom: None,
            width: options.width,
            height: options.height,
            map_type: options.map_type,
            use_custom_icons: options.use_custom_icons,
            style: options.style.as_deref(),
        })
    }

    /// URL rendering the given markers, carrying an explicit zoom for the
    /// case where the marker list turns out to be empty and the request
    /// degenerates to a centred viewport.
    pub fn markers_with_zoom_url(
        &self,
        markers: &[Marker],
        zoom: i32,
        options: &MarkersOptions,
    ) -> Result<String, StaticMapError> {
        self.assemble(&RequestSpec {
            points: &[],
            markers,
            center: options.center,
            zoom: Some(zoom),
            width: options.width,
            height: options.height,
            map_type: options.map_type,
            use_custom_icons: options.use_custom_icons,
            style: options.style.as_deref(),
        })
    }

    /// URL rendering a connected path through `points`.
    ///
    /// Callers are expected to pass at least two points; fewer degrade to a
    /// centred viewport rather than an error.
    pub fn path_url(
        &self,
        points: &[Coordinate],
        options: &PathOptions,
    ) -> Result<String, StaticMapError> {
        self.assemble(&RequestSpec {
            points,
            markers: &[],
            center: options.center,
            zoom: None,
            width: options.width,
            height: options.height,
            map_type: options.map_type,
            use_custom_icons: false,
            style: options.style.as_deref(),
        })
    }

    /// URL rendering both a path and a set of markers.
    pub fn path_with_markers_url(
        &self,
        points: &[Coordinate],
        markers: &[Marker],
        options: &MarkersOptions,
    ) -> Result<String, StaticMapError> {
        self.assemble(&RequestSpec {
            points,
            markers,
            center: options.center,
            zoom: None,
            width: options.width,
            height: options.height,
            map_type: options.map_type,
            use_custom_icons: options.use_custom_icons,
            style: options.style.as_deref(),
        })
    }

    /// URL reproducing what a live map view currently shows.
    ///
    /// The three snapshot reads are issued concurrently and the call fails as
    /// a whole if any of them fails. The view's centre and zoom take
    /// precedence over `options.center`; the zoom is truncated to an integer.
    pub async fn live_view_url<V: LiveMapView>(
        &self,
        view: &V,
        options: &MarkersOptions,
    ) -> Result<String, StaticMapError> {
        let (markers, center, zoom) =
            futures::try_join!(view.visible_markers(), view.center(), view.zoom())
                .map_err(StaticMapError::LiveView)?;

        tracing::debug!(markers = markers.len(), zoom, "captured live view snapshot");

        self.assemble(&RequestSpec {
            points: &[],
            markers: &markers,
            center: Some(center),
            zoom: Some(zoom as i32),
            width: options.width,
            height: options.height,
            map_type: options.map_type,
            use_custom_icons: options.use_custom_icons,
            style: options.style.as_deref(),
        })
    }

    /// Assemble the request URL for one classified spec.
    ///
    /// Exactly one serialization form is used per request: either the
    /// structured parameter set, or the custom-icon form with one repeated
    /// `markers=` parameter per pin.
    fn assemble(&self, spec: &RequestSpec<'_>) -> Result<String, StaticMapError> {
        let shape = spec.shape();
        tracing::debug!(
            ?shape,
            points = spec.points.len(),
            markers = spec.markers.len(),
            "assembling static map request"
        );

        let center = match (spec.center, shape) {
            (None, RequestShape::CenterOnly) => Some(FALLBACK_CENTER),
            (center, _) => center,
        };

        let mut params: Vec<(&'static str, String)> = Vec::new();

        match shape {
            RequestShape::PathOnly => {
                params.push(("path", join_coordinates(spec.points)));
            }
            RequestShape::PathAndMarkers => {
                if spec.use_custom_icons {
                    return Ok(self.custom_icon_url(spec, Some(join_coordinates(spec.points))));
                }
                params.push(("path", join_coordinates(spec.points)));
                params.push(("markers", join_markers(spec.markers)));
            }
            RequestShape::CenterOnly => {
                // Zoom is only defaulted by the centered entry point; any
                // other call path reaching this shape must have supplied one.
                let zoom = spec.zoom.ok_or(StaticMapError::MissingZoom)?;
                params.push(("zoom", zoom.to_string()));
            }
            RequestShape::MarkersOnly => {
                if spec.use_custom_icons {
                    return Ok(self.custom_icon_url(spec, None));
                }
                params.push(("markers", join_markers(spec.markers)));
            }
        }

        params.push(("size", format!("{}x{}", spec.width, spec.height)));
        params.push(("maptype", spec.map_type.as_str().to_string()));
        if let Some(style) = spec.effective_style() {
            params.push(("style", urlencoding::encode(style).into_owned()));
        }
        params.push(("key", urlencoding::encode(&self.api_key).into_owned()));

        // Final pass: centering information is never silently dropped, even
        // in shapes that did not ask for it. The custom-icon form above does
        // not receive this override.
        if let Some(center) = center {
            params.push(("center", center.to_string()));
        }

        Ok(self.render_url(&params))
    }

    /// Serialize the custom-icon form: `size`, optional `style`, optional
    /// `path`, one `markers=` parameter per pin, then `key`, in that order.
    ///
    /// Pins without an icon still get their own repeated parameter here,
    /// unlike the structured form where icon-less pins share one pipe-joined
    /// parameter.
    fn custom_icon_url(&self, spec: &RequestSpec<'_>, path: Option<String>) -> String {
        let mut params: Vec<(&'static str, String)> = Vec::new();

        params.push(("size", format!("{}x{}", spec.width, spec.height)));
        if let Some(style) = spec.effective_style() {
            params.push(("style", urlencoding::encode(style).into_owned()));
        }
        if let Some(path) = path {
            params.push(("path", path));
        }
        for marker in spec.markers {
            let value = match &marker.icon {
                Some(icon) => format!("icon:{}|{}", urlencoding::encode(icon), marker.coordinate),
                None => marker.coordinate.to_string(),
            };
            params.push(("markers", value));
        }
        params.push(("key", urlencoding::encode(&self.api_key).into_owned()));

        self.render_url(&params)
    }

    /// Render an ordered parameter list against the fixed endpoint. Repeated
    /// keys are legal; the custom-icon form relies on them.
    fn render_url(&self, params: &[(&'static str, String)]) -> String {
        let mut url = format!("{}{}", self.base_url, STATIC_MAP_PATH);
        let mut separator = '?';
        for (key, value) in params {
            url.push(separator);
            url.push_str(key);
            url.push('=');
            url.push_str(value);
            separator = '&';
        }
        url
    }
}

fn join_coordinates(points: &[Coordinate]) -> String {
    points
        .iter()
        .map(|point| point.to_string())
        .collect::<Vec<_>>()
        .join("|")
}

fn join_markers(markers: &[Marker]) -> String {
    markers
        .iter()
        .map(|marker| marker.coordinate.to_string())
        .collect::<Vec<_>>()
        .join("|")
}
