//! Request-URL construction for a remote static-map rendering service.
//!
//! Given a heterogeneous set of optional inputs (a centre coordinate, a zoom
//! level, path points, marker pins, a render style), this crate decides which
//! combination of query parameters to emit, applies consistent defaults, and
//! serializes multi-valued fields in the service's query dialect — including
//! the repeated-parameter form required when markers carry per-marker custom
//! icons.
//!
//! The crate only derives URLs; fetching and decoding the rendered image is
//! the caller's business.
//!
//! ```no_run
//! use waymark_client::{Coordinate, MapOptions, StaticMapClient};
//!
//! let client = StaticMapClient::new("YOUR_API_KEY");
//! let url = client.centered_url(
//!     Coordinate::new(40.714728, -73.998672),
//!     Some(12),
//!     &MapOptions::default(),
//! )?;
//! # Ok::<(), waymark_client::StaticMapError>(())
//! ```

mod client;
mod config;
mod error;
mod geo;
mod live_view;
mod options;
mod request;
mod shape;

pub use client::StaticMapClient;
pub use config::{MapServiceConfig, load_config};
pub use error::StaticMapError;
pub use geo::{Coordinate, Marker};
pub use live_view::{LiveMapView, LiveViewError};
pub use options::{MapOptions, MapType, MarkersOptions, PathOptions};
pub use request::MapImageRequest;
pub use shape::{RequestShape, RequestSpec};
