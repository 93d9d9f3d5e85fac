//! Read access to an interactive map view.
//!
//! The live view is an external collaborator (typically the on-screen map the
//! user is looking at). The builder only ever reads a snapshot of it: the
//! currently visible markers, the viewport centre, and the zoom level.

use crate::geo::{Coordinate, Marker};

/// Error type produced by live-view accessors.
pub type LiveViewError = Box<dyn std::error::Error + Send + Sync>;

/// The three snapshot reads a static map request can be derived from.
///
/// The accessors are independent; callers may issue them concurrently. None
/// of them is expected to mutate the view, so the reads do not need to be
/// atomic with respect to each other.
#[allow(async_fn_in_trait)]
pub trait LiveMapView {
    /// Markers currently visible in the viewport.
    async fn visible_markers(&self) -> Result<Vec<Marker>, LiveViewError>;

    /// Current viewport centre.
    async fn center(&self) -> Result<Coordinate, LiveViewError>;

    /// Current zoom level. Interactive views report fractional zooms; the
    /// builder truncates to an integer before serializing.
    async fn zoom(&self) -> Result<f64, LiveViewError>;
}
