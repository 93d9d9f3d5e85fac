//! Error types for static map URL construction.

#[derive(Debug, thiserror::Error)]
pub enum StaticMapError {
    #[error("Centered request is missing a zoom level")]
    MissingZoom,

    #[error("Live view read failed")]
    LiveView(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Configuration error: {message}")]
    Config { message: String },
}
