//! Configuration loading from files and environment variables.

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::StaticMapError;
use crate::options::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MapOptions};

/// Client configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MapServiceConfig {
    /// Service credential sent as the `key` query parameter. Required; never
    /// defaulted.
    pub api_key: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,
}

impl MapServiceConfig {
    /// Render options seeded with the configured image size.
    pub fn render_options(&self) -> MapOptions {
        MapOptions {
            width: self.width,
            height: self.height,
            ..Default::default()
        }
    }
}

/// Load client configuration from an optional `waymark` config file and
/// `WAYMARK`-prefixed environment variables.
pub fn load_config() -> Result<MapServiceConfig, StaticMapError> {
    Config::builder()
        .add_source(File::with_name("waymark").required(false))
        .add_source(
            Environment::with_prefix("WAYMARK")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .map_err(|e| StaticMapError::Config {
            message: format!("Failed to build config: {}", e),
        })?
        .try_deserialize()
        .map_err(|e| StaticMapError::Config {
            message: format!("Failed to deserialize config: {}", e),
        })
}

// ==================== Default Value Functions ====================

fn default_base_url() -> String {
    crate::client::DEFAULT_BASE_URL.to_string()
}

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_config_defaults() {
        let config: MapServiceConfig = Config::builder()
            .add_source(File::from_str("api_key = \"abc\"", FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.api_key, "abc");
        assert_eq!(config.base_url, "https://maps.googleapis.com");
        assert_eq!((config.width, config.height), (600, 400));
    }

    #[test]
    fn test_config_overrides_render_size() {
        let config: MapServiceConfig = Config::builder()
            .add_source(File::from_str(
                "api_key = \"abc\"\nwidth = 800\nheight = 300",
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        let options = config.render_options();
        assert_eq!((options.width, options.height), (800, 300));
    }

    #[test]
    fn test_client_from_config() {
        let config: MapServiceConfig = Config::builder()
            .add_source(File::from_str(
                "api_key = \"abc\"\nbase_url = \"http://localhost:9000\"",
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        let client = crate::client::StaticMapClient::from_config(&config);
        let url = client
            .centered_url(
                crate::geo::Coordinate::new(1.0, 2.0),
                Some(3),
                &config.render_options(),
            )
            .unwrap();
        assert!(url.starts_with("http://localhost:9000/maps/api/staticmap?"));
        assert!(url.contains("key=abc"));
    }

    #[test]
    fn test_missing_api_key_is_rejected() {
        let result = Config::builder()
            .add_source(File::from_str("width = 800", FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize::<MapServiceConfig>();

        assert!(result.is_err());
    }
}
