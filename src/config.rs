//! Configuration management for the Mysuru Trails application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TrailsError;
use crate::models::LatLng;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the Mysuru Trails application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailsConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Map view configuration
    pub map: MapConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Directory holding the static site
    pub static_dir: String,
}

/// Map view settings: tile source, initial view, fitting behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Tile URL template with `{s}`, `{z}`, `{x}`, `{y}` placeholders
    pub tile_url: String,
    /// Subdomains substituted for `{s}`
    pub tile_subdomains: Vec<String>,
    /// Attribution shown on the map
    pub attribution: String,
    /// Initial map center
    pub center: LatLng,
    /// Initial zoom level
    pub default_zoom: u8,
    /// Zoom used when focusing a single entity
    pub focus_zoom: u8,
    /// Upper bound for zoom chosen by bounds fitting
    pub max_fit_zoom: u8,
    /// Padding kept between highlighted markers and the map edge
    pub fit_padding_px: u32,
    /// Map surface width assumed when fitting bounds
    pub viewport_width_px: u32,
    /// Map surface height assumed when fitting bounds
    pub viewport_height_px: u32,
    /// Whether artisan markers start visible
    pub show_artisans: bool,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,
    /// Log format (pretty or json)
    pub format: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_static_dir() -> String {
    "frontend".to_string()
}

fn default_tile_url() -> String {
    "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string()
}

fn default_tile_subdomains() -> Vec<String> {
    vec!["a".to_string(), "b".to_string(), "c".to_string()]
}

fn default_attribution() -> String {
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
        .to_string()
}

fn default_center() -> LatLng {
    LatLng::new(12.3051, 76.6551)
}

fn default_zoom() -> u8 {
    12
}

fn default_focus_zoom() -> u8 {
    16
}

fn default_max_fit_zoom() -> u8 {
    16
}

fn default_fit_padding() -> u32 {
    50
}

fn default_viewport_width() -> u32 {
    800
}

fn default_viewport_height() -> u32 {
    500
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

/// Highest zoom level offered by common raster tile servers
pub const MAX_TILE_ZOOM: u8 = 19;

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_url: default_tile_url(),
            tile_subdomains: default_tile_subdomains(),
            attribution: default_attribution(),
            center: default_center(),
            default_zoom: default_zoom(),
            focus_zoom: default_focus_zoom(),
            max_fit_zoom: default_max_fit_zoom(),
            fit_padding_px: default_fit_padding(),
            viewport_width_px: default_viewport_width(),
            viewport_height_px: default_viewport_height(),
            show_artisans: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl TrailsConfig {
    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path()
                .filter(|path| path.exists())
                .unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. MYSURU_TRAILS_SERVER__PORT=9000
        builder = builder.add_source(Self::environment());

        Self::build(builder)
    }

    fn environment() -> Environment {
        Environment::with_prefix("MYSURU_TRAILS")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn build(builder: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TrailsConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mysuru-trails").join("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.server.host.is_empty() {
            self.server.host = default_host();
        }
        if self.server.static_dir.is_empty() {
            self.server.static_dir = default_static_dir();
        }
        if self.map.tile_url.is_empty() {
            self.map.tile_url = default_tile_url();
        }
        if self.map.attribution.is_empty() {
            self.map.attribution = default_attribution();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_server()?;
        self.validate_map()?;
        self.validate_logging()?;
        Ok(())
    }

    fn validate_server(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(TrailsError::config("Server port cannot be 0").into());
        }
        Ok(())
    }

    fn validate_map(&self) -> Result<()> {
        let map = &self.map;

        for (name, zoom) in [
            ("default_zoom", map.default_zoom),
            ("focus_zoom", map.focus_zoom),
            ("max_fit_zoom", map.max_fit_zoom),
        ] {
            if zoom > MAX_TILE_ZOOM {
                return Err(TrailsError::config(format!(
                    "Map {name} cannot exceed {MAX_TILE_ZOOM}, got {zoom}"
                ))
                .into());
            }
        }

        if map.default_zoom > map.max_fit_zoom {
            return Err(
                TrailsError::config("Map default_zoom cannot exceed max_fit_zoom").into(),
            );
        }

        let padding = map.fit_padding_px.saturating_mul(2);
        if map.viewport_width_px <= padding || map.viewport_height_px <= padding {
            return Err(TrailsError::config(
                "Map viewport must be larger than twice the fit padding",
            )
            .into());
        }

        if !map.center.is_valid() || map.center.latitude.abs() > crate::map::MAX_LATITUDE {
            return Err(TrailsError::config(format!(
                "Map center {} is outside the Web Mercator range",
                map.center.format_coordinates()
            ))
            .into());
        }

        if !map.tile_url.starts_with("http://") && !map.tile_url.starts_with("https://") {
            return Err(
                TrailsError::config("Map tile URL must be a valid HTTP or HTTPS URL").into(),
            );
        }

        for placeholder in ["{z}", "{x}", "{y}"] {
            if !map.tile_url.contains(placeholder) {
                return Err(TrailsError::config(format!(
                    "Map tile URL is missing the {placeholder} placeholder"
                ))
                .into());
            }
        }

        if map.tile_url.contains("{s}") && map.tile_subdomains.is_empty() {
            return Err(TrailsError::config(
                "Map tile URL uses {s} but no tile_subdomains are configured",
            )
            .into());
        }

        Ok(())
    }

    fn validate_logging(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TrailsError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TrailsError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TrailsConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.map.default_zoom, 12);
        assert_eq!(config.map.center, LatLng::new(12.3051, 76.6551));
        assert_eq!(config.logging.level, "info");
        assert!(config.map.show_artisans);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = TrailsConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_zoom_ranges() {
        let mut config = TrailsConfig::default();
        config.map.focus_zoom = 22;
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("focus_zoom cannot exceed"));

        let mut config = TrailsConfig::default();
        config.map.default_zoom = 17;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_tile_url() {
        let mut config = TrailsConfig::default();
        config.map.tile_url = "https://tiles.example.org/{z}/{x}.png".to_string();
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("{y}"));

        let mut config = TrailsConfig::default();
        config.map.tile_subdomains.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_padding() {
        let mut config = TrailsConfig::default();
        config.map.fit_padding_px = 300;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_padding_overflow() {
        let mut config = TrailsConfig::default();
        config.map.fit_padding_px = 1 << 31;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("twice the fit padding"));

        config.map.fit_padding_px = u32::MAX;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_center_outside_mercator() {
        let mut config = TrailsConfig::default();
        config.map.center = LatLng::new(88.0, 76.6);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("outside the Web Mercator range"));

        config.map.center = LatLng::new(12.3, 190.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_tile_url_scheme() {
        let mut config = TrailsConfig::default();
        config.map.tile_url = "ftp://tiles.example.org/{z}/{x}/{y}.png".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("valid HTTP or HTTPS URL"));

        config.map.tile_url = "http://tiles.example.org/{z}/{x}/{y}.png".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_format() {
        let mut config = TrailsConfig::default();
        config.logging.format = "xml".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid log format 'xml'"));

        config.logging.format = "json".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_override() {
        let vars = [
            ("MYSURU_TRAILS_SERVER__PORT", "9000"),
            ("MYSURU_TRAILS_MAP__SHOW_ARTISANS", "false"),
            ("MYSURU_TRAILS_LOGGING__LEVEL", "debug"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let sample = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/default.toml");
        let builder = Config::builder()
            .add_source(File::from(sample).format(config::FileFormat::Toml))
            .add_source(TrailsConfig::environment().source(Some(vars)));
        let config = TrailsConfig::build(builder).unwrap();

        assert_eq!(config.server.port, 9000);
        assert!(!config.map.show_artisans);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.map.default_zoom, 12);
    }

    #[test]
    fn test_env_override_is_validated() {
        let vars = [("MYSURU_TRAILS_MAP__FIT_PADDING_PX", "2147483648")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let builder =
            Config::builder().add_source(TrailsConfig::environment().source(Some(vars)));
        let err = TrailsConfig::build(builder).unwrap_err();
        assert!(err.to_string().contains("twice the fit padding"));
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = std::env::temp_dir().join(format!("mysuru-trails-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(
            &path,
            "[server]\nport = 9090\n\n[map]\ncenter = [12.3, 76.6]\nshow_artisans = false\n",
        )
        .unwrap();

        let config = TrailsConfig::load_from_path(Some(path)).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.map.center, LatLng::new(12.3, 76.6));
        assert!(!config.map.show_artisans);
        assert_eq!(config.map.focus_zoom, 16);

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_sample_config_matches_defaults() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/default.toml");
        let config = TrailsConfig::load_from_path(Some(path)).unwrap();
        let defaults = TrailsConfig::default();
        assert_eq!(config.server.port, defaults.server.port);
        assert_eq!(config.map.tile_url, defaults.map.tile_url);
        assert_eq!(config.map.attribution, defaults.map.attribution);
        assert_eq!(config.map.center, defaults.map.center);
        assert_eq!(config.map.tile_subdomains, defaults.map.tile_subdomains);
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = TrailsConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("mysuru-trails"));
            assert!(path.to_string_lossy().ends_with("config.toml"));
        }
    }
}
