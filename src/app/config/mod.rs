// SPDX-License-Identifier: MPL-2.0
//! This module loads the application's configuration from a `settings.toml`
//! file. The file is only read; nothing is written back.
//!
//! # Configuration Sections
//!
//! - `[server]` - GraphQL endpoint, bearer token and request timeout
//! - `[gallery]` - Page size, scroll threshold and thumbnail cache size
//! - `[general]` - Theme mode
//! - `[logging]` - Log filter (overridden by `RUST_LOG`)
//!
//! Every key is optional; missing keys take their default value and
//! out-of-range values are clamped by the accessors.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. `--config-dir` CLI argument
//! 3. `PEOPLE_LENS_CONFIG_DIR` environment variable
//! 4. Platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use people_lens::app::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! println!("page size: {}", config.gallery.page_size().value());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::people::PageSize;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Photo server connection.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Full URL of the GraphQL endpoint.
    pub endpoint: String,

    /// Bearer token sent with every request.
    pub token: Option<String>,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ServerConfig {
    /// Request timeout, clamped to the supported range.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS))
    }
}

/// People gallery behaviour.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct GalleryConfig {
    /// Number of face groups requested per page.
    pub page_size: u32,

    /// Distance to the end of the grid (pixels) that triggers the next page.
    pub load_threshold_px: f32,

    /// Number of decoded face previews kept in memory.
    pub thumbnail_cache_size: usize,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            load_threshold_px: DEFAULT_LOAD_THRESHOLD_PX,
            thumbnail_cache_size: DEFAULT_THUMBNAIL_CACHE_SIZE,
        }
    }
}

impl GalleryConfig {
    #[must_use]
    pub fn page_size(&self) -> PageSize {
        PageSize::new(self.page_size)
    }

    #[must_use]
    pub fn load_threshold(&self) -> f32 {
        if self.load_threshold_px.is_finite() {
            self.load_threshold_px.clamp(0.0, MAX_LOAD_THRESHOLD_PX)
        } else {
            DEFAULT_LOAD_THRESHOLD_PX
        }
    }

    #[must_use]
    pub fn thumbnail_cache_size(&self) -> usize {
        self.thumbnail_cache_size
            .clamp(MIN_THUMBNAIL_CACHE_SIZE, MAX_THUMBNAIL_CACHE_SIZE)
    }
}

/// General application settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Logging settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `people_lens=debug`.
    pub filter: Option<String>,
}

impl LoggingConfig {
    /// Filter to use when `RUST_LOG` is not set.
    #[must_use]
    pub fn filter_or_default(&self) -> &str {
        self.filter
            .as_deref()
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or(DEFAULT_LOG_FILTER)
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub gallery: GalleryConfig,
    pub general: GeneralConfig,
    pub logging: LoggingConfig,
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {other}"))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(format!(
                "Could not read {}, using default settings ({err})",
                path.display()
            )),
        ),
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.server.endpoint, DEFAULT_ENDPOINT);
        assert!(config.server.token.is_none());
        assert_eq!(config.gallery.page_size().value(), 50);
        assert_eq!(config.gallery.load_threshold(), DEFAULT_LOAD_THRESHOLD_PX);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.logging.filter_or_default(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn full_file_loads_every_section() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("settings.toml");

        let config = Config {
            server: ServerConfig {
                endpoint: "https://photos.example/api/graphql".into(),
                token: Some("secret".into()),
                timeout_secs: 10,
            },
            gallery: GalleryConfig {
                page_size: 80,
                load_threshold_px: 250.0,
                thumbnail_cache_size: 128,
            },
            general: GeneralConfig {
                theme_mode: ThemeMode::Dark,
            },
            logging: LoggingConfig {
                filter: Some("people_lens=debug".into()),
            },
        };

        fs::write(
            &path,
            r#"[server]
endpoint = "https://photos.example/api/graphql"
token = "secret"
timeout_secs = 10

[gallery]
page_size = 80
load_threshold_px = 250.0
thumbnail_cache_size = 128

[general]
theme_mode = "Dark"

[logging]
filter = "people_lens=debug"
"#,
        )
        .expect("write file");

        let loaded = load_from_path(&path).expect("load should succeed");
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("settings.toml");
        fs::write(
            &path,
            "[server]\nendpoint = \"https://photos.example/api/graphql\"\n\n[general]\ntheme_mode = \"Light\"\n",
        )
        .expect("write file");

        let loaded = load_from_path(&path).expect("load should succeed");
        assert_eq!(loaded.server.endpoint, "https://photos.example/api/graphql");
        assert_eq!(loaded.server.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(loaded.gallery, GalleryConfig::default());
        assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config {
            server: ServerConfig {
                timeout_secs: 0,
                ..ServerConfig::default()
            },
            gallery: GalleryConfig {
                page_size: 10_000,
                load_threshold_px: f32::NAN,
                thumbnail_cache_size: 1,
            },
            ..Config::default()
        };

        assert_eq!(config.server.timeout(), Duration::from_secs(MIN_TIMEOUT_SECS));
        assert_eq!(config.gallery.page_size().value(), MAX_PAGE_SIZE);
        assert_eq!(config.gallery.load_threshold(), DEFAULT_LOAD_THRESHOLD_PX);
        assert_eq!(
            config.gallery.thumbnail_cache_size(),
            MIN_THUMBNAIL_CACHE_SIZE
        );
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result: std::result::Result<Config, _> =
            toml::from_str("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert!(warning.expect("warning").contains("settings.toml"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn blank_log_filter_falls_back_to_default() {
        let logging = LoggingConfig {
            filter: Some("  ".into()),
        };
        assert_eq!(logging.filter_or_default(), DEFAULT_LOG_FILTER);
    }
}
