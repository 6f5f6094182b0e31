//! Client configuration.
//!
//! Settings live in `~/.config/ics2tbricks/config.toml` by default. A missing
//! default file is not an error; every field has a built-in default.
//!
//! ```toml
//! [source]
//! url = "https://www.hkex.com.hk/News/HKEX-Calendar/Subscribe-Calendar?sc_lang=en"
//! country_code = "HK"
//! marker = "Hong Kong Market is closed"
//!
//! [http]
//! timeout = 30
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use ics2tbricks_core::{CLOSED_MARKET_MARKER, DEFAULT_COUNTRY_CODE, TransformOptions};
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// HKEX calendar subscription feed.
pub const DEFAULT_CALENDAR_URL: &str =
    "https://www.hkex.com.hk/News/HKEX-Calendar/Subscribe-Calendar?sc_lang=en";

/// Configuration for the ics2tbricks client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Calendar source settings.
    pub source: SourceSettings,

    /// HTTP settings.
    pub http: HttpSettings,
}

/// Where the calendar comes from and how it is turned into a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    /// ICS feed URL.
    pub url: String,

    /// Resource name.
    pub country_code: String,

    /// Event description that marks a market holiday.
    pub marker: String,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_CALENDAR_URL.to_string(),
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            marker: CLOSED_MARKET_MARKER.to_string(),
        }
    }
}

impl SourceSettings {
    /// Transform options for these settings.
    pub fn transform_options(&self) -> TransformOptions {
        TransformOptions::new(self.country_code.as_str()).with_marker(self.marker.as_str())
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    /// Request timeout in seconds.
    pub timeout: u64,

    /// User agent string.
    pub user_agent: String,

    /// Honour `HTTP_PROXY` / `HTTPS_PROXY` from the environment.
    pub use_system_proxy: bool,
}

impl HttpSettings {
    /// Default timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Returns the timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout: Self::DEFAULT_TIMEOUT_SECS,
            user_agent: format!("ics2tbricks/{}", env!("CARGO_PKG_VERSION")),
            use_system_proxy: true,
        }
    }
}

impl ClientConfig {
    /// Loads configuration from the default path, or defaults if it does not exist.
    pub fn load() -> ClientResult<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> ClientResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ClientError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> ClientResult<Self> {
        toml::from_str(content).map_err(|e| ClientError::Config(format!("failed to parse config: {}", e)))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ics2tbricks")
            .join("config.toml")
    }
}
