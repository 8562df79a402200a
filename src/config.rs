//! Default parameters for the helpers.
//!
//! Settings can be loaded from a JSON file so applications can tune masking,
//! decimal scale and request behavior without code changes. Missing fields
//! fall back to their defaults.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How [`crate::text::hide_with`] masks strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskSettings {
    /// Leading characters left visible.
    pub start_len: usize,
    /// Trailing characters left visible.
    pub end_len: usize,
    /// Replacement inserted between them.
    pub mask: String,
}

impl Default for MaskSettings {
    fn default() -> Self {
        Self {
            start_len: 3,
            end_len: 4,
            mask: "**".to_string(),
        }
    }
}

/// Options applied to every [`crate::http::request`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestOptions {
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// Value of the `User-Agent` header; `None` keeps the client default.
    pub user_agent: Option<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: None,
        }
    }
}

impl RequestOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Top-level helper settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelperSettings {
    /// Fractional digits for decimal formatting.
    pub decimal_scale: u32,
    /// Length of generated random strings.
    pub random_length: usize,
    /// Components shown by friendly dates.
    pub friendly_date_size: usize,
    pub mask: MaskSettings,
    pub request: RequestOptions,
}

impl Default for HelperSettings {
    fn default() -> Self {
        Self {
            decimal_scale: 2,
            random_length: 16,
            friendly_date_size: 1,
            mask: MaskSettings::default(),
            request: RequestOptions::default(),
        }
    }
}

impl HelperSettings {
    /// Creates settings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses settings from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes settings to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads settings from a JSON file, falling back to defaults when the
    /// file is missing or invalid.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded helper settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Failed to parse settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
