//! Settings-aware entry point over the free functions.

use chrono::NaiveDateTime;

use crate::config::HelperSettings;
use crate::error::Result;
use crate::http::{self, Method};
use crate::{datetime, decimal, random, text};

/// Applies a [`HelperSettings`] to the helpers that take tunable defaults.
#[derive(Debug, Clone, Default)]
pub struct Helper {
    settings: HelperSettings,
}

impl Helper {
    pub fn new(settings: HelperSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &HelperSettings {
        &self.settings
    }

    /// Formats `number` at the configured decimal scale.
    pub fn format_price(&self, number: &str, remove_excess_zero: bool) -> Result<String> {
        decimal::format(number, remove_excess_zero, self.settings.decimal_scale)
    }

    /// Random alphanumeric string of the configured length.
    pub fn random_string(&self) -> String {
        random::random_string(self.settings.random_length)
    }

    /// Masks `s` with the configured mask settings.
    pub fn mask(&self, s: &str) -> String {
        text::hide_with(s, &self.settings.mask)
    }

    /// Friendly date with the configured number of components.
    pub fn friendly_date(
        &self,
        target: NaiveDateTime,
        now: NaiveDateTime,
        future_only: bool,
    ) -> String {
        datetime::friendly(target, now, self.settings.friendly_date_size, future_only)
    }

    /// HTTP request with the configured timeout and user agent.
    pub fn request(
        &self,
        url: &str,
        params: &[(&str, &str)],
        method: Method,
        headers: &[(&str, &str)],
    ) -> Result<String> {
        http::request(url, params, method, headers, &self.settings.request)
    }
}
