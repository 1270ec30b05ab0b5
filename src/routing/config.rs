//! Router configuration.

use serde::Deserialize;

use crate::http::DEFAULT_HOST;

/// Router configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// The domain given to actions that don't name one.
    pub default_domain: String,
    /// Whether `/{name?}` segments are removed from uris at registration.
    pub strip_optional_segments: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            default_domain: DEFAULT_HOST.to_string(),
            strip_optional_segments: true,
        }
    }
}
