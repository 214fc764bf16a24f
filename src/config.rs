//! Runtime settings for mounting the helix on a page.

use serde::{Deserialize, Serialize};

use crate::error::HelixError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelixConfig {
    /// Id of the `<canvas>` element to draw into.
    pub canvas_id: String,
    /// Media query that disables the effect entirely when it matches at load.
    pub narrow_screen_query: String,
    pub reduced_motion_query: String,
    /// `log` level name for the browser console.
    pub log_level: String,
}

impl Default for HelixConfig {
    fn default() -> Self {
        Self {
            canvas_id: "helix-canvas".to_string(),
            narrow_screen_query: "(max-width: 768px)".to_string(),
            reduced_motion_query: "(prefers-reduced-motion: reduce)".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl HelixConfig {
    /// Parse a JSON object; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, HelixError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Unknown level names fall back to `Info`.
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
