//! Site theme descriptor consumed by the stylesheet build.
//!
//! Pure data: nothing here is read by the helix at runtime. `cargo run`
//! writes the default descriptor to `static/theme.json`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::HelixError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDescriptor {
    /// Globs scanned for class names.
    pub content: Vec<String>,
    pub dark_mode: String,
    pub colors: BTreeMap<String, String>,
    pub font_family: BTreeMap<String, Vec<String>>,
    pub border_radius: BTreeMap<String, String>,
    pub max_width: BTreeMap<String, String>,
    pub plugins: Vec<Plugin>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "lowercase")]
pub enum Plugin {
    Typography {
        #[serde(default)]
        modifiers: Vec<String>,
    },
}

fn entries<V, const N: usize>(pairs: [(&str, V); N]) -> BTreeMap<String, V> {
    pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

fn stack(fonts: &[&str]) -> Vec<String> {
    fonts.iter().map(|f| f.to_string()).collect()
}

impl Default for ThemeDescriptor {
    fn default() -> Self {
        Self {
            content: vec!["./src/**/*.{astro,html,js,jsx,ts,tsx,md,mdx}".to_string()],
            dark_mode: "media".to_string(),
            colors: entries([
                ("bg", "#0B0E14".to_string()),
                ("surface", "#121826".to_string()),
                ("text", "#E6EAF2".to_string()),
                ("muted", "#9AA3B2".to_string()),
                ("muted-subtle", "#6B7280".to_string()),
                ("accent", "#7AA2F7".to_string()),
            ]),
            font_family: entries([
                (
                    "sans",
                    stack(&["Inter", "ui-sans-serif", "system-ui", "sans-serif"]),
                ),
                ("serif", stack(&["\"Source Serif 4\"", "Georgia", "serif"])),
            ]),
            border_radius: entries([("DEFAULT", "0.375rem".to_string())]),
            max_width: entries([("measure", "68ch".to_string())]),
            plugins: vec![Plugin::Typography {
                modifiers: Vec::new(),
            }],
        }
    }
}

impl ThemeDescriptor {
    pub fn from_json(json: &str) -> Result<Self, HelixError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, HelixError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Hex value of a palette entry.
    pub fn color(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(String::as_str)
    }
}
