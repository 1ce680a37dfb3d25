use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::common::ColorScheme;
use super::SubDocument;

/// App-wide paywall presentation settings, shared by every offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    pub app: AppConfig,
    /// locale → (key → localized string)
    #[serde(default)]
    pub localizations: BTreeMap<String, BTreeMap<String, String>>,
    #[serde(default)]
    pub variable_config: VariableConfig,
}

impl SubDocument for UiConfig {
    const NAME: &'static str = "ui_config";
}

impl UiConfig {
    /// Named color from the app palette.
    pub fn color(&self, name: &str) -> Option<&ColorScheme> {
        self.app.colors.get(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub colors: BTreeMap<String, ColorScheme>,
    #[serde(default)]
    pub fonts: BTreeMap<String, FontsConfig>,
}

/// Per-platform font choices for one named font.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontsConfig {
    #[serde(default)]
    pub ios: Option<FontInfo>,
    #[serde(default)]
    pub android: Option<FontInfo>,
    #[serde(default)]
    pub web: Option<FontInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FontInfo {
    Name { value: String },
    GoogleFonts { value: String },
}

/// Renames that keep older paywall variables and functions working.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableConfig {
    #[serde(default)]
    pub variable_compatibility_map: BTreeMap<String, String>,
    #[serde(default)]
    pub function_compatibility_map: BTreeMap<String, String>,
}
