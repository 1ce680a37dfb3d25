//! Building blocks shared by the ui config and the components schema.

use serde::{Deserialize, Serialize};

/// A color value as the paywall editor stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ColorInfo {
    /// `#RRGGBB` or `#RRGGBBAA`.
    Hex { value: String },
    /// Name of a color defined in the ui config.
    Alias { value: String },
    LinearGradient {
        degrees: f32,
        points: Vec<ColorStop>,
    },
    RadialGradient { points: Vec<ColorStop> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub color: String,
    pub percent: f32,
}

/// Light color plus an optional dark-mode override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub light: ColorInfo,
    #[serde(default)]
    pub dark: Option<ColorInfo>,
}

impl ColorScheme {
    /// Color to use for the given appearance. Dark falls back to light.
    pub fn resolve(&self, dark_mode: bool) -> &ColorInfo {
        match (&self.dark, dark_mode) {
            (Some(dark), true) => dark,
            _ => &self.light,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrls {
    pub original: String,
    #[serde(default)]
    pub webp: Option<String>,
    #[serde(default)]
    pub webp_low_res: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeImageUrls {
    pub light: ImageUrls,
    #[serde(default)]
    pub dark: Option<ImageUrls>,
}
