//! Template-based paywall data (the pre-components schema).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::SubDocument;

/// Paywall attached to an offering using a fixed template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaywallData {
    pub template_name: String,
    pub config: PaywallConfiguration,
    pub asset_base_url: String,
    #[serde(default)]
    pub revision: i32,
    #[serde(rename = "localized_strings")]
    pub localization: BTreeMap<String, LocalizedConfiguration>,
}

impl SubDocument for PaywallData {
    const NAME: &'static str = "paywall";
}

impl PaywallData {
    /// Strings for `locale` (e.g. `es_ES`).
    ///
    /// Exact match first, then any locale sharing the language code. Returns
    /// the locale key that was actually used.
    pub fn localized_configuration(&self, locale: &str) -> Option<(&str, &LocalizedConfiguration)> {
        if let Some((key, config)) = self.localization.get_key_value(locale) {
            return Some((key.as_str(), config));
        }

        let language = language_code(locale);
        self.localization
            .iter()
            .find(|(key, _)| language_code(key) == language)
            .map(|(key, config)| (key.as_str(), config))
    }
}

fn language_code(locale: &str) -> &str {
    locale.split(['_', '-']).next().unwrap_or(locale)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaywallConfiguration {
    /// Package identifiers shown by the template, in display order.
    #[serde(default)]
    pub packages: Vec<String>,
    #[serde(default)]
    pub default_package: Option<String>,
    #[serde(default)]
    pub images: PaywallImages,
    #[serde(default)]
    pub blurred_background_image: bool,
    #[serde(default = "default_true")]
    pub display_restore_purchases: bool,
    #[serde(default)]
    pub tos_url: Option<String>,
    #[serde(default)]
    pub privacy_url: Option<String>,
    pub colors: PaywallColors,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaywallImages {
    #[serde(default)]
    pub header: Option<String>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaywallColors {
    pub light: PaywallColorSet,
    #[serde(default)]
    pub dark: Option<PaywallColorSet>,
}

/// Template color slots; values are hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaywallColorSet {
    pub background: String,
    #[serde(rename = "text_1")]
    pub text1: String,
    #[serde(rename = "text_2", default)]
    pub text2: Option<String>,
    #[serde(rename = "text_3", default)]
    pub text3: Option<String>,
    pub call_to_action_background: String,
    pub call_to_action_foreground: String,
    #[serde(default)]
    pub call_to_action_secondary_background: Option<String>,
    #[serde(rename = "accent_1", default)]
    pub accent1: Option<String>,
    #[serde(rename = "accent_2", default)]
    pub accent2: Option<String>,
    #[serde(rename = "accent_3", default)]
    pub accent3: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedConfiguration {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub call_to_action: String,
    #[serde(default)]
    pub call_to_action_with_intro_offer: Option<String>,
    #[serde(default)]
    pub offer_details: Option<String>,
    #[serde(default)]
    pub offer_details_with_intro_offer: Option<String>,
    #[serde(default)]
    pub offer_name: Option<String>,
    #[serde(default)]
    pub features: Vec<PaywallFeature>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaywallFeature {
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub icon_id: Option<String>,
}
