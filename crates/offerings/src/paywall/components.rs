//! Component-tree paywall schema.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::SubDocument;
use super::common::{ColorScheme, ThemeImageUrls};

/// Paywall built from a tree of components.
///
/// Only usable together with a [`UiConfig`](super::UiConfig): components
/// refer to colors and fonts defined there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaywallComponentsData {
    pub template_name: String,
    pub asset_base_url: String,
    pub components_config: ComponentsConfig,
    /// locale → (localization id → value)
    pub components_localizations: BTreeMap<String, BTreeMap<String, LocalizationData>>,
    pub default_locale: String,
    #[serde(default)]
    pub revision: i32,
}

impl SubDocument for PaywallComponentsData {
    const NAME: &'static str = "paywall_components";
}

impl PaywallComponentsData {
    /// Localizations for `locale`, or the default locale's when missing.
    pub fn localizations_for(&self, locale: &str) -> Option<&BTreeMap<String, LocalizationData>> {
        self.components_localizations
            .get(locale)
            .or_else(|| self.components_localizations.get(&self.default_locale))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentsConfig {
    pub base: PaywallComponentsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaywallComponentsConfig {
    pub stack: StackComponent,
    #[serde(default)]
    pub background: Option<Background>,
    #[serde(default)]
    pub sticky_footer: Option<StickyFooterComponent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizationData {
    Text(String),
    Image(ThemeImageUrls),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Background {
    Color(ColorScheme),
    Image(ThemeImageUrls),
}

/// One node of the component tree. Unknown `type` tags fail the decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaywallComponent {
    Stack(StackComponent),
    Text(TextComponent),
    Image(ImageComponent),
    Button(ButtonComponent),
    Package(PackageComponent),
    PurchaseButton(PurchaseButtonComponent),
    Spacer,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StackDimension {
    #[default]
    Vertical,
    Horizontal,
    Zlayer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackComponent {
    #[serde(default)]
    pub components: Vec<PaywallComponent>,
    #[serde(default)]
    pub dimension: StackDimension,
    #[serde(default)]
    pub spacing: Option<f32>,
    #[serde(default)]
    pub background_color: Option<ColorScheme>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextComponent {
    /// Localization id resolved through `components_localizations`.
    pub text_lid: String,
    #[serde(default)]
    pub color: Option<ColorScheme>,
    #[serde(default)]
    pub font_name: Option<String>,
    #[serde(default)]
    pub font_size: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageComponent {
    pub source: ThemeImageUrls,
    #[serde(default)]
    pub override_source_lid: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ButtonAction {
    RestorePurchases,
    NavigateBack,
    NavigateTo { destination: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonComponent {
    pub action: ButtonAction,
    pub stack: StackComponent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageComponent {
    pub package_id: String,
    #[serde(default)]
    pub is_selected_by_default: bool,
    pub stack: StackComponent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseButtonComponent {
    pub stack: StackComponent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickyFooterComponent {
    pub stack: StackComponent,
}

impl StackComponent {
    /// Package identifiers referenced anywhere below this stack, in tree order.
    pub fn package_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        collect_package_ids(&self.components, &mut ids);
        ids
    }
}

fn collect_package_ids<'a>(components: &'a [PaywallComponent], ids: &mut Vec<&'a str>) {
    for component in components {
        match component {
            PaywallComponent::Stack(stack) => collect_package_ids(&stack.components, ids),
            PaywallComponent::Button(button) => collect_package_ids(&button.stack.components, ids),
            PaywallComponent::PurchaseButton(button) => {
                collect_package_ids(&button.stack.components, ids)
            }
            PaywallComponent::Package(package) => {
                ids.push(package.package_id.as_str());
                collect_package_ids(&package.stack.components, ids);
            }
            PaywallComponent::Text(_) | PaywallComponent::Image(_) | PaywallComponent::Spacer => {}
        }
    }
}
