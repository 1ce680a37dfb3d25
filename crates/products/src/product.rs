use serde::{Deserialize, Serialize};

use offerkit_core::ValueObject;

/// Kind of store product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    Subscription,
    OneTime,
}

/// Store pricing as reported by the store layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Localized, display-ready price (e.g. "$4.99").
    pub formatted: String,
    /// Price in micro-units of the currency (4.99 => 4_990_000).
    pub amount_micros: i64,
    /// ISO 4217 currency code (e.g. "USD").
    pub currency_code: String,
}

/// Experiment/rule metadata a presentation happened under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetingContext {
    pub revision: i32,
    pub rule_id: String,
}

impl ValueObject for TargetingContext {}

/// Which offering (and placement/targeting, when known) a product was
/// presented under. Used for purchase attribution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PresentedOfferingContext {
    pub offering_identifier: String,
    pub placement_identifier: Option<String>,
    pub targeting_context: Option<TargetingContext>,
}

impl PresentedOfferingContext {
    pub fn new(offering_identifier: impl Into<String>) -> Self {
        Self {
            offering_identifier: offering_identifier.into(),
            placement_identifier: None,
            targeting_context: None,
        }
    }

    pub fn with_placement(mut self, placement_identifier: Option<String>) -> Self {
        self.placement_identifier = placement_identifier;
        self
    }

    pub fn with_targeting(mut self, targeting_context: Option<TargetingContext>) -> Self {
        self.targeting_context = targeting_context;
        self
    }
}

impl ValueObject for PresentedOfferingContext {}

/// Product descriptor owned by the store layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreProduct {
    pub id: String,
    pub product_type: ProductType,
    pub title: String,
    pub description: String,
    pub price: Price,
    /// ISO 8601 billing period (e.g. "P1M"); `None` for one-time products.
    pub period: Option<String>,
    /// Base plan this product was derived from, for stores that have them.
    pub base_plan_id: Option<String>,
    #[serde(default)]
    pub presented_offering_context: Option<PresentedOfferingContext>,
}

impl StoreProduct {
    pub fn is_subscription(&self) -> bool {
        self.product_type == ProductType::Subscription
    }

    /// Copy of this product annotated with `context`.
    ///
    /// The original is left untouched: the same descriptor can back packages
    /// in several offerings.
    pub fn copy_with_presented_offering_context(
        &self,
        context: PresentedOfferingContext,
    ) -> StoreProduct {
        StoreProduct {
            presented_offering_context: Some(context),
            ..self.clone()
        }
    }
}
