//! Package → product matching, one strategy per store backend.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use offerkit_core::ParseError;

use crate::catalog::ProductCatalog;
use crate::product::StoreProduct;

/// Package-node field naming the store product.
pub const PRODUCT_IDENTIFIER_FIELD: &str = "platform_product_identifier";
/// Package-node field naming the base plan (Play-store-like backends).
pub const PLAN_IDENTIFIER_FIELD: &str = "platform_product_plan_identifier";

/// Resolves the single product a package node refers to.
///
/// Implementations read whatever store-specific fields they need from the raw
/// package node. Returning `None` drops the package; it is not an error.
pub trait ProductMatcher: Send + Sync + core::fmt::Debug {
    fn find_matching_product<'a>(
        &self,
        catalog: &'a ProductCatalog,
        package: &Value,
    ) -> Option<&'a StoreProduct>;
}

fn string_field<'v>(package: &'v Value, field: &str) -> Option<&'v str> {
    package
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Matching for stores where one product id fans out into base plans.
///
/// - With a plan id: the product under that id whose `base_plan_id` matches.
/// - Without one: the first one-time (non-subscription) product under that id.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasePlanMatcher;

impl ProductMatcher for BasePlanMatcher {
    fn find_matching_product<'a>(
        &self,
        catalog: &'a ProductCatalog,
        package: &Value,
    ) -> Option<&'a StoreProduct> {
        let product_id = string_field(package, PRODUCT_IDENTIFIER_FIELD)?;
        let candidates = catalog.lookup_products(product_id);

        match string_field(package, PLAN_IDENTIFIER_FIELD) {
            Some(plan_id) => candidates
                .iter()
                .find(|p| p.base_plan_id.as_deref() == Some(plan_id)),
            None => candidates.iter().find(|p| !p.is_subscription()),
        }
    }
}

/// Matching for stores with one product per SKU: first listed product wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkuMatcher;

impl ProductMatcher for SkuMatcher {
    fn find_matching_product<'a>(
        &self,
        catalog: &'a ProductCatalog,
        package: &Value,
    ) -> Option<&'a StoreProduct> {
        let product_id = string_field(package, PRODUCT_IDENTIFIER_FIELD)?;
        catalog.lookup_products(product_id).first()
    }
}

/// Store backend the products came from; selects the matching strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    PlayStore,
    Amazon,
}

impl StoreBackend {
    pub fn matcher(self) -> Box<dyn ProductMatcher> {
        match self {
            StoreBackend::PlayStore => Box::new(BasePlanMatcher),
            StoreBackend::Amazon => Box::new(SkuMatcher),
        }
    }
}

impl FromStr for StoreBackend {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "play_store" => Ok(StoreBackend::PlayStore),
            "amazon" => Ok(StoreBackend::Amazon),
            _ => Err(ParseError::invalid("store_backend", "`play_store` or `amazon`")),
        }
    }
}
