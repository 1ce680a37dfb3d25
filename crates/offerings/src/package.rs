use serde::{Deserialize, Serialize};

use offerkit_core::Entity;
use offerkit_products::{PresentedOfferingContext, StoreProduct};

/// Identifier prefix reserved for well-known package types.
pub const RESERVED_PREFIX: &str = "$rc_";

/// Duration-based classification of a package, derived from its identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageType {
    /// Reserved-prefix identifier this client does not know (newer backend).
    Unknown,
    /// Developer-defined identifier.
    Custom,
    Lifetime,
    Annual,
    SixMonth,
    ThreeMonth,
    TwoMonth,
    Monthly,
    Weekly,
}

/// Well-known identifiers, one per typed variant.
pub const KNOWN_PACKAGE_TYPES: [(&str, PackageType); 7] = [
    ("$rc_lifetime", PackageType::Lifetime),
    ("$rc_annual", PackageType::Annual),
    ("$rc_six_month", PackageType::SixMonth),
    ("$rc_three_month", PackageType::ThreeMonth),
    ("$rc_two_month", PackageType::TwoMonth),
    ("$rc_monthly", PackageType::Monthly),
    ("$rc_weekly", PackageType::Weekly),
];

impl PackageType {
    /// Exact lookup in [`KNOWN_PACKAGE_TYPES`].
    pub fn from_known_identifier(identifier: &str) -> Option<PackageType> {
        KNOWN_PACKAGE_TYPES
            .iter()
            .find(|(known, _)| *known == identifier)
            .map(|(_, package_type)| *package_type)
    }

    /// Type for an identifier with no exact match.
    pub fn fallback_for(identifier: &str) -> PackageType {
        if identifier.starts_with(RESERVED_PREFIX) {
            PackageType::Unknown
        } else {
            PackageType::Custom
        }
    }

    /// Total resolution: table first, then the prefix fallback.
    pub fn from_identifier(identifier: &str) -> PackageType {
        Self::from_known_identifier(identifier).unwrap_or_else(|| Self::fallback_for(identifier))
    }

    /// Reserved identifier for typed variants; `None` for `Unknown`/`Custom`.
    pub fn identifier(self) -> Option<&'static str> {
        KNOWN_PACKAGE_TYPES
            .iter()
            .find(|(_, package_type)| *package_type == self)
            .map(|(known, _)| *known)
    }
}

/// A purchasable unit of an offering, bound to one store product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    identifier: String,
    package_type: PackageType,
    product: StoreProduct,
    presented_offering_context: PresentedOfferingContext,
}

impl Package {
    /// Build a package; `product` is stored annotated with `context`.
    pub fn new(
        identifier: impl Into<String>,
        product: &StoreProduct,
        context: PresentedOfferingContext,
    ) -> Self {
        let identifier = identifier.into();
        Self {
            package_type: PackageType::from_identifier(&identifier),
            identifier,
            product: product.copy_with_presented_offering_context(context.clone()),
            presented_offering_context: context,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn package_type(&self) -> PackageType {
        self.package_type
    }

    pub fn product(&self) -> &StoreProduct {
        &self.product
    }

    pub fn presented_offering_context(&self) -> &PresentedOfferingContext {
        &self.presented_offering_context
    }

    /// Copy re-annotated with `context` (package and product alike).
    pub fn with_presented_context(&self, context: PresentedOfferingContext) -> Package {
        Package {
            identifier: self.identifier.clone(),
            package_type: self.package_type,
            product: self.product.copy_with_presented_offering_context(context.clone()),
            presented_offering_context: context,
        }
    }
}

impl Entity for Package {
    type Id = str;

    fn id(&self) -> &str {
        &self.identifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use offerkit_products::{Price, ProductType};

    fn product() -> StoreProduct {
        StoreProduct {
            id: "pro:monthly".to_string(),
            product_type: ProductType::Subscription,
            title: "Pro".to_string(),
            description: String::new(),
            price: Price {
                formatted: "$4.99".to_string(),
                amount_micros: 4_990_000,
                currency_code: "USD".to_string(),
            },
            period: Some("P1M".to_string()),
            base_plan_id: Some("monthly".to_string()),
            presented_offering_context: None,
        }
    }

    #[test]
    fn known_identifiers_resolve_through_table() {
        for (identifier, expected) in KNOWN_PACKAGE_TYPES {
            assert_eq!(PackageType::from_identifier(identifier), expected);
            assert_eq!(expected.identifier(), Some(identifier));
        }
    }

    #[test]
    fn reserved_prefix_without_match_is_unknown() {
        assert_eq!(PackageType::from_known_identifier("$rc_quarterly"), None);
        assert_eq!(PackageType::fallback_for("$rc_quarterly"), PackageType::Unknown);
        assert_eq!(PackageType::from_identifier("$rc_quarterly"), PackageType::Unknown);
    }

    #[test]
    fn other_identifiers_are_custom() {
        assert_eq!(PackageType::from_identifier("pro_bundle"), PackageType::Custom);
        assert_eq!(PackageType::from_identifier(""), PackageType::Custom);
        assert_eq!(PackageType::from_identifier("rc_monthly"), PackageType::Custom);
        assert_eq!(PackageType::Custom.identifier(), None);
    }

    #[test]
    fn new_package_annotates_a_copy_of_the_product() {
        let original = product();
        let package = Package::new("$rc_monthly", &original, PresentedOfferingContext::new("default"));

        assert_eq!(package.package_type(), PackageType::Monthly);
        assert_eq!(original.presented_offering_context, None);
        assert_eq!(
            package.product().presented_offering_context.as_ref(),
            Some(package.presented_offering_context())
        );
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: anything under the reserved prefix that isn't in the table is Unknown.
            #[test]
            fn reserved_prefix_never_resolves_to_custom(suffix in "[a-z_]{0,16}") {
                let identifier = format!("{RESERVED_PREFIX}{suffix}");
                let resolved = PackageType::from_identifier(&identifier);
                prop_assert_ne!(resolved, PackageType::Custom);
                if PackageType::from_known_identifier(&identifier).is_none() {
                    prop_assert_eq!(resolved, PackageType::Unknown);
                }
            }

            /// Property: identifiers outside the reserved prefix are always Custom.
            #[test]
            fn unprefixed_identifiers_are_custom(identifier in "[a-zA-Z0-9_.]{0,24}") {
                prop_assume!(!identifier.starts_with(RESERVED_PREFIX));
                prop_assert_eq!(PackageType::from_identifier(&identifier), PackageType::Custom);
            }
        }
    }
}
