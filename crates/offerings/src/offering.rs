use std::sync::Arc;

use serde_json::{Map, Value};

use offerkit_core::{Entity, ParseError, ParseResult};
use offerkit_products::{PresentedOfferingContext, TargetingContext};

use crate::package::{Package, PackageType};
use crate::paywall::{PaywallComponentsData, PaywallData, UiConfig};

/// Components paywall together with the app-wide config it renders against.
#[derive(Debug, Clone, PartialEq)]
pub struct PaywallComponents {
    pub ui_config: Arc<UiConfig>,
    pub data: PaywallComponentsData,
}

/// A named bundle of packages, plus optional paywall presentation data.
///
/// Never empty: the parser drops offerings without usable packages.
#[derive(Debug, Clone, PartialEq)]
pub struct Offering {
    identifier: String,
    server_description: String,
    metadata: Map<String, Value>,
    available_packages: Vec<Package>,
    paywall: Option<PaywallData>,
    paywall_components: Option<PaywallComponents>,
}

impl Offering {
    pub fn new(
        identifier: impl Into<String>,
        server_description: impl Into<String>,
        metadata: Map<String, Value>,
        available_packages: Vec<Package>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            server_description: server_description.into(),
            metadata,
            available_packages,
            paywall: None,
            paywall_components: None,
        }
    }

    pub fn with_paywall(mut self, paywall: Option<PaywallData>) -> Self {
        self.paywall = paywall;
        self
    }

    pub fn with_paywall_components(mut self, paywall_components: Option<PaywallComponents>) -> Self {
        self.paywall_components = paywall_components;
        self
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn server_description(&self) -> &str {
        &self.server_description
    }

    pub fn metadata(&self) -> &Map<String, Value> {
        &self.metadata
    }

    /// Packages in document order.
    pub fn available_packages(&self) -> &[Package] {
        &self.available_packages
    }

    pub fn paywall(&self) -> Option<&PaywallData> {
        self.paywall.as_ref()
    }

    pub fn paywall_components(&self) -> Option<&PaywallComponents> {
        self.paywall_components.as_ref()
    }

    pub fn has_paywall(&self) -> bool {
        self.paywall.is_some() || self.paywall_components.is_some()
    }

    pub fn package(&self, identifier: &str) -> Option<&Package> {
        self.available_packages
            .iter()
            .find(|p| p.identifier() == identifier)
    }

    pub fn get_package(&self, identifier: &str) -> ParseResult<&Package> {
        self.package(identifier)
            .ok_or_else(|| ParseError::package_not_found(identifier))
    }

    fn first_of_type(&self, package_type: PackageType) -> Option<&Package> {
        self.available_packages
            .iter()
            .find(|p| p.package_type() == package_type)
    }

    pub fn lifetime(&self) -> Option<&Package> {
        self.first_of_type(PackageType::Lifetime)
    }

    pub fn annual(&self) -> Option<&Package> {
        self.first_of_type(PackageType::Annual)
    }

    pub fn six_month(&self) -> Option<&Package> {
        self.first_of_type(PackageType::SixMonth)
    }

    pub fn three_month(&self) -> Option<&Package> {
        self.first_of_type(PackageType::ThreeMonth)
    }

    pub fn two_month(&self) -> Option<&Package> {
        self.first_of_type(PackageType::TwoMonth)
    }

    pub fn monthly(&self) -> Option<&Package> {
        self.first_of_type(PackageType::Monthly)
    }

    pub fn weekly(&self) -> Option<&Package> {
        self.first_of_type(PackageType::Weekly)
    }

    /// Copy whose packages record the placement and targeting they were
    /// presented under.
    pub fn with_presented_context(
        &self,
        placement_identifier: Option<&str>,
        targeting: Option<TargetingContext>,
    ) -> Offering {
        let context = PresentedOfferingContext::new(self.identifier.clone())
            .with_placement(placement_identifier.map(str::to_string))
            .with_targeting(targeting);

        Offering {
            available_packages: self
                .available_packages
                .iter()
                .map(|p| p.with_presented_context(context.clone()))
                .collect(),
            ..self.clone()
        }
    }
}

impl Entity for Offering {
    type Id = str;

    fn id(&self) -> &str {
        &self.identifier
    }
}
