//! Offerings document → typed [`Offerings`].
//!
//! Failure policy, outermost first:
//! - `offerings` / `current_offering_id` missing or mistyped: the parse fails.
//! - a malformed offering or package node, or a package with no matching
//!   product: that item is dropped.
//! - a sub-document (ui config, paywall, components) that fails to decode:
//!   that field is absent.
//! - targeting / placements / current whose preconditions don't hold: `None`.
//!
//! Everything short of the first case is reported as a [`Diagnostic`].

use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Map, Value};

use offerkit_core::{Entity, ParseError, ParseResult};
use offerkit_products::{
    PresentedOfferingContext, ProductCatalog, ProductMatcher, StoreBackend, TargetingContext,
};

use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, TracingOnly, emit};
use crate::offering::{Offering, PaywallComponents};
use crate::offerings::{Offerings, Placements, Targeting};
use crate::package::Package;
use crate::paywall::{PaywallComponentsData, PaywallData, SubDocument, UiConfig};

fn required_str<'v>(node: &'v Value, field: &str) -> ParseResult<&'v str> {
    match node.get(field) {
        None | Some(Value::Null) => Err(ParseError::missing(field)),
        Some(value) => value
            .as_str()
            .ok_or_else(|| ParseError::invalid(field, "a string")),
    }
}

fn required_identifier<'v>(node: &'v Value) -> ParseResult<&'v str> {
    let identifier = required_str(node, "identifier")?;
    if identifier.is_empty() {
        return Err(ParseError::invalid("identifier", "a non-empty string"));
    }
    Ok(identifier)
}

fn required_array<'v>(node: &'v Value, field: &str) -> ParseResult<&'v Vec<Value>> {
    match node.get(field) {
        None | Some(Value::Null) => Err(ParseError::missing(field)),
        Some(value) => value
            .as_array()
            .ok_or_else(|| ParseError::invalid(field, "an array")),
    }
}

/// Builds [`Offerings`] from the backend document and the store's products.
///
/// Stateless between calls; one parser can serve every refresh.
#[derive(Debug)]
pub struct OfferingsParser {
    matcher: Box<dyn ProductMatcher>,
}

impl OfferingsParser {
    pub fn new(matcher: Box<dyn ProductMatcher>) -> Self {
        Self { matcher }
    }

    pub fn for_store(backend: StoreBackend) -> Self {
        Self::new(backend.matcher())
    }

    /// Parse raw JSON text. Diagnostics only go to `tracing`.
    pub fn parse_str(&self, json: &str, catalog: &ProductCatalog) -> ParseResult<Offerings> {
        self.parse_str_with(json, catalog, &mut TracingOnly)
    }

    pub fn parse_str_with(
        &self,
        json: &str,
        catalog: &ProductCatalog,
        sink: &mut dyn DiagnosticSink,
    ) -> ParseResult<Offerings> {
        let document: Value = serde_json::from_str(json)?;
        self.create_offerings_with(&document, catalog, sink)
    }

    /// Note: this may return an empty `Offerings`.
    pub fn create_offerings(
        &self,
        document: &Value,
        catalog: &ProductCatalog,
    ) -> ParseResult<Offerings> {
        self.create_offerings_with(document, catalog, &mut TracingOnly)
    }

    pub fn create_offerings_with(
        &self,
        document: &Value,
        catalog: &ProductCatalog,
        sink: &mut dyn DiagnosticSink,
    ) -> ParseResult<Offerings> {
        tracing::debug!(product_ids = catalog.len(), "building offerings");

        if !document.is_object() {
            return Err(ParseError::invalid("offerings document", "an object"));
        }
        let offering_nodes = required_array(document, "offerings")?;
        let current_offering_id = required_str(document, "current_offering_id")?;

        // decoded once, shared by every offering
        let ui_config = UiConfig::decode(document.get("ui_config"), None, sink).map(Arc::new);

        let mut all: HashMap<String, Offering> = HashMap::new();
        for node in offering_nodes {
            if let Some(offering) = self.create_offering(node, catalog, ui_config.as_ref(), sink) {
                // later duplicates replace earlier ones
                all.insert(offering.id().to_string(), offering);
            }
        }

        let targeting = decode_targeting(document.get("targeting"), sink);
        let placements = decode_placements(document.get("placements"), sink);

        let current = all.get(current_offering_id).map(|offering| {
            offering.with_presented_context(None, targeting.as_ref().map(TargetingContext::from))
        });

        tracing::debug!(
            offerings = all.len(),
            current = current.as_ref().map(Offering::identifier).unwrap_or("-"),
            "offerings built"
        );

        Ok(Offerings::new(current, all, placements, targeting))
    }

    /// Build one offering, or `None` if the node is malformed or no package
    /// survives product matching.
    pub fn create_offering(
        &self,
        node: &Value,
        catalog: &ProductCatalog,
        ui_config: Option<&Arc<UiConfig>>,
        sink: &mut dyn DiagnosticSink,
    ) -> Option<Offering> {
        let identifier = match required_identifier(node) {
            Ok(identifier) => identifier,
            Err(err) => {
                emit(
                    sink,
                    Diagnostic::warn(DiagnosticKind::OfferingSkipped, err.to_string()),
                );
                return None;
            }
        };

        let fields = required_str(node, "description")
            .and_then(|description| Ok((description, required_array(node, "packages")?)));
        let (description, package_nodes) = match fields {
            Ok(fields) => fields,
            Err(err) => {
                emit(
                    sink,
                    Diagnostic::warn(DiagnosticKind::OfferingSkipped, err.to_string())
                        .with_subject(identifier),
                );
                return None;
            }
        };

        let metadata: Map<String, Value> = node
            .get("metadata")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        let context = PresentedOfferingContext::new(identifier);
        let mut packages = Vec::with_capacity(package_nodes.len());
        for package_node in package_nodes {
            if let Some(package) = self.create_package(package_node, catalog, &context, sink) {
                packages.push(package);
            }
        }

        if packages.is_empty() {
            emit(
                sink,
                Diagnostic::warn(
                    DiagnosticKind::OfferingEmpty,
                    "offering has no packages with a matching product; dropping it",
                )
                .with_subject(identifier),
            );
            return None;
        }

        let paywall = PaywallData::decode(node.get("paywall"), Some(identifier), sink);
        let components =
            PaywallComponentsData::decode(node.get("paywall_components"), Some(identifier), sink);

        let paywall_components = match (components, ui_config) {
            (Some(data), Some(ui_config)) => Some(PaywallComponents {
                ui_config: Arc::clone(ui_config),
                data,
            }),
            (Some(_), None) => {
                tracing::debug!(
                    offering_id = identifier,
                    "ignoring paywall components: no ui config"
                );
                None
            }
            (None, _) => None,
        };

        Some(
            Offering::new(identifier, description, metadata, packages)
                .with_paywall(paywall)
                .with_paywall_components(paywall_components),
        )
    }

    /// Build one package, or `None` if the node is malformed or no store
    /// product matches it.
    pub fn create_package(
        &self,
        node: &Value,
        catalog: &ProductCatalog,
        context: &PresentedOfferingContext,
        sink: &mut dyn DiagnosticSink,
    ) -> Option<Package> {
        let identifier = match required_identifier(node) {
            Ok(identifier) => identifier,
            Err(err) => {
                emit(
                    sink,
                    Diagnostic::warn(DiagnosticKind::PackageSkipped, err.to_string())
                        .with_subject(context.offering_identifier.as_str()),
                );
                return None;
            }
        };

        let Some(product) = self.matcher.find_matching_product(catalog, node) else {
            emit(
                sink,
                Diagnostic::warn(
                    DiagnosticKind::ProductNotFound,
                    format!(
                        "no store product for package in offering `{}`",
                        context.offering_identifier
                    ),
                )
                .with_subject(identifier),
            );
            return None;
        };

        Some(Package::new(identifier, product, context.clone()))
    }
}

/// Both `revision` (integer) and `rule_id` (string) or nothing.
fn decode_targeting(value: Option<&Value>, sink: &mut dyn DiagnosticSink) -> Option<Targeting> {
    let value = value.filter(|v| !v.is_null())?;

    let revision = value
        .get("revision")
        .and_then(Value::as_i64)
        .and_then(|r| i32::try_from(r).ok());
    let rule_id = value.get("rule_id").and_then(Value::as_str);

    match (revision, rule_id) {
        (Some(revision), Some(rule_id)) => Some(Targeting {
            revision,
            rule_id: rule_id.to_string(),
        }),
        _ => {
            emit(
                sink,
                Diagnostic::warn(
                    DiagnosticKind::TargetingInvalid,
                    "targeting needs an integer `revision` and a string `rule_id`; ignoring it",
                ),
            );
            None
        }
    }
}

/// Requires a decodable `offering_ids_by_placement`; the fallback is optional.
fn decode_placements(value: Option<&Value>, sink: &mut dyn DiagnosticSink) -> Option<Placements> {
    let value = value.filter(|v| !v.is_null())?;

    let by_placement = value
        .get("offering_ids_by_placement")
        .filter(|v| !v.is_null())
        .ok_or_else(|| ParseError::missing("offering_ids_by_placement"))
        .and_then(|mapping| {
            HashMap::<String, Option<String>>::deserialize(mapping)
                .map_err(|_| ParseError::invalid("offering_ids_by_placement", "an object of nullable strings"))
        });

    match by_placement {
        Ok(offering_ids_by_placement) => Some(Placements {
            fallback_offering_id: value
                .get("fallback_offering_id")
                .and_then(Value::as_str)
                .map(str::to_string),
            offering_ids_by_placement,
        }),
        Err(err) => {
            emit(
                sink,
                Diagnostic::warn(DiagnosticKind::PlacementsInvalid, err.to_string()),
            );
            None
        }
    }
}
