//! Offerings domain module.
//!
//! Turns the backend's offerings document plus the store's product catalog
//! into typed [`Offerings`]. Pure and synchronous: no IO, no shared state.
//! Only a missing or mistyped `offerings` / `current_offering_id` fails the
//! parse; everything else degrades to omission and a [`Diagnostic`].

pub mod diagnostics;
pub mod offering;
pub mod offerings;
pub mod package;
pub mod parser;
pub mod paywall;

pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticLevel, DiagnosticSink, TracingOnly};
pub use offering::{Offering, PaywallComponents};
pub use offerings::{Offerings, Placements, Targeting};
pub use package::{KNOWN_PACKAGE_TYPES, Package, PackageType, RESERVED_PREFIX};
pub use parser::OfferingsParser;
pub use paywall::{PaywallComponentsData, PaywallData, SubDocument, UiConfig};
