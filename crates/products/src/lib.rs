//! Products supplied by the store layer.
//!
//! The store layer owns these descriptors; the offerings parser only looks
//! them up by identifier and copies them with a presentation context. The
//! matching rule differs per store backend and is pluggable through
//! [`ProductMatcher`].

pub mod catalog;
pub mod matcher;
pub mod product;

pub use catalog::ProductCatalog;
pub use matcher::{BasePlanMatcher, ProductMatcher, SkuMatcher, StoreBackend};
pub use product::{
    PresentedOfferingContext, Price, ProductType, StoreProduct, TargetingContext,
};
