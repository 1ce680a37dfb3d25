//! `offerkit-events` — events recorded by the presentation layer.
//!
//! Events are immutable facts. This crate only models them and flattens them
//! into the records the reporting transport sends; it never sends anything.

pub mod event;
pub mod paywall;

pub use event::Event;
pub use paywall::{
    PaywallEvent, PaywallEventCreationData, PaywallEventData, PaywallEventType,
    PaywallPostReceiptData,
};
