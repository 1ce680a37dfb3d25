use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use offerkit_core::{EventId, SessionId, ValueObject};

use crate::event::Event;

/// Lifecycle step of a presented paywall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaywallEventType {
    /// The paywall was shown to the user.
    #[serde(rename = "paywall_impression")]
    Impression,
    /// The user cancelled a purchase.
    #[serde(rename = "paywall_cancel")]
    Cancel,
    /// The paywall was dismissed.
    #[serde(rename = "paywall_close")]
    Close,
}

impl PaywallEventType {
    pub fn as_str(self) -> &'static str {
        match self {
            PaywallEventType::Impression => "paywall_impression",
            PaywallEventType::Cancel => "paywall_cancel",
            PaywallEventType::Close => "paywall_close",
        }
    }
}

/// When and under which identifier the event was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaywallEventCreationData {
    pub id: EventId,
    pub date: DateTime<Utc>,
}

/// What the paywall looked like when the event happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaywallEventData {
    pub offering_identifier: String,
    pub paywall_revision: i32,
    pub session_identifier: SessionId,
    /// Presentation mode tag as reported by the UI layer (e.g. "fullscreen").
    pub display_mode: String,
    pub locale_identifier: String,
    pub dark_mode: bool,
}

/// A paywall lifecycle event.
///
/// Built once by the presentation layer when the event is recorded and never
/// modified afterwards; fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaywallEvent {
    creation_data: PaywallEventCreationData,
    data: PaywallEventData,
    #[serde(rename = "type")]
    event_type: PaywallEventType,
}

impl PaywallEvent {
    pub fn new(
        creation_data: PaywallEventCreationData,
        data: PaywallEventData,
        event_type: PaywallEventType,
    ) -> Self {
        Self {
            creation_data,
            data,
            event_type,
        }
    }

    pub fn creation_data(&self) -> &PaywallEventCreationData {
        &self.creation_data
    }

    pub fn data(&self) -> &PaywallEventData {
        &self.data
    }

    pub fn kind(&self) -> PaywallEventType {
        self.event_type
    }

    /// Flatten into the record attached to receipt posts.
    ///
    /// Pure field mapping; there is nothing to decode so this cannot fail.
    pub fn to_post_receipt_data(&self) -> PaywallPostReceiptData {
        PaywallPostReceiptData {
            session_id: self.data.session_identifier.to_string(),
            revision: self.data.paywall_revision,
            display_mode: self.data.display_mode.clone(),
            dark_mode: self.data.dark_mode,
            locale: self.data.locale_identifier.clone(),
            offering_id: self.data.offering_identifier.clone(),
        }
    }
}

impl Event for PaywallEvent {
    fn event_type(&self) -> &'static str {
        self.event_type.as_str()
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.creation_data.date
    }
}

/// Flat wire record for the reporting transport. No nested objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaywallPostReceiptData {
    pub session_id: String,
    pub revision: i32,
    pub display_mode: String,
    pub dark_mode: bool,
    pub locale: String,
    pub offering_id: String,
}

impl ValueObject for PaywallPostReceiptData {}
