//! Independently versioned paywall sub-documents.
//!
//! Each schema decodes on its own: a failure in one turns into absence plus
//! a diagnostic and never reaches the offering or catalog that embeds it.

pub mod common;
pub mod components;
pub mod legacy;
pub mod ui_config;

use serde::de::DeserializeOwned;
use serde_json::Value;

use offerkit_core::{ParseError, ParseResult};

use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, emit};

pub use components::PaywallComponentsData;
pub use legacy::PaywallData;
pub use ui_config::UiConfig;

/// A JSON sub-object with its own schema and its own failure boundary.
pub trait SubDocument: DeserializeOwned {
    /// Field name the sub-document lives under; used in diagnostics.
    const NAME: &'static str;

    /// Strict decode, surfacing the error.
    fn try_decode(value: &Value) -> ParseResult<Self> {
        Self::deserialize(value).map_err(|e| ParseError::sub_document(Self::NAME, e))
    }

    /// Fault-isolated decode.
    ///
    /// Absent or `null` input yields `None` silently. A decode failure yields
    /// `None` and an error diagnostic naming `owner` (the offering, if any).
    fn decode(value: Option<&Value>, owner: Option<&str>, sink: &mut dyn DiagnosticSink) -> Option<Self> {
        let value = value.filter(|v| !v.is_null())?;
        match Self::try_decode(value) {
            Ok(document) => Some(document),
            Err(err) => {
                let mut diagnostic = Diagnostic::error(DiagnosticKind::SubDocumentInvalid, err.to_string());
                if let Some(owner) = owner {
                    diagnostic = diagnostic.with_subject(owner);
                }
                emit(sink, diagnostic);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_or_null_input_is_silent() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        assert!(UiConfig::decode(None, None, &mut sink).is_none());
        assert!(UiConfig::decode(Some(&Value::Null), None, &mut sink).is_none());
        assert!(sink.is_empty());
    }

    #[test]
    fn malformed_input_is_absorbed_with_diagnostic() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        let value = json!({ "template_name": 3 });

        assert!(PaywallData::decode(Some(&value), Some("default"), &mut sink).is_none());
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].kind, DiagnosticKind::SubDocumentInvalid);
        assert_eq!(sink[0].subject.as_deref(), Some("default"));
        assert!(sink[0].message.starts_with("paywall could not be decoded"));
    }

    #[test]
    fn wrong_json_type_is_a_decode_failure() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        let value = json!("not an object");
        assert!(PaywallComponentsData::decode(Some(&value), None, &mut sink).is_none());
        assert_eq!(sink.len(), 1);
    }
}
