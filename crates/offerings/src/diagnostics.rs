//! Non-fatal parse diagnostics.
//!
//! Anything the parser drops or ignores is reported here instead of failing
//! the parse. Every diagnostic is logged through `tracing`; a
//! [`DiagnosticSink`] additionally receives it so callers (and tests) can
//! inspect what was skipped.

use core::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    Warn,
    Error,
}

/// What was skipped or ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A package node was malformed.
    PackageSkipped,
    /// A package matched no store product.
    ProductNotFound,
    /// An offering node was malformed.
    OfferingSkipped,
    /// An offering had no usable packages.
    OfferingEmpty,
    /// A ui config / paywall / components sub-document failed to decode.
    SubDocumentInvalid,
    /// Targeting was present but incomplete.
    TargetingInvalid,
    /// Placements were present but their mapping was missing or malformed.
    PlacementsInvalid,
}

impl DiagnosticKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticKind::PackageSkipped => "package_skipped",
            DiagnosticKind::ProductNotFound => "product_not_found",
            DiagnosticKind::OfferingSkipped => "offering_skipped",
            DiagnosticKind::OfferingEmpty => "offering_empty",
            DiagnosticKind::SubDocumentInvalid => "sub_document_invalid",
            DiagnosticKind::TargetingInvalid => "targeting_invalid",
            DiagnosticKind::PlacementsInvalid => "placements_invalid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub kind: DiagnosticKind,
    /// Identifier of the offering, package or sub-document concerned.
    pub subject: Option<String>,
    pub message: String,
}

impl Diagnostic {
    pub fn warn(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Warn,
            kind,
            subject: None,
            message: message.into(),
        }
    }

    pub fn error(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Error,
            kind,
            subject: None,
            message: message.into(),
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.subject {
            Some(subject) => write!(f, "[{}] {}: {}", self.kind.as_str(), subject, self.message),
            None => write!(f, "[{}] {}", self.kind.as_str(), self.message),
        }
    }
}

/// Receiver for diagnostics produced during a parse.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Sink that keeps nothing; diagnostics still reach `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingOnly;

impl DiagnosticSink for TracingOnly {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}

/// Log `diagnostic` and hand it to `sink`.
pub(crate) fn emit(sink: &mut dyn DiagnosticSink, diagnostic: Diagnostic) {
    let kind = diagnostic.kind.as_str();
    let subject = diagnostic.subject.as_deref().unwrap_or("-");
    match diagnostic.level {
        DiagnosticLevel::Warn => {
            tracing::warn!(kind, subject, detail = %diagnostic.message, "offerings diagnostic")
        }
        DiagnosticLevel::Error => {
            tracing::error!(kind, subject, detail = %diagnostic.message, "offerings diagnostic")
        }
    }
    sink.report(diagnostic);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_forwards_to_sink() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        emit(
            &mut sink,
            Diagnostic::warn(DiagnosticKind::OfferingEmpty, "no packages").with_subject("default"),
        );

        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].kind, DiagnosticKind::OfferingEmpty);
        assert_eq!(sink[0].to_string(), "[offering_empty] default: no packages");
    }
}
