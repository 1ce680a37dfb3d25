use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use offerkit_core::ValueObject;
use offerkit_products::TargetingContext;

use crate::offering::Offering;

/// Experiment/rule the current offering was chosen by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Targeting {
    pub revision: i32,
    pub rule_id: String,
}

impl ValueObject for Targeting {}

impl From<&Targeting> for TargetingContext {
    fn from(value: &Targeting) -> Self {
        TargetingContext {
            revision: value.revision,
            rule_id: value.rule_id.clone(),
        }
    }
}

/// Which offering each app placement shows.
///
/// A placement mapped to `None` explicitly shows nothing; that differs from
/// a placement missing from the map, which uses the fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placements {
    pub fallback_offering_id: Option<String>,
    pub offering_ids_by_placement: HashMap<String, Option<String>>,
}

impl ValueObject for Placements {}

/// Parsed catalog of offerings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Offerings {
    current: Option<Offering>,
    all: HashMap<String, Offering>,
    placements: Option<Placements>,
    targeting: Option<Targeting>,
}

impl Offerings {
    pub fn new(
        current: Option<Offering>,
        all: HashMap<String, Offering>,
        placements: Option<Placements>,
        targeting: Option<Targeting>,
    ) -> Self {
        Self {
            current,
            all,
            placements,
            targeting,
        }
    }

    /// Offering the backend marked as current, annotated with targeting.
    pub fn current(&self) -> Option<&Offering> {
        self.current.as_ref()
    }

    pub fn all(&self) -> &HashMap<String, Offering> {
        &self.all
    }

    pub fn get(&self, identifier: &str) -> Option<&Offering> {
        self.all.get(identifier)
    }

    pub fn placements(&self) -> Option<&Placements> {
        self.placements.as_ref()
    }

    pub fn targeting(&self) -> Option<&Targeting> {
        self.targeting.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Offering to show for `placement_id`, annotated with the placement.
    ///
    /// A placement mapped to null shows nothing. Otherwise its mapped
    /// offering is used, and the fallback offering when the placement is
    /// unmapped or its offering is not in `all`.
    pub fn current_offering_for_placement(&self, placement_id: &str) -> Option<Offering> {
        let placements = self.placements.as_ref()?;

        let mapped = match placements.offering_ids_by_placement.get(placement_id) {
            Some(None) => return None,
            Some(Some(offering_id)) => self.all.get(offering_id),
            None => None,
        };
        let offering = mapped.or_else(|| {
            placements
                .fallback_offering_id
                .as_deref()
                .and_then(|fallback| self.all.get(fallback))
        })?;

        Some(offering.with_presented_context(
            Some(placement_id),
            self.targeting.as_ref().map(TargetingContext::from),
        ))
    }
}
