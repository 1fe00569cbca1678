//! Frequency scoring of requirements.
//!
//! A value that takes part in few requirements is more constrained than one
//! that takes part in many. Processing requirements over constrained values
//! first lets the builder pack more pairs into each tuple.

use std::collections::HashMap;

use crate::domain::Value;
use crate::requirement::Requirement;

/// Order in which the builder consumes requirements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequirementOrder {
    /// Ascending frequency score. Ties keep generation order.
    #[default]
    AscendingScore,
    /// Generation order, unscored.
    Generation,
}

/// Per-value occurrence counts over a requirement set.
#[derive(Debug, Clone, Default)]
pub struct FrequencyMap {
    counts: HashMap<Value, usize>,
}

impl FrequencyMap {
    pub fn from_requirements(requirements: &[Requirement]) -> Self {
        let mut counts = HashMap::new();
        for req in requirements {
            *counts.entry(req.a()).or_insert(0) += 1;
            *counts.entry(req.b()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Number of requirements `value` appears in.
    pub fn frequency(&self, value: Value) -> usize {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// `freq[a] + freq[b]`.
    pub fn score(&self, requirement: &Requirement) -> usize {
        self.frequency(requirement.a()) + self.frequency(requirement.b())
    }
}

/// Score a single requirement against the full requirement set.
pub fn score(requirement: &Requirement, all: &[Requirement]) -> usize {
    FrequencyMap::from_requirements(all).score(requirement)
}

/// Reorder `requirements` in place according to `order`.
pub fn order_requirements(requirements: &mut [Requirement], order: RequirementOrder) {
    match order {
        RequirementOrder::Generation => {}
        RequirementOrder::AscendingScore => {
            let freq = FrequencyMap::from_requirements(requirements);
            // sort_by_key is stable
            requirements.sort_by_key(|req| freq.score(req));
        }
    }
}
