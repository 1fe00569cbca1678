//! Greedy pairwise coverage builder.
//!
//! 1. Generate all pairwise requirements and order them.
//! 2. For each requirement, reuse the first tuple (in insertion order) that
//!    already satisfies it or can absorb it into one open slot.
//! 3. Otherwise allocate a new tuple seeded with the requirement's two values.
//! 4. Finish every tuple, filling open slots with value index 0.
//!
//! With exactly two domains no tuple ever has an open slot left after
//! seeding, so the output is the full cross product.

use tracing::debug;

use crate::domain::{ConfigurationError, Domain};
use crate::requirement::{generate_requirements, InvalidRequirementError};
use crate::score::{order_requirements, RequirementOrder};
use crate::tuple::{PartialTuple, Tuple};

/// Errors from coverage generation. All of them are configuration errors
/// detected before any tuple is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoverageError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("invalid requirement: {0}")]
    InvalidRequirement(#[from] InvalidRequirementError),
}

/// Configurable greedy builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoverageBuilder {
    order: RequirementOrder,
}

impl CoverageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order(order: RequirementOrder) -> Self {
        Self { order }
    }

    pub fn order(&self) -> RequirementOrder {
        self.order
    }

    /// Build a pairwise covering set of tuples for `domains`.
    ///
    /// Requires at least two domains.
    pub fn build(&self, domains: &[Domain]) -> Result<Vec<Tuple>, CoverageError> {
        if domains.len() < 2 {
            return Err(ConfigurationError::TooFewDomains {
                count: domains.len(),
            }
            .into());
        }

        let mut requirements = generate_requirements(domains)?;
        order_requirements(&mut requirements, self.order);
        debug!(
            domains = domains.len(),
            requirements = requirements.len(),
            order = ?self.order,
            "generated pairwise requirements"
        );

        let width = domains.len();
        let mut tuples: Vec<PartialTuple> = Vec::new();
        let mut reused = 0usize;

        for req in &requirements {
            if tuples.iter_mut().any(|t| t.absorb(req)) {
                reused += 1;
            } else {
                tuples.push(PartialTuple::seeded(width, req));
            }
        }

        debug!(tuples = tuples.len(), reused, "pairwise fold complete");

        Ok(tuples.into_iter().map(PartialTuple::finish).collect())
    }
}

/// Build pairwise coverage with the default ascending-score order.
pub fn build_pairwise_coverage(domains: &[Domain]) -> Result<Vec<Tuple>, CoverageError> {
    CoverageBuilder::new().build(domains)
}
