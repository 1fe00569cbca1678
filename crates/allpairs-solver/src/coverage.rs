//! Coverage checking: which pairwise requirements a tuple set hits.

use serde::Serialize;

use crate::domain::Domain;
use crate::requirement::{generate_requirements, InvalidRequirementError, Requirement};
use crate::tuple::Tuple;

/// Result of checking a tuple set against all pairwise requirements.
#[derive(Debug, Clone, Serialize)]
pub struct CoverageCheck {
    /// Total requirements generated from the domains.
    pub total: usize,
    /// Requirements hit by at least one tuple.
    pub covered: usize,
    /// Requirements no tuple hits, in generation order.
    pub uncovered: Vec<Requirement>,
    /// Tuples whose width or value indices don't fit the domains.
    pub malformed_tuples: usize,
}

impl CoverageCheck {
    /// Every requirement is covered and every tuple is well formed.
    pub fn is_complete(&self) -> bool {
        self.uncovered.is_empty() && self.malformed_tuples == 0
    }

    /// Covered fraction in `0.0..=1.0`. An empty requirement set counts as
    /// fully covered.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.covered as f64 / self.total as f64
        }
    }
}

/// Check `tuples` against every pairwise requirement of `domains`.
pub fn check_coverage(
    domains: &[Domain],
    tuples: &[Tuple],
) -> Result<CoverageCheck, InvalidRequirementError> {
    let requirements = generate_requirements(domains)?;

    let uncovered: Vec<Requirement> = requirements
        .iter()
        .filter(|req| !tuples.iter().any(|t| t.satisfies(req)))
        .copied()
        .collect();

    let malformed_tuples = tuples.iter().filter(|t| !t.is_valid_for(domains)).count();

    Ok(CoverageCheck {
        total: requirements.len(),
        covered: requirements.len() - uncovered.len(),
        uncovered,
        malformed_tuples,
    })
}
