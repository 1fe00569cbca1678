//! Coverage summary for a resolved matrix.

use serde::{Deserialize, Serialize};

use allpairs_ir::types::Strategy;
use allpairs_solver::cartesian::cartesian_count;
use allpairs_solver::coverage::check_coverage;
use allpairs_solver::{Domain, InvalidRequirementError, Tuple};

/// Serializable summary of what a matrix covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Strategy that produced the rows.
    pub strategy: Strategy,
    /// Number of parameters.
    pub parameters: usize,
    /// Pairwise requirements implied by the parameter sizes.
    pub requirements: usize,
    /// Requirements hit by at least one row.
    pub covered_requirements: usize,
    /// Rows produced.
    pub tuples: usize,
    /// Size of the full cross product.
    pub cartesian_size: usize,
    /// `tuples / cartesian_size` (0.0-1.0).
    pub reduction: f64,
}

impl CoverageReport {
    pub fn from_tuples(
        strategy: Strategy,
        domains: &[Domain],
        tuples: &[Tuple],
    ) -> Result<Self, InvalidRequirementError> {
        let check = check_coverage(domains, tuples)?;
        let cartesian_size = cartesian_count(domains);
        let reduction = if cartesian_size == 0 {
            0.0
        } else {
            tuples.len() as f64 / cartesian_size as f64
        };

        Ok(Self {
            strategy,
            parameters: domains.len(),
            requirements: check.total,
            covered_requirements: check.covered,
            tuples: tuples.len(),
            cartesian_size,
            reduction,
        })
    }

    /// All pairwise requirements are covered.
    pub fn is_complete(&self) -> bool {
        self.covered_requirements == self.requirements
    }
}
