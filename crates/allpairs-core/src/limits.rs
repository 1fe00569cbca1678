//! Caller-side bounds on parameter spaces.
//!
//! The solver imposes no caps; requirement counts grow quadratically with
//! parameter count and size. These limits are checked before any generation
//! starts so an oversized space is rejected up front.

use serde::{Deserialize, Serialize};

use allpairs_ir::types::Strategy;
use allpairs_solver::cartesian::cartesian_count;
use allpairs_solver::requirement::requirement_count;
use allpairs_solver::Domain;

/// Resource limits for resolving a single parameter space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixLimits {
    /// Maximum number of parameters.
    pub max_parameters: usize,
    /// Maximum candidate values for any one parameter.
    pub max_values_per_parameter: usize,
    /// Maximum pairwise requirements (`Σ_{i<j} size_i * size_j`).
    pub max_requirements: usize,
    /// Maximum tuples a cartesian build may produce (`Π size_i`).
    pub max_cartesian_tuples: usize,
}

impl Default for MatrixLimits {
    fn default() -> Self {
        Self {
            max_parameters: 64,
            max_values_per_parameter: 1024,
            max_requirements: 1_000_000,
            max_cartesian_tuples: 100_000,
        }
    }
}

/// Check a space's domains against `limits` for the chosen strategy.
pub fn check_limits(
    domains: &[Domain],
    strategy: Strategy,
    limits: &MatrixLimits,
) -> Result<(), LimitViolation> {
    if domains.len() > limits.max_parameters {
        return Err(LimitViolation::TooManyParameters {
            count: domains.len(),
            max: limits.max_parameters,
        });
    }
    let oversized = |d: &&Domain| d.size() > limits.max_values_per_parameter;
    if let Some(domain) = domains.iter().find(oversized) {
        return Err(LimitViolation::TooManyValues {
            name: domain.name().to_string(),
            count: domain.size(),
            max: limits.max_values_per_parameter,
        });
    }

    match strategy {
        Strategy::Pairwise => {
            let count = requirement_count(domains);
            if count > limits.max_requirements {
                return Err(LimitViolation::TooManyRequirements {
                    count,
                    max: limits.max_requirements,
                });
            }
        }
        Strategy::Cartesian => {
            let count = cartesian_count(domains);
            if count > limits.max_cartesian_tuples {
                return Err(LimitViolation::CartesianTooLarge {
                    count,
                    max: limits.max_cartesian_tuples,
                });
            }
        }
    }
    Ok(())
}

/// A limit violation error.
#[derive(Debug, Clone, PartialEq)]
pub enum LimitViolation {
    TooManyParameters { count: usize, max: usize },
    TooManyValues {
        name: String,
        count: usize,
        max: usize,
    },
    TooManyRequirements { count: usize, max: usize },
    CartesianTooLarge { count: usize, max: usize },
}

impl std::fmt::Display for LimitViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooManyParameters { count, max } => {
                write!(f, "Too many parameters ({count}/{max})")
            }
            Self::TooManyValues { name, count, max } => {
                write!(f, "Parameter '{name}' has too many values ({count}, max {max})")
            }
            Self::TooManyRequirements { count, max } => {
                write!(f, "Too many pairwise requirements ({count}, max {max})")
            }
            Self::CartesianTooLarge { count, max } => {
                write!(f, "Cartesian product too large ({count} tuples, max {max})")
            }
        }
    }
}

impl std::error::Error for LimitViolation {}
