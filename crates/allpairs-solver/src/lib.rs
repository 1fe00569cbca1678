//! Pairwise (all-pairs) test-parameter coverage.
//!
//! Given independent parameter domains, produce tuples such that every pair of
//! values from any two distinct domains appears together in at least one
//! tuple. The builder is a greedy, deterministic heuristic; it does not
//! search for a minimal covering array.
//!
//! ```
//! use allpairs_solver::{build_pairwise_coverage, domains_from_sizes};
//!
//! let domains = domains_from_sizes(&[5, 5, 2]).unwrap();
//! let tuples = build_pairwise_coverage(&domains).unwrap();
//! assert_eq!(tuples.len(), 27);
//! ```

pub mod batch;
pub mod builder;
pub mod cartesian;
pub mod coverage;
pub mod domain;
pub mod requirement;
pub mod score;
pub mod tuple;

pub use builder::{build_pairwise_coverage, CoverageBuilder, CoverageError};
pub use cartesian::build_cartesian;
pub use domain::{domains_from_sizes, ConfigurationError, Domain, Value};
pub use requirement::{generate_requirements, InvalidRequirementError, Requirement};
pub use score::RequirementOrder;
pub use tuple::Tuple;
