//! Exhaustive cross product of all domains.

use crate::builder::CoverageError;
use crate::domain::{ConfigurationError, Domain};
use crate::tuple::Tuple;

/// Build every combination of domain values, last domain varying fastest.
///
/// Accepts a single domain (one tuple per value); an empty domain list is a
/// configuration error.
pub fn build_cartesian(domains: &[Domain]) -> Result<Vec<Tuple>, CoverageError> {
    if domains.is_empty() {
        return Err(ConfigurationError::NoDomains.into());
    }

    let mut tuples = Vec::new();
    let mut current = vec![0usize; domains.len()];

    loop {
        tuples.push(Tuple::from_values(current.clone()));

        // Odometer increment from the last domain.
        let mut pos = domains.len();
        loop {
            if pos == 0 {
                return Ok(tuples);
            }
            pos -= 1;
            current[pos] += 1;
            if current[pos] < domains[pos].size() {
                break;
            }
            current[pos] = 0;
        }
    }
}

/// `Π size_i`, saturating at `usize::MAX`.
pub fn cartesian_count(domains: &[Domain]) -> usize {
    domains
        .iter()
        .fold(1usize, |acc, d| acc.saturating_mul(d.size()))
}
