//! Parallel coverage generation over independent domain lists.
//!
//! Each build owns its requirements and tuples, so independent domain lists
//! are solved concurrently with rayon. Results keep input order.

use rayon::prelude::*;

use crate::builder::{CoverageBuilder, CoverageError};
use crate::domain::Domain;
use crate::tuple::Tuple;

/// Build pairwise coverage for every domain list in parallel.
///
/// Each entry fails or succeeds on its own.
pub fn build_many(
    builder: &CoverageBuilder,
    domain_sets: &[Vec<Domain>],
) -> Vec<Result<Vec<Tuple>, CoverageError>> {
    domain_sets
        .par_iter()
        .map(|domains| builder.build(domains))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_pairwise_coverage;
    use crate::domain::domains_from_sizes;

    #[test]
    fn test_batch_matches_sequential() {
        let sets: Vec<Vec<Domain>> = [&[5, 5, 2][..], &[10, 3, 6], &[3, 3, 3, 3]]
            .iter()
            .map(|sizes| domains_from_sizes(sizes).unwrap())
            .collect();

        let batch = build_many(&CoverageBuilder::new(), &sets);
        assert_eq!(batch.len(), 3);
        for (domains, result) in sets.iter().zip(&batch) {
            let sequential = build_pairwise_coverage(domains).unwrap();
            assert_eq!(result.as_ref().unwrap(), &sequential);
        }
    }

    #[test]
    fn test_batch_isolates_failures() {
        let sets = vec![
            domains_from_sizes(&[4]).unwrap(),
            domains_from_sizes(&[2, 2]).unwrap(),
        ];
        let batch = build_many(&CoverageBuilder::new(), &sets);
        assert!(batch[0].is_err());
        assert_eq!(batch[1].as_ref().unwrap().len(), 4);
    }
}
