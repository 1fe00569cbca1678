//! Pairwise requirements: every value pair across two distinct domains.

use serde::Serialize;

use crate::domain::{Domain, Value};

/// A pair of values from two different domains that must co-occur in
/// some output tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Requirement {
    a: Value,
    b: Value,
}

/// A requirement was built over a single domain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("requirement pairs {a} with {b}, both from domain {}", .a.domain)]
pub struct InvalidRequirementError {
    pub a: Value,
    pub b: Value,
}

impl Requirement {
    pub fn new(a: Value, b: Value) -> Result<Self, InvalidRequirementError> {
        if a.domain == b.domain {
            return Err(InvalidRequirementError { a, b });
        }
        Ok(Self { a, b })
    }

    pub fn a(&self) -> Value {
        self.a
    }

    pub fn b(&self) -> Value {
        self.b
    }
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}

/// Generate every pairwise requirement for the given domains.
///
/// Emission order is `i < j` over domain indices, then value of `i`, then
/// value of `j`; `a` always belongs to the lower-indexed domain. Fewer than
/// two domains yields nothing.
pub fn generate_requirements(
    domains: &[Domain],
) -> Result<Vec<Requirement>, InvalidRequirementError> {
    let mut requirements = Vec::with_capacity(requirement_count(domains));

    for i in 0..domains.len() {
        for j in (i + 1)..domains.len() {
            for a in domains[i].values(i) {
                for b in domains[j].values(j) {
                    requirements.push(Requirement::new(a, b)?);
                }
            }
        }
    }

    Ok(requirements)
}

/// Number of requirements `generate_requirements` would emit,
/// `Σ_{i<j} size_i * size_j`, computed without allocating them.
pub fn requirement_count(domains: &[Domain]) -> usize {
    let mut total = 0usize;
    let mut seen = 0usize;
    for domain in domains {
        total = total.saturating_add(seen.saturating_mul(domain.size()));
        seen = seen.saturating_add(domain.size());
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::domains_from_sizes;

    #[test]
    fn test_same_domain_requirement_rejected() {
        let err = Requirement::new(Value::new(1, 0), Value::new(1, 2)).unwrap_err();
        assert!(err.to_string().contains("domain 1"));
    }

    #[test]
    fn test_requirement_count_matches_generation() {
        // d0 x d1 = 3*2 = 6
        // d0 x d2 = 3*4 = 12
        // d1 x d2 = 2*4 = 8
        // Total: 26
        let domains = domains_from_sizes(&[3, 2, 4]).unwrap();
        assert_eq!(requirement_count(&domains), 26);
        assert_eq!(generate_requirements(&domains).unwrap().len(), 26);
    }

    #[test]
    fn test_generation_order_is_stable() {
        let domains = domains_from_sizes(&[2, 2]).unwrap();
        let reqs = generate_requirements(&domains).unwrap();
        let pairs: Vec<(usize, usize)> = reqs.iter().map(|r| (r.a().value, r.b().value)).collect();
        assert_eq!(pairs, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert!(reqs.iter().all(|r| r.a().domain == 0 && r.b().domain == 1));
    }

    #[test]
    fn test_lower_domain_always_first() {
        let domains = domains_from_sizes(&[2, 3, 2]).unwrap();
        for req in generate_requirements(&domains).unwrap() {
            assert!(req.a().domain < req.b().domain);
        }
    }

    #[test]
    fn test_single_domain_yields_nothing() {
        let domains = domains_from_sizes(&[7]).unwrap();
        assert!(generate_requirements(&domains).unwrap().is_empty());
        assert_eq!(requirement_count(&domains), 0);
    }
}
