//! Parameter axes and the values drawn from them.
//!
//! A [`Domain`] is identified everywhere else by its index in the
//! caller-supplied list; a [`Value`] is a `(domain index, value index)` pair.

use serde::{Deserialize, Serialize};

/// One independent parameter axis with a fixed number of candidate values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Domain {
    name: String,
    size: usize,
}

/// Malformed domain configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("domain '{name}' has no candidate values")]
    EmptyDomain { name: String },

    #[error("no domains given")]
    NoDomains,

    #[error("pairwise coverage needs at least two domains, got {count}")]
    TooFewDomains { count: usize },
}

impl Domain {
    /// Create a domain with `size` candidate values. `size` must be positive.
    pub fn new(name: impl Into<String>, size: usize) -> Result<Self, ConfigurationError> {
        let name = name.into();
        if size == 0 {
            return Err(ConfigurationError::EmptyDomain { name });
        }
        Ok(Self { name, size })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Iterate every value of this domain, given the domain's index.
    pub fn values(&self, index: usize) -> impl Iterator<Item = Value> {
        (0..self.size).map(move |value| Value::new(index, value))
    }
}

/// Build anonymous domains `d0, d1, ...` from bare sizes.
pub fn domains_from_sizes(sizes: &[usize]) -> Result<Vec<Domain>, ConfigurationError> {
    sizes
        .iter()
        .enumerate()
        .map(|(i, &size)| Domain::new(format!("d{i}"), size))
        .collect()
}

/// One concrete candidate: value `value` of domain `domain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Value {
    pub domain: usize,
    pub value: usize,
}

impl Value {
    pub fn new(domain: usize, value: usize) -> Self {
        Self { domain, value }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}={}", self.domain, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_domain_rejected() {
        let err = Domain::new("browser", 0).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::EmptyDomain {
                name: "browser".into()
            }
        );
        assert!(err.to_string().contains("browser"));
    }

    #[test]
    fn test_domain_values_carry_index() {
        let domain = Domain::new("width", 3).unwrap();
        let values: Vec<Value> = domain.values(2).collect();
        assert_eq!(
            values,
            vec![Value::new(2, 0), Value::new(2, 1), Value::new(2, 2)]
        );
    }

    #[test]
    fn test_domains_from_sizes_names_by_position() {
        let domains = domains_from_sizes(&[2, 4]).unwrap();
        assert_eq!(domains[0].name(), "d0");
        assert_eq!(domains[1].name(), "d1");
        assert_eq!(domains[1].size(), 4);
    }

    #[test]
    fn test_domains_from_sizes_fails_on_empty() {
        assert!(domains_from_sizes(&[3, 0, 2]).is_err());
    }

    #[test]
    fn test_value_ordering_is_domain_major() {
        assert!(Value::new(0, 9) < Value::new(1, 0));
        assert!(Value::new(1, 0) < Value::new(1, 1));
    }
}
