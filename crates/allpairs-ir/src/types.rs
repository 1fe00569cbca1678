use serde::{Deserialize, Serialize};

/// A parameter space: ordered parameters plus coverage settings.
///
/// Parameter order is significant. A parameter's position is the domain
/// index the solver uses for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpace {
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub coverage: CoverageConfig,
}

/// One test parameter and its literal candidate values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub values: Vec<serde_json::Value>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, values: Vec<serde_json::Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageConfig {
    #[serde(default)]
    pub strategy: Strategy,
    #[serde(default)]
    pub order: Ordering,
}

/// How combinations are generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Every value pair across two parameters, greedy reduction.
    #[default]
    Pairwise,
    /// Full cross product.
    Cartesian,
}

/// Order in which pairwise requirements are consumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ordering {
    #[default]
    AscendingScore,
    Generation,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Pairwise => write!(f, "pairwise"),
            Strategy::Cartesian => write!(f, "cartesian"),
        }
    }
}
