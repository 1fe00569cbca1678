//! Resolve a parameter space into concrete argument rows.
//!
//! Parameters become solver domains by position, the selected strategy
//! produces tuples, and each tuple's value indices are zipped back against
//! the parameters' literal candidate values.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use allpairs_ir::parse::{parse_space, ParseError};
use allpairs_ir::types::{Ordering, ParameterSpace, Strategy};
use allpairs_ir::validate::{validate_space, SpaceError};
use allpairs_solver::{
    build_cartesian, ConfigurationError, CoverageBuilder, CoverageError, Domain,
    InvalidRequirementError, RequirementOrder, Tuple,
};

use crate::limits::{check_limits, LimitViolation, MatrixLimits};
use crate::report::CoverageReport;

#[derive(Debug, thiserror::Error)]
pub enum MatrixError {
    #[error("Parameter space parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Invalid parameter space: {}", join_errors(.0))]
    Invalid(Vec<SpaceError>),

    #[error("Limit exceeded: {0}")]
    Limit(#[from] LimitViolation),

    #[error("Coverage generation failed: {0}")]
    Coverage(#[from] CoverageError),
}

impl From<ConfigurationError> for MatrixError {
    fn from(err: ConfigurationError) -> Self {
        Self::Coverage(err.into())
    }
}

impl From<InvalidRequirementError> for MatrixError {
    fn from(err: InvalidRequirementError) -> Self {
        Self::Coverage(err.into())
    }
}

fn join_errors(errors: &[SpaceError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Configuration passed explicitly by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatrixConfig {
    /// Bounds checked before generation.
    #[serde(default)]
    pub limits: MatrixLimits,
    /// Overrides the space's own strategy when set.
    #[serde(default)]
    pub strategy_override: Option<Strategy>,
}

/// One named argument within a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub name: String,
    pub value: serde_json::Value,
}

/// One concrete combination, cells in parameter order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixRow {
    pub cells: Vec<Cell>,
}

impl MatrixRow {
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.cells.iter().find(|c| c.name == name).map(|c| &c.value)
    }

    /// Display label such as `browser=chrome, width=320`.
    pub fn label(&self) -> String {
        self.cells
            .iter()
            .map(|c| match &c.value {
                serde_json::Value::String(s) => format!("{}={s}", c.name),
                other => format!("{}={other}", c.name),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A resolved parameter space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Matrix {
    pub rows: Vec<MatrixRow>,
    pub report: CoverageReport,
}

/// One solver domain per parameter, in parameter order.
pub fn domains_for(space: &ParameterSpace) -> Result<Vec<Domain>, ConfigurationError> {
    space
        .parameters
        .iter()
        .map(|p| Domain::new(p.name.clone(), p.values.len()))
        .collect()
}

fn requirement_order(order: Ordering) -> RequirementOrder {
    match order {
        Ordering::AscendingScore => RequirementOrder::AscendingScore,
        Ordering::Generation => RequirementOrder::Generation,
    }
}

/// Resolve `space` into argument rows under `config`.
pub fn resolve_matrix(
    space: &ParameterSpace,
    config: &MatrixConfig,
) -> Result<Matrix, MatrixError> {
    validate_space(space).map_err(MatrixError::Invalid)?;
    let domains = domains_for(space)?;
    let strategy = config.strategy_override.unwrap_or(space.coverage.strategy);

    if let Err(violation) = check_limits(&domains, strategy, &config.limits) {
        warn!(%violation, %strategy, "parameter space rejected");
        return Err(violation.into());
    }

    let builder = CoverageBuilder::with_order(requirement_order(space.coverage.order));
    let tuples = match strategy {
        Strategy::Pairwise => builder.build(&domains)?,
        Strategy::Cartesian => build_cartesian(&domains)?,
    };

    let report = CoverageReport::from_tuples(strategy, &domains, &tuples)?;
    let rows = tuples.iter().map(|t| materialize(space, t)).collect();

    info!(
        %strategy,
        parameters = report.parameters,
        requirements = report.requirements,
        tuples = report.tuples,
        cartesian_size = report.cartesian_size,
        "resolved parameter matrix"
    );

    Ok(Matrix { rows, report })
}

/// Parse, validate and resolve a JSON parameter space.
pub fn resolve_matrix_json(json: &str, config: &MatrixConfig) -> Result<Matrix, MatrixError> {
    let space = parse_space(json)?;
    resolve_matrix(&space, config)
}

/// Zip a finished tuple back against the literal candidate values.
fn materialize(space: &ParameterSpace, tuple: &Tuple) -> MatrixRow {
    let cells = space
        .parameters
        .iter()
        .enumerate()
        .map(|(i, param)| Cell {
            name: param.name.clone(),
            value: param.values[tuple.value(i)].clone(),
        })
        .collect();
    MatrixRow { cells }
}

#[cfg(test)]
mod tests {
    use super::*;
    use allpairs_ir::types::{CoverageConfig, Parameter};
    use serde_json::json;

    fn space(parameters: Vec<Parameter>) -> ParameterSpace {
        ParameterSpace {
            parameters,
            coverage: CoverageConfig::default(),
        }
    }

    #[test]
    fn test_materialize_zips_values() {
        let s = space(vec![
            Parameter::new("browser", vec![json!("chrome"), json!("firefox")]),
            Parameter::new("width", vec![json!(320), json!(1024), json!(1440)]),
        ]);
        let row = materialize(&s, &Tuple::from_values(vec![1, 2]));
        assert_eq!(row.get("browser"), Some(&json!("firefox")));
        assert_eq!(row.get("width"), Some(&json!(1440)));
        assert_eq!(row.get("locale"), None);
        assert_eq!(row.label(), "browser=firefox, width=1440");
    }

    #[test]
    fn test_domains_follow_parameter_order() {
        let s = space(vec![
            Parameter::new("b", vec![json!(1)]),
            Parameter::new("a", vec![json!(1), json!(2)]),
        ]);
        let domains = domains_for(&s).unwrap();
        assert_eq!(domains[0].name(), "b");
        assert_eq!(domains[1].size(), 2);
    }

    #[test]
    fn test_strategy_override() {
        let s = space(vec![
            Parameter::new("a", vec![json!(1), json!(2)]),
            Parameter::new("b", vec![json!(1), json!(2)]),
            Parameter::new("c", vec![json!(1), json!(2)]),
        ]);
        let config = MatrixConfig {
            strategy_override: Some(Strategy::Cartesian),
            ..Default::default()
        };
        let matrix = resolve_matrix(&s, &config).unwrap();
        assert_eq!(matrix.rows.len(), 8);
        assert_eq!(matrix.report.strategy, Strategy::Cartesian);
    }

    #[test]
    fn test_invalid_space_reports_all_errors() {
        let s = space(vec![
            Parameter::new("a", vec![]),
            Parameter::new("a", vec![json!(1)]),
        ]);
        let err = resolve_matrix(&s, &MatrixConfig::default()).unwrap_err();
        match &err {
            MatrixError::Invalid(errors) => assert_eq!(errors.len(), 2),
            other => panic!("expected Invalid, got {other:?}"),
        }
        assert!(err.to_string().contains("; "));
    }
}
