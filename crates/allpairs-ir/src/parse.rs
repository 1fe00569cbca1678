use crate::types::ParameterSpace;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Deserialize a parameter space from JSON.
///
/// The `parameters` array keeps its order: a parameter's position becomes
/// its domain index, and every resolved row lists its cells in that order.
/// Structural checks are left to [`crate::validate::validate_space`].
pub fn parse_space(json: &str) -> Result<ParameterSpace, ParseError> {
    Ok(serde_json::from_str(json)?)
}
