use std::collections::HashSet;

use crate::types::ParameterSpace;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpaceError {
    #[error("Parameter space declares no parameters")]
    NoParameters,

    #[error("Parameter at position {position} has an empty name")]
    EmptyName { position: usize },

    #[error("Duplicate parameter name '{name}'")]
    DuplicateName { name: String },

    #[error("Parameter '{name}' has no candidate values")]
    NoValues { name: String },
}

/// Structural checks on a parsed parameter space. Reports every problem
/// found, not just the first.
pub fn validate_space(space: &ParameterSpace) -> Result<(), Vec<SpaceError>> {
    let mut errors = Vec::new();

    if space.parameters.is_empty() {
        errors.push(SpaceError::NoParameters);
    }

    let mut seen = HashSet::new();
    for (position, param) in space.parameters.iter().enumerate() {
        if param.name.is_empty() {
            errors.push(SpaceError::EmptyName { position });
        } else if !seen.insert(param.name.as_str()) {
            errors.push(SpaceError::DuplicateName {
                name: param.name.clone(),
            });
        }
        if param.values.is_empty() {
            errors.push(SpaceError::NoValues {
                name: param.name.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
