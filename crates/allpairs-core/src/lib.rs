pub mod limits;
pub mod matrix;
pub mod report;

pub use matrix::{
    resolve_matrix, resolve_matrix_json, Matrix, MatrixConfig, MatrixError, MatrixRow,
};
