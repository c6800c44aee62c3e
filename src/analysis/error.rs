use thiserror::Error;

use crate::models::TableError;

#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error(transparent)]
    Table(#[from] TableError),
    #[error("regression needs at least one independent variable")]
    NoRegressors,
    #[error("not enough complete observations: {observations} rows for {parameters} parameters")]
    InsufficientObservations {
        observations: usize,
        parameters: usize,
    },
    #[error("design matrix is singular (collinear regressors?)")]
    SingularMatrix,
    #[error("variable '{0}' is not among the analysed columns")]
    UnknownVariable(String),
    #[error("distribution error: {0}")]
    Distribution(String),
}
