use thiserror::Error;

/// Errors that can occur when setting up a search
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Maximum length must be between 1 and {max}, got {requested}")]
    InvalidMaxLength { requested: usize, max: usize },
}
