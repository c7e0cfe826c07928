use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Invalid dimension: {0}")]
    InvalidDimension(i64),
}
