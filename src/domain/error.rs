use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidQuantity { field: &'static str, value: f64 },
}
