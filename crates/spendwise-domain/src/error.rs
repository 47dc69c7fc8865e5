use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Unknown expense category: {0}")]
    UnknownCategory(String),
    #[error("Invalid period: {start} is not before {end}")]
    InvalidPeriod { start: NaiveDate, end: NaiveDate },
    #[error("Validation failed: {0}")]
    Validation(String),
}
