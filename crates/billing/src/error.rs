//! Billing error types

use thiserror::Error;

/// Broad classification of a [`BillingError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required argument was absent or malformed
    InvalidArgument,
    /// A numeric argument fell outside its permitted range
    OutOfRange,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BillingError {
    #[error("Subscriber id is required")]
    MissingId,

    #[error("Subscriber region is required")]
    MissingRegion,

    #[error("Base price cannot be negative (got {0})")]
    NegativeBasePrice(f64),

    #[error("No subscriber supplied")]
    NoSubscriber,
}

impl BillingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BillingError::MissingId | BillingError::MissingRegion | BillingError::NoSubscriber => {
                ErrorKind::InvalidArgument
            }
            BillingError::NegativeBasePrice(_) => ErrorKind::OutOfRange,
        }
    }
}

pub type BillingResult<T> = Result<T, BillingError>;
