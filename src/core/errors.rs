//! Shared error types for the application

use thiserror::Error;

/// Invalid numeric input to a formula or classifier. These are fail-fast
/// guards; no function in the calculation path ever returns NaN or infinity.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A required divisor or base was zero or negative
    #[error("{name} must be greater than zero (got {value})")]
    NonPositiveInput { name: &'static str, value: f64 },

    /// A value that may not go below zero was negative
    #[error("{name} may not be negative (got {value})")]
    NegativeInput { name: &'static str, value: f64 },

    /// A rate parameter fell outside its natural [0, 1] domain
    #[error("{name} must be a fraction between 0 and 1 (got {value})")]
    RateOutOfRange { name: &'static str, value: f64 },

    /// A payback period cannot be derived from a zero lifetime value
    #[error("payback period is undefined for a zero lifetime value")]
    ZeroLifetimeValue,

    /// A scenario tag outside the closed set
    #[error("unknown scenario tag: {0}")]
    UnknownScenario(String),
}

/// Persistence failure from the record store. The cause is opaque to the
/// calculation core and surfaced unchanged to the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read records: {0}")]
    Read(#[source] anyhow::Error),

    #[error("failed to persist record: {0}")]
    Write(#[source] anyhow::Error),
}

/// Main error type for ltvmap operations
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, Error>;
