use thiserror::Error;
use uuid::Uuid;

use crate::ledger::Category;

/// Reasons a form submission is rejected before it reaches the ledger.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Description must not be empty")]
    EmptyDescription,
    #[error("Amount is required")]
    MissingAmount,
    #[error("Amount is not a number: {0}")]
    InvalidAmount(String),
    #[error("Amount must be greater than zero")]
    NonPositiveAmount,
    #[error("Amount must not be negative")]
    NegativeAmount,
    #[error("Invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

/// Error type for configuration files and for data read back into ledger types.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Duplicate budget for category: {0}")]
    DuplicateBudget(Category),
    #[error("Duplicate transaction id: {0}")]
    DuplicateTransaction(Uuid),
    #[error("Month out of range (expected 1-12): {0}")]
    InvalidMonth(u32),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
