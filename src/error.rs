// src/error.rs

use thiserror::Error;

/// Fatal failures of the newsvendor computation.
///
/// Degenerate-but-computable economics (e.g. selling below cost) are NOT
/// errors; they are surfaced as warnings alongside a full result set.
#[derive(Debug, Error, PartialEq)]
pub enum NewsvendorError {
    #[error("invalid price input: {0}")]
    InvalidPriceInput(String),

    #[error("invalid demand distribution: {0}")]
    InvalidDistribution(String),

    #[error("no candidate order quantities to evaluate")]
    EmptyDomain,
}

pub type Result<T> = std::result::Result<T, NewsvendorError>;
