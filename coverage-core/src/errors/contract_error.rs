//! Caller-contract violations.
//!
//! These describe a malformed call rather than a defective partition, so they
//! are returned as `Err` instead of being folded into a validation report.

use super::error_code::{self, CoverageErrorCode};

/// Errors raised when the validator is called with malformed input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    #[error("First argument must be an array")]
    NotASequence,

    #[error("Second argument must be an object")]
    NotAConfiguration,

    /// `index` is the position of the first offending record.
    #[error(r#"The items inside list must contain both "min" and "max" key"#)]
    MissingBounds { index: usize },

    #[error(r#"The "{field}" bound of item {index} must be a number"#)]
    NonNumericBound { index: usize, field: &'static str },
}

impl CoverageErrorCode for ContractError {
    fn error_code(&self) -> &'static str {
        error_code::CONTRACT_VIOLATION
    }
}
