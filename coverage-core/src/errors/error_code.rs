//! CoverageErrorCode trait for machine-readable error reporting.

/// Every error enum implements this to provide a stable code string that
/// callers can match on without parsing messages.
pub trait CoverageErrorCode {
    /// Returns the error code string (e.g., "CONTRACT_VIOLATION").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONTRACT_VIOLATION: &str = "CONTRACT_VIOLATION";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
