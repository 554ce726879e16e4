//! # coverage-core
//!
//! Foundation crate for the coverage partition validator.
//! Defines errors, error codes, configuration, and tracing setup shared by
//! every other crate in the workspace.

pub mod config;
pub mod errors;
pub mod tracing;

pub use config::{CoverageConfig, ValidationConfig};
pub use errors::{ConfigError, ContractError, CoverageErrorCode};
