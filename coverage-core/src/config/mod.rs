//! Configuration system for coverage.
//! TOML-based, layered resolution: overrides > env > project > defaults.

pub mod coverage_config;
pub mod validation_config;

pub use coverage_config::{CoverageConfig, Overrides};
pub use validation_config::ValidationConfig;
