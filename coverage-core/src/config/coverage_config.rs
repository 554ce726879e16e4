//! Top-level coverage configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ValidationConfig;
use crate::errors::ConfigError;

/// Name of the project-level config file looked up by [`CoverageConfig::load`].
pub const PROJECT_CONFIG_FILE: &str = "coverage.toml";

pub const ENV_IS_SORTED: &str = "COVERAGE_VALIDATION_IS_SORTED";
pub const ENV_REPORT_DUPLICATES: &str = "COVERAGE_VALIDATION_REPORT_DUPLICATES";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (applied via `apply_overrides`)
/// 2. Environment variables (`COVERAGE_*`)
/// 3. Project config (`coverage.toml` in the given root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CoverageConfig {
    pub validation: ValidationConfig,
}

/// Overrides supplied by the embedding application. Highest priority.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub is_sorted: Option<bool>,
    pub report_duplicates: Option<bool>,
}

impl CoverageConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&Overrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            tracing::debug!(path = %project_config_path.display(), "merged project config");
        }

        Self::apply_env_overrides(&mut config)?;

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut CoverageConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: CoverageConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut CoverageConfig, other: &CoverageConfig) {
        if other.validation.is_sorted.is_some() {
            base.validation.is_sorted = other.validation.is_sorted;
        }
        if other.validation.report_duplicates.is_some() {
            base.validation.report_duplicates = other.validation.report_duplicates;
        }
    }

    /// Apply `COVERAGE_VALIDATION_*` environment variables.
    ///
    /// A set but unparsable variable is an error rather than a silent default.
    fn apply_env_overrides(config: &mut CoverageConfig) -> Result<(), ConfigError> {
        if let Some(v) = env_bool(ENV_IS_SORTED)? {
            config.validation.is_sorted = Some(v);
        }
        if let Some(v) = env_bool(ENV_REPORT_DUPLICATES)? {
            config.validation.report_duplicates = Some(v);
        }
        Ok(())
    }

    fn apply_overrides(config: &mut CoverageConfig, overrides: &Overrides) {
        if let Some(v) = overrides.is_sorted {
            config.validation.is_sorted = Some(v);
        }
        if let Some(v) = overrides.report_duplicates {
            config.validation.report_duplicates = Some(v);
        }
    }
}

fn env_bool(key: &str) -> Result<Option<bool>, ConfigError> {
    match std::env::var(key) {
        Ok(val) => val
            .trim()
            .parse::<bool>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                field: key.to_string(),
                message: format!("expected `true` or `false`, got {val:?}"),
            }),
        Err(_) => Ok(None),
    }
}
