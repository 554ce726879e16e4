//! Validation defaults.

use serde::{Deserialize, Serialize};

/// Default option values applied when a caller does not pass its own.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ValidationConfig {
    /// Require the input to already be strictly increasing by `min`. Default: false.
    pub is_sorted: Option<bool>,
    /// Report exact duplicates as "Duplicated item" instead of as overlaps. Default: true.
    pub report_duplicates: Option<bool>,
}

impl ValidationConfig {
    /// Returns the effective sortedness requirement, defaulting to false.
    pub fn effective_is_sorted(&self) -> bool {
        self.is_sorted.unwrap_or(false)
    }

    /// Returns the effective duplicate reporting mode, defaulting to true.
    pub fn effective_report_duplicates(&self) -> bool {
        self.report_duplicates.unwrap_or(true)
    }
}
