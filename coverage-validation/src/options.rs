//! Per-call validation options.

use coverage_core::config::ValidationConfig;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Options controlling a single validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidateOptions {
    /// Assert the input is already strictly increasing by `min`. When it is
    /// not, validation stops with a single global defect.
    pub is_sorted: bool,
    /// Report identical neighbours as "Duplicated item" rather than as an
    /// overlap pair.
    pub report_duplicates: bool,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            is_sorted: false,
            report_duplicates: true,
        }
    }
}

impl ValidateOptions {
    pub fn sorted() -> Self {
        Self {
            is_sorted: true,
            ..Self::default()
        }
    }

    /// Read options from a loosely typed JSON object, starting from defaults.
    pub fn from_json_object(obj: &Map<String, Value>) -> Self {
        Self::default().overlay_json_object(obj)
    }

    /// Replace flags that `obj` sets to a JSON boolean. Non-boolean values
    /// and unknown keys leave `self` untouched.
    pub fn overlay_json_object(mut self, obj: &Map<String, Value>) -> Self {
        if let Some(v) = obj.get("isSorted").and_then(Value::as_bool) {
            self.is_sorted = v;
        }
        if let Some(v) = obj.get("reportDuplicates").and_then(Value::as_bool) {
            self.report_duplicates = v;
        }
        self
    }
}

impl From<&ValidationConfig> for ValidateOptions {
    fn from(config: &ValidationConfig) -> Self {
        Self {
            is_sorted: config.effective_is_sorted(),
            report_duplicates: config.effective_report_duplicates(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults() {
        let opts = ValidateOptions::default();
        assert!(!opts.is_sorted);
        assert!(opts.report_duplicates);
    }

    #[test]
    fn json_object_only_honours_boolean_true() {
        let obj = json!({ "isSorted": "yes", "other": 1 });
        let opts = ValidateOptions::from_json_object(obj.as_object().unwrap());
        assert!(!opts.is_sorted);

        let obj = json!({ "isSorted": true, "reportDuplicates": false });
        let opts = ValidateOptions::from_json_object(obj.as_object().unwrap());
        assert!(opts.is_sorted);
        assert!(!opts.report_duplicates);
    }

    #[test]
    fn overlay_keeps_base_for_non_boolean_values() {
        let obj = json!({ "isSorted": 1, "reportDuplicates": null });
        let base = ValidateOptions {
            is_sorted: true,
            report_duplicates: false,
        };
        assert_eq!(base.overlay_json_object(obj.as_object().unwrap()), base);
    }

    #[test]
    fn camel_case_deserialization_fills_defaults() {
        let opts: ValidateOptions = serde_json::from_str(r#"{"isSorted": true}"#).unwrap();
        assert_eq!(opts, ValidateOptions::sorted());
    }

    #[test]
    fn built_from_config() {
        let config = ValidationConfig {
            is_sorted: Some(true),
            report_duplicates: None,
        };
        let opts = ValidateOptions::from(&config);
        assert!(opts.is_sorted);
        assert!(opts.report_duplicates);
    }
}
