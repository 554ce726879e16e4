//! Validation of loosely typed JSON input.
//!
//! Performs the caller-contract checks that a typed API gets for free: the
//! list must be an array, options must be an object, and each record must
//! carry numeric `min` and `max` bounds. Bounds are read as `f64`.

use coverage_core::errors::{ContractError, CoverageErrorCode};
use serde_json::Value;
use tracing::warn;

use crate::engine;
use crate::interval::Interval;
use crate::options::ValidateOptions;
use crate::report::PartitionReport;

/// Validate a JSON array of `{ "min": .., "max": .. }` records.
///
/// `options`, when given, must be a JSON object; `isSorted` and
/// `reportDuplicates` are read from it and unknown keys are ignored.
/// Extra fields on each record are ignored.
pub fn validate_value(
    list: &Value,
    options: Option<&Value>,
) -> Result<PartitionReport, ContractError> {
    validate_value_with(list, options, ValidateOptions::default())
}

pub(crate) fn validate_value_with(
    list: &Value,
    options: Option<&Value>,
    base: ValidateOptions,
) -> Result<PartitionReport, ContractError> {
    let (intervals, options) = parse_arguments(list, options, base).inspect_err(|err| {
        warn!(code = err.error_code(), %err, "rejected malformed validation call");
    })?;
    engine::validate(&intervals, &options)
}

fn parse_arguments(
    list: &Value,
    options: Option<&Value>,
    base: ValidateOptions,
) -> Result<(Vec<Interval<f64>>, ValidateOptions), ContractError> {
    let items = list.as_array().ok_or(ContractError::NotASequence)?;

    let options = match options {
        None => base,
        Some(Value::Object(obj)) => base.overlay_json_object(obj),
        Some(_) => return Err(ContractError::NotAConfiguration),
    };

    // Presence is checked across the whole list before any bound is parsed,
    // so a missing key anywhere wins over a non-numeric one.
    if let Some(index) = items
        .iter()
        .position(|item| !has_bound(item, "min") || !has_bound(item, "max"))
    {
        return Err(ContractError::MissingBounds { index });
    }

    let intervals = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            Ok(Interval::new(
                numeric_bound(index, item, "min")?,
                numeric_bound(index, item, "max")?,
            ))
        })
        .collect::<Result<Vec<_>, ContractError>>()?;

    Ok((intervals, options))
}

/// JSON has no `undefined`; an explicit `null` counts as missing.
fn has_bound(item: &Value, field: &str) -> bool {
    !matches!(item.get(field), None | Some(Value::Null))
}

fn numeric_bound(index: usize, item: &Value, field: &'static str) -> Result<f64, ContractError> {
    item.get(field)
        .and_then(Value::as_f64)
        .ok_or(ContractError::NonNumericBound { index, field })
}
