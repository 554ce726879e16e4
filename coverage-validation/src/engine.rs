//! The partition validator: normalization, the optional sortedness gate,
//! and the single adjacency scan over intervals sorted by `min`.

use coverage_core::config::CoverageConfig;
use coverage_core::errors::{ContractError, CoverageErrorCode};
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::checks::{check_is_sorted, first_incomplete};
use crate::interval::{BoundValue, Bounded};
use crate::json;
use crate::options::ValidateOptions;
use crate::report::{Defect, ErrorKey, ErrorMap, PartitionReport};

/// An interval's bounds paired with its position in the caller's input.
/// The caller's records are never touched.
#[derive(Debug, Clone, Copy)]
struct Indexed<T> {
    original_index: usize,
    min: T,
    max: T,
}

impl<T: BoundValue> Indexed<T> {
    fn same_bounds(&self, other: &Self) -> bool {
        self.min == other.min && self.max == other.max
    }
}

/// Validate that `list` forms an exhaustive, non-overlapping partition.
///
/// Returns `Err` only for contract violations (a record missing a bound).
/// Every defect of a well-formed list is reported in the returned
/// [`PartitionReport`], keyed by the interval's original position.
pub fn validate<B: Bounded>(
    list: &[B],
    options: &ValidateOptions,
) -> Result<PartitionReport, ContractError> {
    let spans = index_spans(list).inspect_err(|err| {
        warn!(code = err.error_code(), %err, "rejected malformed interval list");
    })?;

    if spans.len() < 2 {
        return Ok(PartitionReport::Exhaustive);
    }

    debug!(
        len = spans.len(),
        is_sorted = options.is_sorted,
        report_duplicates = options.report_duplicates,
        "validating interval partition"
    );

    if options.is_sorted && !check_is_sorted(list) {
        debug!("input not strictly increasing by min");
        let mut errors = ErrorMap::new();
        errors.add(ErrorKey::All, Defect::NotSorted);
        return Ok(PartitionReport::Defective(errors));
    }

    let errors = scan(spans, options);
    if !errors.is_empty() {
        debug!(defective = errors.len(), "partition has defects");
    }
    Ok(PartitionReport::from_errors(errors))
}

fn index_spans<B: Bounded>(list: &[B]) -> Result<Vec<Indexed<B::Value>>, ContractError> {
    if let Some(index) = first_incomplete(list) {
        return Err(ContractError::MissingBounds { index });
    }
    Ok(list
        .iter()
        .enumerate()
        .filter_map(|(original_index, item)| {
            Some(Indexed {
                original_index,
                min: item.lower()?,
                max: item.upper()?,
            })
        })
        .collect())
}

fn scan<T: BoundValue>(mut spans: Vec<Indexed<T>>, options: &ValidateOptions) -> ErrorMap {
    // Stable: equal `min` values keep their input order.
    spans.sort_by(|a, b| a.min.cmp_bound(&b.min));

    let mut errors = ErrorMap::new();
    let mut previous: Option<&Indexed<T>> = None;

    for current in &spans {
        if current.min > current.max {
            record(&mut errors, current.original_index, Defect::InvertedBounds);
        }

        if let Some(prev) = previous {
            if options.report_duplicates && prev.same_bounds(current) {
                record_once(&mut errors, prev.original_index, Defect::Duplicated);
                record_once(&mut errors, current.original_index, Defect::Duplicated);
            } else if prev.max > current.min {
                record(&mut errors, prev.original_index, Defect::OverlapsNext);
                record(&mut errors, current.original_index, Defect::OverlapsPrevious);
            }

            if prev.max.leaves_gap_before(current.min) {
                record(&mut errors, prev.original_index, Defect::GapBeforeNext);
                record(&mut errors, current.original_index, Defect::GapAfterPrevious);
            }
        }

        previous = Some(current);
    }

    errors
}

fn record(errors: &mut ErrorMap, index: usize, defect: Defect) {
    trace!(index, ?defect, "recorded defect");
    errors.add(ErrorKey::Index(index), defect);
}

fn record_once(errors: &mut ErrorMap, index: usize, defect: Defect) {
    trace!(index, ?defect, "recorded defect");
    errors.add_once(ErrorKey::Index(index), defect);
}

/// Validator bound to a set of default options, typically resolved from
/// [`CoverageConfig`].
#[derive(Debug, Clone, Default)]
pub struct ValidationEngine {
    options: ValidateOptions,
}

impl ValidationEngine {
    pub fn new(options: ValidateOptions) -> Self {
        Self { options }
    }

    pub fn from_config(config: &CoverageConfig) -> Self {
        Self::new(ValidateOptions::from(&config.validation))
    }

    /// Get the engine's default options.
    pub fn options(&self) -> &ValidateOptions {
        &self.options
    }

    /// Validate with the engine's default options.
    pub fn validate<B: Bounded>(&self, list: &[B]) -> Result<PartitionReport, ContractError> {
        validate(list, &self.options)
    }

    /// Validate with explicit options, ignoring the engine defaults.
    pub fn validate_with<B: Bounded>(
        &self,
        list: &[B],
        options: &ValidateOptions,
    ) -> Result<PartitionReport, ContractError> {
        validate(list, options)
    }

    /// Validate loosely typed JSON input. Flags present in `options`
    /// override the engine defaults.
    pub fn validate_value(
        &self,
        list: &Value,
        options: Option<&Value>,
    ) -> Result<PartitionReport, ContractError> {
        json::validate_value_with(list, options, self.options)
    }
}
