//! # coverage-validation
//!
//! Checks that a collection of inclusive `[min, max]` intervals forms an
//! exhaustive, non-overlapping partition of the range it covers.
//!
//! Contract violations (malformed input) are returned as
//! [`ContractError`](coverage_core::ContractError). A well-formed but defective
//! partition is reported through [`PartitionReport::Defective`], with every
//! defect attributed to the caller's original position of each interval.
//!
//! ## Checks
//! 1. **Inverted bounds** — `min > max`
//! 2. **Overlap** — previous `max` greater than next `min`
//! 3. **Gap** — next `min` more than one past previous `max`
//! 4. **Duplicate** — identical neighbours (optional, see [`ValidateOptions`])
//! 5. **Sortedness gate** — with `is_sorted`, the input must already be
//!    strictly increasing by `min`

pub mod checks;
pub mod engine;
pub mod interval;
pub mod json;
pub mod options;
pub mod report;

pub use checks::{check_is_sorted, check_is_valid_list};
pub use engine::{validate, ValidationEngine};
pub use interval::{BoundValue, Bounded, Interval, RawInterval};
pub use json::validate_value;
pub use options::ValidateOptions;
pub use report::{Defect, ErrorKey, ErrorMap, PartitionReport};
