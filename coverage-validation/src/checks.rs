//! Input-shape and ordering predicates.

use crate::interval::Bounded;

/// Whether every record defines both bounds.
pub fn check_is_valid_list<B: Bounded>(list: &[B]) -> bool {
    first_incomplete(list).is_none()
}

/// Position of the first record missing a bound, if any.
pub(crate) fn first_incomplete<B: Bounded>(list: &[B]) -> Option<usize> {
    list.iter()
        .position(|item| item.lower().is_none() || item.upper().is_none())
}

/// Whether `min` strictly increases from each record to the next.
///
/// Equal neighbouring `min` values fail the check, as does a missing bound.
/// Lists with fewer than two records are sorted.
pub fn check_is_sorted<B: Bounded>(list: &[B]) -> bool {
    list.windows(2).all(|pair| match (pair[0].lower(), pair[1].lower()) {
        (Some(prev), Some(next)) => prev < next,
        _ => false,
    })
}
