//! Interval records and the numeric bound abstraction.

use std::cmp::Ordering;
use std::fmt::Debug;

use serde::{Deserialize, Serialize};

/// A numeric bound type.
pub trait BoundValue: Copy + PartialOrd + Debug {
    /// Whether `next` starts more than one unit after `self`, i.e.
    /// `next - self > 1`, evaluated without overflow.
    fn leaves_gap_before(self, next: Self) -> bool;

    /// A total order used for sorting. Agrees with `PartialOrd` wherever
    /// that is defined.
    fn cmp_bound(&self, other: &Self) -> Ordering;
}

macro_rules! impl_bound_value_widening {
    ($($t:ty),*) => {
        $(
            impl BoundValue for $t {
                #[inline]
                fn leaves_gap_before(self, next: Self) -> bool {
                    (next as i128) - (self as i128) > 1
                }

                #[inline]
                fn cmp_bound(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

impl_bound_value_widening!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl BoundValue for i128 {
    #[inline]
    fn leaves_gap_before(self, next: Self) -> bool {
        // Overflow only happens when the operands sit far apart.
        next.checked_sub(self).map_or(next > self, |d| d > 1)
    }

    #[inline]
    fn cmp_bound(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl BoundValue for u128 {
    #[inline]
    fn leaves_gap_before(self, next: Self) -> bool {
        next > self && next - self > 1
    }

    #[inline]
    fn cmp_bound(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl BoundValue for f32 {
    #[inline]
    fn leaves_gap_before(self, next: Self) -> bool {
        next - self > 1.0
    }

    #[inline]
    fn cmp_bound(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl BoundValue for f64 {
    #[inline]
    fn leaves_gap_before(self, next: Self) -> bool {
        next - self > 1.0
    }

    #[inline]
    fn cmp_bound(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

/// A record exposing an inclusive lower and upper bound.
///
/// `None` means the bound is absent, which the validator treats as a
/// contract violation.
pub trait Bounded {
    type Value: BoundValue;

    fn lower(&self) -> Option<Self::Value>;
    fn upper(&self) -> Option<Self::Value>;
}

impl<B: Bounded + ?Sized> Bounded for &B {
    type Value = B::Value;

    fn lower(&self) -> Option<Self::Value> {
        (**self).lower()
    }

    fn upper(&self) -> Option<Self::Value> {
        (**self).upper()
    }
}

/// An inclusive interval. `min > max` is representable on purpose: the
/// validator reports it as a defect instead of rejecting it up front.
///
/// Extra fields present in serialized input are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval<T> {
    pub min: T,
    pub max: T,
}

impl<T> Interval<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: BoundValue> Bounded for Interval<T> {
    type Value = T;

    fn lower(&self) -> Option<T> {
        Some(self.min)
    }

    fn upper(&self) -> Option<T> {
        Some(self.max)
    }
}

/// An interval record whose bounds may be missing, e.g. one deserialized
/// from loosely structured input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawInterval<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T: BoundValue> Bounded for RawInterval<T> {
    type Value = T;

    fn lower(&self) -> Option<T> {
        self.min
    }

    fn upper(&self) -> Option<T> {
        self.max
    }
}

impl<T: BoundValue> Bounded for (T, T) {
    type Value = T;

    fn lower(&self) -> Option<T> {
        Some(self.0)
    }

    fn upper(&self) -> Option<T> {
        Some(self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abutting_integers_leave_no_gap() {
        assert!(!1i32.leaves_gap_before(2));
        assert!(2i32.leaves_gap_before(4));
        assert!(!5u8.leaves_gap_before(3));
    }

    #[test]
    fn widening_avoids_overflow_at_extremes() {
        assert!(i64::MIN.leaves_gap_before(i64::MAX));
        assert!(!i64::MAX.leaves_gap_before(i64::MIN));
        assert!(0u64.leaves_gap_before(u64::MAX));
    }

    #[test]
    fn i128_and_u128_extremes() {
        assert!(i128::MIN.leaves_gap_before(i128::MAX));
        assert!(!i128::MAX.leaves_gap_before(i128::MIN));
        assert!(!(i128::MAX - 1).leaves_gap_before(i128::MAX));
        assert!(0u128.leaves_gap_before(u128::MAX));
        assert!(!u128::MAX.leaves_gap_before(0));
    }

    #[test]
    fn floats_use_unit_spacing() {
        assert!(!1.0f64.leaves_gap_before(2.0));
        assert!(1.0f64.leaves_gap_before(2.5));
        assert!(!0.5f32.leaves_gap_before(1.0));
    }

    #[test]
    fn float_ordering_is_total() {
        assert_eq!(1.0f64.cmp_bound(&2.0), Ordering::Less);
        assert_eq!(f64::NAN.cmp_bound(&f64::NAN), Ordering::Equal);
    }

    #[test]
    fn raw_interval_reports_missing_bounds() {
        let raw: RawInterval<i32> = RawInterval {
            min: Some(1),
            max: None,
        };
        assert_eq!(raw.lower(), Some(1));
        assert_eq!(raw.upper(), None);
    }

    #[test]
    fn interval_ignores_unknown_fields() {
        let iv: Interval<i64> =
            serde_json::from_str(r#"{"min": 1, "max": 5, "label": "bronze"}"#).unwrap();
        assert_eq!(iv, Interval::new(1, 5));
    }
}
