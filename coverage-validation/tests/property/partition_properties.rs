use coverage_validation::{
    validate, Defect, ErrorKey, Interval, PartitionReport, ValidateOptions,
};
use proptest::prelude::*;

/// A contiguous partition starting at `start`, one interval per width.
fn contiguous(start: i64, widths: &[u8]) -> Vec<Interval<i64>> {
    let mut next = start;
    widths
        .iter()
        .map(|w| {
            let iv = Interval::new(next, next + i64::from(*w));
            next += i64::from(*w) + 1;
            iv
        })
        .collect()
}

fn partition() -> impl Strategy<Value = Vec<Interval<i64>>> {
    (-1_000i64..1_000, prop::collection::vec(0u8..20, 0..40))
        .prop_map(|(start, widths)| contiguous(start, &widths))
}

proptest! {
    #[test]
    fn contiguous_partition_is_exhaustive(list in partition()) {
        let report = validate(&list, &ValidateOptions::default()).unwrap();
        prop_assert_eq!(report, PartitionReport::Exhaustive);
    }

    #[test]
    fn contiguous_partition_passes_sorted_gate(list in partition()) {
        let report = validate(&list, &ValidateOptions::sorted()).unwrap();
        prop_assert!(report.is_exhaustive());
    }

    #[test]
    fn order_does_not_matter(list in partition().prop_shuffle()) {
        let report = validate(&list, &ValidateOptions::default()).unwrap();
        prop_assert!(report.is_exhaustive());
    }

    #[test]
    fn unsorted_input_fails_gate_with_single_global_defect(
        list in partition().prop_filter("needs two items", |l| l.len() >= 2),
        seed in any::<prop::sample::Index>(),
    ) {
        let mut list = list;
        let i = seed.index(list.len() - 1);
        list.swap(i, i + 1);

        let report = validate(&list, &ValidateOptions::sorted()).unwrap();
        let errors = report.errors().unwrap();
        prop_assert_eq!(errors.len(), 1);
        prop_assert_eq!(errors.get(ErrorKey::All), Some(&[Defect::NotSorted][..]));
    }

    #[test]
    fn widening_a_gap_blames_both_neighbours(
        list in partition().prop_filter("needs two items", |l| l.len() >= 2),
        seed in any::<prop::sample::Index>(),
        shift in 1i64..50,
    ) {
        let mut list = list;
        let split = seed.index(list.len() - 1) + 1;
        for iv in &mut list[split..] {
            iv.min += shift;
            iv.max += shift;
        }

        let report = validate(&list, &ValidateOptions::default()).unwrap();
        let errors = report.errors().unwrap();
        prop_assert_eq!(errors.len(), 2);
        prop_assert_eq!(errors.at(split - 1), Some(&[Defect::GapBeforeNext][..]));
        prop_assert_eq!(errors.at(split), Some(&[Defect::GapAfterPrevious][..]));
    }

    #[test]
    fn every_key_refers_to_an_input_position(
        raw in prop::collection::vec((-50i64..50, -50i64..50), 0..30),
        is_sorted in any::<bool>(),
    ) {
        let list: Vec<Interval<i64>> = raw.iter().map(|&(a, b)| Interval::new(a, b)).collect();
        let options = ValidateOptions { is_sorted, ..ValidateOptions::default() };
        let report = validate(&list, &options).unwrap();

        if let Some(errors) = report.errors() {
            prop_assert!(!errors.is_empty());
            for (key, defects) in errors.iter() {
                prop_assert!(!defects.is_empty());
                match key {
                    ErrorKey::All => {
                        prop_assert_eq!(defects, &[Defect::NotSorted][..]);
                    }
                    ErrorKey::Index(i) => {
                        prop_assert!(i < list.len());
                    }
                }
            }
        }
    }

    #[test]
    fn validation_is_idempotent(
        raw in prop::collection::vec((-50i64..50, -50i64..50), 0..30),
    ) {
        let list: Vec<Interval<i64>> = raw.iter().map(|&(a, b)| Interval::new(a, b)).collect();
        let first = validate(&list, &ValidateOptions::default()).unwrap();
        let second = validate(&list, &ValidateOptions::default()).unwrap();
        prop_assert_eq!(first, second);
    }
}
