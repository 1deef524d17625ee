#![cfg(feature = "list")]
//! Property-based tests for LazyList.
//!
//! These tests verify the algebraic laws relating lazy lists to the eager
//! vectors they are built from.

use lazylist::error::ListError;
use lazylist::list::LazyList;
use proptest::prelude::*;

// =============================================================================
// Strategy for generating element vectors
// =============================================================================

/// Generates a vector of up to `max_size` elements.
fn elements_strategy(max_size: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..max_size)
}

/// Generates a small vector for faster tests.
fn small_elements() -> impl Strategy<Value = Vec<i32>> {
    elements_strategy(20)
}

fn factorial(n: usize) -> usize {
    (1..=n).product()
}

proptest! {
    // =========================================================================
    // Conversion Laws
    // =========================================================================

    #[test]
    fn prop_lazy_round_trip(elements in small_elements()) {
        prop_assert_eq!(LazyList::from(elements.clone()).to_vec(), Ok(elements));
    }

    #[test]
    fn prop_eager_round_trip(elements in small_elements()) {
        let list: LazyList<i32> = elements.iter().copied().collect();
        prop_assert_eq!(list.to_vec(), Ok(elements));
    }

    #[test]
    fn prop_length_matches_vector(elements in small_elements()) {
        prop_assert_eq!(LazyList::from(elements.clone()).length(), Ok(elements.len()));
    }

    // =========================================================================
    // Range Laws
    // =========================================================================

    #[test]
    fn prop_range_length(low in -50i64..50, high in -50i64..50) {
        let expected = usize::try_from((high - low + 1).max(0)).unwrap();
        prop_assert_eq!(LazyList::range(low, high).length(), Ok(expected));
    }

    // =========================================================================
    // Structural Laws
    // =========================================================================

    #[test]
    fn prop_take_drop_complement(elements in small_elements(), cut in 0usize..25) {
        let list = LazyList::from(elements.clone());
        let count = cut.min(elements.len());
        let mut rejoined = list.take(count).to_vec().unwrap();
        rejoined.extend(list.drop(count).unwrap().to_vec().unwrap());
        prop_assert_eq!(rejoined, elements);
    }

    #[test]
    fn prop_split_at_matches_take_and_drop(elements in small_elements(), cut in 0usize..20) {
        let list = LazyList::from(elements.clone());
        let count = cut.min(elements.len());
        let (front, back) = list.split_at(count);
        prop_assert_eq!(front.to_vec(), Ok(elements[..count].to_vec()));
        prop_assert_eq!(back.to_vec(), Ok(elements[count..].to_vec()));
    }

    #[test]
    fn prop_append_concatenates(left in small_elements(), right in small_elements()) {
        let appended = LazyList::from(left.clone()).append(&LazyList::from(right.clone()));
        let mut expected = left;
        expected.extend(right);
        prop_assert_eq!(appended.to_vec(), Ok(expected));
    }

    #[test]
    fn prop_reverse_is_involution(elements in small_elements()) {
        let list = LazyList::from(elements.clone());
        let twice = list.reverse().unwrap().reverse().unwrap();
        prop_assert_eq!(twice.to_vec(), Ok(elements));
    }

    #[test]
    fn prop_sort_matches_vector_sort(elements in small_elements()) {
        let mut expected = elements.clone();
        expected.sort_unstable();
        prop_assert_eq!(LazyList::from(elements).sort().unwrap().to_vec(), Ok(expected));
    }

    #[test]
    fn prop_map_matches_iterator_map(elements in small_elements()) {
        let mapped = LazyList::from(elements.clone()).map(|x| i64::from(x) * 2);
        let expected: Vec<i64> = elements.into_iter().map(|x| i64::from(x) * 2).collect();
        prop_assert_eq!(mapped.to_vec(), Ok(expected));
    }

    #[test]
    fn prop_filter_matches_iterator_filter(elements in small_elements()) {
        let filtered = LazyList::from(elements.clone()).filter(|x| x % 3 == 0);
        let expected: Vec<i32> = elements.into_iter().filter(|x| x % 3 == 0).collect();
        prop_assert_eq!(filtered.to_vec(), Ok(expected));
    }

    // =========================================================================
    // Combinatorial Cardinality
    // =========================================================================

    #[test]
    fn prop_combinations_cardinality(elements in elements_strategy(9)) {
        let expected = 1usize << elements.len();
        prop_assert_eq!(LazyList::from(elements).combinations().length(), Ok(expected));
    }

    #[test]
    fn prop_permutations_cardinality(elements in elements_strategy(6)) {
        let expected = factorial(elements.len());
        prop_assert_eq!(LazyList::from(elements).permutations().length(), Ok(expected));
    }

    // =========================================================================
    // Lockstep Laws
    // =========================================================================

    #[test]
    fn prop_map2_fails_iff_lengths_differ(left in small_elements(), right in small_elements()) {
        let combined = LazyList::from(left.clone())
            .map2(&LazyList::from(right.clone()), |a, b| i64::from(a) + i64::from(b));
        let result = combined.to_vec();
        if left.len() == right.len() {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result, Err(ListError::DifferentListSize("map2")));
        }
    }
}
