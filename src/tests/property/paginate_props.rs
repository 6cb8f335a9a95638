//! Property-based tests for pagination
//!
//! Tests invariants:
//! - A page never exceeds the page size
//! - Total always equals the input length
//! - Concatenating all pages reproduces the input exactly once
//! - Out-of-range pages are empty, never a panic

use proptest::prelude::*;

use crate::core::paginate::paginate;

proptest! {
    #[test]
    fn page_never_exceeds_page_size(
        items in prop::collection::vec(any::<u32>(), 0..100),
        page in 0u32..20,
        per_page in 1usize..20,
    ) {
        let result = paginate(items, page, per_page);
        prop_assert!(result.items.len() <= per_page);
    }

    #[test]
    fn total_is_input_length(
        items in prop::collection::vec(any::<u32>(), 0..100),
        page in 0u32..20,
    ) {
        let len = items.len();
        let result = paginate(items, page, 10);
        prop_assert_eq!(result.total, len);
    }

    #[test]
    fn pages_partition_the_input(
        items in prop::collection::vec(any::<u32>(), 0..100),
        per_page in 1usize..20,
    ) {
        let mut reassembled = Vec::new();
        let mut page = 1u32;
        loop {
            let slice = paginate(items.clone(), page, per_page);
            if slice.items.is_empty() {
                break;
            }
            reassembled.extend(slice.items);
            page += 1;
        }
        prop_assert_eq!(reassembled, items);
    }

    #[test]
    fn clamped_page_is_at_least_one(
        page in 0u32..3,
    ) {
        let result = paginate(vec![1, 2, 3], page, 10);
        prop_assert!(result.number >= 1);
    }
}
