//! Property-based tests for catalog sorting.

use proptest::prelude::*;

use super::catalog::{NeoCatalog, NeoId, SortColumn};
use super::model::NeoRecord;

/// Shuffled records with pairwise-distinct names, distances, and velocities.
fn distinct_records() -> impl Strategy<Value = Vec<NeoRecord>> {
    prop::collection::btree_set(1u32..1_000_000, 0..24)
        .prop_map(|keys| keys.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
        .prop_map(|keys| {
            keys.into_iter()
                .map(|key| {
                    let key = u64::from(key);
                    NeoRecord::new(
                        format!("NEO {key:07}"),
                        format!("{}.5", key * 10),
                        // 1_000_003 is prime, so this is a permutation of the keys
                        format!("{}", key * 7919 % 1_000_003),
                        key % 2 == 0,
                    )
                })
                .collect()
        })
}

fn ids(catalog: &NeoCatalog) -> Vec<NeoId> {
    catalog.entries().iter().map(|e| e.id).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Clicking a header twice reverses the first click's order.
    #[test]
    fn prop_second_click_reverses(records in distinct_records(), col in 0usize..3) {
        let column = [SortColumn::Name, SortColumn::MissDistance, SortColumn::Velocity][col];
        let mut catalog = NeoCatalog::from_records(records);

        catalog.sort_by_column(column);
        let first = ids(&catalog);
        catalog.sort_by_column(column);
        let mut second = ids(&catalog);
        second.reverse();

        prop_assert_eq!(first, second);
    }

    /// Sorting permutes entries; it never adds, drops, or re-ids them.
    #[test]
    fn prop_sort_is_a_permutation(records in distinct_records(), col in 0usize..4) {
        let column = SortColumn::ALL[col];
        let mut catalog = NeoCatalog::from_records(records);
        let mut before = ids(&catalog);

        catalog.sort_by_column(column);
        let mut after = ids(&catalog);

        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    /// Ascending order is non-decreasing under the column's comparator.
    #[test]
    fn prop_ascending_is_ordered(records in distinct_records(), col in 0usize..4) {
        let column = SortColumn::ALL[col];
        let mut catalog = NeoCatalog::from_records(records);
        catalog.sort_by_column(column);

        for pair in catalog.entries().windows(2) {
            prop_assert_ne!(
                column.compare(&pair[0].record, &pair[1].record),
                std::cmp::Ordering::Greater
            );
        }
    }
}
