use std::collections::HashSet;

use pricesweep::domain::Item;
use pricesweep::testkit::domain::item_ids;

/// Assert every item carries a distinct id and return the id set.
pub fn assert_unique_ids(items: &[Item]) -> HashSet<u64> {
    let ids = item_ids(items);
    assert_eq!(ids.len(), items.len(), "every item should carry an id");
    let unique: HashSet<u64> = ids.iter().copied().collect();
    assert_eq!(
        unique.len(),
        ids.len(),
        "expected no duplicate items, got {} duplicates",
        ids.len() - unique.len()
    );
    unique
}

/// Assert the items are exactly ids `0..count`.
pub fn assert_complete(items: &[Item], count: usize) {
    let unique = assert_unique_ids(items);
    let expected: HashSet<u64> = (0..count as u64).collect();
    assert_eq!(unique, expected, "expected every catalog item exactly once");
}
