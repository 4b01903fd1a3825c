//! Pair enumeration for the narrow phase
//!
//! There is no spatial partitioning: every unordered pair is a candidate.

/// All pairs `(i, j)` with `i < j < count`, in ascending order.
pub fn all_collision_pairs(count: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..count).flat_map(move |i| (i + 1..count).map(move |j| (i, j)))
}

/// Borrow two distinct elements of a slice mutably.
///
/// # Panics
///
/// Panics if `i >= j` or `j` is out of bounds.
pub fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    assert!(i < j, "pair indices must be ascending: ({i}, {j})");
    let (before, after) = items.split_at_mut(j);
    (&mut before[i], &mut after[0])
}
