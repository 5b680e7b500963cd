//! Wrap arithmetic for slide positions.

/// Normalize a raw (possibly negative or out-of-range) slide position
/// against the current item count.
///
/// Uses floor-mod so that stepping back from 0 lands on the last item.
/// Returns `None` when there are no items; callers treat that as a no-op.
pub fn wrap_index(raw: i64, item_count: usize) -> Option<usize> {
    if item_count == 0 {
        return None;
    }
    Some(i128::from(raw).rem_euclid(item_count as i128) as usize)
}

/// Move `delta` slides from `current`, wrapping at both ends.
///
/// Computed in `i128`, so any `i64` delta from any position is exact.
pub fn step_index(current: usize, delta: i64, item_count: usize) -> Option<usize> {
    if item_count == 0 {
        return None;
    }
    let raw = current as i128 + i128::from(delta);
    Some(raw.rem_euclid(item_count as i128) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_items_is_none() {
        assert_eq!(wrap_index(0, 0), None);
        assert_eq!(wrap_index(-1, 0), None);
    }

    #[test]
    fn negative_wraps_to_end() {
        assert_eq!(wrap_index(-1, 5), Some(4));
        assert_eq!(wrap_index(-6, 5), Some(4));
    }

    #[test]
    fn overflow_wraps_to_start() {
        assert_eq!(wrap_index(5, 5), Some(0));
        assert_eq!(wrap_index(12, 5), Some(2));
    }

    #[test]
    fn extreme_raw_values_stay_in_range() {
        assert_eq!(wrap_index(i64::MAX, 3), Some((i64::MAX % 3) as usize));
        assert_eq!(wrap_index(i64::MIN, 3), Some(1));
    }

    #[test]
    fn step_handles_extreme_deltas() {
        // i64::MAX = 3 * 3074457345618258602 + 1
        assert_eq!(step_index(1, i64::MAX, 3), Some(2));
        // i64::MIN = -3 * 3074457345618258603 + 1
        assert_eq!(step_index(1, i64::MIN, 3), Some(2));
        assert_eq!(step_index(usize::MAX, 1, 4), Some(0));
        assert_eq!(step_index(0, i64::MAX, 0), None);
    }

    #[test]
    fn in_range_is_unchanged() {
        for i in 0..5 {
            assert_eq!(wrap_index(i, 5), Some(i as usize));
        }
    }
}
