/// The result of folding an index back into `[0, n)`.
///
/// `wrapped` is `true` when the requested index lay outside the range and had to be
/// corrected, which is how callers tell a genuine neighbor from one reached only
/// through the periodic boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrappedIndex {
    pub index: usize,
    pub wrapped: bool,
}

/// Wraps `index` into `[0, n)` using Euclidean remainder, so negative indices fold
/// back from the end of the chain.
///
/// # Panics
///
/// Panics if `n` is zero.
#[inline]
pub fn wrap(index: isize, n: usize) -> WrappedIndex {
    assert!(n > 0, "cannot wrap an index into an empty range");
    let n = n as isize;
    WrappedIndex {
        index: index.rem_euclid(n) as usize,
        wrapped: !(0..n).contains(&index),
    }
}

/// Wraps `start + offset` into `[0, n)` for a nonnegative step from a position
/// already inside the range. Works for any `offset` without overflowing.
///
/// # Panics
///
/// Panics if `n` is zero.
#[inline]
pub fn wrap_forward(start: usize, offset: usize, n: usize) -> WrappedIndex {
    assert!(n > 0, "cannot wrap an index into an empty range");
    let start = start % n;
    WrappedIndex {
        index: (start + offset % n) % n,
        wrapped: offset >= n - start,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_index_is_left_untouched() {
        for i in 0..5 {
            assert_eq!(
                wrap(i, 5),
                WrappedIndex {
                    index: i as usize,
                    wrapped: false
                }
            );
        }
    }

    #[test]
    fn index_past_the_end_wraps_to_the_front() {
        assert_eq!(
            wrap(5, 5),
            WrappedIndex {
                index: 0,
                wrapped: true
            }
        );
        assert_eq!(wrap(12, 5).index, 2);
        assert!(wrap(12, 5).wrapped);
    }

    #[test]
    fn negative_index_wraps_to_the_back() {
        assert_eq!(
            wrap(-1, 5),
            WrappedIndex {
                index: 4,
                wrapped: true
            }
        );
        assert_eq!(wrap(-6, 5).index, 4);
    }

    #[test]
    fn single_element_range_maps_everything_to_zero() {
        assert_eq!(wrap(0, 1).index, 0);
        assert!(!wrap(0, 1).wrapped);
        assert_eq!(wrap(3, 1).index, 0);
        assert!(wrap(3, 1).wrapped);
    }

    #[test]
    #[should_panic]
    fn zero_modulus_panics() {
        wrap(0, 0);
    }

    #[test]
    fn forward_step_matches_signed_wrap_for_small_offsets() {
        for start in 0..4 {
            for offset in 0..10 {
                assert_eq!(
                    wrap_forward(start, offset, 4),
                    wrap((start + offset) as isize, 4)
                );
            }
        }
    }

    #[test]
    fn forward_step_handles_offsets_beyond_isize() {
        let huge = i64::MAX as usize;
        assert_eq!(
            wrap_forward(1, huge, 3),
            WrappedIndex {
                index: 2,
                wrapped: true
            }
        );
        assert_eq!(wrap_forward(2, usize::MAX, 5).index, (2 + usize::MAX % 5) % 5);
        assert!(wrap_forward(0, usize::MAX, 5).wrapped);
    }
}
