//! Capacity growth policy for [`Vector`](super::Vector).
//!
//! Requested capacities are rounded up to the next power of two, which amortizes the cost of
//! reallocation to `O(1)` per push at the cost of up to twice the memory actually needed.

/// Rounds `request` up to the nearest power of two. A request of zero stays zero.
///
/// Returns [`None`] if the rounded value can't be represented in a [`usize`].
pub fn alloc_size(request: usize) -> Option<usize> {
    if request == 0 {
        return Some(0);
    }

    match round_up(request) {
        0 => None,
        rounded => Some(rounded),
    }
}

/// Smears the highest set bit of `request - 1` into every lower bit, then adds one. Wraps to zero
/// when the result would exceed `usize::MAX`.
#[cfg(target_pointer_width = "64")]
const fn round_up(request: usize) -> usize {
    let mut s = request.wrapping_sub(1);
    s |= s >> 1;
    s |= s >> 2;
    s |= s >> 4;
    s |= s >> 8;
    s |= s >> 16;
    s |= s >> 32;
    s.wrapping_add(1)
}

#[cfg(target_pointer_width = "32")]
const fn round_up(request: usize) -> usize {
    let mut s = request.wrapping_sub(1);
    s |= s >> 1;
    s |= s >> 2;
    s |= s >> 4;
    s |= s >> 8;
    s |= s >> 16;
    s.wrapping_add(1)
}

#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
fn round_up(request: usize) -> usize {
    let rounded = 2_f64.powf((request as f64).log2().ceil());

    if rounded > usize::MAX as f64 {
        0
    } else {
        rounded as usize
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_small_values() {
        assert_eq!(alloc_size(0), Some(0));
        assert_eq!(alloc_size(1), Some(1));
        assert_eq!(alloc_size(2), Some(2));
        assert_eq!(alloc_size(3), Some(4));
        assert_eq!(alloc_size(5), Some(8), "Five elements should round up to eight.");
        assert_eq!(alloc_size(8), Some(8), "Powers of two should be left alone.");
        assert_eq!(alloc_size(1025), Some(2048));
    }

    #[test]
    fn test_overflow() {
        let max_pow = 1_usize << (usize::BITS - 1);
        assert_eq!(alloc_size(max_pow), Some(max_pow));
        assert_eq!(alloc_size(max_pow + 1), None);
        assert_eq!(alloc_size(usize::MAX), None);
    }

    proptest! {
        #[test]
        fn matches_checked_next_power_of_two(request in 1..=usize::MAX) {
            prop_assert_eq!(alloc_size(request), request.checked_next_power_of_two());
        }

        #[test]
        fn rounded_is_smallest_power_above(request in 1..=(usize::MAX >> 1)) {
            let rounded = alloc_size(request).unwrap_or_default();
            prop_assert!(rounded.is_power_of_two());
            prop_assert!(rounded >= request);
            prop_assert!(rounded / 2 < request);
        }
    }
}
