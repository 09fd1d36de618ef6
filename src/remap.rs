//! Linear rescaling between closed integer intervals.

use std::ops::RangeInclusive;

/// Rescale `value` from one closed interval onto another.
///
/// The value is first clamped into `from`, then mapped linearly with
/// **floor** rounding (plain integer division, matching the original
/// attribute-remap arithmetic). Endpoints map to endpoints: the start of
/// `from` always yields the start of `to` and likewise for the ends, and
/// the mapping is monotonic in between. A degenerate `from` interval maps
/// everything to the start of `to`.
///
/// Intermediates are widened to u64, so no input combination overflows.
///
/// # Examples
///
/// ```
/// use wiz_bridge_rs::remap::remap;
///
/// // Host brightness (0-254) onto the wire dimming scale (0-100).
/// assert_eq!(remap(0, 0..=254, 0..=100), 0);
/// assert_eq!(remap(254, 0..=254, 0..=100), 100);
/// assert_eq!(remap(127, 0..=254, 0..=100), 50);
/// ```
pub fn remap(value: u32, from: RangeInclusive<u32>, to: RangeInclusive<u32>) -> u32 {
    let (from_lo, from_hi) = (*from.start(), *from.end());
    let (to_lo, to_hi) = (*to.start(), *to.end());

    let value = value.clamp(from_lo, from_hi);
    let from_span = (from_hi - from_lo) as u64;
    let to_span = (to_hi - to_lo) as u64;

    if from_span == 0 {
        return to_lo;
    }

    to_lo + ((value - from_lo) as u64 * to_span / from_span) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_preserved() {
        assert_eq!(remap(0, 0..=254, 0..=360), 0);
        assert_eq!(remap(254, 0..=254, 0..=360), 360);
        assert_eq!(remap(10, 10..=20, 100..=200), 100);
        assert_eq!(remap(20, 10..=20, 100..=200), 200);
    }

    #[test]
    fn test_monotonic() {
        let mut prev = 0;
        for v in 0..=254 {
            let mapped = remap(v, 0..=254, 0..=100);
            assert!(mapped >= prev);
            prev = mapped;
        }
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        assert_eq!(remap(300, 0..=254, 0..=100), 100);
        assert_eq!(remap(5, 10..=20, 0..=100), 0);
    }

    #[test]
    fn test_inverse_roundtrip_within_floor_tolerance() {
        // Floor rounding loses at most one source step per direction.
        for v in 0..=100u32 {
            let there = remap(v, 0..=100, 0..=254);
            let back = remap(there, 0..=254, 0..=100);
            assert!(v.abs_diff(back) <= 1, "{v} -> {there} -> {back}");
        }
    }

    #[test]
    fn test_degenerate_source_interval() {
        assert_eq!(remap(7, 7..=7, 0..=100), 0);
    }

    #[test]
    fn test_no_overflow_at_u32_extremes() {
        assert_eq!(remap(u32::MAX, 0..=u32::MAX, 0..=u32::MAX), u32::MAX);
    }
}
