// File: crates/chart-core/src/downsample.rs
// Summary: Stride downsampling for large XY series.

/// Series longer than this are downsampled before drawing.
pub const DOWNSAMPLE_THRESHOLD: usize = 10_000;
/// Approximate number of points kept after downsampling.
pub const DOWNSAMPLE_TARGET: usize = 5_000;

/// Stride used to draw a series of `len` points with the default threshold and target.
pub fn stride_for(len: usize) -> usize {
    stride_with(len, DOWNSAMPLE_THRESHOLD, DOWNSAMPLE_TARGET)
}

/// 1 when `len <= threshold`, otherwise `floor(len / target)`.
/// Never returns zero, even when `target` exceeds `len`.
pub fn stride_with(len: usize, threshold: usize, target: usize) -> usize {
    if len <= threshold || target == 0 {
        return 1;
    }
    (len / target).max(1)
}

/// Every `stride`-th element starting at index 0. A stride of 0 is treated as 1.
pub fn every_nth<T: Copy>(points: &[T], stride: usize) -> Vec<T> {
    points.iter().step_by(stride.max(1)).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_downsampling_up_to_threshold() {
        assert_eq!(stride_for(0), 1);
        assert_eq!(stride_for(3), 1);
        assert_eq!(stride_for(10_000), 1);
    }

    #[test]
    fn stride_just_above_threshold() {
        // 10_001 / 5_000 == 2, so the smallest stride ever used is 2.
        assert_eq!(stride_for(10_001), 2);
        assert_eq!(every_nth(&[0u8; 10_001], 2).len(), 5_001);
    }

    #[test]
    fn twelve_thousand_rows_keep_six_thousand() {
        let pts: Vec<(f64, f64)> = (0..12_000).map(|i| (i as f64, (i % 7) as f64)).collect();
        let stride = stride_for(pts.len());
        assert_eq!(stride, 2);
        let kept = every_nth(&pts, stride);
        assert_eq!(kept.len(), 6_000);
        assert_eq!(kept.len(), pts.len().div_ceil(stride));
        assert_eq!(kept[0], pts[0]);
        assert_eq!(kept[1], pts[2]);
    }

    #[test]
    fn kept_count_matches_ceil_for_uneven_lengths() {
        for len in [10_001usize, 14_999, 15_000, 15_001, 27_345, 100_000] {
            let data: Vec<u32> = (0..len as u32).collect();
            let stride = stride_for(len);
            assert_eq!(every_nth(&data, stride).len(), len.div_ceil(stride), "len {len}");
        }
    }

    #[test]
    fn zero_stride_and_target_are_safe() {
        assert_eq!(stride_with(50_000, 10_000, 0), 1);
        assert_eq!(stride_with(20, 10, 100), 1);
        assert_eq!(every_nth(&[1, 2, 3], 0), vec![1, 2, 3]);
    }
}
