use bs_core::Bgr8;

/// Rounds the mean of `count` samples summing to `sum` to a byte.
///
/// The division happens in `f32`; the half is added in `f64` so that a mean
/// just below `n + 0.5` cannot round up to a tie before truncation. `mean`
/// never exceeds 255, so the final cast never saturates.
#[inline]
pub(crate) fn mean_channel(sum: u64, count: usize) -> u8 {
    let mean = sum as f32 / count as f32;
    (f64::from(mean) + 0.5) as u8
}

#[inline]
pub(crate) fn mean_pixel(sum: [u64; 3], count: usize) -> Bgr8 {
    Bgr8::new(
        mean_channel(sum[0], count),
        mean_channel(sum[1], count),
        mean_channel(sum[2], count),
    )
}

#[inline]
pub(crate) fn accumulate(sum: &mut [u64; 3], px: Bgr8) {
    sum[0] += u64::from(px.b);
    sum[1] += u64::from(px.g);
    sum[2] += u64::from(px.r);
}

#[cfg(test)]
mod tests {
    use super::mean_channel;

    #[test]
    fn half_rounds_up() {
        assert_eq!(mean_channel(1, 2), 1);
        assert_eq!(mean_channel(7, 2), 4);
        assert_eq!(mean_channel(5, 10), 1);
    }

    #[test]
    fn mean_just_below_half_rounds_down_in_large_windows() {
        // Both quotients are 0.5 - 2^-25 in f32; adding 0.5 in f32 would tie to 1.0.
        assert_eq!(mean_channel(8_386_608, 16_773_217), 0);
        assert_eq!(mean_channel(8_386_609, 16_773_219), 0);
    }

    #[test]
    fn below_half_rounds_down() {
        assert_eq!(mean_channel(255, 9), 28);
        assert_eq!(mean_channel(4, 9), 0);
        assert_eq!(mean_channel(5, 9), 1);
    }

    #[test]
    fn full_scale_stays_in_range() {
        assert_eq!(mean_channel(255 * 81, 81), 255);
        assert_eq!(mean_channel(0, 1), 0);
    }
}
