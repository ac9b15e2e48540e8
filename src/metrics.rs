//! Pixel distance metrics and brightness scoring.
//!
//! Two distance metrics feed the reference-based merges: a channel-wise
//! absolute delta when throughput matters, and a perceptually weighted
//! Euclidean distance ("redmean") when visual similarity matters. Both are
//! pure and symmetric. `brightness_score` is the cheap luminance proxy behind
//! the light/dark merges.
//!
//! All results widen to `u32`; ordering is what the policies consume, the
//! absolute scale is depth-dependent (see [`Sample::DELTA_SCALE`]).
use crate::image::{Sample, CHANNELS};
use serde::Deserialize;

/// Which distance the reference-based merges evaluate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    /// Sum of per-channel absolute differences. Cheapest.
    ChannelDelta,
    /// Weighted Euclidean distance with luminance-sensitive channel weights.
    Perceptual,
}

impl DistanceMetric {
    /// Resolve to a concrete distance function once, outside the pixel loop.
    pub fn as_fn<T: Sample>(self) -> fn([T; CHANNELS], [T; CHANNELS]) -> u32 {
        match self {
            DistanceMetric::ChannelDelta => channel_abs_delta::<T>,
            DistanceMetric::Perceptual => perceptual_distance::<T>,
        }
    }
}

/// Sum of per-channel absolute differences between two pixel tuples.
#[inline]
pub fn channel_abs_delta<T: Sample>(a: [T; CHANNELS], b: [T; CHANNELS]) -> u32 {
    let mut total = 0u32;
    for c in 0..CHANNELS {
        total += a[c].widen().abs_diff(b[c].widen());
    }
    total
}

/// Perceptually weighted distance between two pixel tuples.
///
/// With `rmean` the mean first-channel value of the pair, the weights are
/// `w0 = 2 + rmean/unit`, `w1 = 4`, `w2 = 2 + (max - rmean)/unit` where
/// `max`/`unit` are 255/256 at 8-bit depth and 65535/65536 at 16-bit, and the
/// result is `floor(sqrt(w0*d0² + w1*d1² + w2*d2²))`. Weights stay in [2, 3]
/// for the outer channels: differences in the first channel count more on
/// bright pairs, differences in the third on dark pairs.
#[inline]
pub fn perceptual_distance<T: Sample>(a: [T; CHANNELS], b: [T; CHANNELS]) -> u32 {
    let span = T::MAX_VALUE as u64;
    let unit = span + 1;
    let rmean = (a[0].widen() as u64 + b[0].widen() as u64) / 2;
    let d0 = a[0].widen().abs_diff(b[0].widen()) as u64;
    let d1 = a[1].widen().abs_diff(b[1].widen()) as u64;
    let d2 = a[2].widen().abs_diff(b[2].widen()) as u64;
    let low = (2 * unit + rmean) * d0 * d0 / unit;
    let mid = 4 * d1 * d1;
    let high = (2 * unit + span - rmean) * d2 * d2 / unit;
    (low + mid + high).isqrt() as u32
}

/// Cheap luminance proxy, `2*c0 + c2`. The light merge keeps the maximal
/// score per position, the dark merge the minimal one.
#[inline]
pub fn brightness_score<T: Sample>(px: [T; CHANNELS]) -> u32 {
    2 * px[0].widen() + px[2].widen()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_delta_sums_absolute_differences() {
        assert_eq!(channel_abs_delta([10u8, 20, 30], [13, 18, 30]), 5);
        assert_eq!(channel_abs_delta([0u8, 0, 0], [255, 255, 255]), 765);
        assert_eq!(channel_abs_delta([7u8, 7, 7], [7, 7, 7]), 0);
    }

    #[test]
    fn channel_delta_is_symmetric() {
        let a = [3u8, 250, 90];
        let b = [200u8, 14, 100];
        assert_eq!(channel_abs_delta(a, b), channel_abs_delta(b, a));
    }

    #[test]
    fn channel_delta_16bit_scale() {
        assert_eq!(channel_abs_delta([0u16, 0, 0], [65_535, 65_535, 65_535]), 196_605);
        // The same visual difference is 256x larger in 16-bit units.
        assert_eq!(
            channel_abs_delta([0u16, 0, 0], [256, 0, 0]),
            channel_abs_delta([0u8, 0, 0], [1, 0, 0]) * u16::DELTA_SCALE
        );
    }

    #[test]
    fn perceptual_zero_on_equal_pixels() {
        assert_eq!(perceptual_distance([50u8, 100, 150], [50, 100, 150]), 0);
        assert_eq!(perceptual_distance([50u16, 100, 150], [50, 100, 150]), 0);
    }

    #[test]
    fn perceptual_black_to_white() {
        // rmean=127: floor(sqrt(162308 + 260100 + 162562)) = floor(sqrt(584970))
        assert_eq!(perceptual_distance([0u8, 0, 0], [255, 255, 255]), 764);
    }

    #[test]
    fn perceptual_weights_shift_with_first_channel_mean() {
        // A pure first-channel step on a dark pair weighs less than the same
        // step in the third channel, and the other way round on bright pairs.
        let c0_on_dark = perceptual_distance([255u8, 0, 0], [0, 0, 0]);
        let c2_on_dark = perceptual_distance([0u8, 0, 255], [0, 0, 0]);
        assert!(c2_on_dark > c0_on_dark);

        let c0_on_bright = perceptual_distance([255u8, 255, 255], [0, 255, 255]);
        let c2_on_bright = perceptual_distance([255u8, 255, 255], [255, 255, 0]);
        assert!(c0_on_bright > c2_on_bright);
    }

    #[test]
    fn perceptual_is_symmetric() {
        let a = [12u8, 230, 77];
        let b = [199u8, 31, 240];
        assert_eq!(perceptual_distance(a, b), perceptual_distance(b, a));
    }

    #[test]
    fn perceptual_16bit_preserves_8bit_ordering() {
        // Scaled-up pixel pairs must keep their relative order.
        let scale = |px: [u8; 3]| px.map(|v| v as u16 * 257);
        let near8 = perceptual_distance([100u8, 100, 100], [110, 100, 100]);
        let far8 = perceptual_distance([100u8, 100, 100], [200, 40, 10]);
        assert!(near8 < far8);
        let near16 = perceptual_distance(scale([100, 100, 100]), scale([110, 100, 100]));
        let far16 = perceptual_distance(scale([100, 100, 100]), scale([200, 40, 10]));
        assert!(near16 < far16);
    }

    #[test]
    fn brightness_score_weighs_first_and_third_channels() {
        assert_eq!(brightness_score([10u8, 99, 4]), 24);
        assert_eq!(brightness_score([0u8, 255, 0]), 0);
        assert_eq!(brightness_score([255u8, 0, 255]), 765);
        assert_eq!(brightness_score([65_535u16, 0, 65_535]), 196_605);
    }

    #[test]
    fn metric_dispatch_matches_direct_calls() {
        let a = [5u8, 9, 200];
        let b = [7u8, 5, 100];
        assert_eq!(
            DistanceMetric::ChannelDelta.as_fn()(a, b),
            channel_abs_delta(a, b)
        );
        assert_eq!(
            DistanceMetric::Perceptual.as_fn()(a, b),
            perceptual_distance(a, b)
        );
    }
}
