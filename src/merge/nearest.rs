//! Reference-based merges: nearest candidate, or farthest past a threshold.
//!
//! Both policies compare every candidate pixel against a baseline image,
//! usually the stack mean. Keeping the nearest candidate suppresses anything
//! that moved during the burst; flipping to the farthest candidate where some
//! frame strays beyond a threshold keeps the background stable while letting
//! a moving subject punch through.
use super::{fill_pixels, validate_layout};
use crate::error::MergeError;
use crate::image::{RgbImage, RgbView, Sample, CHANNELS};
use crate::metrics::{channel_abs_delta, DistanceMetric};
use log::debug;

/// Validate the reference, stack cardinality and per-image layout for the
/// reference-based policies. The reference is checked first and defines the
/// expected dimensions. A padded reference is a layout fault like any other
/// and reports [`MergeError::NotContiguous`], with no stack index.
fn validate_reference_call<T: Sample>(
    images: &[RgbView<'_, T>],
    reference: &RgbView<'_, T>,
) -> Result<(usize, usize), MergeError> {
    if reference.is_empty() {
        return Err(MergeError::InvalidReference("is empty"));
    }
    if !reference.is_contiguous() {
        return Err(MergeError::NotContiguous {
            index: None,
            stride: reference.stride(),
            tight: reference.width() * CHANNELS,
        });
    }
    if images.is_empty() {
        return Err(MergeError::InsufficientImages {
            required: 1,
            provided: 0,
        });
    }
    let expected = (reference.width(), reference.height());
    validate_layout(images, expected)?;
    Ok(expected)
}

/// Keep, per pixel, the candidate nearest to the reference under `metric`.
/// Equal distances resolve to the earliest frame.
pub fn nearest_to_reference<T: Sample>(
    images: &[RgbView<'_, T>],
    reference: &RgbView<'_, T>,
    metric: DistanceMetric,
) -> Result<RgbImage<T>, MergeError> {
    let (width, height) = validate_reference_call(images, reference)?;
    debug!(
        "nearest_to_reference: {} frame(s) {width}x{height} at {}-bit, metric {metric:?}",
        images.len(),
        T::DEPTH.bits()
    );
    let distance = metric.as_fn::<T>();
    let mut out = RgbImage::new(width, height)?;
    fill_pixels(&mut out, |x, y| {
        let target = reference.pixel(x, y);
        let mut best = images[0].pixel(x, y);
        let mut best_d = distance(target, best);
        for img in &images[1..] {
            let candidate = img.pixel(x, y);
            let d = distance(target, candidate);
            if d < best_d {
                best = candidate;
                best_d = d;
            }
        }
        best
    });
    Ok(out)
}

/// Keep the nearest candidate unless the farthest one's channel delta reaches
/// `farthest_threshold`; then the farthest wins.
///
/// The threshold is expressed in 8-bit visual units and scaled by
/// [`Sample::DELTA_SCALE`], so the same number means the same visual
/// difference at either depth. `None` is the unbounded sentinel: no farthest
/// candidate ever qualifies and the result equals
/// [`nearest_to_reference`] under the channel-delta metric.
pub fn nearest_or_farthest<T: Sample>(
    images: &[RgbView<'_, T>],
    reference: &RgbView<'_, T>,
    farthest_threshold: Option<u32>,
) -> Result<RgbImage<T>, MergeError> {
    let (width, height) = validate_reference_call(images, reference)?;
    let threshold = match farthest_threshold {
        Some(t) => t.saturating_mul(T::DELTA_SCALE),
        None => u32::MAX,
    };
    debug!(
        "nearest_or_farthest: {} frame(s) {width}x{height}, threshold {farthest_threshold:?} -> {threshold}",
        images.len()
    );
    let mut out = RgbImage::new(width, height)?;
    fill_pixels(&mut out, |x, y| {
        let target = reference.pixel(x, y);
        let first = images[0].pixel(x, y);
        let first_d = channel_abs_delta(target, first);
        let mut near = first;
        let mut near_d = first_d;
        let mut far = first;
        let mut far_d = first_d;
        for img in &images[1..] {
            let candidate = img.pixel(x, y);
            let d = channel_abs_delta(target, candidate);
            if d < near_d {
                near = candidate;
                near_d = d;
            }
            if d > far_d {
                far = candidate;
                far_d = d;
            }
        }
        if far_d >= threshold {
            far
        } else {
            near
        }
    });
    Ok(out)
}
