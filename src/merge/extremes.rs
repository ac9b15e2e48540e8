//! Brightest/darkest-contributor merge.
use super::{fill_pixels, validate_uniform_stack};
use crate::error::MergeError;
use crate::image::{RgbImage, RgbView, Sample};
use crate::metrics::brightness_score;
use log::debug;

/// Which end of the brightness scale wins a pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extreme {
    /// Keep the brightest contributor (light trails, star stacking).
    Light,
    /// Keep the darkest contributor.
    Dark,
}

/// Keep, per pixel, the candidate with the extremal [`brightness_score`].
/// Equal scores resolve to the earliest frame. Needs at least two frames.
pub fn extreme_brightness<T: Sample>(
    images: &[RgbView<'_, T>],
    extreme: Extreme,
) -> Result<RgbImage<T>, MergeError> {
    let (width, height) = validate_uniform_stack(images, 2)?;
    debug!(
        "extreme_brightness: {} frame(s) {width}x{height} at {}-bit, {extreme:?}",
        images.len(),
        T::DEPTH.bits()
    );
    let mut out = RgbImage::new(width, height)?;
    fill_pixels(&mut out, |x, y| {
        let mut best = images[0].pixel(x, y);
        let mut best_score = brightness_score(best);
        for img in &images[1..] {
            let candidate = img.pixel(x, y);
            let score = brightness_score(candidate);
            let wins = match extreme {
                Extreme::Light => score > best_score,
                Extreme::Dark => score < best_score,
            };
            if wins {
                best = candidate;
                best_score = score;
            }
        }
        best
    });
    Ok(out)
}
