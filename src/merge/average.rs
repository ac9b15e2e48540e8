//! Pointwise mean of a stack, the usual reference-image producer.
use super::{fill_pixels, validate_uniform_stack};
use crate::error::MergeError;
use crate::image::{RgbImage, RgbView, Sample, CHANNELS};
use log::debug;

/// Average the stack channel-wise, rounding half up.
///
/// Accumulation is widened to 64 bits, so deep stacks cannot saturate the
/// way a fixed 16-bit accumulator would. Needs at least two frames.
pub fn stack_average<T: Sample>(images: &[RgbView<'_, T>]) -> Result<RgbImage<T>, MergeError> {
    let (width, height) = validate_uniform_stack(images, 2)?;
    debug!("stack_average: {} frame(s) {width}x{height}", images.len());
    let count = images.len() as u64;
    let mut out = RgbImage::new(width, height)?;
    fill_pixels(&mut out, |x, y| {
        let mut acc = [0u64; CHANNELS];
        for img in images {
            let px = img.pixel(x, y);
            for c in 0..CHANNELS {
                acc[c] += px[c].widen() as u64;
            }
        }
        let mut px = [T::default(); CHANNELS];
        for c in 0..CHANNELS {
            px[c] = T::from_widened(((acc[c] + count / 2) / count) as u32);
        }
        px
    });
    Ok(out)
}
