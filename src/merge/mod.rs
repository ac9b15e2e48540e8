//! Compositing policies.
//!
//! Every policy reads a stack of borrowed views, validates geometry and
//! layout up front, allocates the output, then fills it in one parallel pass:
//! each output pixel is decided by a pure selection over the candidates at
//! that position and written exactly once. The output buffer is never read
//! back, so rows are independent and are partitioned across the worker pool.
//! Per-pixel scans walk the stack in caller order; on equal scores the
//! earliest frame wins, which makes stack order part of the contract.
//!
//! Policies:
//! - [`nearest_to_reference`] – keep the candidate closest to a baseline.
//! - [`nearest_or_farthest`] – nearest by default, farthest past a threshold.
//! - [`extreme_brightness`] – brightest or darkest candidate.
//! - [`focus_stack`] – locally sharpest candidate.
//! - [`stack_average`] – pointwise mean, the usual baseline producer.
//!
//! ```
//! use photomerge::image::RgbImage;
//! use photomerge::merge::{nearest_to_reference, stack_average};
//! use photomerge::metrics::DistanceMetric;
//!
//! # fn main() -> Result<(), photomerge::MergeError> {
//! let a = RgbImage::<u8>::filled(8, 8, [10, 10, 10])?;
//! let b = RgbImage::<u8>::filled(8, 8, [30, 30, 30])?;
//! let stack = [a.as_view(), b.as_view()];
//!
//! let reference = stack_average(&stack)?;
//! let merged = nearest_to_reference(&stack, &reference.as_view(), DistanceMetric::ChannelDelta)?;
//! assert_eq!(merged.pixel(0, 0), [10, 10, 10]); // tie on distance, first frame wins
//! # Ok(())
//! # }
//! ```
mod average;
mod extremes;
mod focus;
mod nearest;

pub use average::stack_average;
pub use extremes::{extreme_brightness, Extreme};
pub use focus::focus_stack;
pub use nearest::{nearest_or_farthest, nearest_to_reference};

use crate::error::MergeError;
use crate::image::{RgbImage, RgbView, Sample, CHANNELS};
use rayon::prelude::*;

/// Check that every stack image is contiguous and matches `expected`
/// dimensions. Contiguity is checked first, mirroring the order failures are
/// reported in.
pub(crate) fn validate_layout<T: Sample>(
    images: &[RgbView<'_, T>],
    expected: (usize, usize),
) -> Result<(), MergeError> {
    let (expected_width, expected_height) = expected;
    for (index, img) in images.iter().enumerate() {
        if !img.is_contiguous() {
            return Err(MergeError::NotContiguous {
                index: Some(index),
                stride: img.stride(),
                tight: img.width() * CHANNELS,
            });
        }
        if img.width() != expected_width || img.height() != expected_height {
            return Err(MergeError::ShapeMismatch {
                index,
                expected_width,
                expected_height,
                width: img.width(),
                height: img.height(),
            });
        }
    }
    Ok(())
}

/// Check stack cardinality and uniform layout against the first image.
/// Returns the shared dimensions.
pub(crate) fn validate_uniform_stack<T: Sample>(
    images: &[RgbView<'_, T>],
    required: usize,
) -> Result<(usize, usize), MergeError> {
    debug_assert!(required >= 1);
    if images.len() < required {
        return Err(MergeError::InsufficientImages {
            required,
            provided: images.len(),
        });
    }
    let expected = (images[0].width(), images[0].height());
    validate_layout(images, expected)?;
    Ok(expected)
}

/// Fill every output pixel from a pure selection function, partitioning rows
/// across the worker pool. `select` receives (x, y) and must not depend on
/// any previously written output.
pub(crate) fn fill_pixels<T, F>(out: &mut RgbImage<T>, select: F)
where
    T: Sample,
    F: Fn(usize, usize) -> [T; CHANNELS] + Sync,
{
    let width = out.width();
    out.data_mut()
        .par_chunks_mut(width * CHANNELS)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, px) in row.chunks_exact_mut(CHANNELS).enumerate() {
                px.copy_from_slice(&select(x, y));
            }
        });
}
