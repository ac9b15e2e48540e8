//! Boundary to an external panorama stitcher.
//!
//! Feature matching, homography estimation, warping and blending live in the
//! backend; the engine only validates the capture sweep and passes the
//! projection selector through. Backends advertise unsupported projections by
//! returning [`MergeError::UnsupportedProjection`].
use crate::error::MergeError;
use crate::image::{RgbImage, RgbView, CHANNELS};
use log::debug;
use serde::Deserialize;

/// Geometric warping assumption handed to the stitching backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Projection {
    /// Warp onto a plane; suited to narrow sweeps.
    Planar,
    /// Warp onto a cylinder; the usual horizontal panorama.
    Cylindrical,
    /// Warp onto a sphere; wide two-axis sweeps.
    Spherical,
}

/// External panorama stitcher.
pub trait Stitcher {
    /// Warp and blend an overlapping capture sweep into one panorama.
    fn stitch(
        &self,
        images: &[RgbView<'_, u8>],
        projection: Projection,
    ) -> Result<RgbImage<u8>, MergeError>;
}

/// Validate the sweep and delegate to `backend`.
///
/// Sweep frames may differ in size (overlap handling is the backend's job)
/// but must be contiguous, and a panorama needs at least two of them.
/// Everything else, including whether `projection` is supported, is the
/// backend's verdict, passed through unchanged.
pub fn stitch_panorama(
    backend: &dyn Stitcher,
    images: &[RgbView<'_, u8>],
    projection: Projection,
) -> Result<RgbImage<u8>, MergeError> {
    if images.len() < 2 {
        return Err(MergeError::InsufficientImages {
            required: 2,
            provided: images.len(),
        });
    }
    for (index, img) in images.iter().enumerate() {
        if !img.is_contiguous() {
            return Err(MergeError::NotContiguous {
                index: Some(index),
                stride: img.stride(),
                tight: img.width() * CHANNELS,
            });
        }
    }
    debug!(
        "stitch_panorama: {} frame(s), {projection:?} projection",
        images.len()
    );
    backend.stitch(images, projection)
}
