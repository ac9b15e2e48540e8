//! Focus-measure pipeline.
//!
//! For each source frame: luminance conversion, downscale to a bounded
//! working size, small Gaussian smoothing against sensor noise, 4-neighbour
//! Laplacian magnitude as the detail response, a wide Gaussian aggregation
//! that turns per-edge responses into region-level scores (and suppresses
//! halos around out-of-focus edges), then bilinear upscale back to full
//! resolution and quantization to a signed 16-bit map.
//!
//! Larger value ⇒ locally sharper. Maps are comparative within a single
//! focus-stack call only: the working-size downscale is lossy and the scale
//! of the scores depends on image content, so values are never persisted or
//! compared across calls. Each frame's map is independent of the others,
//! which is what lets the focus policy fan the stack out across the worker
//! pool.
use crate::filter::{gaussian_kernel_1d, laplacian_abs, separable_blur};
use crate::image::{Plane, RgbView, Sample};
use crate::resize::resize_bilinear;
use log::debug;

/// Per-pixel sharpness estimate for one source frame.
pub type SharpnessMap = Plane<i16>;

/// Longest edge of the pipeline's working grid. Frames already inside the
/// bound are processed at native resolution.
pub const WORKING_SIZE_CAP: usize = 800;

/// Pre-derivative noise smoothing.
const DETAIL_KERNEL: usize = 3;
const DETAIL_SIGMA: f32 = 0.8;
/// Post-derivative regional aggregation.
const REGION_KERNEL: usize = 31;
const REGION_SIGMA: f32 = 5.0;

/// Rec.601 luminance weights on channels 0/1/2.
const LUMA_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];

/// Compute the sharpness map of one frame.
pub fn sharpness_map<T: Sample>(image: &RgbView<'_, T>) -> SharpnessMap {
    let width = image.width();
    let height = image.height();
    let gray = luminance(image);
    let reduced = match working_size(width, height) {
        Some((ww, wh)) => {
            debug!("sharpness map {width}x{height}, working grid {ww}x{wh}");
            resize_bilinear(&gray, ww, wh)
        }
        None => gray,
    };
    let denoised = separable_blur(&reduced, &gaussian_kernel_1d(DETAIL_SIGMA, DETAIL_KERNEL));
    let response = laplacian_abs(&denoised);
    let regional = separable_blur(&response, &gaussian_kernel_1d(REGION_SIGMA, REGION_KERNEL));
    let full = resize_bilinear(&regional, width, height);
    quantize(full)
}

/// Luminance plane in the 8-bit value range regardless of sample depth, so
/// downstream responses share one scale.
fn luminance<T: Sample>(image: &RgbView<'_, T>) -> Plane<f32> {
    let width = image.width();
    let height = image.height();
    let scale = if T::MAX_VALUE > 0 {
        255.0 / T::MAX_VALUE as f32
    } else {
        0.0
    };
    let mut gray = Plane::new(width, height);
    for y in 0..height {
        let src_row = image.row(y);
        let dst_row = gray.row_mut(y);
        for (px, dst) in src_row.chunks_exact(3).zip(dst_row.iter_mut()) {
            let luma = LUMA_WEIGHTS[0] * px[0].widen() as f32
                + LUMA_WEIGHTS[1] * px[1].widen() as f32
                + LUMA_WEIGHTS[2] * px[2].widen() as f32;
            *dst = luma * scale;
        }
    }
    gray
}

/// Bounded working grid for a frame, `None` when the frame is already within
/// the cap (never upscales).
fn working_size(width: usize, height: usize) -> Option<(usize, usize)> {
    let (target_w, target_h) = if height < width {
        (WORKING_SIZE_CAP, (WORKING_SIZE_CAP * height / width).max(1))
    } else if width > 0 {
        ((WORKING_SIZE_CAP * width / height).max(1), WORKING_SIZE_CAP)
    } else {
        return None;
    };
    if width <= target_w && height <= target_h {
        None
    } else {
        Some((target_w, target_h))
    }
}

fn quantize(map: Plane<f32>) -> SharpnessMap {
    let width = map.width();
    let height = map.height();
    let data = map.data().iter().map(|v| v.round() as i16).collect();
    Plane::from_vec(width, height, data)
}
