//! Focus stacking: per pixel, keep the locally sharpest contributor.
use super::{fill_pixels, validate_uniform_stack};
use crate::error::MergeError;
use crate::image::{RgbImage, RgbView, Sample};
use crate::sharpness::{sharpness_map, SharpnessMap};
use log::debug;
use rayon::prelude::*;

/// Merge a stack of frames focused at different depths into one image that is
/// sharp everywhere a frame was sharp.
///
/// One sharpness map per frame is computed up front (frames fan out across
/// the worker pool, maps are independent), then every output pixel is copied
/// from the frame whose map value is maximal at that position. Equal scores
/// resolve to the earliest frame. Needs at least two frames of identical
/// shape; uniformity is validated before any map is computed.
pub fn focus_stack<T: Sample>(images: &[RgbView<'_, T>]) -> Result<RgbImage<T>, MergeError> {
    let (width, height) = validate_uniform_stack(images, 2)?;
    debug!(
        "focus_stack: {} frame(s) {width}x{height} at {}-bit",
        images.len(),
        T::DEPTH.bits()
    );
    let mut out = RgbImage::new(width, height)?;

    let maps: Vec<SharpnessMap> = images.par_iter().map(sharpness_map).collect();

    fill_pixels(&mut out, |x, y| {
        let mut best_index = 0usize;
        let mut best_score = maps[0].get(x, y);
        for (index, map) in maps.iter().enumerate().skip(1) {
            let score = map.get(x, y);
            if score > best_score {
                best_index = index;
                best_score = score;
            }
        }
        images[best_index].pixel(x, y)
    });
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Frame with a sharp checkerboard inside `x0..x1` and flat gray outside.
    fn half_sharp(width: usize, height: usize, x0: usize, x1: usize) -> RgbImage<u8> {
        let mut img = RgbImage::filled(width, height, [128, 128, 128]).unwrap();
        for y in 0..height {
            for x in x0..x1 {
                let v = if (x / 2 + y / 2) % 2 == 0 { 20 } else { 235 };
                img.put_pixel(x, y, [v, v, v]);
            }
        }
        img
    }

    #[test]
    fn sharp_regions_win_their_half() {
        let left = half_sharp(64, 32, 0, 32);
        let right = half_sharp(64, 32, 32, 64);
        let out = focus_stack(&[left.as_view(), right.as_view()]).unwrap();

        // Away from the seam, each half must come from the frame that is
        // sharp there.
        for y in [8, 16, 24] {
            for x in [4, 10, 20] {
                assert_eq!(out.pixel(x, y), left.pixel(x, y), "left half at ({x},{y})");
            }
            for x in [44, 54, 60] {
                assert_eq!(out.pixel(x, y), right.pixel(x, y), "right half at ({x},{y})");
            }
        }
    }

    #[test]
    fn identical_frames_roundtrip() {
        let mut img = RgbImage::<u8>::new(40, 20).unwrap();
        for y in 0..20 {
            for x in 0..40 {
                img.put_pixel(x, y, [(x * 6) as u8, (y * 12) as u8, 77]);
            }
        }
        let out = focus_stack(&[img.as_view(), img.as_view()]).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn single_frame_is_insufficient() {
        let img = RgbImage::<u8>::filled(8, 8, [1, 2, 3]).unwrap();
        let err = focus_stack(&[img.as_view()]).unwrap_err();
        assert_eq!(
            err,
            MergeError::InsufficientImages {
                required: 2,
                provided: 1,
            }
        );
    }

    #[test]
    fn mismatched_frames_are_rejected_before_any_map_work() {
        let a = RgbImage::<u8>::filled(8, 8, [1, 1, 1]).unwrap();
        let b = RgbImage::<u8>::filled(8, 9, [1, 1, 1]).unwrap();
        let err = focus_stack(&[a.as_view(), b.as_view()]).unwrap_err();
        assert_eq!(
            err,
            MergeError::ShapeMismatch {
                index: 1,
                expected_width: 8,
                expected_height: 8,
                width: 8,
                height: 9,
            }
        );
    }

    #[test]
    fn works_at_sixteen_bit_depth() {
        let mut flat = RgbImage::<u16>::filled(32, 16, [30_000, 30_000, 30_000]).unwrap();
        let mut textured = RgbImage::<u16>::filled(32, 16, [30_000, 30_000, 30_000]).unwrap();
        for y in 0..16 {
            for x in 0..32 {
                let v = if (x / 2 + y / 2) % 2 == 0 { 5_000 } else { 60_000 };
                textured.put_pixel(x, y, [v, v, v]);
            }
        }
        flat.put_pixel(0, 0, [30_001, 30_000, 30_000]);
        let out = focus_stack(&[flat.as_view(), textured.as_view()]).unwrap();
        assert_eq!(out.pixel(16, 8), textured.pixel(16, 8));
    }
}
