//! I/O helpers for the demo binaries and tests.
//!
//! - `load_rgb8`: read a PNG/JPEG/etc. into an owned 8-bit color buffer.
//! - `save_rgb8`: write a merge result to a PNG/JPEG.
//! - `save_sharpness_png`: write a sharpness map as a normalized gray PNG.
//!
//! The compositing engine itself never touches files; these helpers live at
//! the tool boundary and report errors as strings.
use super::plane::Plane;
use super::rgb::RgbImage;
use image::{GrayImage, ImageBuffer, Rgb};
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to interleaved 8-bit color.
pub fn load_rgb8(path: &Path) -> Result<RgbImage<u8>, String> {
    let decoded = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = decoded.width() as usize;
    let height = decoded.height() as usize;
    RgbImage::from_vec(width, height, decoded.into_raw())
        .ok_or_else(|| format!("Decoded buffer size mismatch for {}", path.display()))
}

/// Save an 8-bit color image; format follows the file extension. Consumes
/// the image so the encoder can take the backing buffer without a copy.
pub fn save_rgb8(image: RgbImage<u8>, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let width = image.width() as u32;
    let height = image.height() as u32;
    let buffer: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_raw(width, height, image.into_vec())
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    buffer
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save a sharpness map as a grayscale PNG, normalized so the sharpest
/// region renders white.
pub fn save_sharpness_png(map: &Plane<i16>, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let peak = map.data().iter().copied().max().unwrap_or(0).max(1) as f32;
    let mut out = GrayImage::new(map.width() as u32, map.height() as u32);
    for y in 0..map.height() {
        let row = map.row(y);
        for (x, &v) in row.iter().enumerate() {
            let shade = (v.max(0) as f32 / peak * 255.0).clamp(0.0, 255.0);
            out.put_pixel(x as u32, y as u32, image::Luma([shade as u8]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
