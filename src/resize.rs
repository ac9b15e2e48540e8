//! Bilinear resizing of scalar planes.
//!
//! Used by the focus pipeline to bound its working size and to bring the
//! aggregated sharpness field back to full resolution. Rows of the output are
//! filled in parallel; sample coordinates map corner-to-corner so the first
//! and last row/column of source and destination coincide.
use crate::image::Plane;
use rayon::prelude::*;

/// Resample `src` to `dst_width × dst_height` with bilinear interpolation.
pub fn resize_bilinear(src: &Plane<f32>, dst_width: usize, dst_height: usize) -> Plane<f32> {
    let sw = src.width();
    let sh = src.height();
    if sw == dst_width && sh == dst_height {
        return src.clone();
    }
    let mut out = Plane::new(dst_width, dst_height);
    if dst_width == 0 || dst_height == 0 || sw == 0 || sh == 0 {
        return out;
    }

    let x_ratio = if dst_width > 1 {
        (sw - 1) as f32 / (dst_width - 1) as f32
    } else {
        0.0
    };
    let y_ratio = if dst_height > 1 {
        (sh - 1) as f32 / (dst_height - 1) as f32
    } else {
        0.0
    };

    out.data_mut()
        .par_chunks_mut(dst_width)
        .enumerate()
        .for_each(|(y, dst_row)| {
            let sy = y as f32 * y_ratio;
            let y0 = (sy.floor() as usize).min(sh - 1);
            let y1 = (y0 + 1).min(sh - 1);
            let fy = sy - y0 as f32;
            let top = src.row(y0);
            let bottom = src.row(y1);
            for (x, dst) in dst_row.iter_mut().enumerate() {
                let sx = x as f32 * x_ratio;
                let x0 = (sx.floor() as usize).min(sw - 1);
                let x1 = (x0 + 1).min(sw - 1);
                let fx = sx - x0 as f32;
                let t = top[x0] + (top[x1] - top[x0]) * fx;
                let b = bottom[x0] + (bottom[x1] - bottom[x0]) * fx;
                *dst = t + (b - t) * fy;
            }
        });
    out
}
