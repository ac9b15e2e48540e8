//! Separable Gaussian smoothing and Laplacian response on scalar planes.
//!
//! Borders are handled by clamping coordinates (replicate). Kernels are
//! built once per call; the focus pipeline only ever needs two sizes, so no
//! kernel cache is kept.
use crate::image::Plane;

/// Build a normalized 1-D Gaussian kernel of odd `size`.
pub fn gaussian_kernel_1d(sigma: f32, size: usize) -> Vec<f32> {
    assert!(size % 2 == 1, "gaussian kernel size must be odd");
    assert!(sigma > 0.0, "gaussian sigma must be positive");
    let half = (size / 2) as i32;
    let denom = 2.0 * sigma * sigma;
    let mut kernel = Vec::with_capacity(size);
    let mut sum = 0.0f32;
    for i in -half..=half {
        let v = (-(i * i) as f32 / denom).exp();
        kernel.push(v);
        sum += v;
    }
    for v in &mut kernel {
        *v /= sum;
    }
    kernel
}

/// Two-pass separable convolution with clamped borders.
pub fn separable_blur(src: &Plane<f32>, kernel: &[f32]) -> Plane<f32> {
    let w = src.width();
    let h = src.height();
    if w == 0 || h == 0 || kernel.len() <= 1 {
        return src.clone();
    }
    let half = kernel.len() / 2;

    // Horizontal pass.
    let mut tmp = Plane::new(w, h);
    for y in 0..h {
        let src_row = src.row(y);
        let dst_row = tmp.row_mut(y);
        for (x, dst) in dst_row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, &kv) in kernel.iter().enumerate() {
                let sx = (x + k).saturating_sub(half).min(w - 1);
                acc += src_row[sx] * kv;
            }
            *dst = acc;
        }
    }

    // Vertical pass.
    let mut out = Plane::new(w, h);
    for y in 0..h {
        let dst_row = out.row_mut(y);
        for (k, &kv) in kernel.iter().enumerate() {
            let sy = (y + k).saturating_sub(half).min(h - 1);
            let src_row = tmp.row(sy);
            for (dst, &s) in dst_row.iter_mut().zip(src_row) {
                *dst += s * kv;
            }
        }
    }
    out
}

/// Magnitude of the 4-neighbour discrete Laplacian, clamped borders.
pub fn laplacian_abs(src: &Plane<f32>) -> Plane<f32> {
    let w = src.width();
    let h = src.height();
    let mut out = Plane::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }
    for y in 0..h {
        let up = src.row(y.saturating_sub(1));
        let mid = src.row(y);
        let down = src.row((y + 1).min(h - 1));
        let dst_row = out.row_mut(y);
        for (x, dst) in dst_row.iter_mut().enumerate() {
            let left = mid[x.saturating_sub(1)];
            let right = mid[(x + 1).min(w - 1)];
            let v = up[x] + down[x] + left + right - 4.0 * mid[x];
            *dst = v.abs();
        }
    }
    out
}
