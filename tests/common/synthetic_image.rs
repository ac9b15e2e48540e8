use photomerge::image::RgbImage;

/// Generates a frame with a deterministic two-axis color gradient.
pub fn gradient_rgb8(width: usize, height: usize) -> RgbImage<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = RgbImage::new(width, height).unwrap();
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / width.max(1)) as u8;
            let g = (y * 255 / height.max(1)) as u8;
            let b = ((x + y) * 255 / (width + height)) as u8;
            img.put_pixel(x, y, [r, g, b]);
        }
    }
    img
}

/// Generates a high-contrast checkerboard frame.
pub fn checkerboard_rgb8(width: usize, height: usize, cell: usize) -> RgbImage<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");
    let mut img = RgbImage::new(width, height).unwrap();
    for y in 0..height {
        for x in 0..width {
            let v = if ((x / cell) + (y / cell)) % 2 == 0 {
                32u8
            } else {
                220u8
            };
            img.put_pixel(x, y, [v, v, v]);
        }
    }
    img
}

/// Frame that is a sharp checkerboard inside `x0..x1` and flat gray outside,
/// imitating one slice of a focus bracket.
pub fn focus_slice_rgb8(
    width: usize,
    height: usize,
    x0: usize,
    x1: usize,
    cell: usize,
) -> RgbImage<u8> {
    let mut img = RgbImage::filled(width, height, [128, 128, 128]).unwrap();
    for y in 0..height {
        for x in x0..x1.min(width) {
            let v = if ((x / cell) + (y / cell)) % 2 == 0 {
                20u8
            } else {
                235u8
            };
            img.put_pixel(x, y, [v, v, v]);
        }
    }
    img
}
