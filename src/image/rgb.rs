//! Interleaved 3-channel image buffers: borrowed views over caller storage
//! and owned, always-tight output buffers.
//!
//! A view carries an explicit stride (samples between row starts) so padded
//! layouts can be represented and rejected up front; the compositing policies
//! only accept contiguous views (`stride == width * 3`). Owned images are
//! allocated tight and zero-filled.
use super::sample::Sample;
use crate::error::MergeError;

/// Channels per pixel. The engine is fixed at 3-channel color.
pub const CHANNELS: usize = 3;

/// Read-only borrowed view of an interleaved 3-channel image.
#[derive(Clone, Copy, Debug)]
pub struct RgbView<'a, T> {
    w: usize,
    h: usize,
    stride: usize,
    data: &'a [T],
}

impl<'a, T: Sample> RgbView<'a, T> {
    /// Borrow `data` as a `width × height` view with `stride` samples between
    /// row starts.
    ///
    /// Panics if the buffer is too short for the described geometry; handing
    /// a short buffer across the boundary is a caller bug, not a recoverable
    /// condition.
    pub fn new(width: usize, height: usize, stride: usize, data: &'a [T]) -> Self {
        if height > 0 {
            let needed = (height - 1) * stride + width * CHANNELS;
            assert!(
                data.len() >= needed,
                "buffer holds {} samples, {width}x{height} with stride {stride} needs {needed}",
                data.len()
            );
            assert!(stride >= width * CHANNELS, "stride shorter than a row");
        }
        Self {
            w: width,
            h: height,
            stride,
            data,
        }
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    /// Samples between consecutive row starts.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// True when either dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// True when rows are tightly packed (`stride == width * 3`).
    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.stride == self.w * CHANNELS
    }

    /// One row of interleaved samples (`width * 3` long).
    #[inline]
    pub fn row(&self, y: usize) -> &'a [T] {
        let start = y * self.stride;
        &self.data[start..start + self.w * CHANNELS]
    }

    /// The pixel tuple at (x, y).
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [T; CHANNELS] {
        let i = y * self.stride + x * CHANNELS;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
}

/// Owned interleaved 3-channel image, always tightly packed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbImage<T> {
    w: usize,
    h: usize,
    data: Vec<T>,
}

impl<T: Sample> RgbImage<T> {
    /// Allocate a zero-filled `width × height` image.
    ///
    /// Fails with [`MergeError::AllocationFailure`] when either dimension is
    /// zero or the reservation is refused, so callers see allocation problems
    /// as a result instead of an abort.
    pub fn new(width: usize, height: usize) -> Result<Self, MergeError> {
        let failure = MergeError::AllocationFailure { width, height };
        let samples = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or_else(|| failure.clone())?;
        if samples == 0 {
            return Err(failure);
        }
        let mut data = Vec::new();
        data.try_reserve_exact(samples).map_err(|_| failure)?;
        data.resize(samples, T::default());
        Ok(Self {
            w: width,
            h: height,
            data,
        })
    }

    /// Allocate an image with every pixel set to `pixel`.
    pub fn filled(width: usize, height: usize, pixel: [T; CHANNELS]) -> Result<Self, MergeError> {
        let mut image = Self::new(width, height)?;
        for px in image.data.chunks_exact_mut(CHANNELS) {
            px.copy_from_slice(&pixel);
        }
        Ok(image)
    }

    /// Wrap an existing tight buffer; `None` when the length does not match
    /// `width * height * 3`.
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Option<Self> {
        (data.len() == width * height * CHANNELS).then_some(Self {
            w: width,
            h: height,
            data,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    /// Borrow as a contiguous read-only view.
    #[inline]
    pub fn as_view(&self) -> RgbView<'_, T> {
        RgbView {
            w: self.w,
            h: self.h,
            stride: self.w * CHANNELS,
            data: &self.data,
        }
    }

    /// One row of interleaved samples.
    #[inline]
    pub fn row(&self, y: usize) -> &[T] {
        let start = y * self.w * CHANNELS;
        &self.data[start..start + self.w * CHANNELS]
    }

    /// One mutable row of interleaved samples.
    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [T] {
        let start = y * self.w * CHANNELS;
        let end = start + self.w * CHANNELS;
        &mut self.data[start..end]
    }

    /// The pixel tuple at (x, y).
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [T; CHANNELS] {
        let i = (y * self.w + x) * CHANNELS;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Overwrite the pixel tuple at (x, y).
    #[inline]
    pub fn put_pixel(&mut self, x: usize, y: usize, pixel: [T; CHANNELS]) {
        let i = (y * self.w + x) * CHANNELS;
        self.data[i..i + CHANNELS].copy_from_slice(&pixel);
    }

    /// Backing storage in row-major order.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable backing storage, for row-partitioned fills.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the image, returning the backing storage.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_zero_filled() {
        let img = RgbImage::<u8>::new(3, 2).unwrap();
        assert_eq!(img.width(), 3);
        assert_eq!(img.height(), 2);
        assert!(img.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn zero_sized_allocation_fails() {
        assert_eq!(
            RgbImage::<u8>::new(0, 4),
            Err(MergeError::AllocationFailure {
                width: 0,
                height: 4
            })
        );
        assert_eq!(
            RgbImage::<u16>::new(4, 0),
            Err(MergeError::AllocationFailure {
                width: 4,
                height: 0
            })
        );
    }

    #[test]
    fn pixel_roundtrip() {
        let mut img = RgbImage::<u16>::new(4, 3).unwrap();
        img.put_pixel(2, 1, [1, 2, 65_535]);
        assert_eq!(img.pixel(2, 1), [1, 2, 65_535]);
        assert_eq!(img.as_view().pixel(2, 1), [1, 2, 65_535]);
        assert_eq!(img.pixel(0, 0), [0, 0, 0]);
    }

    #[test]
    fn view_contiguity_tracks_stride() {
        let data = vec![0u8; 2 * 8]; // 2 rows, stride 8, width 2
        let padded = RgbView::new(2, 2, 8, &data);
        assert!(!padded.is_contiguous());

        let tight = RgbView::new(2, 2, 6, &data[..12]);
        assert!(tight.is_contiguous());
    }

    #[test]
    fn padded_view_rows_skip_padding() {
        // width 1, stride 5: one pixel plus two padding samples per row
        let data: Vec<u8> = (0..10).collect();
        let view = RgbView::new(1, 2, 5, &data);
        assert_eq!(view.pixel(0, 0), [0, 1, 2]);
        assert_eq!(view.pixel(0, 1), [5, 6, 7]);
        assert_eq!(view.row(1), &[5, 6, 7]);
    }

    #[test]
    fn from_vec_checks_length() {
        assert!(RgbImage::<u8>::from_vec(2, 2, vec![0; 12]).is_some());
        assert!(RgbImage::<u8>::from_vec(2, 2, vec![0; 11]).is_none());
    }

    #[test]
    fn into_vec_releases_the_backing_storage() {
        let mut img = RgbImage::<u8>::new(2, 1).unwrap();
        img.put_pixel(1, 0, [7, 8, 9]);
        assert_eq!(img.into_vec(), vec![0, 0, 0, 7, 8, 9]);
    }
}
