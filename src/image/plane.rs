//! Owned single-channel scalar grid in row-major layout (no row padding).
//!
//! Working surface of the focus pipeline (`Plane<f32>` intermediates,
//! `Plane<i16>` sharpness maps). Not an input type for compositing calls.
#[derive(Clone, Debug, PartialEq)]
pub struct Plane<T> {
    w: usize,
    h: usize,
    data: Vec<T>,
}

impl<T: Copy + Default> Plane<T> {
    /// Zero-initialized `width × height` grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            w: width,
            h: height,
            data: vec![T::default(); width * height],
        }
    }

    /// Wrap a row-major buffer; `data` must hold exactly `width * height`
    /// values.
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Self {
        assert_eq!(data.len(), width * height, "plane buffer length mismatch");
        Self {
            w: width,
            h: height,
            data,
        }
    }

    /// Grid width.
    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    /// Grid height.
    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    #[inline]
    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    /// Value at (x, y).
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[self.idx(x, y)]
    }

    /// Overwrite the value at (x, y).
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: T) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// One row of values.
    #[inline]
    pub fn row(&self, y: usize) -> &[T] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }

    /// One mutable row of values.
    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [T] {
        let start = y * self.w;
        let end = start + self.w;
        &mut self.data[start..end]
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
}
