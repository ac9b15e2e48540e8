//! Channel-sample abstraction shared by the 8-bit and 16-bit pixel paths.
//!
//! Every compositing policy is written once, generically over [`Sample`], and
//! instantiated per supported depth. The trait is sealed: the engine handles
//! exactly 8-bit and 16-bit unsigned channels.

mod private {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
}

/// Channel depth of an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Depth {
    /// 8 bits per channel.
    U8,
    /// 16 bits per channel.
    U16,
}

impl Depth {
    /// Bits per channel.
    pub fn bits(self) -> u32 {
        match self {
            Depth::U8 => 8,
            Depth::U16 => 16,
        }
    }
}

/// One channel value of one pixel.
pub trait Sample: private::Sealed + Copy + Default + Send + Sync + 'static {
    /// Depth tag for this sample type.
    const DEPTH: Depth;
    /// Largest representable channel value (255 or 65535).
    const MAX_VALUE: u32;
    /// Ratio between this depth's channel-delta units and 8-bit visual units.
    /// Thresholds expressed against 8-bit imagery multiply by this to keep the
    /// same visual meaning at deeper samples.
    const DELTA_SCALE: u32;

    /// Widen to `u32` for lossless arithmetic.
    fn widen(self) -> u32;

    /// Narrow from `u32`, saturating at [`Self::MAX_VALUE`].
    fn from_widened(v: u32) -> Self;
}

impl Sample for u8 {
    const DEPTH: Depth = Depth::U8;
    const MAX_VALUE: u32 = u8::MAX as u32;
    const DELTA_SCALE: u32 = 1;

    #[inline]
    fn widen(self) -> u32 {
        self as u32
    }

    #[inline]
    fn from_widened(v: u32) -> Self {
        v.min(Self::MAX_VALUE) as u8
    }
}

impl Sample for u16 {
    const DEPTH: Depth = Depth::U16;
    const MAX_VALUE: u32 = u16::MAX as u32;
    const DELTA_SCALE: u32 = 256;

    #[inline]
    fn widen(self) -> u32 {
        self as u32
    }

    #[inline]
    fn from_widened(v: u32) -> Self {
        v.min(Self::MAX_VALUE) as u16
    }
}
