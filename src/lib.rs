#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod error;
pub mod image;
pub mod merge;
pub mod metrics;
pub mod sharpness;
pub mod stitch;

// “Expert” modules – still public, but considered unstable internals.
pub mod filter;
pub mod resize;

// --- High-level re-exports -------------------------------------------------

// Main entry points: the compositing policies.
pub use crate::merge::{
    extreme_brightness, focus_stack, nearest_or_farthest, nearest_to_reference, stack_average,
    Extreme,
};

// Everything a call can fail with.
pub use crate::error::MergeError;

// Per-call knobs and the focus-measure surface.
pub use crate::metrics::DistanceMetric;
pub use crate::sharpness::{sharpness_map, SharpnessMap};

// Stitching boundary.
pub use crate::stitch::{stitch_panorama, Projection, Stitcher};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use photomerge::prelude::*;
///
/// # fn main() -> Result<(), MergeError> {
/// let noon = RgbImage::<u8>::filled(16, 16, [200, 190, 170])?;
/// let dusk = RgbImage::<u8>::filled(16, 16, [60, 40, 80])?;
///
/// let trail = extreme_brightness(&[noon.as_view(), dusk.as_view()], Extreme::Light)?;
/// assert_eq!(trail.pixel(8, 8), [200, 190, 170]);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::error::MergeError;
    pub use crate::image::{Plane, RgbImage, RgbView};
    pub use crate::merge::{
        extreme_brightness, focus_stack, nearest_or_farthest, nearest_to_reference, stack_average,
        Extreme,
    };
    pub use crate::metrics::DistanceMetric;
    pub use crate::sharpness::{sharpness_map, SharpnessMap};
    pub use crate::stitch::{stitch_panorama, Projection, Stitcher};
}
