pub mod io;
mod plane;
mod rgb;
mod sample;

pub use self::plane::Plane;
pub use self::rgb::{RgbImage, RgbView, CHANNELS};
pub use self::sample::{Depth, Sample};
