//! Error type shared by all compositing entry points.
//!
//! Every failure is detected before or during the single output pass and
//! aborts the call; no partially written image is ever returned. Variants
//! carry enough context to name the offending input.
use crate::stitch::Projection;
use thiserror::Error;

/// Failure modes of a compositing or stitching call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    /// A stack image's dimensions disagree with the reference image or with
    /// the rest of the stack.
    #[error("image {index} is {width}x{height}, expected {expected_width}x{expected_height}")]
    ShapeMismatch {
        index: usize,
        expected_width: usize,
        expected_height: usize,
        width: usize,
        height: usize,
    },

    /// An input buffer has padded rows. The engine refuses strided layouts
    /// rather than silently copying them. `index` names the stack position,
    /// `None` when the offending buffer is the reference image.
    #[error(
        "{} has padded rows (stride {} samples, tight rows take {})",
        frame_label(.index),
        .stride,
        .tight
    )]
    NotContiguous {
        index: Option<usize>,
        stride: usize,
        tight: usize,
    },

    /// Fewer images supplied than the policy requires.
    #[error("{provided} image(s) supplied, policy needs at least {required}")]
    InsufficientImages { required: usize, provided: usize },

    /// The reference image cannot serve as a per-pixel baseline.
    #[error("reference image {0}")]
    InvalidReference(&'static str),

    /// The output buffer could not be created.
    #[error("could not allocate a {width}x{height} output image")]
    AllocationFailure { width: usize, height: usize },

    /// The stitching backend rejected the requested projection model.
    #[error("stitching backend does not support the {0:?} projection")]
    UnsupportedProjection(Projection),
}

fn frame_label(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!("image {i}"),
        None => "reference image".to_owned(),
    }
}
