//! Error types for totem generation.

use thiserror::Error;

/// Errors surfaced by the totem pipeline.
///
/// Everything here is synchronous and leaves no partial side effects: a
/// failed scale keeps the previous buffer, a failed build produces nothing.
#[derive(Debug, Error)]
pub enum TotemError {
    /// Scale factor was zero or negative.
    #[error("cannot scale by factor {0}; the factor must be at least 1")]
    InvalidScaleFactor(i32),

    /// Scale or save was requested before the totem was generated.
    #[error("totem has not been generated yet; call generate() first")]
    TotemNotGenerated,

    /// The source texture is not one of the two known skin layouts.
    #[error("unsupported skin layout {width}x{height}; expected 64x32 or 64x64")]
    UnsupportedLayout { width: u32, height: u32 },

    /// Decode or encode failure from the image codec.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
