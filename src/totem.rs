//! The finished totem and nearest-neighbor upscaling.

use image::RgbaImage;

use crate::error::TotemError;
use crate::options::TopLayers;

/// A finished totem icon.
///
/// Holds the 16×16 pixel buffer together with the resolved options it was
/// built with. Frozen: never mutated after the build returns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Totem {
    image: RgbaImage,
    slim: bool,
    top_layers: TopLayers,
    rounded_head: bool,
}

impl Totem {
    pub(crate) fn new(
        image: RgbaImage,
        slim: bool,
        top_layers: TopLayers,
        rounded_head: bool,
    ) -> Self {
        Self {
            image,
            slim,
            top_layers,
            rounded_head,
        }
    }

    /// The totem pixel buffer.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Consumes the totem, returning the pixel buffer.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Whether the totem was built from a slim-arm skin.
    pub fn is_slim(&self) -> bool {
        self.slim
    }

    /// The overlay selection the totem was built with.
    pub fn top_layers(&self) -> TopLayers {
        self.top_layers
    }

    /// Whether the head corners were cleared.
    pub fn rounded_head(&self) -> bool {
        self.rounded_head
    }

    /// Upscales the totem by an integer factor into a new buffer.
    ///
    /// The totem itself is not modified.
    ///
    /// # Errors
    ///
    /// [`TotemError::InvalidScaleFactor`] when `factor <= 0`.
    pub fn scale(&self, factor: i32) -> Result<RgbaImage, TotemError> {
        scale_nearest(&self.image, factor)
    }
}

/// Nearest-neighbor integer upscaling.
///
/// Each source pixel is replicated into a `factor × factor` block of the
/// output; the source is read once per pixel. Produces a fresh buffer of
/// `(width * factor, height * factor)` that shares nothing with the input.
///
/// # Errors
///
/// [`TotemError::InvalidScaleFactor`] when `factor <= 0`.
pub fn scale_nearest(image: &RgbaImage, factor: i32) -> Result<RgbaImage, TotemError> {
    if factor <= 0 {
        return Err(TotemError::InvalidScaleFactor(factor));
    }
    let factor = factor as u32;

    let mut scaled = RgbaImage::new(image.width() * factor, image.height() * factor);
    for (x, y, pixel) in image.enumerate_pixels() {
        for j in 0..factor {
            for i in 0..factor {
                scaled.put_pixel(x * factor + i, y * factor + j, *pixel);
            }
        }
    }
    Ok(scaled)
}

// ============================================================================
// Tests
// ============================================================================
