//! Skin model: the decoded texture plus its resolved layout metadata.

use std::path::Path;

use image::{imageops, DynamicImage, RgbaImage};

use crate::error::TotemError;
use crate::options::ArmWidth;
use crate::region::{self, BodyPart, LayoutVersion, Rect, SkinLayer, View};

// Only wide-overlay arm geometry paints this pixel, which makes its alpha
// channel a reliable probe for the arm model of 64-tall skins.
const ARM_PROBE: (u32, u32) = (46, 52);

/// A decoded, RGBA-normalized player skin.
///
/// Holds the pixel buffer together with the derived metadata (layout
/// version, arm width, overlay availability) and exposes named region crops
/// through the [catalog](crate::region). Immutable once constructed.
///
/// # Example
///
/// ```no_run
/// use totem_renderer::{ArmWidth, Skin};
///
/// let skin = Skin::open("my_skin.png", ArmWidth::Auto).unwrap();
/// assert_eq!(skin.image().width(), 64);
/// ```
#[derive(Debug, Clone)]
pub struct Skin {
    image: RgbaImage,
    version: LayoutVersion,
    slim: bool,
}

impl Skin {
    /// Creates a skin from a decoded image.
    ///
    /// The buffer is normalized to four channels (alpha forced to 255 where
    /// the source had none). The layout version is derived from the texture
    /// height; `ArmWidth::Auto` resolves through the transparency probe.
    ///
    /// # Errors
    ///
    /// [`TotemError::UnsupportedLayout`] when the texture is not 64×32 or
    /// 64×64.
    pub fn new(image: DynamicImage, arm_width: ArmWidth) -> Result<Self, TotemError> {
        let image = image.to_rgba8();
        let (width, height) = image.dimensions();

        if width != 64 || (height != 32 && height != 64) {
            return Err(TotemError::UnsupportedLayout { width, height });
        }

        let version = if height == 64 {
            LayoutVersion::Modern
        } else {
            LayoutVersion::Legacy
        };

        let slim = match arm_width {
            ArmWidth::Slim => true,
            ArmWidth::Wide => false,
            ArmWidth::Auto => detect_slim(&image),
        };

        Ok(Self {
            image,
            version,
            slim,
        })
    }

    /// Opens and decodes a skin file.
    pub fn open(path: impl AsRef<Path>, arm_width: ArmWidth) -> Result<Self, TotemError> {
        Self::new(image::open(path)?, arm_width)
    }

    /// Decodes a skin from in-memory encoded bytes.
    pub fn from_bytes(bytes: &[u8], arm_width: ArmWidth) -> Result<Self, TotemError> {
        Self::new(image::load_from_memory(bytes)?, arm_width)
    }

    /// The full skin texture.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// The resolved layout version.
    pub fn version(&self) -> LayoutVersion {
        self.version
    }

    /// True when the skin uses the slim (3px) arm model.
    pub fn is_slim(&self) -> bool {
        self.slim
    }

    /// True when the layout carries a second (overlay) layer.
    pub fn has_overlay(&self) -> bool {
        self.version == LayoutVersion::Modern
    }

    /// Crops a named region out of the texture.
    ///
    /// Returns `None` when the region does not exist in this layout (overlay
    /// regions on legacy skins).
    pub fn region(&self, part: BodyPart, view: View, layer: SkinLayer) -> Option<RgbaImage> {
        let rect = region::region(part, view, layer, self.version, self.slim)?;
        Some(self.crop(rect))
    }

    /// Crops an arbitrary rectangle out of the texture.
    pub fn crop(&self, rect: Rect) -> RgbaImage {
        imageops::crop_imm(&self.image, rect.x0, rect.y0, rect.width(), rect.height()).to_image()
    }
}

/// Detects the slim arm model from the transparency probe.
///
/// Legacy (32-tall) skins are always wide. For 64-tall skins, a non-zero
/// alpha at the probe pixel means wide, zero means slim.
fn detect_slim(image: &RgbaImage) -> bool {
    if image.height() == 32 {
        return false;
    }
    image.get_pixel(ARM_PROBE.0, ARM_PROBE.1)[3] == 0
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn blank(width: u32, height: u32) -> RgbaImage {
        RgbaImage::new(width, height)
    }

    fn skin_from(image: RgbaImage, arm_width: ArmWidth) -> Skin {
        Skin::new(DynamicImage::ImageRgba8(image), arm_width).unwrap()
    }

    #[test]
    fn legacy_skins_resolve_wide() {
        let skin = skin_from(blank(64, 32), ArmWidth::Auto);
        assert_eq!(skin.version(), LayoutVersion::Legacy);
        assert!(!skin.is_slim());
        assert!(!skin.has_overlay());
    }

    #[test]
    fn probe_alpha_selects_arm_model() {
        let mut wide = blank(64, 64);
        wide.put_pixel(46, 52, Rgba([10, 10, 10, 255]));
        let skin = skin_from(wide, ArmWidth::Auto);
        assert!(!skin.is_slim());

        let slim = skin_from(blank(64, 64), ArmWidth::Auto);
        assert!(slim.is_slim());
        assert!(slim.has_overlay());
    }

    #[test]
    fn explicit_arm_width_skips_detection() {
        let mut image = blank(64, 64);
        image.put_pixel(46, 52, Rgba([10, 10, 10, 255]));
        let skin = skin_from(image, ArmWidth::Slim);
        assert!(skin.is_slim());
    }

    #[test]
    fn rejects_unknown_layouts() {
        for (w, h) in [(64, 48), (32, 32), (128, 64)] {
            let err = Skin::new(DynamicImage::ImageRgba8(blank(w, h)), ArmWidth::Auto);
            assert!(matches!(
                err,
                Err(TotemError::UnsupportedLayout { width, height }) if width == w && height == h
            ));
        }
    }

    #[test]
    fn alpha_is_normalized_for_opaque_sources() {
        let rgb = DynamicImage::ImageRgb8(image::RgbImage::new(64, 64));
        let skin = Skin::new(rgb, ArmWidth::Wide).unwrap();
        assert_eq!(skin.image().get_pixel(0, 0)[3], 255);
    }

    #[test]
    fn region_crop_has_catalog_dimensions() {
        let skin = skin_from(blank(64, 64), ArmWidth::Slim);
        let arm = skin
            .region(BodyPart::RightArm, View::Front, SkinLayer::Base)
            .unwrap();
        assert_eq!(arm.dimensions(), (3, 12));

        let head = skin
            .region(BodyPart::Head, View::Front, SkinLayer::Base)
            .unwrap();
        assert_eq!(head.dimensions(), (8, 8));
    }

    #[test]
    fn overlay_region_absent_on_legacy() {
        let skin = skin_from(blank(64, 32), ArmWidth::Auto);
        assert!(skin
            .region(BodyPart::Head, View::Front, SkinLayer::Overlay)
            .is_none());
    }

    #[test]
    fn region_crop_copies_pixels() {
        let mut image = blank(64, 64);
        // Top-left pixel of the head front region.
        image.put_pixel(8, 8, Rgba([1, 2, 3, 255]));
        let skin = skin_from(image, ArmWidth::Wide);
        let head = skin
            .region(BodyPart::Head, View::Front, SkinLayer::Base)
            .unwrap();
        assert_eq!(head.get_pixel(0, 0).0, [1, 2, 3, 255]);
    }
}
