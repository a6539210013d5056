//! Totem build orchestration.
//!
//! [`TotemBuilder`] drives one skin through the compositing style and keeps
//! the in-progress buffer for the generate → scale → save call sequence.
//! [`render_totem`] is the one-shot pipeline used by the CLI and the async
//! facade.

use std::path::Path;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use crate::error::TotemError;
use crate::options::{BuildOptions, TopLayers};
use crate::skin::Skin;
use crate::style::{TotemStyle, WavyStyle};
use crate::totem::{scale_nearest, Totem};

/// The two head corner pixels cleared by the round-head option.
const HEAD_CORNERS: [(u32, u32); 2] = [(4, 1), (11, 1)];

/// Builds totems from a skin.
///
/// Each builder owns its skin and its in-progress canvas; concurrent builds
/// on independent builders cannot interfere.
///
/// # Example
///
/// ```no_run
/// use totem_renderer::{ArmWidth, Skin, TotemBuilder};
///
/// let skin = Skin::open("my_skin.png", ArmWidth::Auto).unwrap();
/// let mut builder = TotemBuilder::new(skin).with_round_head(true);
/// builder.generate();
/// builder.scale(8).unwrap();
/// builder.save("totem.png").unwrap();
/// ```
pub struct TotemBuilder {
    skin: Skin,
    style: Box<dyn TotemStyle>,
    top_layers: TopLayers,
    round_head: bool,
    raw: Option<RgbaImage>,
}

impl TotemBuilder {
    /// Creates a builder with the default style and every overlay selected.
    pub fn new(skin: Skin) -> Self {
        Self {
            skin,
            style: Box::new(WavyStyle),
            top_layers: TopLayers::ALL,
            round_head: false,
            raw: None,
        }
    }

    /// Replaces the compositing style.
    pub fn with_style(mut self, style: impl TotemStyle + 'static) -> Self {
        self.style = Box::new(style);
        self
    }

    /// Sets the overlay selection.
    pub fn with_top_layers(mut self, top_layers: TopLayers) -> Self {
        self.top_layers = top_layers;
        self
    }

    /// Sets head rounding.
    pub fn with_round_head(mut self, round_head: bool) -> Self {
        self.round_head = round_head;
        self
    }

    /// The skin this builder renders from.
    pub fn skin(&self) -> &Skin {
        &self.skin
    }

    /// The current buffer, if one has been generated.
    pub fn raw(&self) -> Option<&RgbaImage> {
        self.raw.as_ref()
    }

    /// Renders the totem canvas and stores it as the current buffer.
    ///
    /// A repeated call regenerates from the skin, discarding any scaling
    /// applied since the previous generate.
    pub fn generate(&mut self) -> &RgbaImage {
        let mut canvas = self.style.render(&self.skin, self.top_layers);

        if self.round_head {
            for (x, y) in HEAD_CORNERS {
                canvas.put_pixel(x, y, Rgba([0, 0, 0, 0]));
            }
        }

        self.raw.insert(canvas)
    }

    /// Scales the current buffer in place by an integer factor.
    ///
    /// # Errors
    ///
    /// [`TotemError::TotemNotGenerated`] before [`generate`](Self::generate);
    /// [`TotemError::InvalidScaleFactor`] for `factor <= 0`. A failed scale
    /// leaves the current buffer untouched.
    pub fn scale(&mut self, factor: i32) -> Result<&RgbaImage, TotemError> {
        let raw = self.raw.as_ref().ok_or(TotemError::TotemNotGenerated)?;
        let scaled = scale_nearest(raw, factor)?;
        Ok(self.raw.insert(scaled))
    }

    /// Writes the current buffer as a PNG.
    ///
    /// # Errors
    ///
    /// [`TotemError::TotemNotGenerated`] before [`generate`](Self::generate);
    /// [`TotemError::Image`] on encode or I/O failure.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), TotemError> {
        let raw = self.raw.as_ref().ok_or(TotemError::TotemNotGenerated)?;
        raw.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }

    /// Generates (if needed) and freezes the result into a [`Totem`].
    pub fn build(&mut self) -> Totem {
        let image = match self.raw.as_ref() {
            Some(raw) => raw.clone(),
            None => self.generate().clone(),
        };
        Totem::new(image, self.skin.is_slim(), self.top_layers, self.round_head)
    }
}

/// One-shot pipeline: resolve the skin, build the totem, apply scaling.
///
/// `scale_factor == 1` skips the scaling pass entirely; any factor below 1
/// is rejected.
///
/// # Errors
///
/// [`TotemError::UnsupportedLayout`] for textures outside the two known
/// layouts; [`TotemError::InvalidScaleFactor`] for `scale_factor <= 0`.
pub fn render_totem(source: DynamicImage, options: &BuildOptions) -> Result<RgbaImage, TotemError> {
    let skin = Skin::new(source, options.arm_width)?;
    let mut builder = TotemBuilder::new(skin)
        .with_top_layers(options.top_layers)
        .with_round_head(options.round_head);
    let totem = builder.build();

    if options.scale_factor == 1 {
        Ok(totem.into_image())
    } else {
        totem.scale(options.scale_factor)
    }
}

// ============================================================================
// Tests
// ============================================================================
