//! Compositing strategies.
//!
//! A style is anything that can assemble a 16×16 totem canvas from a skin.
//! The trait keeps the seam open for alternate layouts; [`WavyStyle`] is the
//! one concrete implementation shipped with the crate.

pub mod wavy;

pub use wavy::WavyStyle;

use image::RgbaImage;

use crate::options::TopLayers;
use crate::skin::Skin;

/// Side length of the totem canvas in pixels.
pub const TOTEM_SIZE: u32 = 16;

/// A totem compositing strategy.
///
/// Implementations receive an immutable skin and own their canvas for the
/// duration of one render; concurrent renders on independent skins cannot
/// interfere.
pub trait TotemStyle {
    /// Assembles the totem canvas from the skin.
    ///
    /// `top_layers` selects which body parts get their overlay layer
    /// composited on top of the base layer; parts whose overlay region does
    /// not exist in the skin's layout are skipped silently.
    fn render(&self, skin: &Skin, top_layers: TopLayers) -> RgbaImage;
}
