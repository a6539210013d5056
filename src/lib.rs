//! totem-renderer: Minecraft skin to totem-of-undying icon conversion
//!
//! This crate crops, resizes, rotates and alpha-composites fixed regions of
//! a player skin texture onto a 16×16 canvas, producing the small totem
//! icon, with optional nearest-neighbor upscaling.
//!
//! # Example
//!
//! ```no_run
//! use totem_renderer::{ArmWidth, Skin, TopLayers, TotemBuilder};
//!
//! let skin = Skin::open("my_skin.png", ArmWidth::Auto).unwrap();
//!
//! let mut builder = TotemBuilder::new(skin)
//!     .with_top_layers(TopLayers::ALL)
//!     .with_round_head(true);
//!
//! builder.generate();
//! builder.scale(8).unwrap();
//! builder.save("totem.png").unwrap();
//! ```
//!
//! # One-shot pipeline
//!
//! For callers that just want pixels out, [`render_totem`] runs the whole
//! resolve → build → scale pipeline from a decoded image and a serializable
//! [`BuildOptions`] profile:
//!
//! ```no_run
//! use totem_renderer::{render_totem, BuildOptions};
//!
//! let source = image::open("my_skin.png").unwrap();
//! let options = BuildOptions::from_json(r#"{ "scaleFactor": 4 }"#).unwrap();
//! let pixels = render_totem(source, &options).unwrap();
//! ```
//!
//! # Features
//!
//! - `async` — tokio-based facade ([`aio`]) that offloads builds onto the
//!   blocking pool.
//! - `cli` — the `totem` command-line binary.

mod builder;
mod error;
mod options;
mod region;
mod skin;
mod style;
mod totem;

#[cfg(feature = "async")]
pub mod aio;

#[cfg(feature = "cli")]
pub mod cli;

pub use builder::{render_totem, TotemBuilder};
pub use error::TotemError;
pub use options::{ArmWidth, BuildOptions, TopLayers};
pub use region::{region, BodyPart, LayoutVersion, Rect, SkinLayer, View};
pub use skin::Skin;
pub use style::{TotemStyle, WavyStyle, TOTEM_SIZE};
pub use totem::{scale_nearest, Totem};
