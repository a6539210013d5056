//! Async facade over the synchronous core.
//!
//! Offloads the CPU-bound build/scale/save calls onto the tokio blocking
//! pool so a cooperative caller is not blocked. Holds no state of its own:
//! every function delegates to the synchronous core and waits for the
//! worker to finish. Only available with the `async` feature.
//!
//! # Example
//!
//! ```no_run
//! use totem_renderer::{aio, ArmWidth, BuildOptions, Skin, TopLayers};
//!
//! # async fn demo() -> Result<(), totem_renderer::TotemError> {
//! let skin = Skin::open("my_skin.png", ArmWidth::Auto)?;
//! let totem = aio::render(skin, TopLayers::ALL, false).await;
//! aio::save_png(totem.into_image(), "totem.png").await?;
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::builder::{self, TotemBuilder};
use crate::error::TotemError;
use crate::options::{BuildOptions, TopLayers};
use crate::skin::Skin;
use crate::totem::Totem;

/// Builds a totem on the blocking pool.
pub async fn render(skin: Skin, top_layers: TopLayers, round_head: bool) -> Totem {
    offload(move || {
        TotemBuilder::new(skin)
            .with_top_layers(top_layers)
            .with_round_head(round_head)
            .build()
    })
    .await
}

/// Runs the full pipeline (resolve, build, scale) on the blocking pool.
pub async fn render_scaled(
    source: DynamicImage,
    options: BuildOptions,
) -> Result<RgbaImage, TotemError> {
    offload(move || builder::render_totem(source, &options)).await
}

/// Encodes and writes a buffer as PNG on the blocking pool.
pub async fn save_png(image: RgbaImage, path: impl Into<PathBuf>) -> Result<(), TotemError> {
    let path = path.into();
    offload(move || {
        image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    })
    .await
}

async fn offload<T, F>(job: F) -> T
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    match tokio::task::spawn_blocking(job).await {
        Ok(value) => value,
        // The core is panic-free for validated inputs; a worker panic is a
        // bug and is re-raised on the caller.
        Err(join_error) => std::panic::resume_unwind(join_error.into_panic()),
    }
}

// ============================================================================
// Tests
// ============================================================================
