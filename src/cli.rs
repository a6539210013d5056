//! Command-line interface for totem generation.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use crate::builder::render_totem;
use crate::error::TotemError;
use crate::options::{ArmWidth, BuildOptions, TopLayers};

const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;

/// Generate a totem-of-undying icon from a Minecraft skin
#[derive(Parser)]
#[command(name = "totem")]
#[command(about = "Generate a totem-of-undying icon from a Minecraft skin")]
#[command(version)]
pub struct Cli {
    /// Path to the skin file
    pub skin_path: PathBuf,

    /// Path to the totem output file
    pub totem_path: PathBuf,

    /// Skin arm model
    #[arg(short = 't', long = "skin-type", value_enum, default_value_t = SkinTypeArg::Auto)]
    pub skin_type: SkinTypeArg,

    /// Which second-layer zones to composite
    #[arg(short = 'l', long = "top-layers", value_enum, default_value_t = TopLayersArg::All)]
    pub top_layers: TopLayersArg,

    /// Round the head at the corners
    #[arg(short = 'r', long = "round-head")]
    pub round_head: bool,

    /// Totem image scaling factor
    #[arg(short = 's', long = "scale", default_value = "1", value_parser = clap::value_parser!(i32).range(1..))]
    pub scale: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SkinTypeArg {
    Wide,
    Slim,
    Auto,
}

impl From<SkinTypeArg> for ArmWidth {
    fn from(arg: SkinTypeArg) -> Self {
        match arg {
            SkinTypeArg::Wide => ArmWidth::Wide,
            SkinTypeArg::Slim => ArmWidth::Slim,
            SkinTypeArg::Auto => ArmWidth::Auto,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TopLayersArg {
    Nothing,
    All,
    OnlyHead,
    OnlyTorso,
    OnlyHands,
    HeadAndTorso,
    HeadAndHands,
}

impl From<TopLayersArg> for TopLayers {
    fn from(arg: TopLayersArg) -> Self {
        match arg {
            TopLayersArg::Nothing => TopLayers::NONE,
            TopLayersArg::All => TopLayers::ALL,
            TopLayersArg::OnlyHead => TopLayers::HEAD_ONLY,
            TopLayersArg::OnlyTorso => TopLayers::TORSO_ONLY,
            TopLayersArg::OnlyHands => TopLayers::HANDS_ONLY,
            TopLayersArg::HeadAndTorso => TopLayers::HEAD_AND_TORSO,
            TopLayersArg::HeadAndHands => TopLayers::HEAD_AND_HANDS,
        }
    }
}

/// Run the CLI application.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let options = BuildOptions::new()
        .with_arm_width(cli.skin_type.into())
        .with_top_layers(cli.top_layers.into())
        .with_round_head(cli.round_head)
        .with_scale_factor(cli.scale);

    match generate(&cli.skin_path, &cli.totem_path, &options) {
        Ok(()) => {
            println!("Generation completed successfully");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn generate(
    skin_path: &PathBuf,
    totem_path: &PathBuf,
    options: &BuildOptions,
) -> Result<(), TotemError> {
    let source = image::open(skin_path)?;
    let totem = render_totem(source, options)?;
    totem.save_with_format(totem_path, image::ImageFormat::Png)?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_defaults() {
        let cli = Cli::try_parse_from(["totem", "skin.png", "out.png"]).unwrap();
        assert_eq!(cli.skin_type, SkinTypeArg::Auto);
        assert_eq!(cli.top_layers, TopLayersArg::All);
        assert!(!cli.round_head);
        assert_eq!(cli.scale, 1);
    }

    #[test]
    fn parses_full_flag_set() {
        let cli = Cli::try_parse_from([
            "totem",
            "skin.png",
            "out.png",
            "--skin-type",
            "slim",
            "--top-layers",
            "head-and-hands",
            "--round-head",
            "--scale",
            "8",
        ])
        .unwrap();
        assert_eq!(cli.skin_type, SkinTypeArg::Slim);
        assert_eq!(TopLayers::from(cli.top_layers), TopLayers::HEAD_AND_HANDS);
        assert!(cli.round_head);
        assert_eq!(cli.scale, 8);
    }

    #[test]
    fn rejects_zero_scale() {
        let result = Cli::try_parse_from(["totem", "skin.png", "out.png", "--scale", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn requires_both_paths() {
        assert!(Cli::try_parse_from(["totem", "skin.png"]).is_err());
    }

    #[test]
    fn end_to_end_generation() {
        use image::RgbaImage;

        let dir = tempfile::tempdir().unwrap();
        let skin_path = dir.path().join("skin.png");
        let totem_path = dir.path().join("totem.png");

        let mut skin = RgbaImage::new(64, 64);
        for pixel in skin.pixels_mut() {
            pixel.0 = [90, 120, 40, 255];
        }
        skin.save(&skin_path).unwrap();

        let options = BuildOptions::new().with_scale_factor(2);
        generate(&skin_path, &totem_path, &options).unwrap();

        let out = image::open(&totem_path).unwrap().to_rgba8();
        assert_eq!(out.dimensions(), (32, 32));
    }

    #[test]
    fn missing_skin_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = generate(
            &dir.path().join("absent.png"),
            &dir.path().join("out.png"),
            &BuildOptions::new(),
        );
        assert!(matches!(result, Err(TotemError::Image(_))));
    }
}
