//! Build configuration surface.
//!
//! [`BuildOptions`] captures every knob of a totem build in a format that
//! can be serialized to JSON and shipped across process boundaries.
//!
//! # Example
//!
//! ```
//! use totem_renderer::{ArmWidth, BuildOptions, TopLayers};
//!
//! let options = BuildOptions::new()
//!     .with_arm_width(ArmWidth::Slim)
//!     .with_top_layers(TopLayers::HEAD_ONLY)
//!     .with_round_head(true)
//!     .with_scale_factor(8);
//!
//! let json = options.to_json().unwrap();
//! let restored = BuildOptions::from_json(&json).unwrap();
//! assert_eq!(restored.scale_factor, 8);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// ArmWidth
// ============================================================================

/// Requested arm model of the skin.
///
/// `Auto` defers to the transparency probe in
/// [`Skin::new`](crate::Skin::new).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ArmWidth {
    /// 3px arms.
    Slim,
    /// 4px arms.
    Wide,
    /// Detect from the skin texture.
    #[default]
    Auto,
}

// ============================================================================
// TopLayers
// ============================================================================

/// Per-part selection of which overlay ("second layer") regions to
/// composite on top of the base layer.
///
/// Legacy skins have no overlay regions, so every flag is a silent no-op
/// there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopLayers {
    #[serde(default = "default_true")]
    pub head: bool,
    #[serde(default = "default_true")]
    pub torso: bool,
    #[serde(default = "default_true")]
    pub hands: bool,
    #[serde(default = "default_true")]
    pub legs: bool,
}

impl TopLayers {
    /// Every overlay included.
    pub const ALL: Self = Self {
        head: true,
        torso: true,
        hands: true,
        legs: true,
    };

    /// No overlays at all.
    pub const NONE: Self = Self {
        head: false,
        torso: false,
        hands: false,
        legs: false,
    };

    pub const HEAD_ONLY: Self = Self {
        head: true,
        torso: false,
        hands: false,
        legs: false,
    };

    pub const TORSO_ONLY: Self = Self {
        head: false,
        torso: true,
        hands: false,
        legs: false,
    };

    pub const HANDS_ONLY: Self = Self {
        head: false,
        torso: false,
        hands: true,
        legs: false,
    };

    pub const HEAD_AND_TORSO: Self = Self {
        head: true,
        torso: true,
        hands: false,
        legs: false,
    };

    pub const HEAD_AND_HANDS: Self = Self {
        head: true,
        torso: false,
        hands: true,
        legs: false,
    };
}

impl Default for TopLayers {
    fn default() -> Self {
        Self::ALL
    }
}

fn default_true() -> bool {
    true
}

// ============================================================================
// BuildOptions
// ============================================================================

/// All settings of one totem build.
///
/// # JSON format
///
/// ```json
/// {
///   "armWidth": "auto",
///   "topLayers": { "head": true, "torso": true, "hands": true, "legs": true },
///   "roundHead": false,
///   "scaleFactor": 1
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildOptions {
    /// Requested arm model. Default: auto-detect.
    #[serde(default)]
    pub arm_width: ArmWidth,

    /// Which overlay layers to composite. Default: all.
    #[serde(default)]
    pub top_layers: TopLayers,

    /// Clear the two head corner pixels for a rounded silhouette.
    #[serde(default)]
    pub round_head: bool,

    /// Nearest-neighbor upscale factor; 1 means no scaling.
    #[serde(default = "default_scale")]
    pub scale_factor: i32,
}

fn default_scale() -> i32 {
    1
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            arm_width: ArmWidth::Auto,
            top_layers: TopLayers::ALL,
            round_head: false,
            scale_factor: 1,
        }
    }
}

impl BuildOptions {
    /// Creates options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the requested arm model.
    pub fn with_arm_width(mut self, arm_width: ArmWidth) -> Self {
        self.arm_width = arm_width;
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

    /// Sets the upscale factor.
    pub fn with_scale_factor(mut self, scale_factor: i32) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Serializes the options to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes options from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Tests
// ============================================================================
