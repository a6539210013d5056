//! Static catalog of skin texture regions.
//!
//! A Minecraft skin packs every body part into a fixed UV layout. This module
//! maps a semantic key (body part × view × layer) to the pixel rectangle that
//! holds it, parameterized by the skin layout version and arm width. The
//! lookup is a pure constant table; any deviation from these coordinates
//! changes the rendered totem.

// ============================================================================
// Coordinate types
// ============================================================================

/// A rectangle in skin-pixel space, origin top-left, exclusive upper bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl Rect {
    pub const fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Width of the rectangle in pixels.
    pub const fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    /// Height of the rectangle in pixels.
    pub const fn height(&self) -> u32 {
        self.y1 - self.y0
    }
}

// ============================================================================
// Semantic keys
// ============================================================================

/// Body parts of a humanoid skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyPart {
    Head,
    Torso,
    RightArm,
    LeftArm,
    RightLeg,
    LeftLeg,
}

/// The six faces a body part is textured with.
///
/// Side placement on skins follows the standard unwrap: top and bottom above
/// the column group, then left, front, right, back across it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

impl View {
    const fn index(self) -> usize {
        match self {
            View::Front => 0,
            View::Back => 1,
            View::Left => 2,
            View::Right => 3,
            View::Top => 4,
            View::Bottom => 5,
        }
    }
}

/// Base texture or the decorative second layer on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkinLayer {
    Base,
    Overlay,
}

/// The two known skin texture layouts.
///
/// Legacy skins are 64×32 and carry no overlay and no dedicated left-limb
/// regions; modern skins are 64×64.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutVersion {
    Legacy,
    Modern,
}

// ============================================================================
// Region tables
// ============================================================================

// Tables are indexed in View order: front, back, left, right, top, bottom.
type ViewTable = [Rect; 6];

const fn table(coords: [(u32, u32, u32, u32); 6]) -> ViewTable {
    let mut out = [Rect::new(0, 0, 0, 0); 6];
    let mut i = 0;
    while i < 6 {
        let (x0, y0, x1, y1) = coords[i];
        out[i] = Rect::new(x0, y0, x1, y1);
        i += 1;
    }
    out
}

const HEAD: ViewTable = table([
    (8, 8, 16, 16),
    (24, 8, 32, 16),
    (0, 8, 8, 16),
    (16, 8, 24, 16),
    (8, 0, 16, 8),
    (16, 0, 24, 8),
]);

const HEAD_OVERLAY: ViewTable = table([
    (40, 8, 48, 16),
    (56, 8, 64, 16),
    (32, 8, 40, 16),
    (48, 8, 56, 16),
    (40, 0, 48, 8),
    (48, 0, 56, 8),
]);

const TORSO: ViewTable = table([
    (20, 20, 28, 32),
    (32, 20, 40, 32),
    (16, 20, 20, 32),
    (28, 20, 32, 32),
    (20, 16, 28, 20),
    (28, 16, 36, 20),
]);

const TORSO_OVERLAY: ViewTable = table([
    (20, 36, 28, 48),
    (32, 36, 40, 48),
    (16, 36, 20, 48),
    (28, 36, 32, 48),
    (20, 32, 28, 36),
    (28, 32, 36, 36),
]);

const RIGHT_LEG: ViewTable = table([
    (4, 20, 8, 32),
    (12, 20, 16, 32),
    (0, 20, 4, 32),
    (8, 20, 12, 32),
    (4, 16, 8, 20),
    (8, 16, 12, 20),
]);

const RIGHT_LEG_OVERLAY: ViewTable = table([
    (4, 36, 8, 48),
    (12, 36, 16, 48),
    (0, 36, 4, 48),
    (8, 36, 12, 48),
    (4, 32, 8, 36),
    (8, 32, 12, 36),
]);

const LEFT_LEG: ViewTable = table([
    (20, 52, 24, 64),
    (28, 52, 32, 64),
    (16, 52, 20, 64),
    (24, 52, 28, 64),
    (20, 48, 24, 52),
    (24, 48, 28, 52),
]);

const LEFT_LEG_OVERLAY: ViewTable = table([
    (4, 52, 8, 64),
    (12, 52, 16, 64),
    (0, 52, 4, 64),
    (8, 52, 12, 64),
    (4, 48, 8, 52),
    (8, 48, 12, 52),
]);

const RIGHT_ARM_WIDE: ViewTable = table([
    (44, 20, 48, 32),
    (52, 20, 56, 32),
    (40, 20, 44, 32),
    (48, 20, 52, 32),
    (44, 16, 48, 20),
    (48, 16, 52, 20),
]);

const RIGHT_ARM_SLIM: ViewTable = table([
    (44, 20, 47, 32),
    (51, 20, 54, 32),
    (40, 20, 44, 32),
    (47, 20, 51, 32),
    (44, 16, 47, 20),
    (47, 16, 51, 20),
]);

const RIGHT_ARM_OVERLAY_WIDE: ViewTable = table([
    (44, 36, 48, 48),
    (52, 36, 56, 48),
    (40, 36, 44, 48),
    (48, 36, 52, 48),
    (44, 32, 48, 36),
    (48, 32, 52, 36),
]);

const RIGHT_ARM_OVERLAY_SLIM: ViewTable = table([
    (44, 36, 47, 48),
    (51, 36, 54, 48),
    (40, 36, 44, 48),
    (47, 36, 51, 48),
    (44, 32, 47, 36),
    (47, 32, 51, 36),
]);

const LEFT_ARM_WIDE: ViewTable = table([
    (36, 52, 40, 64),
    (44, 52, 48, 64),
    (32, 52, 36, 64),
    (40, 52, 44, 64),
    (36, 48, 40, 52),
    (40, 48, 44, 52),
]);

const LEFT_ARM_SLIM: ViewTable = table([
    (36, 52, 39, 64),
    (43, 52, 47, 64),
    (32, 52, 36, 64),
    (39, 52, 43, 64),
    (36, 48, 39, 52),
    (39, 48, 43, 52),
]);

const LEFT_ARM_OVERLAY_WIDE: ViewTable = table([
    (52, 52, 56, 64),
    (60, 52, 64, 64),
    (48, 52, 52, 64),
    (56, 52, 60, 64),
    (52, 48, 56, 52),
    (56, 48, 60, 52),
]);

const LEFT_ARM_OVERLAY_SLIM: ViewTable = table([
    (52, 52, 55, 64),
    (59, 52, 62, 64),
    (48, 52, 52, 64),
    (55, 52, 59, 64),
    (52, 48, 55, 52),
    (55, 48, 59, 52),
]);

// ============================================================================
// Lookup
// ============================================================================

/// Looks up the skin rectangle for a semantic key.
///
/// Returns `None` when the region does not exist in the given layout:
/// overlay regions are absent from legacy skins. Legacy skins also have no
/// dedicated left-limb regions, so left arm/leg lookups mirror the right
/// side there.
pub fn region(
    part: BodyPart,
    view: View,
    layer: SkinLayer,
    layout: LayoutVersion,
    slim: bool,
) -> Option<Rect> {
    if layout == LayoutVersion::Legacy && layer == SkinLayer::Overlay {
        return None;
    }

    let part = match (part, layout) {
        (BodyPart::LeftArm, LayoutVersion::Legacy) => BodyPart::RightArm,
        (BodyPart::LeftLeg, LayoutVersion::Legacy) => BodyPart::RightLeg,
        (p, _) => p,
    };

    let table = match (part, layer) {
        (BodyPart::Head, SkinLayer::Base) => &HEAD,
        (BodyPart::Head, SkinLayer::Overlay) => &HEAD_OVERLAY,
        (BodyPart::Torso, SkinLayer::Base) => &TORSO,
        (BodyPart::Torso, SkinLayer::Overlay) => &TORSO_OVERLAY,
        (BodyPart::RightLeg, SkinLayer::Base) => &RIGHT_LEG,
        (BodyPart::RightLeg, SkinLayer::Overlay) => &RIGHT_LEG_OVERLAY,
        (BodyPart::LeftLeg, SkinLayer::Base) => &LEFT_LEG,
        (BodyPart::LeftLeg, SkinLayer::Overlay) => &LEFT_LEG_OVERLAY,
        (BodyPart::RightArm, SkinLayer::Base) if slim => &RIGHT_ARM_SLIM,
        (BodyPart::RightArm, SkinLayer::Base) => &RIGHT_ARM_WIDE,
        (BodyPart::RightArm, SkinLayer::Overlay) if slim => &RIGHT_ARM_OVERLAY_SLIM,
        (BodyPart::RightArm, SkinLayer::Overlay) => &RIGHT_ARM_OVERLAY_WIDE,
        (BodyPart::LeftArm, SkinLayer::Base) if slim => &LEFT_ARM_SLIM,
        (BodyPart::LeftArm, SkinLayer::Base) => &LEFT_ARM_WIDE,
        (BodyPart::LeftArm, SkinLayer::Overlay) if slim => &LEFT_ARM_OVERLAY_SLIM,
        (BodyPart::LeftArm, SkinLayer::Overlay) => &LEFT_ARM_OVERLAY_WIDE,
    };

    Some(table[view.index()])
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_front_coordinates() {
        let base = region(
            BodyPart::Head,
            View::Front,
            SkinLayer::Base,
            LayoutVersion::Modern,
            false,
        )
        .unwrap();
        assert_eq!(base, Rect::new(8, 8, 16, 16));

        let overlay = region(
            BodyPart::Head,
            View::Front,
            SkinLayer::Overlay,
            LayoutVersion::Modern,
            false,
        )
        .unwrap();
        assert_eq!(overlay, Rect::new(40, 8, 48, 16));
    }

    #[test]
    fn right_arm_width_depends_on_arm_model() {
        let wide = region(
            BodyPart::RightArm,
            View::Front,
            SkinLayer::Base,
            LayoutVersion::Modern,
            false,
        )
        .unwrap();
        assert_eq!(wide, Rect::new(44, 20, 48, 32));
        assert_eq!(wide.width(), 4);

        let slim = region(
            BodyPart::RightArm,
            View::Front,
            SkinLayer::Base,
            LayoutVersion::Modern,
            true,
        )
        .unwrap();
        assert_eq!(slim, Rect::new(44, 20, 47, 32));
        assert_eq!(slim.width(), 3);
    }

    #[test]
    fn arm_overlay_sits_sixteen_rows_below_base() {
        for slim in [false, true] {
            let base = region(
                BodyPart::RightArm,
                View::Front,
                SkinLayer::Base,
                LayoutVersion::Modern,
                slim,
            )
            .unwrap();
            let overlay = region(
                BodyPart::RightArm,
                View::Front,
                SkinLayer::Overlay,
                LayoutVersion::Modern,
                slim,
            )
            .unwrap();
            assert_eq!(overlay.x0, base.x0);
            assert_eq!(overlay.y0, base.y0 + 16);
            assert_eq!(overlay.width(), base.width());
        }
    }

    #[test]
    fn overlay_unavailable_on_legacy() {
        for part in [
            BodyPart::Head,
            BodyPart::Torso,
            BodyPart::RightArm,
            BodyPart::LeftArm,
            BodyPart::RightLeg,
            BodyPart::LeftLeg,
        ] {
            assert!(
                region(
                    part,
                    View::Front,
                    SkinLayer::Overlay,
                    LayoutVersion::Legacy,
                    false
                )
                .is_none()
            );
        }
    }

    #[test]
    fn legacy_left_limbs_mirror_right() {
        let left_arm = region(
            BodyPart::LeftArm,
            View::Front,
            SkinLayer::Base,
            LayoutVersion::Legacy,
            false,
        );
        let right_arm = region(
            BodyPart::RightArm,
            View::Front,
            SkinLayer::Base,
            LayoutVersion::Legacy,
            false,
        );
        assert_eq!(left_arm, right_arm);

        let left_leg = region(
            BodyPart::LeftLeg,
            View::Front,
            SkinLayer::Base,
            LayoutVersion::Legacy,
            false,
        );
        assert_eq!(left_leg, Some(Rect::new(4, 20, 8, 32)));
    }

    #[test]
    fn modern_left_limbs_have_their_own_regions() {
        let left_arm = region(
            BodyPart::LeftArm,
            View::Front,
            SkinLayer::Base,
            LayoutVersion::Modern,
            false,
        )
        .unwrap();
        assert_eq!(left_arm, Rect::new(36, 52, 40, 64));

        let left_arm_slim = region(
            BodyPart::LeftArm,
            View::Front,
            SkinLayer::Base,
            LayoutVersion::Modern,
            true,
        )
        .unwrap();
        assert_eq!(left_arm_slim, Rect::new(36, 52, 39, 64));

        let left_leg = region(
            BodyPart::LeftLeg,
            View::Front,
            SkinLayer::Base,
            LayoutVersion::Modern,
            false,
        )
        .unwrap();
        assert_eq!(left_leg, Rect::new(20, 52, 24, 64));
    }

    #[test]
    fn torso_front_coordinates() {
        let base = region(
            BodyPart::Torso,
            View::Front,
            SkinLayer::Base,
            LayoutVersion::Modern,
            false,
        )
        .unwrap();
        assert_eq!(base, Rect::new(20, 20, 28, 32));

        let overlay = region(
            BodyPart::Torso,
            View::Front,
            SkinLayer::Overlay,
            LayoutVersion::Modern,
            false,
        )
        .unwrap();
        assert_eq!(overlay, Rect::new(20, 36, 28, 48));
    }
}
