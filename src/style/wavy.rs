//! The default totem style.
//!
//! Assembles the canvas in four fixed stages (head, arms, torso, legs) and
//! finishes by clearing the structural gaps beside the legs. Stage order
//! matters: later stages composite over earlier ones.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::options::TopLayers;
use crate::region::{BodyPart, Rect, SkinLayer, View};
use crate::skin::Skin;
use crate::style::{TotemStyle, TOTEM_SIZE};

/// Offset of the head region on the canvas.
const HEAD_DEST: (i64, i64) = (4, 1);

/// Offset of the resized torso on the canvas.
const TORSO_DEST: (i64, i64) = (4, 9);

/// Canvas destinations for the three arm strips, outermost last.
const ARM_DEST_LEFT: [(i64, i64); 3] = [(3, 8), (2, 8), (1, 8)];
const ARM_DEST_RIGHT: [(i64, i64); 3] = [(12, 8), (13, 8), (14, 8)];

/// Horizontal slices of the arm front and the strip width each one is
/// resized to before the rotate step. The third wide strip narrows to 2px.
const ARM_STRIPS_SLIM: [(Rect, u32); 3] = [
    (Rect::new(0, 0, 3, 1), 2),
    (Rect::new(0, 5, 3, 6), 2),
    (Rect::new(0, 11, 3, 12), 2),
];
const ARM_STRIPS_WIDE: [(Rect, u32); 3] = [
    (Rect::new(0, 0, 4, 1), 3),
    (Rect::new(0, 5, 4, 6), 3),
    (Rect::new(0, 11, 4, 12), 2),
];

/// Row-11 slice of a leg front feeding the 2×1 leg strips.
const LEG_STRIP: Rect = Rect::new(0, 11, 4, 12);

/// Thin connective band just above the legs, in skin coordinates.
const WAIST_BAND: Rect = Rect::new(22, 31, 26, 32);

/// Structural gaps in the totem silhouette; always end up empty.
const EMPTY_PIXELS: [(u32, u32); 8] = [
    (4, 15),
    (5, 15),
    (4, 14),
    (4, 13),
    (10, 15),
    (11, 15),
    (11, 14),
    (11, 13),
];

/// The default style, a totem in the shape the item icon uses.
#[derive(Debug, Clone, Copy, Default)]
pub struct WavyStyle;

impl TotemStyle for WavyStyle {
    fn render(&self, skin: &Skin, top_layers: TopLayers) -> RgbaImage {
        let mut canvas = RgbaImage::new(TOTEM_SIZE, TOTEM_SIZE);

        add_head(&mut canvas, skin, top_layers.head);
        add_arms(&mut canvas, skin, top_layers.hands);
        add_torso(&mut canvas, skin, top_layers.torso);
        add_legs(&mut canvas, skin, top_layers.legs);

        for (x, y) in EMPTY_PIXELS {
            canvas.put_pixel(x, y, Rgba([0, 0, 0, 0]));
        }

        canvas
    }
}

fn add_head(canvas: &mut RgbaImage, skin: &Skin, overlay: bool) {
    let head = skin
        .region(BodyPart::Head, View::Front, SkinLayer::Base)
        .expect("head base region exists in every layout");
    imageops::replace(canvas, &head, HEAD_DEST.0, HEAD_DEST.1);

    if overlay {
        if let Some(second) = skin.region(BodyPart::Head, View::Front, SkinLayer::Overlay) {
            imageops::overlay(canvas, &second, HEAD_DEST.0, HEAD_DEST.1);
        }
    }
}

fn add_arms(canvas: &mut RgbaImage, skin: &Skin, overlay: bool) {
    let strips = if skin.is_slim() {
        &ARM_STRIPS_SLIM
    } else {
        &ARM_STRIPS_WIDE
    };

    let left = skin
        .region(BodyPart::LeftArm, View::Front, SkinLayer::Base)
        .expect("arm base region exists in every layout");
    let right = skin
        .region(BodyPart::RightArm, View::Front, SkinLayer::Base)
        .expect("arm base region exists in every layout");
    let left_second = skin.region(BodyPart::LeftArm, View::Front, SkinLayer::Overlay);
    let right_second = skin.region(BodyPart::RightArm, View::Front, SkinLayer::Overlay);

    for (i, &(slice, width)) in strips.iter().enumerate() {
        let line_left = arm_strip(&left, slice, width);
        let line_right = arm_strip(&right, slice, width);
        imageops::replace(canvas, &line_left, ARM_DEST_LEFT[i].0, ARM_DEST_LEFT[i].1);
        imageops::replace(canvas, &line_right, ARM_DEST_RIGHT[i].0, ARM_DEST_RIGHT[i].1);

        if overlay {
            if let (Some(ls), Some(rs)) = (&left_second, &right_second) {
                let line_left = arm_strip(ls, slice, width);
                let line_right = arm_strip(rs, slice, width);
                imageops::overlay(canvas, &line_left, ARM_DEST_LEFT[i].0, ARM_DEST_LEFT[i].1);
                imageops::overlay(canvas, &line_right, ARM_DEST_RIGHT[i].0, ARM_DEST_RIGHT[i].1);
            }
        }
    }
}

/// Crops one horizontal slice of an arm front, resizes it to the strip
/// width and stands it upright (90° counter-clockwise, expanding).
fn arm_strip(arm: &RgbaImage, slice: Rect, width: u32) -> RgbaImage {
    let line =
        imageops::crop_imm(arm, slice.x0, slice.y0, slice.width(), slice.height()).to_image();
    let resized = imageops::resize(&line, width, 1, FilterType::Nearest);
    imageops::rotate270(&resized)
}

fn add_torso(canvas: &mut RgbaImage, skin: &Skin, overlay: bool) {
    let torso = skin
        .region(BodyPart::Torso, View::Front, SkinLayer::Base)
        .expect("torso base region exists in every layout");
    let resized = imageops::resize(&torso, 8, 7, FilterType::Nearest);
    // Masked paste: transparent torso pixels leave the canvas untouched.
    imageops::overlay(canvas, &resized, TORSO_DEST.0, TORSO_DEST.1);

    if overlay {
        if let Some(second) = skin.region(BodyPart::Torso, View::Front, SkinLayer::Overlay) {
            let resized = imageops::resize(&second, 8, 7, FilterType::Nearest);
            imageops::overlay(canvas, &resized, TORSO_DEST.0, TORSO_DEST.1);
        }
    }
}

fn add_legs(canvas: &mut RgbaImage, skin: &Skin, overlay: bool) {
    let right = skin
        .region(BodyPart::RightLeg, View::Front, SkinLayer::Base)
        .expect("leg base region exists in every layout");
    let left = skin
        .region(BodyPart::LeftLeg, View::Front, SkinLayer::Base)
        .expect("leg base region exists in every layout");

    imageops::overlay(canvas, &leg_strip(&right), 6, 15);
    imageops::overlay(canvas, &leg_strip(&left), 8, 15);

    imageops::overlay(canvas, &skin.crop(WAIST_BAND), 6, 14);

    if overlay {
        let right_second = skin.region(BodyPart::RightLeg, View::Front, SkinLayer::Overlay);
        let left_second = skin.region(BodyPart::LeftLeg, View::Front, SkinLayer::Overlay);
        // The overlay strips land on the opposite sides of the base strips.
        if let (Some(rs), Some(ls)) = (right_second, left_second) {
            imageops::overlay(canvas, &leg_strip(&rs), 8, 15);
            imageops::overlay(canvas, &leg_strip(&ls), 6, 15);
        }
    }
}

fn leg_strip(leg: &RgbaImage) -> RgbaImage {
    let line = imageops::crop_imm(
        leg,
        LEG_STRIP.x0,
        LEG_STRIP.y0,
        LEG_STRIP.width(),
        LEG_STRIP.height(),
    )
    .to_image();
    imageops::resize(&line, 2, 1, FilterType::Nearest)
}

// ============================================================================
// Tests
// ============================================================================
