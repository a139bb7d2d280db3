//! Shape generation for overlays, bars and debug outlines

use glam::Vec2;

use super::surface::Rect;
use crate::consts::SPRITE_SIZE;
use crate::sim::vector::apply_transform;

/// Bar height for health/stamina bars
pub const BAR_HEIGHT: f32 = 5.0;

/// Background and filled part of a horizontal bar centered above `anchor`.
///
/// `full_width` is the background width; `fill` is the fraction shown and is
/// not clamped, so mobs above base hp draw a longer bar.
pub fn bar(anchor: Vec2, full_width: f32, fill: f32) -> (Rect, Rect) {
    let left = anchor.x - full_width / 2.0;
    let back = Rect::new(left, anchor.y, full_width, BAR_HEIGHT);
    let front = Rect::new(left, anchor.y, full_width * fill.max(0.0), BAR_HEIGHT);
    (back, front)
}

/// Local-space corners of the player hitbox (half the sprite, centered)
fn hitbox_corners() -> [Vec2; 4] {
    let h = SPRITE_SIZE / 4.0;
    [
        Vec2::new(-h, -h),
        Vec2::new(h, -h),
        Vec2::new(h, h),
        Vec2::new(-h, h),
    ]
}

/// Hitbox outline at `center`, rotated by `rotation_deg` and scaled
pub fn hitbox_outline(center: Vec2, rotation_deg: f32, scale: f32) -> Vec<Vec2> {
    let rotation = rotation_deg.to_radians();
    hitbox_corners()
        .iter()
        .map(|&corner| apply_transform(corner, center, rotation, Vec2::splat(scale)))
        .collect()
}
