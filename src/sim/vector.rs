//! Small vector helpers on top of glam

use glam::{Mat2, Vec2};

/// Normalize, leaving the zero vector unchanged
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    v.normalize_or_zero()
}

/// Counter-clockwise rotation matrix for `angle` radians
#[inline]
pub fn rotation_matrix(angle: f32) -> Mat2 {
    Mat2::from_angle(angle)
}

/// Rotate `v` by `angle` radians
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    rotation_matrix(angle) * v
}

/// Rotate, then scale, then translate a local-space point
pub fn apply_transform(point: Vec2, position: Vec2, rotation: f32, scale: Vec2) -> Vec2 {
    position + rotate(point, rotation) * scale
}
