//! Camera that keeps a target centered on screen

use glam::Vec2;

/// Screen-space offset tracking a target position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub offset: Vec2,
    pub viewport: Vec2,
}

impl Camera {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            offset: Vec2::ZERO,
            viewport: Vec2::new(width, height),
        }
    }

    /// Offset that puts `target` at the viewport center
    #[inline]
    pub fn offset_for(viewport: Vec2, target: Vec2) -> Vec2 {
        viewport / 2.0 - target
    }

    /// Re-center on the target
    pub fn update(&mut self, target: Vec2) {
        self.offset = Self::offset_for(self.viewport, target);
    }

    /// World position to screen position
    #[inline]
    pub fn apply(&self, position: Vec2) -> Vec2 {
        position + self.offset
    }
}
