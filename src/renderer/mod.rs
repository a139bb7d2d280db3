//! Rendering module
//!
//! The game never talks to a graphics API directly. Each state emits draw
//! intents to a [`Surface`]; a backend turns them into pixels. Sprite sizes
//! are derived at draw time from the canonical frame size and the current
//! scale, so no resized assets are cached.

pub mod scene;
pub mod shapes;
pub mod surface;

pub use scene::{draw_gameplay, draw_overlay};
pub use surface::{
    Color, CommandBuffer, Distortion, DrawCommand, ImageId, Rect, SpriteDraw, SpriteSheet,
    Surface,
};

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [0.02, 0.02, 0.05, 1.0];
    pub const PROJECTILE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const HEALTH: Color = [0.2, 0.8, 0.3, 1.0];
    pub const HEALTH_BACK: Color = [0.6, 0.1, 0.1, 1.0];
    pub const STAMINA: Color = [0.2, 0.5, 1.0, 1.0];
    pub const STAMINA_BACK: Color = [0.15, 0.15, 0.2, 1.0];
    pub const HUD_TEXT: Color = [1.0, 1.0, 1.0, 1.0];
    pub const HIGHLIGHT: Color = [1.0, 0.85, 0.3, 1.0];
    pub const DIM_TEXT: Color = [0.6, 0.6, 0.7, 1.0];
    pub const OVERLAY: Color = [0.0, 0.0, 0.0, 0.6];
    pub const DEBUG: Color = [1.0, 0.0, 1.0, 1.0];
}
