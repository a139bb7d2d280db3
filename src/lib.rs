//! Survival Arena - a top-down wrap-around survival arcade game
//!
//! Core modules:
//! - `sim`: Fixed-tick simulation (entities, collisions, spawner, session)
//! - `states`: Game-state machine (menu, play, pause, game over, credits, tutorial)
//! - `renderer`: Abstract drawing surface and draw-intent emission
//! - `platform`: Input events and held-key snapshots
//! - `persistence`: Atomic file writes
//! - `app`: Frame-capped main loop orchestrator

pub mod app;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod states;

use glam::Vec2;

pub use app::App;
pub use highscores::{FileHighScoreStore, HighScoreStore, MemoryHighScoreStore};
pub use settings::{Settings, Tuning};

/// Game configuration constants
pub mod consts {
    /// Default frame-rate cap; one simulation tick per frame
    pub const FPS: u32 = 60;
    /// Longest frame the loop will feed into the simulation (ms)
    pub const MAX_FRAME_MS: u32 = 100;

    /// Default arena (and window) dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_MAX_HP: f32 = 300.0;
    pub const PLAYER_MAX_STAMINA: f32 = 100.0;
    /// Stamina drained per running tick and regained per non-running tick
    pub const STAMINA_RATE: f32 = 0.5;
    pub const PLAYER_WALK_SPEED: f32 = 5.0;
    pub const PLAYER_RUN_SPEED: f32 = 8.0;
    /// Radius used for player-vs-mob contact tests
    pub const PLAYER_CONTACT_RADIUS: f32 = 15.0;
    /// Vertical margin of the walkable band
    pub const PLAYER_Y_MARGIN: f32 = 50.0;
    /// Degrees rotated per tick while a rotate key is held
    pub const PLAYER_ROTATION_SPEED: f32 = 5.0;
    pub const PLAYER_DAMAGE: f32 = 25.0;
    pub const ATTACK_COOLDOWN_TICKS: u32 = 10;

    /// Scale factor bounds and step
    pub const MIN_SCALE: f32 = 0.5;
    pub const MAX_SCALE: f32 = 2.0;
    pub const SCALE_STEP: f32 = 0.1;

    /// Projectile defaults
    pub const PROJECTILE_SPEED: f32 = 30.0;
    pub const PROJECTILE_RADIUS: f32 = 5.0;
    pub const PROJECTILE_LIFETIME_TICKS: u32 = 60;

    /// Mob base stats (before difficulty scaling)
    pub const MOB_BASE_HP: f32 = 50.0;
    pub const MOB_BASE_DAMAGE: f32 = 25.0;
    pub const MOB_BASE_SPEED: f32 = 1.0;
    pub const MOB_RADIUS: f32 = 10.0;
    /// Distance under which a mob switches to its attack animation
    pub const MOB_ATTACK_RANGE: f32 = 50.0;
    /// Fraction of the difficulty increase applied to mob speed
    pub const MOB_SPEED_SCALING: f32 = 0.2;

    /// Spawn annulus around the player
    pub const SPAWN_MIN_DISTANCE: f32 = 200.0;
    pub const SPAWN_MAX_DISTANCE: f32 = 400.0;

    /// Canonical (unscaled) sprite frame size in pixels
    pub const SPRITE_SIZE: f32 = 128.0;
}

/// Wrap a horizontal coordinate into `[0, width)`
#[inline]
pub fn wrap_x(x: f32, width: f32) -> f32 {
    let wrapped = x.rem_euclid(width);
    // rem_euclid can round up to `width` for tiny negative inputs
    if wrapped >= width { 0.0 } else { wrapped }
}

/// Shortest signed horizontal delta from `from` to `to` on a wrapping arena.
/// Inputs outside `[0, width)` (projectiles in flight) are handled too.
#[inline]
pub fn wrapped_dx(from: f32, to: f32, width: f32) -> f32 {
    let dx = (to - from).rem_euclid(width);
    if dx > width / 2.0 { dx - width } else { dx }
}

/// Shortest offset from `from` to `to`, wrapping x only
#[inline]
pub fn wrapped_delta(from: Vec2, to: Vec2, width: f32) -> Vec2 {
    Vec2::new(wrapped_dx(from.x, to.x, width), to.y - from.y)
}

/// Distance across the horizontal seam when that is shorter
#[inline]
pub fn wrapped_distance(a: Vec2, b: Vec2, width: f32) -> f32 {
    wrapped_delta(a, b, width).length()
}
