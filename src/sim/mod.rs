//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - One tick per frame, no substeps
//! - Seeded RNG only
//! - Entity removal deferred until after each collision sweep

pub mod camera;
pub mod collision;
pub mod mob;
pub mod player;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod vector;
pub mod walkability;

pub use camera::Camera;
pub use collision::{
    circle_collision, point_segment_distance, polygon_circle_collision, wrapped_circle_collision,
};
pub use mob::{Mob, MobAnim, MobStats};
pub use player::{Player, PlayerAnim, Projectile, Side};
pub use spawner::{find_spawn_point, spawn_mob};
pub use state::{GameEvent, GameSession};
pub use tick::{TickInput, autopilot, tick};
pub use walkability::{MaskError, OpenField, WalkMask, Walkability};
