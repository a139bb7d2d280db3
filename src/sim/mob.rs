//! Pursuing enemies
//!
//! Mob stats are scaled by the difficulty at spawn time and never
//! re-derived afterwards. Radius and sprite size stay fixed; the player's
//! scale factor does not apply to mobs.

use glam::Vec2;

use super::player::{Player, Side};
use super::walkability::Walkability;
use crate::consts::*;
use crate::{wrap_x, wrapped_delta, wrapped_distance};

/// Mob animation tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MobAnim {
    Walk,
    Attack,
}

impl MobAnim {
    /// Frames in the sprite sheet row for this animation
    pub fn frame_count(self) -> u32 {
        match self {
            MobAnim::Walk => 8,
            MobAnim::Attack => 6,
        }
    }
}

/// Ticks each mob animation frame is shown
const MOB_TICKS_PER_FRAME: u32 = 10;

/// Speed, hit points and damage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MobStats {
    pub speed: f32,
    pub hp: f32,
    pub damage: f32,
}

impl Default for MobStats {
    fn default() -> Self {
        Self {
            speed: MOB_BASE_SPEED,
            hp: MOB_BASE_HP,
            damage: MOB_BASE_DAMAGE,
        }
    }
}

impl MobStats {
    /// Stats at `difficulty`: hp and damage scale linearly, speed by a
    /// fraction of the increase.
    pub fn scaled(&self, difficulty: f32) -> Self {
        Self {
            speed: self.speed * (1.0 + (difficulty - 1.0) * MOB_SPEED_SCALING),
            hp: self.hp * difficulty,
            damage: self.damage * difficulty,
        }
    }
}

/// An enemy chasing the player
#[derive(Debug, Clone)]
pub struct Mob {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub base: MobStats,
    /// Stats captured at spawn
    pub stats: MobStats,
    /// Difficulty the stats were captured at
    pub difficulty: f32,
    pub hp: f32,
    pub anim: MobAnim,
    pub side: Side,
    /// Copied from the player every tick
    pub rotation_deg: f32,
    pub flip_horizontal: bool,
    pub flip_vertical: bool,
    /// Ticks alive, drives the walk/attack cycle
    pub anim_ticks: u32,
}

impl Mob {
    /// A new mob at `pos` with stats scaled to `difficulty`
    pub fn new(id: u32, pos: Vec2, difficulty: f32) -> Self {
        let base = MobStats::default();
        let stats = base.scaled(difficulty);
        Self {
            id,
            pos,
            radius: MOB_RADIUS,
            base,
            stats,
            difficulty,
            hp: stats.hp,
            anim: MobAnim::Walk,
            side: Side::Right,
            rotation_deg: 0.0,
            flip_horizontal: false,
            flip_vertical: false,
            anim_ticks: 0,
        }
    }

    /// Hit point cap at the spawn difficulty
    pub fn max_hp(&self) -> f32 {
        self.stats.hp
    }

    /// Subtract health; true when this leaves the mob dead
    pub fn take_damage(&mut self, amount: f32) -> bool {
        self.hp = (self.hp - amount).min(self.max_hp());
        self.hp <= 0.0
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0.0
    }

    /// Unit direction toward `target`, taking the short way around the
    /// horizontal wrap
    pub fn direction_to(&self, target: Vec2, arena_width: f32) -> Vec2 {
        wrapped_delta(self.pos, target, arena_width).normalize_or_zero()
    }

    /// Chase the player for one tick
    ///
    /// The mob mirrors the player's rotation and flips, and its movement is
    /// mirrored along any flipped axis. A move onto unwalkable ground is
    /// dropped; the mob stays put this tick.
    pub fn update(&mut self, target: &Player, walk: &dyn Walkability, arena: Vec2) {
        self.rotation_deg = target.rotation_deg;
        self.flip_horizontal = target.flip_horizontal;
        self.flip_vertical = target.flip_vertical;

        let direction = self.direction_to(target.pos, arena.x);
        let mut move_dir = direction;
        if self.flip_horizontal {
            move_dir.x = -move_dir.x;
        }
        if self.flip_vertical {
            move_dir.y = -move_dir.y;
        }

        let next = self.pos + move_dir * self.stats.speed;
        let next = Vec2::new(wrap_x(next.x, arena.x), next.y.clamp(0.0, arena.y));
        if walk.is_walkable(next.x, next.y) {
            self.pos = next;
        }

        self.anim = if wrapped_distance(self.pos, target.pos, arena.x) < MOB_ATTACK_RANGE {
            MobAnim::Attack
        } else {
            MobAnim::Walk
        };
        self.side = Side::from_x(direction.x);
        self.anim_ticks = self.anim_ticks.wrapping_add(1);
    }

    /// Current frame in the mob sheet row for `anim`
    pub fn frame_index(&self) -> u32 {
        (self.anim_ticks / MOB_TICKS_PER_FRAME) % self.anim.frame_count()
    }

    /// Health bar fill relative to base hp (exceeds 1.0 above difficulty 1)
    pub fn health_fraction(&self) -> f32 {
        self.hp.max(0.0) / self.base.hp
    }
}
