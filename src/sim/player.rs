//! The player character and its projectiles

use glam::Vec2;

use super::tick::TickInput;
use super::walkability::Walkability;
use crate::consts::*;
use crate::wrap_x;

/// Which way a sprite faces horizontally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Left only for strictly negative x; zero counts as right
    #[inline]
    pub fn from_x(x: f32) -> Self {
        if x < 0.0 { Side::Left } else { Side::Right }
    }
}

/// Player animation tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAnim {
    Idle,
    Walk,
    Run,
    Attack,
}

impl PlayerAnim {
    /// Frames in the sprite sheet row for this animation
    pub fn frame_count(self) -> u32 {
        match self {
            PlayerAnim::Idle => 11,
            PlayerAnim::Walk | PlayerAnim::Run => 10,
            PlayerAnim::Attack => 4,
        }
    }
}

/// Ticks each animation frame is shown
const TICKS_PER_FRAME: u32 = 10;
const ATTACK_TICKS_PER_FRAME: u32 = 5;

/// A player shot
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub pos: Vec2,
    /// Unit direction
    pub direction: Vec2,
    pub speed: f32,
    pub radius: f32,
    /// Ticks left before expiry
    pub lifetime: u32,
}

impl Projectile {
    /// Move one tick and count down; false once expired
    pub fn advance(&mut self) -> bool {
        self.pos += self.direction * self.speed;
        self.lifetime = self.lifetime.saturating_sub(1);
        self.lifetime > 0
    }
}

/// The player
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Last non-zero movement direction (unit); shots travel along it
    pub facing: Vec2,
    /// Sprite rotation in degrees, always in [0, 360)
    pub rotation_deg: f32,
    pub flip_horizontal: bool,
    pub flip_vertical: bool,
    pub hp: f32,
    pub max_hp: f32,
    pub stamina: f32,
    pub projectiles: Vec<Projectile>,
    /// Ticks until the next shot is allowed
    pub attack_cooldown: u32,
    pub anim: PlayerAnim,
    pub side: Side,
    /// Ticks spent in the current animation cycle
    pub anim_ticks: u32,
    pub is_attacking: bool,
    pub is_running: bool,
    /// Render/speed scale factor in [MIN_SCALE, MAX_SCALE]
    pub scale: f32,
    pub damage: f32,
    flip_h_held: bool,
    flip_v_held: bool,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            facing: Vec2::Y,
            rotation_deg: 0.0,
            flip_horizontal: false,
            flip_vertical: false,
            hp: PLAYER_MAX_HP,
            max_hp: PLAYER_MAX_HP,
            stamina: PLAYER_MAX_STAMINA,
            projectiles: Vec::new(),
            attack_cooldown: 0,
            anim: PlayerAnim::Idle,
            side: Side::Right,
            anim_ticks: 0,
            is_attacking: false,
            is_running: false,
            scale: 1.0,
            damage: PLAYER_DAMAGE,
            flip_h_held: false,
            flip_v_held: false,
        }
    }

    /// Set the scale factor (clamped). Larger players move slower.
    pub fn apply_scale(&mut self, scale: f32) {
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Walking speed in px/tick at the current scale
    pub fn walk_speed(&self) -> f32 {
        PLAYER_WALK_SPEED / self.scale
    }

    /// Running speed in px/tick at the current scale
    pub fn run_speed(&self) -> f32 {
        PLAYER_RUN_SPEED / self.scale
    }

    /// Radius of newly fired projectiles
    pub fn projectile_radius(&self) -> f32 {
        (PROJECTILE_RADIUS * self.scale).floor().max(1.0)
    }

    /// On-screen sprite edge length, derived from the canonical size
    pub fn render_size(&self) -> f32 {
        SPRITE_SIZE * self.scale
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0.0
    }

    pub fn can_attack(&self) -> bool {
        self.attack_cooldown == 0 && self.facing != Vec2::ZERO && !self.is_attacking
    }

    /// Apply one tick of held input: rotation, flips, movement, stamina,
    /// animation and cooldown.
    pub fn apply_input(&mut self, input: &TickInput, walk: &dyn Walkability, arena: Vec2) {
        if input.rotate_left {
            self.rotation_deg = (self.rotation_deg - PLAYER_ROTATION_SPEED).rem_euclid(360.0);
        }
        if input.rotate_right {
            self.rotation_deg = (self.rotation_deg + PLAYER_ROTATION_SPEED).rem_euclid(360.0);
        }

        // Flips toggle on the press edge only
        if input.flip_horizontal && !self.flip_h_held {
            self.flip_horizontal = !self.flip_horizontal;
        }
        if input.flip_vertical && !self.flip_v_held {
            self.flip_vertical = !self.flip_vertical;
        }
        self.flip_h_held = input.flip_horizontal;
        self.flip_v_held = input.flip_vertical;

        let dir = input.movement();
        let moving = dir != Vec2::ZERO;
        self.is_running = input.run && self.stamina > 0.0;

        if moving {
            self.facing = dir;
            let speed = if self.is_running {
                self.run_speed()
            } else {
                self.walk_speed()
            };
            self.vel = dir * speed;
        } else {
            self.vel = Vec2::ZERO;
        }

        if self.is_running && moving {
            self.stamina = (self.stamina - STAMINA_RATE).max(0.0);
        } else {
            self.stamina = (self.stamina + STAMINA_RATE).min(PLAYER_MAX_STAMINA);
        }

        self.side = if moving {
            Side::from_x(self.vel.x)
        } else {
            Side::from_x(self.facing.x)
        };
        self.anim = self.select_anim(moving);

        self.integrate(walk, arena);
        self.advance_animation();
        // A finished attack hands back to the movement animation this tick
        if !self.is_attacking && self.anim == PlayerAnim::Attack {
            self.anim = self.select_anim(moving);
        }

        self.attack_cooldown = self.attack_cooldown.saturating_sub(1);
    }

    /// Move by the current velocity, clamping y to the walkable band and
    /// wrapping x. The move is rejected when the target is unwalkable.
    fn integrate(&mut self, walk: &dyn Walkability, arena: Vec2) {
        let (y_min, y_max) = y_band(arena.y);
        self.pos.y = self.pos.y.clamp(y_min, y_max);

        let target = Vec2::new(
            wrap_x(self.pos.x + self.vel.x, arena.x),
            (self.pos.y + self.vel.y).clamp(y_min, y_max),
        );
        if walk.is_walkable(target.x, target.y) {
            self.pos = target;
        }
    }

    fn select_anim(&self, moving: bool) -> PlayerAnim {
        if self.is_attacking {
            PlayerAnim::Attack
        } else if !moving {
            PlayerAnim::Idle
        } else if self.is_running {
            PlayerAnim::Run
        } else {
            PlayerAnim::Walk
        }
    }

    fn ticks_per_frame(&self) -> u32 {
        if self.is_attacking {
            ATTACK_TICKS_PER_FRAME
        } else {
            TICKS_PER_FRAME
        }
    }

    fn advance_animation(&mut self) {
        self.anim_ticks += 1;
        let cycle = self.anim.frame_count() * self.ticks_per_frame();
        if self.anim_ticks >= cycle {
            self.anim_ticks = 0;
            // The attack animation plays once
            self.is_attacking = false;
        }
    }

    /// Current frame index for the renderer
    pub fn frame_index(&self) -> u32 {
        (self.anim_ticks / self.ticks_per_frame()).min(self.anim.frame_count() - 1)
    }

    /// Fire along `facing` if the cooldown and attack animation allow it
    pub fn attack(&mut self) -> bool {
        if !self.can_attack() {
            return false;
        }
        self.projectiles.push(Projectile {
            pos: self.pos,
            direction: self.facing,
            speed: PROJECTILE_SPEED,
            radius: self.projectile_radius(),
            lifetime: PROJECTILE_LIFETIME_TICKS,
        });
        self.attack_cooldown = ATTACK_COOLDOWN_TICKS;
        self.anim = PlayerAnim::Attack;
        self.side = Side::from_x(self.facing.x);
        self.anim_ticks = 0;
        self.is_attacking = true;
        true
    }

    /// Advance every projectile and drop the expired ones
    pub fn update_projectiles(&mut self) {
        self.projectiles.retain_mut(|p| p.advance());
    }

    /// Subtract health; returns true when this hit leaves the player dead
    pub fn take_damage(&mut self, amount: f32) -> bool {
        self.hp = (self.hp - amount).min(self.max_hp);
        if self.hp <= 0.0 {
            self.hp = 0.0;
            return true;
        }
        false
    }
}

/// Vertical band the player may occupy
pub fn y_band(height: f32) -> (f32, f32) {
    let half = height / 2.0;
    (PLAYER_Y_MARGIN.min(half), (height - PLAYER_Y_MARGIN).max(half))
}
