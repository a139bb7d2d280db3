//! Session state and core simulation types
//!
//! Everything a single run of Play owns lives in `GameSession`. A session is
//! rebuilt from scratch whenever Play is entered fresh.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::camera::Camera;
use super::mob::Mob;
use super::player::Player;
use crate::consts::*;
use crate::settings::Tuning;

/// Where the first mob of every session starts
pub const SEED_MOB_POS: Vec2 = Vec2::new(100.0, 100.0);

/// Notable things that happened during a tick
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    WaveStarted { wave: u32, difficulty: f32 },
    MobSpawned { id: u32, pos: Vec2 },
    MobKilled { id: u32, score: f32 },
    PlayerHit { hp: f32 },
    PlayerDied { score: f32 },
    HighScoreSaved { score: u64 },
}

/// Complete state of one play session
#[derive(Debug, Clone)]
pub struct GameSession {
    pub tuning: Tuning,
    /// Arena (background) size in pixels
    pub arena: Vec2,
    pub rng: Pcg32,
    pub player: Player,
    pub mobs: Vec<Mob>,
    pub camera: Camera,
    /// Never decreases during play
    pub score: f32,
    /// Best score loaded at reset, raised when beaten
    pub high_score: f32,
    /// Mob scaling multiplier, never decreases during play
    pub difficulty: f32,
    pub wave: u32,
    /// Simulated milliseconds since the session started
    pub clock_ms: u64,
    /// Clock value when the current wave began
    pub wave_started_ms: u64,
    /// Clock value of the last timed spawn attempt
    pub last_spawn_ms: u64,
    pub spawn_cooldown_ms: u32,
    /// Ticks since the last secondary spawn
    pub secondary_timer: u32,
    pub game_over: bool,
    /// Ticks simulated
    pub time_ticks: u64,
    /// Events produced since the last drain
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameSession {
    /// Fresh session: player centered, one seed mob, difficulty 1.0
    pub fn new(tuning: Tuning, arena: Vec2, seed: u64, high_score: u64) -> Self {
        let player = Player::new((arena / 2.0).floor());
        let mut camera = Camera::new(arena.x, arena.y);
        camera.update(player.pos);
        let spawn_cooldown_ms = tuning.spawn_cooldown_ms;
        let mut session = Self {
            tuning,
            arena,
            rng: Pcg32::seed_from_u64(seed),
            player,
            mobs: Vec::new(),
            camera,
            score: 0.0,
            high_score: high_score as f32,
            difficulty: 1.0,
            wave: 0,
            clock_ms: 0,
            wave_started_ms: 0,
            last_spawn_ms: 0,
            spawn_cooldown_ms,
            secondary_timer: 0,
            game_over: false,
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        };
        let id = session.next_entity_id();
        session.mobs.push(Mob::new(id, SEED_MOB_POS, session.difficulty));
        session
    }

    /// Session with default tuning and arena, for tests and demos
    pub fn with_seed(seed: u64) -> Self {
        Self::new(
            Tuning::default(),
            Vec2::new(ARENA_WIDTH, ARENA_HEIGHT),
            seed,
            0,
        )
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Step the player scale factor by `steps` increments of 0.1
    pub fn step_scale(&mut self, steps: i32) {
        // Round to one decimal so repeated steps do not drift
        let scale = ((self.player.scale + steps as f32 * SCALE_STEP) * 10.0).round() / 10.0;
        self.player.apply_scale(scale);
    }

    /// Whether the current score beats the stored best
    pub fn is_new_high_score(&self) -> bool {
        self.score >= self.high_score && self.score > 0.0
    }

    /// Take the events produced so far
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
