//! Game settings and balance tuning
//!
//! Loaded from an optional JSON file; every field falls back to its default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH, FPS};

/// Failure to read or parse a settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Spawner, difficulty and combat balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Initial cooldown between timed spawns (ms)
    pub spawn_cooldown_ms: u32,
    /// Timed spawns stop while live mobs >= max_mobs * difficulty
    pub max_mobs: u32,
    /// Difficulty added by every successful spawn
    pub spawn_difficulty_step: f32,
    /// Length of one wave (ms)
    pub wave_duration_ms: u32,
    /// Difficulty per wave index (difficulty = 1 + wave * step)
    pub wave_difficulty_step: f32,
    /// Cooldown floor applied after each timed spawn (ms)
    pub spawn_cooldown_floor_ms: u32,
    /// Cooldown reduction per wave after each timed spawn (ms)
    pub spawn_cooldown_per_wave_ms: u32,
    /// Cooldown floor applied at wave start (ms)
    pub wave_cooldown_floor_ms: u32,
    /// Cooldown reduction per wave at wave start (ms)
    pub wave_cooldown_per_wave_ms: u32,
    /// Ticks between secondary spawns at difficulty 1.0
    pub secondary_spawn_interval: u32,
    /// Secondary spawns stop at this many live mobs
    pub secondary_max_mobs: usize,
    /// Difficulty added by every secondary spawn trigger
    pub secondary_difficulty_step: f32,
    /// Flat score added by every secondary spawn trigger
    pub secondary_spawn_score: f32,
    /// Score per kill, multiplied by difficulty
    pub kill_score: f32,
    /// Score per timed spawn, multiplied by difficulty
    pub spawn_score: f32,
    /// Damage a touching mob deals to the player each tick
    pub contact_damage: f32,
    /// Random samples tried before a spawn gives up
    pub spawn_attempts: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            spawn_cooldown_ms: 5000,
            max_mobs: 5,
            spawn_difficulty_step: 0.05,
            wave_duration_ms: 30_000,
            wave_difficulty_step: 0.2,
            spawn_cooldown_floor_ms: 500,
            spawn_cooldown_per_wave_ms: 100,
            wave_cooldown_floor_ms: 1000,
            wave_cooldown_per_wave_ms: 50,
            secondary_spawn_interval: 120,
            secondary_max_mobs: 20,
            secondary_difficulty_step: 0.05,
            secondary_spawn_score: 10.0,
            kill_score: 100.0,
            spawn_score: 10.0,
            contact_damage: 10.0,
            spawn_attempts: 32,
        }
    }
}

impl Tuning {
    /// Cooldown after a timed spawn during `wave`
    pub fn spawn_cooldown_after_spawn(&self, wave: u32) -> u32 {
        self.spawn_cooldown_ms
            .saturating_sub(wave.saturating_mul(self.spawn_cooldown_per_wave_ms))
            .max(self.spawn_cooldown_floor_ms)
    }

    /// Cooldown reset when `wave` starts
    pub fn spawn_cooldown_at_wave(&self, wave: u32) -> u32 {
        self.spawn_cooldown_ms
            .saturating_sub(wave.saturating_mul(self.wave_cooldown_per_wave_ms))
            .max(self.wave_cooldown_floor_ms)
    }

    /// Difficulty floor for a wave index
    pub fn wave_difficulty(&self, wave: u32) -> f32 {
        1.0 + wave as f32 * self.wave_difficulty_step
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window and arena width (the background is scaled to the window)
    pub screen_width: u32,
    /// Window and arena height
    pub screen_height: u32,
    /// Frame-rate cap
    pub fps: u32,
    /// Plain-text high score file
    pub high_score_path: PathBuf,
    /// Fixed RNG seed; wall clock when absent
    pub seed: Option<u64>,
    /// Draw hitboxes
    pub debug: bool,
    /// Balance values
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: ARENA_WIDTH as u32,
            screen_height: ARENA_HEIGHT as u32,
            fps: FPS,
            high_score_path: PathBuf::from("highscore.txt"),
            seed: None,
            debug: false,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read settings from a JSON file
    pub fn read(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings, falling back to defaults when the file is missing or bad
    pub fn load_from(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::read(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    /// Arena size in pixels
    pub fn arena_size(&self) -> glam::Vec2 {
        glam::Vec2::new(self.screen_width as f32, self.screen_height as f32)
    }

    /// Milliseconds per frame at the configured cap
    pub fn frame_ms(&self) -> u32 {
        1000 / self.fps.max(1)
    }
}
