//! Waves, timed spawns and the difficulty ramp
//!
//! Three independent pressures act on a session:
//! - a wave clock that raises the difficulty floor every `wave_duration_ms`
//! - a cooldown spawner capped at `max_mobs * difficulty` live mobs
//! - a tick-counting secondary spawner that also nudges difficulty and score

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::mob::Mob;
use super::state::{GameEvent, GameSession};
use super::walkability::Walkability;
use crate::consts::{SPAWN_MAX_DISTANCE, SPAWN_MIN_DISTANCE};

/// Pick a walkable spawn point on the annulus around `center`.
///
/// Samples are clamped into the arena. After `attempts` misses the search
/// falls back to uniform samples over the whole arena; after another
/// `attempts` misses it gives up.
pub fn find_spawn_point<R: Rng>(
    rng: &mut R,
    center: Vec2,
    arena: Vec2,
    walk: &dyn Walkability,
    attempts: u32,
) -> Option<Vec2> {
    let max = (arena - Vec2::ONE).max(Vec2::ZERO);
    for _ in 0..attempts {
        let distance = rng.random_range(SPAWN_MIN_DISTANCE..SPAWN_MAX_DISTANCE);
        let angle = rng.random_range(0.0..TAU);
        let point = (center + Vec2::from_angle(angle) * distance).clamp(Vec2::ZERO, max);
        if walk.is_walkable(point.x, point.y) {
            return Some(point);
        }
    }

    log::warn!(
        "No walkable spawn point near ({:.0}, {:.0}) after {} tries, sampling whole arena",
        center.x,
        center.y,
        attempts
    );
    if max.x <= 0.0 || max.y <= 0.0 {
        return None;
    }
    for _ in 0..attempts {
        let point = Vec2::new(rng.random_range(0.0..max.x), rng.random_range(0.0..max.y));
        if walk.is_walkable(point.x, point.y) {
            return Some(point);
        }
    }
    None
}

/// Spawn one mob near the player at the current difficulty.
///
/// A successful spawn raises difficulty by the per-spawn step and adds
/// spawn score. Returns the new mob's id.
pub fn spawn_mob(session: &mut GameSession, walk: &dyn Walkability) -> Option<u32> {
    let center = session.player.pos;
    let attempts = session.tuning.spawn_attempts;
    let Some(pos) = find_spawn_point(&mut session.rng, center, session.arena, walk, attempts)
    else {
        log::warn!("Spawn skipped: no walkable ground found");
        return None;
    };

    let id = session.next_entity_id();
    session.mobs.push(Mob::new(id, pos, session.difficulty));
    session.difficulty += session.tuning.spawn_difficulty_step;
    session.score += session.tuning.spawn_score * session.difficulty;
    session.events.push(GameEvent::MobSpawned { id, pos });
    log::debug!(
        "Mob {} spawned at ({:.0}, {:.0}), difficulty {:.2}",
        id,
        pos.x,
        pos.y,
        session.difficulty
    );
    Some(id)
}

/// Start the next wave once the wave clock runs out
pub fn update_wave(session: &mut GameSession) -> bool {
    let elapsed = session.clock_ms.saturating_sub(session.wave_started_ms);
    if elapsed < u64::from(session.tuning.wave_duration_ms) {
        return false;
    }
    session.wave += 1;
    // The floor can sit below the per-spawn ramp; never step backwards
    session.difficulty = session
        .difficulty
        .max(session.tuning.wave_difficulty(session.wave));
    session.spawn_cooldown_ms = session.tuning.spawn_cooldown_at_wave(session.wave);
    session.wave_started_ms = session.clock_ms;
    session.events.push(GameEvent::WaveStarted {
        wave: session.wave,
        difficulty: session.difficulty,
    });
    log::info!(
        "Wave {} started! Difficulty: {:.1}x",
        session.wave,
        session.difficulty
    );
    true
}

/// Cooldown spawner: one spawn attempt per elapsed cooldown while below the
/// live mob cap
pub fn update_timed_spawn(session: &mut GameSession, walk: &dyn Walkability) {
    let elapsed = session.clock_ms.saturating_sub(session.last_spawn_ms);
    let cap = session.tuning.max_mobs as f32 * session.difficulty;
    if elapsed < u64::from(session.spawn_cooldown_ms) || session.mobs.len() as f32 >= cap {
        return;
    }
    spawn_mob(session, walk);
    session.last_spawn_ms = session.clock_ms;
    session.spawn_cooldown_ms = session.tuning.spawn_cooldown_after_spawn(session.wave);
}

/// Secondary spawner: counts ticks, fires faster as difficulty grows
pub fn update_secondary(session: &mut GameSession, walk: &dyn Walkability) {
    session.secondary_timer += 1;
    let interval = session.tuning.secondary_spawn_interval as f32 / session.difficulty;
    if (session.secondary_timer as f32) < interval
        || session.mobs.len() >= session.tuning.secondary_max_mobs
    {
        return;
    }
    spawn_mob(session, walk);
    session.secondary_timer = 0;
    session.difficulty += session.tuning.secondary_difficulty_step;
    session.score += session.tuning.secondary_spawn_score;
}
