//! Per-tick simulation pipeline
//!
//! Advances a play session by one frame. The step order is part of the
//! game's behavior and must not be rearranged.

use std::collections::BTreeSet;

use glam::Vec2;

use super::collision::wrapped_circle_collision;
use super::spawner::{update_secondary, update_timed_spawn, update_wave};
use super::state::{GameEvent, GameSession};
use super::vector::normalize;
use super::walkability::Walkability;
use crate::consts::PLAYER_CONTACT_RADIUS;
use crate::highscores::HighScoreStore;
use crate::wrapped_delta;

/// Held-input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Run modifier
    pub run: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub flip_horizontal: bool,
    pub flip_vertical: bool,
    /// Primary attack (pointer button)
    pub attack: bool,
    /// Demo mode - the player is steered automatically
    pub autopilot: bool,
}

impl TickInput {
    /// Unit movement direction from the direction keys (zero when idle or
    /// when opposite keys cancel out)
    pub fn movement(&self) -> Vec2 {
        let mut acc = Vec2::ZERO;
        if self.up {
            acc.y -= 1.0;
        }
        if self.down {
            acc.y += 1.0;
        }
        if self.left {
            acc.x -= 1.0;
        }
        if self.right {
            acc.x += 1.0;
        }
        normalize(acc)
    }
}

/// Closer than this the autopilot backs off instead of shooting
const AUTOPILOT_FLEE_DISTANCE: f32 = 90.0;
/// Minimum stamina the autopilot keeps in reserve before running
const AUTOPILOT_STAMINA_RESERVE: f32 = 20.0;

/// Steer toward the nearest mob and fire, backing away when it gets close
pub fn autopilot(session: &GameSession) -> TickInput {
    let mut steered = TickInput {
        autopilot: true,
        ..Default::default()
    };
    let player = &session.player;
    let nearest = session
        .mobs
        .iter()
        .map(|mob| wrapped_delta(player.pos, mob.pos, session.arena.x))
        .min_by(|a, b| {
            a.length_squared()
                .partial_cmp(&b.length_squared())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    let Some(delta) = nearest else {
        return steered;
    };

    let distance = delta.length();
    let fleeing = distance < AUTOPILOT_FLEE_DISTANCE;
    let heading = if fleeing { -delta } else { delta };
    // ~22.5° dead zone so the eight key directions cover the circle
    let threshold = heading.length() * 0.38;
    steered.right = heading.x > threshold;
    steered.left = heading.x < -threshold;
    steered.down = heading.y > threshold;
    steered.up = heading.y < -threshold;
    steered.run = fleeing && player.stamina > AUTOPILOT_STAMINA_RESERVE;
    steered.attack = !fleeing;
    steered
}

/// Advance the session by one tick of `dt_ms` milliseconds
pub fn tick(
    session: &mut GameSession,
    input: &TickInput,
    dt_ms: u32,
    walk: &dyn Walkability,
    scores: &mut dyn HighScoreStore,
) {
    if session.game_over {
        return;
    }

    let steered;
    let input = if input.autopilot {
        steered = autopilot(session);
        &steered
    } else {
        input
    };

    session.time_ticks += 1;
    session.clock_ms += u64::from(dt_ms);
    let arena = session.arena;

    // 1. Wave clock
    update_wave(session);

    // 2. Cooldown spawner
    update_timed_spawn(session, walk);

    // 3. Player movement, stamina, animation
    session.player.apply_input(input, walk, arena);

    // 4. Camera follows the player
    session.camera.update(session.player.pos);

    // 5. Attack
    if input.attack {
        session.player.attack();
    }

    // 6. Projectile flight
    session.player.update_projectiles();

    // 7. Projectile x mob
    resolve_projectile_hits(session);

    // 8. Mobs chase the player
    for mob in &mut session.mobs {
        mob.update(&session.player, walk, arena);
    }

    // 9. Player x mob
    resolve_player_contacts(session, scores);

    // 10. Secondary spawner
    update_secondary(session, walk);
}

/// Sweep projectiles against mobs and apply the removals afterwards.
///
/// Each projectile hits at most one mob: the first intersecting one in
/// iteration order. Mobs already killed in this sweep are skipped. Returns
/// the number of mobs killed.
pub fn resolve_projectile_hits(session: &mut GameSession) -> usize {
    let damage = session.player.damage;
    let width = session.arena.x;
    let mut spent = BTreeSet::new();
    let mut killed = BTreeSet::new();

    for (proj_idx, proj) in session.player.projectiles.iter().enumerate() {
        for (mob_idx, mob) in session.mobs.iter_mut().enumerate() {
            if killed.contains(&mob_idx) {
                continue;
            }
            if wrapped_circle_collision(proj.pos, proj.radius, mob.pos, mob.radius, width) {
                if mob.take_damage(damage) {
                    killed.insert(mob_idx);
                }
                spent.insert(proj_idx);
                break;
            }
        }
    }

    // Highest index first keeps the lower indices valid
    for &idx in spent.iter().rev() {
        session.player.projectiles.remove(idx);
    }
    for &idx in killed.iter().rev() {
        let mob = session.mobs.remove(idx);
        let gained = session.tuning.kill_score * session.difficulty;
        session.score += gained;
        session.events.push(GameEvent::MobKilled {
            id: mob.id,
            score: gained,
        });
        log::debug!("Mob {} killed (+{:.0})", mob.id, gained);
    }
    killed.len()
}

/// Apply contact damage from every touching mob; on death flag game over
/// and persist the high score right away.
pub fn resolve_player_contacts(session: &mut GameSession, scores: &mut dyn HighScoreStore) {
    let player_pos = session.player.pos;
    let width = session.arena.x;
    let hits = session
        .mobs
        .iter()
        .filter(|mob| {
            wrapped_circle_collision(player_pos, PLAYER_CONTACT_RADIUS, mob.pos, mob.radius, width)
        })
        .count();
    if hits == 0 {
        return;
    }

    let damage = session.tuning.contact_damage;
    let mut died = false;
    for _ in 0..hits {
        died |= session.player.take_damage(damage);
    }
    session.events.push(GameEvent::PlayerHit {
        hp: session.player.hp,
    });

    if died && !session.game_over {
        session.game_over = true;
        session.events.push(GameEvent::PlayerDied {
            score: session.score,
        });
        log::info!("Player died with score {:.0}", session.score);
        match scores.save_if_higher(session.score) {
            Ok(true) => {
                session.high_score = session.score;
                session.events.push(GameEvent::HighScoreSaved {
                    score: session.score as u64,
                });
            }
            Ok(false) => {}
            Err(e) => log::warn!("{e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::highscores::MemoryHighScoreStore;
    use crate::settings::Tuning;
    use crate::sim::mob::Mob;
    use crate::sim::player::Projectile;
    use crate::sim::walkability::OpenField;

    fn field() -> OpenField {
        OpenField::new(ARENA_WIDTH, ARENA_HEIGHT)
    }

    /// Session with both spawners switched off
    fn quiet_session() -> GameSession {
        let tuning = Tuning {
            max_mobs: 0,
            secondary_max_mobs: 0,
            ..Tuning::default()
        };
        GameSession::new(tuning, Vec2::new(ARENA_WIDTH, ARENA_HEIGHT), 9, 0)
    }

    fn projectile_at(pos: Vec2) -> Projectile {
        Projectile {
            pos,
            direction: Vec2::X,
            speed: 0.0,
            radius: 5.0,
            lifetime: 10,
        }
    }

    #[test]
    fn test_movement_cancels() {
        let input = TickInput {
            left: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(input.movement(), Vec2::ZERO);
    }

    #[test]
    fn test_projectile_hits_first_mob_only() {
        let mut session = quiet_session();
        session.mobs.clear();
        session.mobs.push(Mob::new(10, Vec2::new(200.0, 200.0), 1.0));
        session.mobs.push(Mob::new(11, Vec2::new(202.0, 200.0), 1.0));
        session.player.projectiles.push(projectile_at(Vec2::new(201.0, 200.0)));

        resolve_projectile_hits(&mut session);
        assert!(session.player.projectiles.is_empty());
        assert_eq!(session.mobs[0].hp, 25.0);
        assert_eq!(session.mobs[1].hp, 50.0);
    }

    #[test]
    fn test_lethal_hits_remove_mobs_and_score() {
        let mut session = quiet_session();
        session.mobs.clear();
        session.difficulty = 1.5;
        let mut a = Mob::new(10, Vec2::new(100.0, 100.0), 1.0);
        a.hp = 10.0;
        let b = Mob::new(11, Vec2::new(300.0, 300.0), 1.0);
        let mut c = Mob::new(12, Vec2::new(500.0, 500.0), 1.0);
        c.hp = 5.0;
        session.mobs.extend([a, b, c]);
        session.player.projectiles.push(projectile_at(Vec2::new(100.0, 100.0)));
        session.player.projectiles.push(projectile_at(Vec2::new(700.0, 100.0)));
        session.player.projectiles.push(projectile_at(Vec2::new(500.0, 500.0)));

        assert_eq!(resolve_projectile_hits(&mut session), 2);
        let ids: Vec<u32> = session.mobs.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![11]);
        // The miss survives
        assert_eq!(session.player.projectiles.len(), 1);
        assert_eq!(session.player.projectiles[0].pos, Vec2::new(700.0, 100.0));
        assert!((session.score - 300.0).abs() < 1e-3);
    }

    #[test]
    fn test_dead_mob_does_not_absorb_second_projectile() {
        let mut session = quiet_session();
        session.mobs.clear();
        let mut a = Mob::new(10, Vec2::new(100.0, 100.0), 1.0);
        a.hp = 10.0;
        let b = Mob::new(11, Vec2::new(105.0, 100.0), 1.0);
        session.mobs.extend([a, b]);
        session.player.projectiles.push(projectile_at(Vec2::new(102.0, 100.0)));
        session.player.projectiles.push(projectile_at(Vec2::new(102.0, 100.0)));

        resolve_projectile_hits(&mut session);
        assert_eq!(session.mobs.len(), 1);
        assert_eq!(session.mobs[0].id, 11);
        assert_eq!(session.mobs[0].hp, 25.0);
        assert!(session.player.projectiles.is_empty());
    }

    #[test]
    fn test_projectile_hits_across_seam() {
        let mut session = quiet_session();
        session.mobs.clear();
        session.mobs.push(Mob::new(10, Vec2::new(15.0, 300.0), 1.0));
        session.player.projectiles.push(projectile_at(Vec2::new(815.0, 300.0)));

        resolve_projectile_hits(&mut session);
        assert!(session.player.projectiles.is_empty());
        assert_eq!(session.mobs[0].hp, 25.0);
    }

    #[test]
    fn test_contact_damage_across_seam() {
        let mut session = quiet_session();
        session.mobs.clear();
        session.player.pos = Vec2::new(798.0, 300.0);
        session.mobs.push(Mob::new(10, Vec2::new(3.0, 300.0), 1.0));
        let mut store = MemoryHighScoreStore::default();

        tick(&mut session, &TickInput::default(), 16, &field(), &mut store);
        assert_eq!(session.player.hp, PLAYER_MAX_HP - session.tuning.contact_damage);
        assert!(session.events.contains(&GameEvent::PlayerHit {
            hp: session.player.hp
        }));
    }

    #[test]
    fn test_contact_death_persists_high_score() {
        let mut session = quiet_session();
        session.mobs.clear();
        session.mobs.push(Mob::new(10, session.player.pos + Vec2::new(5.0, 0.0), 1.0));
        session.player.hp = 10.0;
        session.score = 420.0;
        let mut store = MemoryHighScoreStore::new(100);

        resolve_player_contacts(&mut session, &mut store);
        assert_eq!(session.player.hp, 0.0);
        assert!(session.game_over);
        assert_eq!(store.score, 420);
        assert_eq!(store.writes, 1);
        assert!(session.events.contains(&GameEvent::HighScoreSaved { score: 420 }));
    }

    #[test]
    fn test_contact_death_keeps_better_stored_score() {
        let mut session = quiet_session();
        session.mobs.clear();
        session.mobs.push(Mob::new(10, session.player.pos, 1.0));
        session.player.hp = 10.0;
        session.score = 50.0;
        let mut store = MemoryHighScoreStore::new(100);

        resolve_player_contacts(&mut session, &mut store);
        assert!(session.game_over);
        assert_eq!(store.score, 100);
        assert_eq!(store.writes, 0);
    }

    #[test]
    fn test_game_over_freezes_tick() {
        let mut session = quiet_session();
        session.game_over = true;
        let before = session.player.pos;
        let mut store = MemoryHighScoreStore::default();
        let input = TickInput {
            right: true,
            ..Default::default()
        };
        tick(&mut session, &input, 16, &field(), &mut store);
        assert_eq!(session.player.pos, before);
        assert_eq!(session.time_ticks, 0);
    }

    #[test]
    fn test_tick_fires_and_moves() {
        let mut session = quiet_session();
        let mut store = MemoryHighScoreStore::default();
        let input = TickInput {
            right: true,
            attack: true,
            ..Default::default()
        };
        tick(&mut session, &input, 16, &field(), &mut store);
        assert_eq!(session.player.pos, Vec2::new(405.0, 300.0));
        assert_eq!(session.player.projectiles.len(), 1);
        // Fired this tick, then advanced once
        assert_eq!(session.player.projectiles[0].pos, Vec2::new(435.0, 300.0));
        assert_eq!(session.camera.apply(session.player.pos), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_autopilot_chases_distant_mob() {
        let mut session = quiet_session();
        session.mobs.clear();
        session.mobs.push(Mob::new(10, Vec2::new(700.0, 300.0), 1.0));
        let steer = autopilot(&session);
        assert!(steer.right && !steer.left && !steer.up && !steer.down);
        assert!(steer.attack);
    }

    #[test]
    fn test_autopilot_flees_close_mob() {
        let mut session = quiet_session();
        session.mobs.clear();
        session.mobs.push(Mob::new(10, Vec2::new(350.0, 300.0), 1.0));
        let steer = autopilot(&session);
        assert!(steer.right);
        assert!(!steer.attack);
        assert!(steer.run);
    }
}
