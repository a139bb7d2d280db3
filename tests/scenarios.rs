//! End-to-end simulation scenarios

use glam::Vec2;
use survival_arena::consts::*;
use survival_arena::sim::{GameEvent, GameSession, Mob, OpenField, Projectile, TickInput, tick};
use survival_arena::{FileHighScoreStore, HighScoreStore, MemoryHighScoreStore, Tuning};

fn arena() -> Vec2 {
    Vec2::new(ARENA_WIDTH, ARENA_HEIGHT)
}

fn field() -> OpenField {
    OpenField::new(ARENA_WIDTH, ARENA_HEIGHT)
}

/// No spawns from either spawner
fn quiet_tuning() -> Tuning {
    Tuning {
        max_mobs: 0,
        secondary_max_mobs: 0,
        ..Tuning::default()
    }
}

fn temp_file(name: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!(
        "survival_arena_{}_{}",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    path
}

#[test]
fn test_fresh_session() {
    let session = GameSession::new(Tuning::default(), arena(), 1, 0);
    assert_eq!(session.difficulty, 1.0);
    assert_eq!(session.wave, 0);
    assert_eq!(session.score, 0.0);
    assert_eq!(session.mobs.len(), 1);
}

#[test]
fn test_wave_after_thirty_seconds() {
    let mut session = GameSession::new(quiet_tuning(), arena(), 1, 0);
    let mut store = MemoryHighScoreStore::default();
    // Keep the seed mob from reaching the player
    session.mobs.clear();
    for _ in 0..29 {
        tick(&mut session, &TickInput::default(), 1000, &field(), &mut store);
    }
    assert_eq!(session.wave, 0);
    tick(&mut session, &TickInput::default(), 1000, &field(), &mut store);
    assert_eq!(session.clock_ms, 30_000);
    assert_eq!(session.wave, 1);
    assert!((session.difficulty - 1.2).abs() < 1e-6);
    assert!(
        session
            .drain_events()
            .contains(&GameEvent::WaveStarted { wave: 1, difficulty: session.difficulty })
    );
}

#[test]
fn test_lethal_contact_persists_higher_score_to_file() {
    let path = temp_file("lethal_higher");
    std::fs::write(&path, "100").expect("seed file");
    let mut store = FileHighScoreStore::new(&path);

    let mut session = GameSession::new(quiet_tuning(), arena(), 1, store.load());
    session.mobs.clear();
    session.mobs.push(Mob::new(50, session.player.pos, 1.0));
    session.player.hp = 10.0;
    session.score = 640.0;

    tick(&mut session, &TickInput::default(), 16, &field(), &mut store);
    assert_eq!(session.player.hp, 0.0);
    assert!(session.game_over);
    assert_eq!(std::fs::read_to_string(&path).expect("score file").trim(), "640");
    assert!(session.is_new_high_score());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_lethal_contact_leaves_better_file_unchanged() {
    let path = temp_file("lethal_lower");
    std::fs::write(&path, "5000").expect("seed file");
    let mut store = FileHighScoreStore::new(&path);

    let mut session = GameSession::new(quiet_tuning(), arena(), 1, store.load());
    session.mobs.clear();
    session.mobs.push(Mob::new(50, session.player.pos, 1.0));
    session.player.hp = 10.0;
    session.score = 640.0;

    tick(&mut session, &TickInput::default(), 16, &field(), &mut store);
    assert!(session.game_over);
    assert_eq!(std::fs::read_to_string(&path).expect("score file"), "5000");
    assert!(!session.is_new_high_score());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_projectile_never_hits_twice() {
    let mut session = GameSession::new(quiet_tuning(), arena(), 1, 0);
    let mut store = MemoryHighScoreStore::default();
    session.mobs.clear();
    // A column of weak mobs straight below the player, all inside one shot
    for i in 0..4 {
        let mut mob = Mob::new(100 + i, Vec2::new(400.0, 420.0 + i as f32 * 2.0), 1.0);
        mob.hp = 1.0;
        session.mobs.push(mob);
    }
    session.player.projectiles.push(Projectile {
        pos: Vec2::new(400.0, 390.0),
        direction: Vec2::Y,
        speed: PROJECTILE_SPEED,
        radius: 20.0,
        lifetime: PROJECTILE_LIFETIME_TICKS,
    });

    tick(&mut session, &TickInput::default(), 16, &field(), &mut store);
    assert_eq!(session.mobs.len(), 3);
    assert!(session.player.projectiles.is_empty());
    let kills = session
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, GameEvent::MobKilled { .. }))
        .count();
    assert_eq!(kills, 1);
}

#[test]
fn test_autopilot_session_stays_consistent() {
    let mut session = GameSession::new(Tuning::default(), arena(), 99, 0);
    let mut store = MemoryHighScoreStore::default();
    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };
    let mut last_score = 0.0;
    let mut last_difficulty = 1.0;
    for _ in 0..3_000 {
        tick(&mut session, &input, 16, &field(), &mut store);
        assert!(session.score >= last_score);
        assert!(session.difficulty >= last_difficulty);
        assert!((0.0..=PLAYER_MAX_HP).contains(&session.player.hp));
        assert!((0.0..=PLAYER_MAX_STAMINA).contains(&session.player.stamina));
        assert!((0.0..ARENA_WIDTH).contains(&session.player.pos.x));
        last_score = session.score;
        last_difficulty = session.difficulty;
        if session.game_over {
            break;
        }
    }
    assert!(session.time_ticks > 0);
}
