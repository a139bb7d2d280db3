//! State machine transitions through the public App API

use glam::Vec2;
use survival_arena::platform::{InputEvent, Key};
use survival_arena::renderer::CommandBuffer;
use survival_arena::sim::OpenField;
use survival_arena::states::StateId;
use survival_arena::{App, MemoryHighScoreStore, Settings};

fn app() -> App {
    let settings = Settings {
        seed: Some(21),
        ..Settings::default()
    };
    App::new(
        settings,
        Box::new(OpenField::new(800.0, 600.0)),
        Box::new(MemoryHighScoreStore::new(0)),
    )
}

fn press(key: Key) -> Vec<InputEvent> {
    vec![InputEvent::KeyDown(key), InputEvent::KeyUp(key)]
}

#[test]
fn test_pause_and_resume_preserve_session() {
    let mut app = app();
    let mut surface = CommandBuffer::new(800.0, 600.0);
    app.frame(&press(Key::Enter), 16, &mut surface);
    // Hold right for a while so something actually changes
    app.frame(&[InputEvent::KeyDown(Key::D)], 16, &mut surface);
    for _ in 0..30 {
        app.frame(&[], 16, &mut surface);
    }
    assert_eq!(app.state(), Some(StateId::Play));

    let before = app.context().session.clone();
    app.frame(&press(Key::Escape), 16, &mut surface);
    assert_eq!(app.state(), Some(StateId::Pause));
    for _ in 0..10 {
        app.frame(&[], 16, &mut surface);
    }
    assert!(surface.has_text("PAUSED"));

    let session = &app.context().session;
    assert_eq!(session.player.pos, before.player.pos);
    assert_eq!(session.score, before.score);
    assert_eq!(session.clock_ms, before.clock_ms);
    assert_eq!(session.mobs.len(), before.mobs.len());
    for (a, b) in session.mobs.iter().zip(&before.mobs) {
        assert_eq!(a.pos, b.pos);
        assert_eq!(a.hp, b.hp);
    }

    app.frame(&press(Key::Escape), 16, &mut surface);
    assert_eq!(app.state(), Some(StateId::Play));
    // Resuming continues the same session instead of starting a new one
    assert_eq!(app.context().session.time_ticks, before.time_ticks + 1);
}

#[test]
fn test_menu_routes() {
    let mut app = app();
    let mut surface = CommandBuffer::new(800.0, 600.0);

    app.frame(&press(Key::T), 16, &mut surface);
    assert_eq!(app.state(), Some(StateId::Tutorial));
    app.frame(&press(Key::Escape), 16, &mut surface);
    assert_eq!(app.state(), Some(StateId::Menu));

    app.frame(&press(Key::C), 16, &mut surface);
    assert_eq!(app.state(), Some(StateId::Credits));
    app.frame(&[InputEvent::PointerDown(Vec2::ZERO)], 16, &mut surface);
    assert_eq!(app.state(), Some(StateId::Menu));

    assert!(!app.frame(&press(Key::Escape), 16, &mut surface));
    assert!(!app.is_running());
}

#[test]
fn test_death_leads_to_game_over_and_retry_starts_fresh() {
    let mut app = app();
    let mut surface = CommandBuffer::new(800.0, 600.0);
    app.frame(&press(Key::Enter), 16, &mut surface);
    app.context_mut().session.player.hp = 0.0;
    app.context_mut().session.score = 77.0;

    app.frame(&[], 16, &mut surface);
    assert_eq!(app.state(), Some(StateId::GameOver));
    assert!(surface.has_text("GAME OVER"));

    app.frame(&press(Key::R), 16, &mut surface);
    assert_eq!(app.state(), Some(StateId::Play));
    let session = &app.context().session;
    assert_eq!(session.mobs.len(), 1);
    assert!(session.player.hp > 0.0);
    assert_eq!(session.time_ticks, 1);
}

#[test]
fn test_play_menu_shortcut() {
    let mut app = app();
    let mut surface = CommandBuffer::new(800.0, 600.0);
    app.frame(&press(Key::Enter), 16, &mut surface);
    app.frame(&press(Key::M), 16, &mut surface);
    assert_eq!(app.state(), Some(StateId::Menu));
    assert!(surface.has_text("SURVIVAL ARENA"));
}
