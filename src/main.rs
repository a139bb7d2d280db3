//! Survival Arena - native entry point
//!
//! Runs a headless demo: the menu starts a game, autopilot plays it, and
//! the draw intents go to a recording surface. A windowed backend plugs in
//! by implementing `InputSource` and `Surface`.
//!
//! Usage: `survival-arena [settings.json] [frames]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;

    use survival_arena::platform::{InputEvent, Key, ScriptedInput};
    use survival_arena::renderer::CommandBuffer;
    use survival_arena::sim::OpenField;
    use survival_arena::{App, FileHighScoreStore, Settings};

    const DEFAULT_FRAMES: usize = 600;

    env_logger::init();
    log::info!("Survival Arena (native) starting...");

    let mut args = std::env::args().skip(1);
    let settings_path = args.next().map(PathBuf::from);
    let frames = args
        .next()
        .and_then(|arg| arg.parse::<usize>().ok())
        .unwrap_or(DEFAULT_FRAMES);

    let settings = Settings::load_from(settings_path.as_deref());
    let scores = FileHighScoreStore::new(settings.high_score_path.clone());
    let walk = OpenField::new(settings.screen_width as f32, settings.screen_height as f32);
    let mut surface = CommandBuffer::new(settings.screen_width as f32, settings.screen_height as f32);

    // Start from the menu, hand control to the autopilot, then let it play
    let mut input = ScriptedInput::default()
        .then(vec![InputEvent::KeyDown(Key::Enter), InputEvent::KeyUp(Key::Enter)])
        .then(vec![InputEvent::KeyDown(Key::I), InputEvent::KeyUp(Key::I)])
        .idle(frames);

    let mut app = App::new(settings, Box::new(walk), Box::new(scores));
    app.run(&mut input, &mut surface);

    let session = &app.context().session;
    log::info!(
        "Finished in state {:?}: score {:.0}, wave {}, difficulty {:.2}x, {} mobs",
        app.state(),
        session.score,
        session.wave + 1,
        session.difficulty,
        session.mobs.len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library is driven by a host page on the web; nothing to run here
}
