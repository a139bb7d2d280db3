//! Main loop orchestrator
//!
//! One frame: poll input, dispatch events, advance the active screen by one
//! tick, render. The loop is capped at the configured frame rate and never
//! sub-steps.

use std::time::{Duration, Instant};

use crate::consts::MAX_FRAME_MS;
use crate::highscores::HighScoreStore;
use crate::platform::{InputEvent, InputSource};
use crate::renderer::Surface;
use crate::settings::Settings;
use crate::sim::Walkability;
use crate::states::{GameContext, StateId, StateMachine};

pub struct App {
    ctx: GameContext,
    machine: StateMachine,
    frames: u64,
}

impl App {
    /// Build the context and screens and enter the menu
    pub fn new(
        settings: Settings,
        walk: Box<dyn Walkability>,
        scores: Box<dyn HighScoreStore>,
    ) -> Self {
        let mut ctx = GameContext::new(settings, walk, scores);
        let mut machine = StateMachine::with_default_states();
        machine.change_state(StateId::Menu, &mut ctx);
        Self {
            ctx,
            machine,
            frames: 0,
        }
    }

    pub fn context(&self) -> &GameContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut GameContext {
        &mut self.ctx
    }

    pub fn state(&self) -> Option<StateId> {
        self.machine.current()
    }

    pub fn is_running(&self) -> bool {
        self.machine.is_running()
    }

    /// Frames processed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame. Returns false once the game has quit.
    pub fn frame(&mut self, events: &[InputEvent], dt_ms: u32, surface: &mut dyn Surface) -> bool {
        for event in events {
            if *event == InputEvent::Quit {
                self.machine.quit();
                break;
            }
            self.ctx.input.apply(event);
            self.machine.handle_input(&mut self.ctx, event);
            if !self.machine.is_running() {
                break;
            }
        }
        if !self.machine.is_running() {
            return false;
        }

        self.machine.update(&mut self.ctx, dt_ms.min(MAX_FRAME_MS));
        self.machine.render(&self.ctx, surface);
        self.frames += 1;
        self.machine.is_running()
    }

    /// Frame-capped loop until the source or a screen asks to quit.
    /// Flushes the high score before returning.
    pub fn run<I: InputSource, S: Surface>(&mut self, source: &mut I, surface: &mut S) {
        let frame_ms = self.ctx.settings.frame_ms();
        let budget = Duration::from_millis(u64::from(frame_ms));
        let mut last: Option<Instant> = None;
        log::info!("Main loop started at {} fps", self.ctx.settings.fps);

        loop {
            let start = Instant::now();
            let dt_ms = last.map_or(frame_ms, |prev| {
                u32::try_from(start.duration_since(prev).as_millis()).unwrap_or(MAX_FRAME_MS)
            });
            last = Some(start);

            let events = source.poll();
            if !self.frame(&events, dt_ms, surface) {
                break;
            }

            let spent = start.elapsed();
            if spent < budget {
                std::thread::sleep(budget - spent);
            }
        }

        self.shutdown();
    }

    /// Persist the current score if it beats the stored one
    pub fn shutdown(&mut self) {
        let score = self.ctx.session.score;
        match self.ctx.scores.save_if_higher(score) {
            Ok(_) => log::info!("Shutdown after {} frames", self.frames),
            Err(e) => log::warn!("{e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::MemoryHighScoreStore;
    use crate::platform::{Key, ScriptedInput};
    use crate::renderer::CommandBuffer;
    use crate::sim::OpenField;

    fn app() -> App {
        let settings = Settings {
            seed: Some(11),
            fps: 1000,
            ..Settings::default()
        };
        App::new(
            settings,
            Box::new(OpenField::new(800.0, 600.0)),
            Box::new(MemoryHighScoreStore::new(0)),
        )
    }

    #[test]
    fn test_starts_in_menu_and_enters_play() {
        let mut app = app();
        let mut surface = CommandBuffer::new(800.0, 600.0);
        assert_eq!(app.state(), Some(StateId::Menu));
        assert!(app.frame(&[InputEvent::KeyDown(Key::Enter)], 16, &mut surface));
        assert_eq!(app.state(), Some(StateId::Play));
        assert_eq!(app.context().session.time_ticks, 1);
    }

    #[test]
    fn test_quit_event_stops_without_update() {
        let mut app = app();
        let mut surface = CommandBuffer::new(800.0, 600.0);
        assert!(!app.frame(&[InputEvent::Quit], 16, &mut surface));
        assert!(!app.is_running());
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn test_dt_is_clamped() {
        let mut app = app();
        let mut surface = CommandBuffer::new(800.0, 600.0);
        app.frame(&[InputEvent::KeyDown(Key::Enter)], 5_000, &mut surface);
        assert_eq!(app.context().session.clock_ms, u64::from(MAX_FRAME_MS));
    }

    #[test]
    fn test_run_flushes_high_score() {
        let mut app = app();
        let mut surface = CommandBuffer::new(800.0, 600.0);
        let mut source = ScriptedInput::default()
            .then(vec![InputEvent::KeyDown(Key::Enter)])
            .idle(3);
        app.run(&mut source, &mut surface);
        assert_eq!(app.frames(), 4);
        assert!(!app.is_running());

        app.context_mut().session.score = 1234.0;
        app.shutdown();
        assert_eq!(app.context().scores.load(), 1234);
    }
}
