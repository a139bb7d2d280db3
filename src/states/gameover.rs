//! Game over overlay

use super::{GameContext, GameScreen, StateId, Transition};
use crate::platform::{InputEvent, Key};
use crate::renderer::{Surface, draw_gameplay, draw_overlay};

pub struct GameOverScreen;

impl GameScreen for GameOverScreen {
    fn id(&self) -> StateId {
        StateId::GameOver
    }

    fn enter(&mut self, ctx: &mut GameContext, _from: Option<StateId>) {
        log::info!(
            "Game over: score {:.0}, wave {}",
            ctx.session.score,
            ctx.session.wave + 1
        );
    }

    fn handle_input(&mut self, _ctx: &mut GameContext, event: &InputEvent) -> Transition {
        match event {
            InputEvent::KeyDown(Key::R) => Transition::Switch(StateId::Play),
            InputEvent::KeyDown(Key::Escape) => Transition::Switch(StateId::Menu),
            _ => Transition::Stay,
        }
    }

    fn render(&self, ctx: &GameContext, surface: &mut dyn Surface) {
        draw_gameplay(&ctx.session, ctx.settings.debug, surface);
        let mut lines = vec![format!("Final Score: {:.0}", ctx.session.score)];
        if ctx.session.is_new_high_score() {
            lines.push("NEW HIGH SCORE!".to_string());
        }
        lines.push("Press R to retry or ESC for menu".to_string());
        draw_overlay(surface, "GAME OVER", &lines);
    }
}
