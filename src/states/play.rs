//! Active gameplay

use super::{GameContext, GameScreen, StateId, Transition};
use crate::platform::{InputEvent, Key};
use crate::renderer::{Surface, draw_gameplay};
use crate::sim::tick;

pub struct PlayScreen;

impl Default for PlayScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayScreen {
    pub fn new() -> Self {
        Self
    }
}

impl GameScreen for PlayScreen {
    fn id(&self) -> StateId {
        StateId::Play
    }

    /// Resuming from Pause keeps the session; any other entry starts fresh
    fn enter(&mut self, ctx: &mut GameContext, from: Option<StateId>) {
        if from != Some(StateId::Pause) {
            ctx.input.clear();
            ctx.reset_session();
        }
    }

    fn handle_input(&mut self, ctx: &mut GameContext, event: &InputEvent) -> Transition {
        let InputEvent::KeyDown(key) = *event else {
            return Transition::Stay;
        };
        match key {
            Key::Escape => return Transition::Switch(StateId::Pause),
            Key::M => return Transition::Switch(StateId::Menu),
            Key::Plus | Key::Equals => ctx.session.step_scale(1),
            Key::Minus => ctx.session.step_scale(-1),
            Key::I => {
                ctx.input.autopilot = !ctx.input.autopilot;
                log::info!("Autopilot: {}", ctx.input.autopilot);
            }
            _ => {}
        }
        Transition::Stay
    }

    fn update(&mut self, ctx: &mut GameContext, dt_ms: u32) -> Transition {
        // Death is noticed at the top of the next update
        if ctx.session.game_over || ctx.session.player.is_dead() {
            return Transition::Switch(StateId::GameOver);
        }
        let input = ctx.input.snapshot();
        tick(
            &mut ctx.session,
            &input,
            dt_ms,
            ctx.walk.as_ref(),
            ctx.scores.as_mut(),
        );
        for event in ctx.session.drain_events() {
            log::trace!("{:?}", event);
        }
        Transition::Stay
    }

    fn render(&self, ctx: &GameContext, surface: &mut dyn Surface) {
        draw_gameplay(&ctx.session, ctx.settings.debug, surface);
    }
}
