//! Pause overlay on top of the frozen game

use super::{GameContext, GameScreen, StateId, Transition};
use crate::platform::{InputEvent, Key};
use crate::renderer::{Surface, draw_gameplay, draw_overlay};

pub struct PauseScreen;

impl GameScreen for PauseScreen {
    fn id(&self) -> StateId {
        StateId::Pause
    }

    fn handle_input(&mut self, _ctx: &mut GameContext, event: &InputEvent) -> Transition {
        match event {
            InputEvent::KeyDown(Key::Escape) => Transition::Switch(StateId::Play),
            _ => Transition::Stay,
        }
    }

    fn render(&self, ctx: &GameContext, surface: &mut dyn Surface) {
        draw_gameplay(&ctx.session, ctx.settings.debug, surface);
        draw_overlay(surface, "PAUSED", &["Press ESC to resume".to_string()]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::CommandBuffer;
    use crate::states::test_support::context;

    #[test]
    fn test_update_does_not_simulate() {
        let mut ctx = context();
        let mut pause = PauseScreen;
        let before = ctx.session.player.pos;
        assert_eq!(pause.update(&mut ctx, 16), Transition::Stay);
        assert_eq!(ctx.session.time_ticks, 0);
        assert_eq!(ctx.session.player.pos, before);
    }

    #[test]
    fn test_escape_resumes_and_renders_overlay() {
        let mut ctx = context();
        let mut pause = PauseScreen;
        assert_eq!(
            pause.handle_input(&mut ctx, &InputEvent::KeyDown(Key::Escape)),
            Transition::Switch(StateId::Play)
        );
        let mut buffer = CommandBuffer::new(800.0, 600.0);
        pause.render(&ctx, &mut buffer);
        assert!(buffer.has_text("Score: 0"));
        assert!(buffer.has_text("PAUSED"));
    }
}
