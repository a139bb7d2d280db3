//! Credits with a randomly chosen background animation

use glam::Vec2;
use rand::Rng;

use super::{GameContext, GameScreen, StateId, Transition};
use crate::platform::InputEvent;
use crate::renderer::{Distortion, DrawCommand, ImageId, Surface, colors};

const CREDITS: [&str; 4] = [
    "SURVIVAL ARENA",
    "Design & Programming",
    "Art & Animation",
    "Thanks for playing!",
];

/// Decorative background effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditsAnimation {
    Zoom,
    Pan,
    Fade,
    Pixelate,
    Wave,
}

impl CreditsAnimation {
    const ALL: [CreditsAnimation; 5] = [
        CreditsAnimation::Zoom,
        CreditsAnimation::Pan,
        CreditsAnimation::Fade,
        CreditsAnimation::Pixelate,
        CreditsAnimation::Wave,
    ];
}

pub struct CreditsScreen {
    animation: CreditsAnimation,
    /// Milliseconds since the screen was entered
    elapsed_ms: u64,
}

impl Default for CreditsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl CreditsScreen {
    pub fn new() -> Self {
        Self {
            animation: CreditsAnimation::Fade,
            elapsed_ms: 0,
        }
    }

    pub fn animation(&self) -> CreditsAnimation {
        self.animation
    }

    /// Background image command for the current animation time
    fn backdrop(&self, size: Vec2) -> DrawCommand {
        let t = self.elapsed_ms as f32 / 1000.0;
        let mut pos = Vec2::ZERO;
        let mut zoom = 1.0;
        let mut alpha = 1.0;
        let mut distortion = Distortion::None;
        match self.animation {
            // Slow zoom in around the center, ping-ponging
            CreditsAnimation::Zoom => {
                zoom = 1.0 + 0.1 * (1.0 - (t * 0.5).cos());
                pos = size / 2.0 * (1.0 - zoom);
            }
            CreditsAnimation::Pan => {
                pos.x = -40.0 * (t * 0.3).sin().abs();
                zoom = 1.1;
            }
            CreditsAnimation::Fade => alpha = (t / 3.0).min(1.0),
            CreditsAnimation::Pixelate => {
                // Coarse blocks resolving to the sharp image over 3s
                distortion = Distortion::Pixelate((32.0 * (1.0 - t / 3.0)).max(1.0));
            }
            CreditsAnimation::Wave => {
                distortion = Distortion::Wave {
                    amplitude: 8.0,
                    phase: t * 2.0,
                };
            }
        }
        DrawCommand::Image {
            image: ImageId::CreditsBackground,
            pos,
            zoom,
            alpha,
            distortion,
        }
    }
}

impl GameScreen for CreditsScreen {
    fn id(&self) -> StateId {
        StateId::Credits
    }

    fn enter(&mut self, ctx: &mut GameContext, _from: Option<StateId>) {
        let idx = ctx.rng.random_range(0..CreditsAnimation::ALL.len());
        self.animation = CreditsAnimation::ALL[idx];
        self.elapsed_ms = 0;
        log::debug!("Credits animation: {:?}", self.animation);
    }

    fn handle_input(&mut self, _ctx: &mut GameContext, event: &InputEvent) -> Transition {
        match event {
            InputEvent::KeyDown(_) | InputEvent::PointerDown(_) => {
                Transition::Switch(StateId::Menu)
            }
            _ => Transition::Stay,
        }
    }

    fn update(&mut self, _ctx: &mut GameContext, dt_ms: u32) -> Transition {
        self.elapsed_ms += u64::from(dt_ms);
        Transition::Stay
    }

    fn render(&self, _ctx: &GameContext, surface: &mut dyn Surface) {
        let size = surface.size();
        surface.clear(colors::BACKGROUND);
        surface.submit(self.backdrop(size));
        for (i, line) in CREDITS.iter().enumerate() {
            let size_px = if i == 0 { 48.0 } else { 28.0 };
            surface.text_centered(
                Vec2::new(size.x / 2.0, size.y / 4.0 + i as f32 * 60.0),
                line,
                size_px,
                colors::HUD_TEXT,
            );
        }
        surface.text_centered(
            Vec2::new(size.x / 2.0, size.y - 40.0),
            "Press any key to return",
            20.0,
            colors::DIM_TEXT,
        );
    }
}
