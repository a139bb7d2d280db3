//! Two-page how-to-play screen

use glam::Vec2;

use super::{GameContext, GameScreen, StateId, Transition};
use crate::platform::{InputEvent, Key};
use crate::renderer::{ImageId, Surface, colors};

const PAGES: [&[&str]; 2] = [
    &[
        "Move: WASD or arrow keys",
        "Run: hold Left Shift (uses stamina)",
        "Attack: click to shoot where you face",
        "Pause: Esc    Menu: M",
    ],
    &[
        "Rotate: Q / E    Flip: H / V",
        "Scale: + / -",
        "Enemies mirror your rotation and flips",
        "Survive the waves, they only get harder",
    ],
];

pub struct TutorialScreen {
    page: usize,
}

impl Default for TutorialScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl TutorialScreen {
    pub fn new() -> Self {
        Self { page: 0 }
    }

    pub fn page(&self) -> usize {
        self.page
    }
}

impl GameScreen for TutorialScreen {
    fn id(&self) -> StateId {
        StateId::Tutorial
    }

    fn enter(&mut self, _ctx: &mut GameContext, _from: Option<StateId>) {
        self.page = 0;
    }

    fn handle_input(&mut self, _ctx: &mut GameContext, event: &InputEvent) -> Transition {
        match event {
            InputEvent::KeyDown(Key::Left | Key::A) => {
                self.page = self.page.saturating_sub(1);
                Transition::Stay
            }
            InputEvent::KeyDown(Key::Right | Key::D) => {
                self.page = (self.page + 1).min(PAGES.len() - 1);
                Transition::Stay
            }
            InputEvent::KeyDown(Key::Enter | Key::Space | Key::Escape)
            | InputEvent::PointerDown(_) => Transition::Switch(StateId::Menu),
            _ => Transition::Stay,
        }
    }

    fn render(&self, _ctx: &GameContext, surface: &mut dyn Surface) {
        let size = surface.size();
        surface.clear(colors::BACKGROUND);
        surface.image(ImageId::TutorialPage(self.page as u8), Vec2::ZERO);
        surface.text_centered(
            Vec2::new(size.x / 2.0, 80.0),
            "HOW TO PLAY",
            48.0,
            colors::HIGHLIGHT,
        );
        for (i, line) in PAGES[self.page].iter().enumerate() {
            surface.text_centered(
                Vec2::new(size.x / 2.0, 180.0 + i as f32 * 50.0),
                line,
                26.0,
                colors::HUD_TEXT,
            );
        }
        surface.text_centered(
            Vec2::new(size.x / 2.0, size.y - 40.0),
            &format!(
                "Page {}/{}  -  Left/Right to browse, Enter to return",
                self.page + 1,
                PAGES.len()
            ),
            20.0,
            colors::DIM_TEXT,
        );
    }
}
