//! Title menu

use glam::Vec2;

use super::{GameContext, GameScreen, StateId, Transition};
use crate::platform::{InputEvent, Key};
use crate::renderer::{ImageId, Rect, Surface, colors};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    Start,
    Tutorial,
    Credits,
    Quit,
}

impl MenuOption {
    const ALL: [MenuOption; 4] = [
        MenuOption::Start,
        MenuOption::Tutorial,
        MenuOption::Credits,
        MenuOption::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuOption::Start => "Start Game (Enter)",
            MenuOption::Tutorial => "Tutorial (T)",
            MenuOption::Credits => "Credits (C)",
            MenuOption::Quit => "Quit (Esc)",
        }
    }

    fn transition(self) -> Transition {
        match self {
            MenuOption::Start => Transition::Switch(StateId::Play),
            MenuOption::Tutorial => Transition::Switch(StateId::Tutorial),
            MenuOption::Credits => Transition::Switch(StateId::Credits),
            MenuOption::Quit => Transition::Quit,
        }
    }
}

const OPTION_SPACING: f32 = 50.0;
const OPTION_SIZE: Vec2 = Vec2::new(320.0, 40.0);

pub struct MenuScreen {
    selected: usize,
    high_score: u64,
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuScreen {
    pub fn new() -> Self {
        Self {
            selected: 0,
            high_score: 0,
        }
    }

    fn option_center(size: Vec2, index: usize) -> Vec2 {
        Vec2::new(size.x / 2.0, size.y / 2.0 + index as f32 * OPTION_SPACING)
    }

    fn option_at(&self, size: Vec2, point: Vec2) -> Option<MenuOption> {
        MenuOption::ALL.iter().enumerate().find_map(|(i, &option)| {
            Rect::centered(Self::option_center(size, i), OPTION_SIZE)
                .contains(point)
                .then_some(option)
        })
    }
}

impl GameScreen for MenuScreen {
    fn id(&self) -> StateId {
        StateId::Menu
    }

    fn enter(&mut self, ctx: &mut GameContext, _from: Option<StateId>) {
        self.selected = 0;
        self.high_score = ctx.scores.load();
    }

    fn handle_input(&mut self, ctx: &mut GameContext, event: &InputEvent) -> Transition {
        let count = MenuOption::ALL.len();
        match *event {
            InputEvent::KeyDown(Key::Up | Key::W) => {
                self.selected = (self.selected + count - 1) % count;
                Transition::Stay
            }
            InputEvent::KeyDown(Key::Down | Key::S) => {
                self.selected = (self.selected + 1) % count;
                Transition::Stay
            }
            InputEvent::KeyDown(Key::Enter) => MenuOption::ALL[self.selected].transition(),
            InputEvent::KeyDown(Key::T) => MenuOption::Tutorial.transition(),
            InputEvent::KeyDown(Key::C) => MenuOption::Credits.transition(),
            InputEvent::KeyDown(Key::Escape) => MenuOption::Quit.transition(),
            InputEvent::PointerDown(pos) => {
                let size = ctx.settings.arena_size();
                self.option_at(size, pos)
                    .map_or(Transition::Stay, MenuOption::transition)
            }
            _ => Transition::Stay,
        }
    }

    fn render(&self, _ctx: &GameContext, surface: &mut dyn Surface) {
        let size = surface.size();
        surface.clear(colors::BACKGROUND);
        surface.image(ImageId::MenuBackground, Vec2::ZERO);
        surface.text_centered(
            Vec2::new(size.x / 2.0, size.y / 4.0),
            "SURVIVAL ARENA",
            56.0,
            colors::HIGHLIGHT,
        );
        for (i, option) in MenuOption::ALL.iter().enumerate() {
            let color = if i == self.selected {
                colors::HIGHLIGHT
            } else {
                colors::HUD_TEXT
            };
            surface.text_centered(Self::option_center(size, i), option.label(), 28.0, color);
        }
        surface.text_centered(
            Vec2::new(size.x / 2.0, size.y - 40.0),
            &format!("High Score: {}", self.high_score),
            20.0,
            colors::DIM_TEXT,
        );
    }
}
