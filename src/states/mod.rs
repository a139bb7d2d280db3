//! Game-state machine
//!
//! Exactly one [`GameScreen`] is active at a time. Every transition runs
//! `exit` on the outgoing screen and `enter` on the incoming one before the
//! new screen sees any update or render.

pub mod credits;
pub mod gameover;
pub mod menu;
pub mod pause;
pub mod play;
pub mod tutorial;

use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;

use crate::highscores::HighScoreStore;
use crate::platform::{InputEvent, InputState};
use crate::renderer::Surface;
use crate::settings::Settings;
use crate::sim::{GameSession, Walkability};

pub use credits::CreditsScreen;
pub use gameover::GameOverScreen;
pub use menu::MenuScreen;
pub use pause::PauseScreen;
pub use play::PlayScreen;
pub use tutorial::TutorialScreen;

/// Identifies a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateId {
    Menu,
    Play,
    Pause,
    GameOver,
    Credits,
    Tutorial,
}

/// What a screen asks the machine to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Switch(StateId),
    Quit,
}

/// Everything screens share: settings, the play session and its
/// collaborators
pub struct GameContext {
    pub settings: Settings,
    pub session: GameSession,
    pub walk: Box<dyn Walkability>,
    pub scores: Box<dyn HighScoreStore>,
    pub input: InputState,
    /// Seeds sessions and drives presentation randomness
    pub rng: Pcg32,
}

impl GameContext {
    pub fn new(
        settings: Settings,
        walk: Box<dyn Walkability>,
        scores: Box<dyn HighScoreStore>,
    ) -> Self {
        let seed = settings.seed.unwrap_or_else(clock_seed);
        let high_score = scores.load();
        let session = GameSession::new(
            settings.tuning.clone(),
            settings.arena_size(),
            seed,
            high_score,
        );
        Self {
            settings,
            session,
            walk,
            scores,
            input: InputState::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Replace the session with a fresh one and reload the high score
    pub fn reset_session(&mut self) {
        let seed = match self.settings.seed {
            Some(seed) => seed,
            None => self.rng.next_u64(),
        };
        let high_score = self.scores.load();
        self.session = GameSession::new(
            self.settings.tuning.clone(),
            self.settings.arena_size(),
            seed,
            high_score,
        );
        log::info!("New session (seed {}, high score {})", seed, high_score);
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// One screen of the game
pub trait GameScreen {
    fn id(&self) -> StateId;

    /// Called when this screen becomes active; `from` is the previous screen
    fn enter(&mut self, _ctx: &mut GameContext, _from: Option<StateId>) {}

    /// Called when this screen stops being active
    fn exit(&mut self, _ctx: &mut GameContext) {}

    fn handle_input(&mut self, ctx: &mut GameContext, event: &InputEvent) -> Transition;

    fn update(&mut self, _ctx: &mut GameContext, _dt_ms: u32) -> Transition {
        Transition::Stay
    }

    fn render(&self, ctx: &GameContext, surface: &mut dyn Surface);
}

/// Owns the screens and the current-screen pointer
pub struct StateMachine {
    screens: HashMap<StateId, Box<dyn GameScreen>>,
    current: Option<StateId>,
    running: bool,
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl StateMachine {
    /// Empty machine with no active screen
    pub fn new() -> Self {
        Self {
            screens: HashMap::new(),
            current: None,
            running: true,
        }
    }

    /// All six screens registered, none active yet
    pub fn with_default_states() -> Self {
        let mut machine = Self::new();
        machine.register(Box::new(MenuScreen::new()));
        machine.register(Box::new(PlayScreen::new()));
        machine.register(Box::new(PauseScreen));
        machine.register(Box::new(GameOverScreen));
        machine.register(Box::new(CreditsScreen::new()));
        machine.register(Box::new(TutorialScreen::new()));
        machine
    }

    pub fn register(&mut self, screen: Box<dyn GameScreen>) {
        self.screens.insert(screen.id(), screen);
    }

    pub fn current(&self) -> Option<StateId> {
        self.current
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the machine; the loop exits after this frame
    pub fn quit(&mut self) {
        if self.running {
            log::info!("Quit requested");
        }
        self.running = false;
    }

    /// Switch to `id`. Unknown ids are ignored and return false.
    ///
    /// Switching to the active screen still runs its exit and enter hooks.
    pub fn change_state(&mut self, id: StateId, ctx: &mut GameContext) -> bool {
        if !self.screens.contains_key(&id) {
            log::warn!("Ignoring transition to unregistered state {:?}", id);
            return false;
        }
        let from = self.current;
        if let Some(screen) = from.and_then(|cur| self.screens.get_mut(&cur)) {
            screen.exit(ctx);
        }
        self.current = Some(id);
        if let Some(screen) = self.screens.get_mut(&id) {
            screen.enter(ctx, from);
        }
        log::info!("State {:?} -> {:?}", from, id);
        true
    }

    fn apply(&mut self, transition: Transition, ctx: &mut GameContext) {
        match transition {
            Transition::Stay => {}
            Transition::Switch(id) => {
                self.change_state(id, ctx);
            }
            Transition::Quit => self.quit(),
        }
    }

    pub fn handle_input(&mut self, ctx: &mut GameContext, event: &InputEvent) {
        let Some(screen) = self.current.and_then(|cur| self.screens.get_mut(&cur)) else {
            return;
        };
        let transition = screen.handle_input(ctx, event);
        self.apply(transition, ctx);
    }

    pub fn update(&mut self, ctx: &mut GameContext, dt_ms: u32) {
        let Some(screen) = self.current.and_then(|cur| self.screens.get_mut(&cur)) else {
            return;
        };
        let transition = screen.update(ctx, dt_ms);
        self.apply(transition, ctx);
    }

    pub fn render(&self, ctx: &GameContext, surface: &mut dyn Surface) {
        if let Some(screen) = self.current.and_then(|cur| self.screens.get(&cur)) {
            screen.render(ctx, surface);
        }
    }
}
