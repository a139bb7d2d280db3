//! Keyboard and pointer input

use std::collections::{HashSet, VecDeque};

use glam::Vec2;

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
    LShift,
    Q,
    E,
    H,
    V,
    Plus,
    Equals,
    Minus,
    Escape,
    Enter,
    Space,
    M,
    R,
    T,
    C,
    I,
    Other,
}

impl Key {
    /// Map a DOM-style key name ("a", "ArrowUp", "Escape", ...)
    pub fn from_name(name: &str) -> Self {
        match name {
            "w" | "W" => Key::W,
            "a" | "A" => Key::A,
            "s" | "S" => Key::S,
            "d" | "D" => Key::D,
            "ArrowUp" => Key::Up,
            "ArrowDown" => Key::Down,
            "ArrowLeft" => Key::Left,
            "ArrowRight" => Key::Right,
            "Shift" | "ShiftLeft" => Key::LShift,
            "q" | "Q" => Key::Q,
            "e" | "E" => Key::E,
            "h" | "H" => Key::H,
            "v" | "V" => Key::V,
            "+" => Key::Plus,
            "=" => Key::Equals,
            "-" => Key::Minus,
            "Escape" => Key::Escape,
            "Enter" => Key::Enter,
            " " | "Space" => Key::Space,
            "m" | "M" => Key::M,
            "r" | "R" => Key::R,
            "t" | "T" => Key::T,
            "c" | "C" => Key::C,
            "i" | "I" => Key::I,
            _ => Key::Other,
        }
    }
}

/// A discrete input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    PointerDown(Vec2),
    PointerUp(Vec2),
    /// Window closed
    Quit,
}

/// Held keys and buttons between events
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Key>,
    pointer_down: bool,
    /// Demo steering, toggled from Play
    pub autopilot: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track press/release state
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown(key) => {
                self.held.insert(key);
            }
            InputEvent::KeyUp(key) => {
                self.held.remove(&key);
            }
            InputEvent::PointerDown(_) => self.pointer_down = true,
            InputEvent::PointerUp(_) => self.pointer_down = false,
            InputEvent::Quit => {}
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Forget held keys and buttons
    pub fn clear(&mut self) {
        self.held.clear();
        self.pointer_down = false;
    }

    /// Held input for this tick
    pub fn snapshot(&self) -> TickInput {
        let held = |a: Key, b: Key| self.is_held(a) || self.is_held(b);
        TickInput {
            up: held(Key::W, Key::Up),
            down: held(Key::S, Key::Down),
            left: held(Key::A, Key::Left),
            right: held(Key::D, Key::Right),
            run: self.is_held(Key::LShift),
            rotate_left: self.is_held(Key::Q),
            rotate_right: self.is_held(Key::E),
            flip_horizontal: self.is_held(Key::H),
            flip_vertical: self.is_held(Key::V),
            attack: self.pointer_down,
            autopilot: self.autopilot,
        }
    }
}

/// Something that produces input events once per frame
pub trait InputSource {
    /// Events since the last poll
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// Replays a fixed list of per-frame event batches, then reports quit
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Append `count` frames with no events
    pub fn idle(mut self, count: usize) -> Self {
        self.frames.extend(std::iter::repeat_n(Vec::new(), count));
        self
    }

    /// Append a single frame of events
    pub fn then(mut self, events: Vec<InputEvent>) -> Self {
        self.frames.push_back(events);
        self
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.frames
            .pop_front()
            .unwrap_or_else(|| vec![InputEvent::Quit])
    }
}
