//! Platform abstraction layer
//!
//! Backends translate their native events into [`InputEvent`]s and feed
//! them to the app each frame. Held keys are folded into a per-tick
//! [`TickInput`](crate::sim::TickInput) snapshot by [`InputState`].

pub mod input;

pub use input::{InputEvent, InputSource, InputState, Key, ScriptedInput};
