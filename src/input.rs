//! Keyboard state to per-tick input
//!
//! Jump is level-triggered (held keys); the player debounces it. Restart is
//! a one-shot edge taken from key-down events and cleared every tick.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::sim::TickInput;

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Space,
    W,
    Up,
}

impl Key {
    pub fn label(&self) -> &'static str {
        match self {
            Key::Space => "Space",
            Key::W => "W",
            Key::Up => "Up",
        }
    }
}

/// Events delivered by the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Window closed / process asked to stop
    Quit,
}

/// Accumulated input between ticks
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Key>,
    restart_pressed: bool,
    quit: bool,
    /// Autopilot plays instead of the keyboard
    pub idle_mode: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, event: InputEvent, settings: &Settings) {
        match event {
            InputEvent::KeyDown(key) => {
                // Key repeat delivers KeyDown again while held; only the first counts
                if self.held.insert(key) && key == settings.restart_key {
                    self.restart_pressed = true;
                }
            }
            InputEvent::KeyUp(key) => {
                self.held.remove(&key);
            }
            InputEvent::Quit => self.quit = true,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Build this tick's input, consuming the restart edge
    pub fn take_tick_input(&mut self, settings: &Settings) -> TickInput {
        TickInput {
            jump: self.held.iter().any(|&k| settings.is_jump_key(k)),
            restart: std::mem::take(&mut self.restart_pressed),
            idle_mode: self.idle_mode,
        }
    }
}
