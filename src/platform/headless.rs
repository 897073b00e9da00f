//! Windowless frontend
//!
//! Replays scheduled input events, keeps the last presented scene and asks
//! to quit once its frame budget is spent.

use crate::input::InputEvent;
use crate::renderer::{Assets, Scene};

use super::Frontend;

#[derive(Debug, Default)]
pub struct Headless {
    max_frames: u64,
    /// Frames polled so far
    frame: u64,
    presented: u64,
    /// (frame, event), delivered when that frame polls
    script: Vec<(u64, InputEvent)>,
    last_scene: Option<Scene>,
}

impl Headless {
    pub fn new(max_frames: u64) -> Self {
        Self {
            max_frames,
            ..Default::default()
        }
    }

    /// Deliver `event` on the given frame (0-based)
    pub fn schedule(&mut self, frame: u64, event: InputEvent) {
        self.script.push((frame, event));
    }

    pub fn presented(&self) -> u64 {
        self.presented
    }

    pub fn last_scene(&self) -> Option<&Scene> {
        self.last_scene.as_ref()
    }
}

impl Frontend for Headless {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let frame = self.frame;
        self.frame += 1;

        if frame >= self.max_frames {
            return vec![InputEvent::Quit];
        }

        let (due, pending): (Vec<_>, Vec<_>) =
            self.script.drain(..).partition(|(at, _)| *at == frame);
        self.script = pending;
        due.into_iter().map(|(_, event)| event).collect()
    }

    fn present(&mut self, scene: &Scene, _assets: &Assets) {
        self.presented += 1;
        if self.presented % 600 == 0 {
            log::debug!("Presented {} frames ({} draw calls)", self.presented, scene.commands.len());
        }
        self.last_scene = Some(scene.clone());
    }
}
