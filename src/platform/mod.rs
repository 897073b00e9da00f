//! Platform abstraction layer
//!
//! The simulation never talks to a window directly. A `Frontend` delivers
//! input events and receives finished scenes; `Game` owns everything else
//! and runs one frame at a time.

pub mod headless;

pub use headless::Headless;

use crate::clock::FrameClock;
use crate::input::{InputEvent, InputState};
use crate::renderer::{Assets, Scene};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, tick};

/// Window/input collaborator
pub trait Frontend {
    /// Events that arrived since the last frame
    fn poll_events(&mut self) -> Vec<InputEvent>;
    /// Show a finished frame
    fn present(&mut self, scene: &Scene, assets: &Assets);
}

/// Game instance holding all state
pub struct Game {
    pub state: GameState,
    pub input: InputState,
    pub settings: Settings,
    pub assets: Assets,
}

impl Game {
    pub fn new(settings: Settings, assets: Assets, seed: u64) -> Self {
        Self {
            state: GameState::new(seed),
            input: InputState::new(),
            settings,
            assets,
        }
    }

    /// Run one frame: input, simulation, presentation.
    ///
    /// Returns false once quit was requested; the tick is skipped in that case.
    pub fn frame(&mut self, frontend: &mut dyn Frontend, dt: f32) -> bool {
        for event in frontend.poll_events() {
            self.input.handle(event, &self.settings);
        }
        if self.input.quit_requested() {
            return false;
        }

        let input = self.input.take_tick_input(&self.settings);
        tick(&mut self.state, &input, dt);

        for event in self.state.drain_events() {
            match event {
                GameEvent::Lost { score, new_best } => {
                    log::info!("Run over: score {} (new best: {})", score, new_best)
                }
                other => log::trace!("{:?}", other),
            }
        }

        let scene = Scene::build(&self.state, &self.assets, &self.settings);
        frontend.present(&scene, &self.assets);
        true
    }

    /// Drive frames until the frontend asks to quit
    pub fn run(&mut self, frontend: &mut dyn Frontend, clock: &mut FrameClock) {
        loop {
            let dt = clock.tick();
            if !self.frame(frontend, dt) {
                break;
            }
        }
        log::info!(
            "Quit after {} frames, {} finished runs (best score {})",
            clock.frames(),
            self.state.high_score.runs(),
            self.state.high_score.best()
        );
    }
}
