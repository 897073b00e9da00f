//! Game state and core simulation types
//!
//! Everything a run mutates lives in `GameState`; `tick` is the only
//! writer during play.

use serde::{Deserialize, Serialize};

use super::generator::PlatformGenerator;
use super::platform::{PlatformId, PlatformPool};
use super::player::Player;
use crate::highscores::HighScore;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player fell off the screen; waiting for restart
    Lost,
}

/// Notable things that happened during a tick (drained by the frontend)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped { jumps_left: u8 },
    Landed { platform: PlatformId, scored: bool },
    Recycled { platform: PlatformId },
    Lost { score: u32, new_best: bool },
    Restarted,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u32,
    pub high_score: HighScore,
    /// First tick after (re)start: no gravity, no scrolling
    pub first_frame: bool,
    /// Show the controls hint (hidden after the first loss)
    pub show_instructions: bool,
    /// Background scroll offset (pixels, in (-SCREEN_W, 0])
    pub bg_x: i32,
    pub player: Player,
    pub platforms: PlatformPool,
    /// Simulation ticks since the last reset
    pub time_ticks: u64,
    pub events: Vec<GameEvent>,
    pub(super) generator: PlatformGenerator,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        log::info!("New session (seed {})", seed);
        let platforms = PlatformPool::starting();
        let player = Self::spawn_player(&platforms);
        Self {
            seed,
            phase: GamePhase::Playing,
            score: 0,
            high_score: HighScore::new(),
            first_frame: true,
            show_instructions: true,
            bg_x: 0,
            player,
            platforms,
            time_ticks: 0,
            events: Vec::new(),
            generator: PlatformGenerator::new(seed),
        }
    }

    /// Player standing on the first starting platform
    fn spawn_player(platforms: &PlatformPool) -> Player {
        let start = PlatformId(0);
        let rect = platforms.get(start).rect;
        let mut player = Player::new(rect.center_x(), rect.top());
        player.current_platform = Some(start);
        player
    }

    /// Start a new run. The high score survives; the generator keeps its
    /// stream so consecutive runs lay out differently.
    pub fn reset(&mut self) {
        self.platforms = PlatformPool::starting();
        self.player = Self::spawn_player(&self.platforms);
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.bg_x = 0;
        self.first_frame = true;
        self.show_instructions = true;
        self.time_ticks = 0;
        self.events.clear();
        self.events.push(GameEvent::Restarted);
        log::info!("Run reset (best {})", self.high_score.best());
    }

    pub fn is_lost(&self) -> bool {
        self.phase == GamePhase::Lost
    }

    /// End the run and fold its score into the high score
    pub fn lose(&mut self) {
        let new_best = self.high_score.record(self.score);
        self.phase = GamePhase::Lost;
        self.show_instructions = false;
        self.events.push(GameEvent::Lost {
            score: self.score,
            new_best,
        });
        log::info!(
            "Lost with score {} (best {}{})",
            self.score,
            self.high_score.best(),
            if new_best { ", new record" } else { "" }
        );
    }

    /// Take all events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::platform::START_LAYOUT;

    #[test]
    fn test_initial_state() {
        let state = GameState::new(42);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert!(state.first_frame);
        assert_eq!(state.player.current_platform, Some(PlatformId(0)));
        assert_eq!(state.player.rect.bottom(), START_LAYOUT[0].rect.top());
        assert_eq!(state.player.rect.center_x(), START_LAYOUT[0].rect.center_x());
    }

    #[test]
    fn test_reset_twice_is_idempotent() {
        let mut state = GameState::new(42);
        state.score = 7;
        state.lose();
        state.bg_x = -100;
        state.player.rect.pos.y = 900;

        state.reset();
        let player_once = state.player.clone();
        let platforms_once = state.platforms.clone();
        let events_once = state.events.clone();

        state.reset();
        assert_eq!(state.player, player_once);
        assert_eq!(state.platforms, platforms_once);
        assert_eq!(state.events, events_once);
        assert_eq!(state.score, 0);
        assert_eq!(state.bg_x, 0);
        assert!(state.first_frame);
        assert!(!state.is_lost());
        assert_eq!(state.high_score.best(), 7);
    }

    #[test]
    fn test_lose_updates_high_score() {
        let mut state = GameState::new(1);
        state.score = 3;
        state.lose();
        assert!(state.is_lost());
        assert!(!state.show_instructions);
        assert_eq!(state.high_score.best(), 3);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::Lost { score: 3, new_best: true }]
        );

        state.reset();
        state.score = 1;
        state.lose();
        assert_eq!(state.high_score.best(), 3);
    }
}
