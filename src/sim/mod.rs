//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (platform slot order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod generator;
pub mod platform;
pub mod player;
pub mod rect;
pub mod scroll;
pub mod state;
pub mod tick;

pub use collision::{Landing, fell_off_screen, resolve_landing};
pub use generator::{PlatformGenerator, place_after};
pub use platform::{Platform, PlatformId, PlatformPool, START_LAYOUT};
pub use player::Player;
pub use rect::Rect;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
