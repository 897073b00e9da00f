//! Endless Jump - An auto-scrolling platform jumping game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player motion, platform generation, collisions)
//! - `renderer`: Draw-list construction and asset resolution
//! - `platform`: Frontend abstraction (window/input collaborator)
//! - `input`: Key state to tick input mapping
//! - `clock`: Frame pacing and clamped dt

pub mod clock;
pub mod highscores;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use highscores::HighScore;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Window dimensions (pixels)
    pub const SCREEN_W: i32 = 1024;
    pub const SCREEN_H: i32 = 576;

    /// Target frame rate
    pub const FPS: u32 = 60;
    /// Nominal timestep at the target frame rate
    pub const SIM_DT: f32 = 1.0 / FPS as f32;
    /// Largest dt handed to the simulation after a stall
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Player sprite size
    pub const PLAYER_SIZE: i32 = 64;
    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 2000.0;
    /// Vertical velocity applied on jump (negative = up)
    pub const JUMP_IMPULSE: f32 = -750.0;
    /// Jumps available between landings (ground jump + double jump)
    pub const MAX_JUMPS: u8 = 2;

    /// Default platform size
    pub const PLATFORM_W: i32 = 180;
    pub const PLATFORM_H: i32 = 28;
    /// Height of the grass strip drawn on top of each platform
    pub const PLATFORM_TOP_STRIP: i32 = 12;
    /// Live platforms in the pool
    pub const PLATFORM_COUNT: usize = 4;

    /// Platform generation rules
    pub const MAX_DOUBLE_JUMP_HEIGHT: i32 = 200;
    pub const MIN_PLATFORM_Y: i32 = 240;
    pub const MAX_PLATFORM_Y: i32 = SCREEN_H - 140;
    pub const MIN_GAP: i32 = 120;
    pub const MAX_GAP: i32 = 240;

    /// Horizontal world scroll per tick (pixels)
    pub const SCROLL_SPEED: i32 = 4;
}
