//! Rendering module
//!
//! Builds backend-agnostic draw lists; a frontend turns them into pixels.

pub mod assets;
pub mod scene;

pub use assets::{Assets, ImageFiles, ImageSource, Sprite, SpriteId, SpriteSource};
pub use scene::{Anchor, DrawCommand, FontSize, Scene};

/// Colors for game elements (RGBA, 0-1)
pub mod colors {
    pub const PLATFORM_BODY: [f32; 4] = [120.0 / 255.0, 75.0 / 255.0, 15.0 / 255.0, 1.0];
    pub const PLATFORM_TOP: [f32; 4] = [80.0 / 255.0, 160.0 / 255.0, 60.0 / 255.0, 1.0];
    pub const TEXT_DARK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const TEXT_LIGHT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Semi-transparent black over the frozen frame
    pub const LOST_OVERLAY: [f32; 4] = [0.0, 0.0, 0.0, 120.0 / 255.0];
    /// Magenta stand-in for missing images
    pub const PLACEHOLDER: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
}
