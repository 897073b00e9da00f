//! Player motion model
//!
//! Vertical-only physics: the world scrolls past the player, so the player
//! never moves horizontally. Jumps are edge-triggered and budgeted; the
//! budget refills only on landing.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::platform::PlatformId;
use super::rect::Rect;
use crate::consts::*;

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Bounding box (pixel grid)
    pub rect: Rect,
    /// Vertical velocity (pixels/s, positive = down)
    pub vel_y: f32,
    pub gravity: f32,
    pub jump_power: f32,
    /// Jumps left before the next landing (0..=MAX_JUMPS)
    pub jumps_left: u8,
    /// Jump input seen on the previous tick (debounce for held keys)
    pub jump_held: bool,
    /// Platform currently stood on
    pub current_platform: Option<PlatformId>,
    /// Platform most recently jumped off (scoring reference)
    pub last_platform: Option<PlatformId>,
    /// Fraction of a pixel not yet applied to `rect`
    #[serde(default)]
    subpixel: f32,
}

impl Player {
    /// Spawn with the bottom edge on `bottom`, horizontally centered on `center_x`
    pub fn new(center_x: i32, bottom: i32) -> Self {
        Self {
            rect: Rect::from_center_bottom(center_x, bottom, IVec2::splat(PLAYER_SIZE)),
            vel_y: 0.0,
            gravity: GRAVITY,
            jump_power: JUMP_IMPULSE,
            jumps_left: MAX_JUMPS,
            jump_held: false,
            current_platform: None,
            last_platform: None,
            subpixel: 0.0,
        }
    }

    /// Advance one tick. Returns true if a jump started this tick.
    ///
    /// `suppress_gravity` pins the player in place (first tick after a reset).
    pub fn update(&mut self, dt: f32, jump_requested: bool, suppress_gravity: bool) -> bool {
        let mut jumped = false;
        if jump_requested && !self.jump_held && self.jumps_left > 0 {
            if let Some(platform) = self.current_platform.take() {
                self.last_platform = Some(platform);
            }
            self.vel_y = self.jump_power;
            self.jumps_left -= 1;
            jumped = true;
        }
        self.jump_held = jump_requested;

        if suppress_gravity {
            self.vel_y = 0.0;
            return jumped;
        }

        self.vel_y += self.gravity * dt;

        // Whole pixels go to the rect; the remainder carries into the next tick
        let dy = self.vel_y * dt + self.subpixel;
        let whole = dy.trunc();
        self.subpixel = dy - whole;
        self.rect.pos.y += whole as i32;

        jumped
    }

    /// Snap onto a platform top and refill the jump budget
    pub fn landed(&mut self, platform_top: i32, platform: PlatformId) {
        self.rect.set_bottom(platform_top);
        self.vel_y = 0.0;
        self.subpixel = 0.0;
        self.jumps_left = MAX_JUMPS;
        self.current_platform = Some(platform);
    }
}
