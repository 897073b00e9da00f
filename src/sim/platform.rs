//! Platforms and the fixed-size recycling pool

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Handle to a platform slot in the pool
///
/// Slots are recycled in place, so a handle names a slot, not a particular
/// placement of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlatformId(pub usize);

/// A platform entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
}

impl Platform {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
        }
    }

    /// Platform with the default size
    pub const fn with_default_size(x: i32, y: i32) -> Self {
        Self::new(x, y, PLATFORM_W, PLATFORM_H)
    }

    pub fn move_left(&mut self, speed: i32) {
        self.rect.pos.x -= speed;
    }

    /// Reposition without changing size
    pub fn place_at(&mut self, pos: IVec2) {
        self.rect.pos = pos;
    }

    /// The grass strip along the top edge (drawn in a distinct color)
    pub fn top_strip(&self) -> Rect {
        Rect {
            pos: self.rect.pos,
            size: IVec2::new(self.rect.size.x, PLATFORM_TOP_STRIP),
        }
    }
}

/// Layout every run starts from
pub const START_LAYOUT: [Platform; PLATFORM_COUNT] = [
    Platform::new(80, SCREEN_H - 120, 220, 28),
    Platform::new(350, 420, 200, 28),
    Platform::new(650, 380, 200, 28),
    Platform::new(900, 450, 200, 28),
];

/// Fixed pool of live platforms (iteration order = slot order)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformPool {
    slots: [Platform; PLATFORM_COUNT],
}

impl Default for PlatformPool {
    fn default() -> Self {
        Self::starting()
    }
}

impl PlatformPool {
    /// Pool laid out with the starting platforms
    pub fn starting() -> Self {
        Self { slots: START_LAYOUT }
    }

    pub fn from_slots(slots: [Platform; PLATFORM_COUNT]) -> Self {
        Self { slots }
    }

    pub fn get(&self, id: PlatformId) -> &Platform {
        &self.slots[id.0]
    }

    pub fn get_mut(&mut self, id: PlatformId) -> &mut Platform {
        &mut self.slots[id.0]
    }

    /// Iterate platforms with their handles, in slot order
    pub fn iter(&self) -> impl Iterator<Item = (PlatformId, &Platform)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, p)| (PlatformId(i), p))
    }

    /// Every slot handle, in slot order
    pub fn ids() -> impl Iterator<Item = PlatformId> {
        (0..PLATFORM_COUNT).map(PlatformId)
    }

    /// Platform with the greatest right edge (first one wins ties)
    pub fn rightmost(&self) -> PlatformId {
        let mut best = PlatformId(0);
        for (id, p) in self.iter() {
            if p.rect.right() > self.get(best).rect.right() {
                best = id;
            }
        }
        best
    }
}
