//! Procedural platform placement
//!
//! Each recycled platform is placed a random gap to the right of the current
//! rightmost platform, at a random height clamped so the height difference
//! never exceeds what a double jump can climb. The clamp bound assumes the
//! fixed gravity, jump impulse and scroll speed in `consts`.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::consts::*;

/// Pure placement rule: position for a platform following `rightmost`
///
/// `gap` is the horizontal distance from `rightmost`'s right edge and
/// `rolled_y` the unclamped height roll.
pub fn place_after(rightmost: &Rect, gap: i32, rolled_y: i32) -> IVec2 {
    let x = rightmost.right() + gap;
    let prev_y = rightmost.top();
    let y = if (rolled_y - prev_y).abs() > MAX_DOUBLE_JUMP_HEIGHT {
        prev_y + MAX_DOUBLE_JUMP_HEIGHT * (rolled_y - prev_y).signum()
    } else {
        rolled_y
    };
    IVec2::new(x, y)
}

/// Seeded platform generator
#[derive(Debug, Clone)]
pub struct PlatformGenerator {
    rng: Pcg32,
}

impl PlatformGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Roll the next platform position after `rightmost`
    pub fn next_position(&mut self, rightmost: &Rect) -> IVec2 {
        let gap = self.rng.random_range(MIN_GAP..=MAX_GAP);
        let rolled_y = self.rng.random_range(MIN_PLATFORM_Y..=MAX_PLATFORM_Y);
        place_after(rightmost, gap, rolled_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clamps_upward() {
        let prev = Rect::new(100, 436, 200, 28);
        let pos = place_after(&prev, 150, 240);
        assert_eq!(pos, IVec2::new(450, 240));

        // Roll further than the double-jump height from a low platform
        let prev = Rect::new(100, 460, 200, 28);
        let pos = place_after(&prev, 150, 240);
        assert_eq!(pos.y, 460 - MAX_DOUBLE_JUMP_HEIGHT);
    }

    #[test]
    fn test_clamps_downward() {
        let prev = Rect::new(0, 200, 200, 28);
        let pos = place_after(&prev, MIN_GAP, 436);
        assert_eq!(pos.y, 200 + MAX_DOUBLE_JUMP_HEIGHT);
        assert_eq!(pos.x, 200 + MIN_GAP);
    }

    #[test]
    fn test_within_reach_unchanged() {
        let prev = Rect::new(0, 380, 200, 28);
        assert_eq!(place_after(&prev, 200, 300).y, 300);
        assert_eq!(place_after(&prev, 200, 380 + MAX_DOUBLE_JUMP_HEIGHT).y, 580);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let prev = Rect::new(900, 450, 200, 28);
        let mut a = PlatformGenerator::new(7);
        let mut b = PlatformGenerator::new(7);
        for _ in 0..50 {
            assert_eq!(a.next_position(&prev), b.next_position(&prev));
        }
    }

    proptest! {
        #[test]
        fn prop_generated_platforms_reachable(
            seed in any::<u64>(),
            x in -500i32..2000,
            y in 0i32..SCREEN_H,
            w in 50i32..300,
        ) {
            let prev = Rect::new(x, y, w, PLATFORM_H);
            let mut generator = PlatformGenerator::new(seed);
            for _ in 0..20 {
                let pos = generator.next_position(&prev);
                let gap = pos.x - prev.right();
                prop_assert!((MIN_GAP..=MAX_GAP).contains(&gap));
                prop_assert!((pos.y - prev.top()).abs() <= MAX_DOUBLE_JUMP_HEIGHT);
            }
        }

        #[test]
        fn prop_placement_rule(
            prev_y in MIN_PLATFORM_Y..=MAX_PLATFORM_Y,
            gap in MIN_GAP..=MAX_GAP,
            rolled_y in MIN_PLATFORM_Y..=MAX_PLATFORM_Y,
        ) {
            let prev = Rect::new(0, prev_y, PLATFORM_W, PLATFORM_H);
            let pos = place_after(&prev, gap, rolled_y);
            prop_assert_eq!(pos.x - prev.right(), gap);
            prop_assert!((pos.y - prev_y).abs() <= MAX_DOUBLE_JUMP_HEIGHT);
            // Clamping keeps the rolled direction
            prop_assert_eq!((pos.y - prev_y).signum(), (rolled_y - prev_y).signum());
        }
    }
}
