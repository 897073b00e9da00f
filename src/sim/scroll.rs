//! World scrolling and platform recycling

use super::generator::PlatformGenerator;
use super::platform::{PlatformId, PlatformPool};
use crate::consts::*;

/// Advance the tiled background offset, wrapping after one screen width
pub fn scroll_background(bg_x: i32, speed: i32) -> i32 {
    let bg_x = bg_x - speed;
    if bg_x <= -SCREEN_W { 0 } else { bg_x }
}

/// Move every platform left by `speed`, recycling any that left the screen
///
/// Platforms are processed in slot order; a recycled platform is placed
/// after whichever platform is rightmost at that moment (itself included,
/// before it moves). Returns the recycled slots.
pub fn scroll_platforms(
    pool: &mut PlatformPool,
    generator: &mut PlatformGenerator,
    speed: i32,
) -> Vec<PlatformId> {
    let mut recycled = Vec::new();
    for id in PlatformPool::ids() {
        pool.get_mut(id).move_left(speed);

        if pool.get(id).rect.right() < 0 {
            let rightmost = pool.get(pool.rightmost()).rect;
            let pos = generator.next_position(&rightmost);
            pool.get_mut(id).place_at(pos);
            log::debug!("Recycled platform {} to ({}, {})", id.0, pos.x, pos.y);
            recycled.push(id);
        }
    }
    recycled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::platform::Platform;

    #[test]
    fn test_background_wraps() {
        assert_eq!(scroll_background(0, SCROLL_SPEED), -4);
        assert_eq!(scroll_background(-SCREEN_W + 8, SCROLL_SPEED), -SCREEN_W + 4);
        assert_eq!(scroll_background(-SCREEN_W + 4, SCROLL_SPEED), 0);
    }

    #[test]
    fn test_first_platform_recycled_on_tick_76() {
        let mut pool = PlatformPool::starting();
        let mut generator = PlatformGenerator::new(1);
        assert_eq!(pool.get(PlatformId(0)).rect.right(), 300);

        for tick in 1..=75 {
            let recycled = scroll_platforms(&mut pool, &mut generator, SCROLL_SPEED);
            assert!(recycled.is_empty(), "recycled early on tick {tick}");
        }
        assert_eq!(pool.get(PlatformId(0)).rect.right(), 0);

        let rightmost_before = pool.get(PlatformId(3)).rect;
        let recycled = scroll_platforms(&mut pool, &mut generator, SCROLL_SPEED);
        assert_eq!(recycled, vec![PlatformId(0)]);

        // Placed after slot 3, which had not moved yet this tick
        let placed = pool.get(PlatformId(0)).rect;
        let gap = placed.left() - rightmost_before.right();
        assert!((MIN_GAP..=MAX_GAP).contains(&gap));
        assert_eq!(placed.size.x, 220);
    }

    #[test]
    fn test_recycle_uses_rightmost_including_self() {
        // Only platform is off-screen: it is its own rightmost
        let mut pool = PlatformPool::from_slots([
            Platform::new(-300, 300, 100, 28),
            Platform::new(-400, 300, 50, 28),
            Platform::new(-500, 300, 50, 28),
            Platform::new(-600, 300, 50, 28),
        ]);
        let mut generator = PlatformGenerator::new(3);
        let recycled = scroll_platforms(&mut pool, &mut generator, SCROLL_SPEED);
        assert_eq!(recycled.len(), 4);
        // Every later slot chains off an earlier recycled one
        for (id, p) in pool.iter() {
            assert!(p.rect.right() >= 0, "slot {} still off-screen", id.0);
        }
    }
}
