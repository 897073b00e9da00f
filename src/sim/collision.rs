//! Landing detection
//!
//! Platforms are one-way: the player only collides with a platform's top
//! surface, and only while moving down (or resting). Detection is swept
//! over the tick using the player's bottom edge before and after movement,
//! so fast falls cannot tunnel through a thin platform.

use super::platform::{PlatformId, PlatformPool};
use super::player::Player;
use crate::consts::SCREEN_H;

/// Outcome of a landing this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landing {
    pub platform: PlatformId,
    /// Landed on a different platform than the one last jumped off
    pub scored: bool,
}

/// Resolve the player against every platform
///
/// `prev_bottom` is the player's bottom edge before this tick's vertical
/// movement. The first platform in slot order that the player crossed onto
/// wins. If nothing was landed on and the player touches no platform at all,
/// the player is considered airborne.
pub fn resolve_landing(player: &mut Player, prev_bottom: i32, pool: &PlatformPool) -> Option<Landing> {
    let descending = player.vel_y >= 0.0;

    for (id, platform) in pool.iter() {
        let top = platform.rect.top();
        let horizontal = player.rect.overlaps_x(&platform.rect);
        let crossed = prev_bottom <= top && player.rect.bottom() >= top;

        if descending && horizontal && crossed {
            let scored = player.last_platform.is_some_and(|last| last != id);
            player.last_platform = None;
            player.landed(top, id);
            return Some(Landing { platform: id, scored });
        }
    }

    if !pool.iter().any(|(_, p)| player.rect.intersects(&p.rect)) {
        player.current_platform = None;
    }
    None
}

/// True once the player has dropped entirely below the visible area
pub fn fell_off_screen(player: &Player) -> bool {
    player.rect.top() > SCREEN_H
}
