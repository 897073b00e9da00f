//! Per-tick simulation step
//!
//! Order within a tick: player motion, world scroll, landing resolution,
//! loss check. The first tick after a (re)start neither scrolls nor applies
//! gravity.

use super::collision::{fell_off_screen, resolve_landing};
use super::platform::Platform;
use super::scroll::{scroll_background, scroll_platforms};
use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump key currently held (level, debounced by the player)
    pub jump: bool,
    /// Restart pressed since the last tick (only honored while lost)
    pub restart: bool,
    /// Idle/demo mode - the autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the game state by one tick of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.is_lost() {
        if input.restart || input.idle_mode {
            state.reset();
            // The restart key may also be a jump key; make it be released first
            state.player.jump_held = input.jump;
        }
        // The restart tick only resets; the next tick is the pinned first frame
        return;
    }

    state.time_ticks += 1;

    let jump = if input.idle_mode {
        autopilot_jump(state)
    } else {
        input.jump
    };

    // --- PLAYER ---
    let prev_bottom = state.player.rect.bottom();
    if state.player.update(dt, jump, state.first_frame) {
        state.events.push(GameEvent::Jumped {
            jumps_left: state.player.jumps_left,
        });
    }

    // --- WORLD ---
    if !state.first_frame {
        state.bg_x = scroll_background(state.bg_x, SCROLL_SPEED);
        let recycled = scroll_platforms(&mut state.platforms, &mut state.generator, SCROLL_SPEED);
        state
            .events
            .extend(recycled.into_iter().map(|platform| GameEvent::Recycled { platform }));
    }
    state.first_frame = false;

    // --- LANDING ---
    let standing_on = state.player.current_platform;
    if let Some(landing) = resolve_landing(&mut state.player, prev_bottom, &state.platforms) {
        if landing.scored {
            state.score += 1;
        }
        // Resting on a platform re-lands every tick; only report arrivals
        if standing_on != Some(landing.platform) {
            log::debug!(
                "Landed on platform {} (score {})",
                landing.platform.0,
                state.score
            );
            state.events.push(GameEvent::Landed {
                platform: landing.platform,
                scored: landing.scored,
            });
        }
    }

    // --- LOSS ---
    if fell_off_screen(&state.player) {
        state.lose();
    }
}

/// Pixels before the platform edge at which the autopilot takes off
const AUTOPILOT_TAKEOFF_LEAD: i32 = 12;

/// Jump decision for idle/demo mode
///
/// Takes off near the end of the current platform, then spends the second
/// jump once it is falling past the top of the next platform without being
/// over it.
fn autopilot_jump(state: &GameState) -> bool {
    let player = &state.player;

    // Release for one tick after a press so the next press registers
    if player.jump_held {
        return false;
    }

    if let Some(id) = player.current_platform {
        let platform = state.platforms.get(id);
        return platform.rect.right() - player.rect.left() <= AUTOPILOT_TAKEOFF_LEAD;
    }

    if player.vel_y <= 0.0 || player.jumps_left == 0 {
        return false;
    }

    // Nearest platform still ahead of the player's back edge
    let next = state
        .platforms
        .iter()
        .map(|(_, p)| p)
        .filter(|p| p.rect.right() > player.rect.left())
        .min_by_key(|p| p.rect.left());

    match next {
        Some(Platform { rect }) => {
            !player.rect.overlaps_x(rect) && player.rect.bottom() >= rect.top() - 8
        }
        None => true,
    }
}
