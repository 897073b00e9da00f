//! Frame pacing
//!
//! The loop runs one simulation tick per frame. dt comes from real elapsed
//! time so physics stays correct when frames run late, but is clamped so a
//! stall (window drag, debugger) doesn't launch the player through the floor.

use std::time::{Duration, Instant};

use crate::consts::MAX_FRAME_DT;

/// Clamp a measured frame duration to a usable simulation dt
pub fn clamp_dt(elapsed: Duration) -> f32 {
    elapsed.as_secs_f32().min(MAX_FRAME_DT)
}

/// Fixed-rate frame clock
#[derive(Debug)]
pub struct FrameClock {
    frame: Duration,
    last: Instant,
    frames: u64,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / fps.max(1),
            last: Instant::now(),
            frames: 0,
        }
    }

    /// Wait out the rest of the frame, then return dt in seconds
    pub fn tick(&mut self) -> f32 {
        let deadline = self.last + self.frame;
        let now = Instant::now();
        if now < deadline {
            std::thread::sleep(deadline - now);
        }

        let now = Instant::now();
        let elapsed = now - self.last;
        self.last = now;
        self.frames += 1;
        clamp_dt(elapsed)
    }

    /// Frames completed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
