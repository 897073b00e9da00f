//! High score tracking
//!
//! Kept in memory for the lifetime of the process only.

use serde::{Deserialize, Serialize};

/// Best score across all runs of this process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighScore {
    best: u32,
    /// Finished runs recorded so far
    runs: u32,
}

impl HighScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished run. Returns true if it set a new best.
    pub fn record(&mut self, score: u32) -> bool {
        self.runs += 1;
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn runs(&self) -> u32 {
        self.runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_is_monotonic() {
        let mut hs = HighScore::new();
        assert_eq!(hs.best(), 0);
        assert!(hs.record(5));
        assert!(!hs.record(3));
        assert_eq!(hs.best(), 5);
        assert!(!hs.record(5));
        assert!(hs.record(9));
        assert_eq!(hs.best(), 9);
        assert_eq!(hs.runs(), 4);
    }

    #[test]
    fn test_zero_score_is_not_a_record() {
        let mut hs = HighScore::new();
        assert!(!hs.record(0));
        assert_eq!(hs.runs(), 1);
    }
}
