//! Reel minigame data structures.
//!
//! The whole simulation lives in one owned [`ReelState`] aggregate that the
//! tick functions mutate in a fixed order. Positions are percentages of the
//! track height, measured from the bottom.

use crate::constants::{INITIAL_BAR_POS, INITIAL_FISH_POS, INITIAL_PROGRESS};

/// Lifecycle of one reel attempt. `Won` and `Lost` are terminal; a fresh
/// state is built for every new attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Fishing,
    Won,
    Lost,
}

/// Mutable simulation state for a single reel attempt.
#[derive(Debug, Clone)]
pub struct ReelState {
    /// Bottom edge of the catch bar, 0..=100-BAR_HEIGHT.
    pub bar_pos: f64,
    /// Signed bar velocity in track units per tick; positive = upward.
    pub bar_vel: f64,
    /// Bottom edge of the fish, 0..=100-FISH_HEIGHT.
    pub fish_pos: f64,
    /// Where the fish is currently heading.
    pub fish_target: f64,
    /// Catch meter, 0..=100. 100 lands the fish, 0 loses it.
    pub progress: f64,
    /// Consecutive ticks of held thrust; resets on release.
    pub hold_ticks: u32,
    /// Session time (ms) of the fish's last retarget decision.
    pub last_decision_ms: u64,
    /// Written by the input adapter, read by the bar physics.
    pub thrust_engaged: bool,
    /// Latched false on the first tick the bar misses the fish.
    pub perfect: bool,
    /// Whether the fish center sat inside the bar this tick (render signal).
    pub catching: bool,
    pub phase: Phase,
}

impl ReelState {
    /// Fresh state: bar near the bottom, fish centered, meter at a
    /// mid-low starting value.
    pub fn new() -> Self {
        Self {
            bar_pos: INITIAL_BAR_POS,
            bar_vel: 0.0,
            fish_pos: INITIAL_FISH_POS,
            fish_target: INITIAL_FISH_POS,
            progress: INITIAL_PROGRESS,
            hold_ticks: 0,
            last_decision_ms: 0,
            thrust_engaged: false,
            perfect: true,
            catching: false,
            phase: Phase::Fishing,
        }
    }
}

impl Default for ReelState {
    fn default() -> Self {
        Self::new()
    }
}
