//! Per-tick orchestration and the progress engine.
//!
//! `process_tick` runs the three stages in their fixed order: fish motion,
//! bar physics, then overlap scoring. The order matters: the fish must
//! react on the same instant the player's input was sampled, and the
//! overlap test must see the post-move positions of both.
//!
//! This module is the scoring authority: nothing else mutates `progress`,
//! `perfect`, or `phase`.

use rand::Rng;

use crate::constants::{BAR_HEIGHT, FISH_HEIGHT, PROGRESS_DECAY, PROGRESS_GAIN};
use crate::species::SpeciesProfile;

use super::bar::update_bar;
use super::fish::update_fish;
use super::types::{Phase, ReelState};

/// Advance the whole simulation by one tick. No-op once the phase is
/// terminal.
pub fn process_tick(
    state: &mut ReelState,
    profile: &SpeciesProfile,
    now_ms: u64,
    rng: &mut impl Rng,
) {
    if state.phase != Phase::Fishing {
        return;
    }

    update_fish(state, profile, now_ms, rng);
    update_bar(state);
    update_progress(state);
}

/// Overlap test and meter update, then the terminal check.
fn update_progress(state: &mut ReelState) {
    let fish_center = state.fish_pos + FISH_HEIGHT / 2.0;
    state.catching =
        fish_center >= state.bar_pos && fish_center <= state.bar_pos + BAR_HEIGHT;

    if state.catching {
        state.progress = (state.progress + PROGRESS_GAIN).min(100.0);
    } else {
        state.progress = (state.progress - PROGRESS_DECAY).max(0.0);
        state.perfect = false;
    }

    if state.progress >= 100.0 {
        state.phase = Phase::Won;
    } else if state.progress <= 0.0 {
        state.phase = Phase::Lost;
    }
}
