//! Fish motion model.
//!
//! Every `change_interval_ms` the fish considers retargeting: with the
//! profile's `move_chance` it picks a new target through its behavior
//! policy, clamped to the track. Every tick it eases toward the target
//! linearly at `base_speed`, snapping once the remaining distance is under
//! one step.

use rand::Rng;

use crate::constants::{DEFAULT_DART_RANGE, MAX_FISH_POS};
use crate::species::{FishBehavior, SpeciesProfile};

use super::types::ReelState;

/// Advance the fish by one tick.
pub fn update_fish(
    state: &mut ReelState,
    profile: &SpeciesProfile,
    now_ms: u64,
    rng: &mut impl Rng,
) {
    if now_ms.saturating_sub(state.last_decision_ms) > profile.change_interval_ms {
        state.last_decision_ms = now_ms;
        if rng.gen::<f64>() < profile.move_chance {
            let target = pick_target(state.fish_pos, profile, rng);
            state.fish_target = target.clamp(0.0, MAX_FISH_POS);
        }
    }

    let dist = state.fish_target - state.fish_pos;
    if dist.abs() < profile.base_speed {
        state.fish_pos = state.fish_target;
    } else {
        state.fish_pos += dist.signum() * profile.base_speed;
    }
}

/// Behavior dispatch: one pure target policy per variant. Targets are
/// clamped by the caller.
fn pick_target(pos: f64, profile: &SpeciesProfile, rng: &mut impl Rng) -> f64 {
    match profile.behavior {
        FishBehavior::Passive => wander_target(pos, rng),
        FishBehavior::Smooth | FishBehavior::Aggro => full_range_target(rng),
        FishBehavior::Mixed => {
            dart_target(pos, profile.dart_range.unwrap_or(DEFAULT_DART_RANGE), rng)
        }
        FishBehavior::Sinker => bottom_biased_target(rng),
        FishBehavior::Floater => top_biased_target(rng),
    }
}

/// Small wander near the current spot.
fn wander_target(pos: f64, rng: &mut impl Rng) -> f64 {
    pos + rng.gen_range(-10.0..10.0)
}

/// Reposition anywhere on the track.
fn full_range_target(rng: &mut impl Rng) -> f64 {
    rng.gen_range(0.0..MAX_FISH_POS)
}

/// Half the time a big jump of 50-100% of the dart range in a random
/// direction, otherwise a small wobble.
fn dart_target(pos: f64, dart_range: f64, rng: &mut impl Rng) -> f64 {
    if rng.gen_bool(0.5) {
        let direction = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        pos + direction * rng.gen_range(0.5..1.0) * dart_range
    } else {
        pos + rng.gen_range(-7.5..7.5)
    }
}

/// 70% of picks land in the bottom band.
fn bottom_biased_target(rng: &mut impl Rng) -> f64 {
    if rng.gen_bool(0.7) {
        rng.gen_range(0.0..40.0)
    } else {
        full_range_target(rng)
    }
}

/// 70% of picks land in the upper band.
fn top_biased_target(rng: &mut impl Rng) -> f64 {
    if rng.gen_bool(0.7) {
        rng.gen_range(60.0..90.0)
    } else {
        full_range_target(rng)
    }
}
